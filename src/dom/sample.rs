// SPDX-License-Identifier: MPL-2.0
//! A complete news page fixture carrying every element of the DOM contract.
//!
//! Layout (document coordinates): the header is 80px tall, the slider sits
//! right under it, the article grid starts below the first viewport and the
//! footer closes a 3000px page viewed through a 1280x800 window.

use super::contract as c;
use super::{Document, MemoryDocument, Viewport};

/// Height of the fixture header (px).
pub const HEADER_HEIGHT: f64 = 80.0;

/// Total scrollable height of the fixture page (px).
pub const PAGE_HEIGHT: f64 = 3000.0;

/// Titles of the article cards, in document order.
pub const CARD_TITLES: [&str; 4] = [
    "Parliament passes budget",
    "Cricket team wins series",
    "Monsoon arrives early",
    "New metro line opens",
];

/// Builds the fixture page.
#[must_use]
pub fn news_page() -> MemoryDocument {
    let mut doc = MemoryDocument::new();
    doc.set_viewport(Viewport {
        width: 1280.0,
        height: 800.0,
    });
    doc.set_scroll_height(PAGE_HEIGHT);
    let body = doc.body();

    // Header with navigation, theme toggle and search trigger
    let header = doc
        .build(body, "header")
        .id(c::HEADER)
        .class("header")
        .rect(0.0, HEADER_HEIGHT)
        .finish();
    doc.build(header, "span").id(c::CURRENT_DATE).finish();
    let nav = doc.build(header, "nav").class("nav").finish();
    for (href, label, active) in [
        ("#home", "Home", true),
        ("#politics", "Politics", false),
        ("#sports", "Sports", false),
    ] {
        let class = if active { "nav-link active" } else { c::NAV_LINK };
        doc.build(nav, "a")
            .class(class)
            .attr("href", href)
            .text(label)
            .finish();
    }
    let toggle = doc.build(header, "button").id(c::THEME_TOGGLE).finish();
    doc.build(toggle, "i").class("fas fa-moon").finish();
    doc.build(header, "button").id(c::SEARCH_BUTTON).finish();
    doc.build(header, "button")
        .id(c::MOBILE_MENU_BUTTON)
        .class("mobile-menu-btn")
        .finish();

    let mobile_nav = doc
        .build(body, "nav")
        .id(c::MOBILE_NAV)
        .class("nav-mobile")
        .finish();
    for (href, label) in [("#politics", "Politics"), ("#sports", "Sports")] {
        doc.build(mobile_nav, "a")
            .class(c::MOBILE_NAV_LINK)
            .attr("href", href)
            .text(label)
            .finish();
    }

    // Search overlay
    let overlay = doc
        .build(body, "div")
        .id(c::SEARCH_OVERLAY)
        .class("search-modal")
        .finish();
    let content = doc
        .build(overlay, "div")
        .class("search-modal-content")
        .finish();
    let overlay_form = doc
        .build(content, "form")
        .class(c::SEARCH_OVERLAY_FORM)
        .finish();
    doc.build(overlay_form, "input")
        .id(c::SEARCH_INPUT)
        .attr("type", "text")
        .finish();
    doc.build(content, "button").id(c::SEARCH_CLOSE).finish();

    // Breaking news ticker
    let breaking = doc.build(body, "div").class("breaking-news").finish();
    let wrapper = doc.build(breaking, "div").class(c::TICKER_WRAPPER).finish();
    doc.build(wrapper, "div")
        .id(c::TICKER_CONTENT)
        .class("ticker-content")
        .text("Breaking: markets close higher")
        .finish();

    // Featured slider
    let featured = doc.build(body, "section").class("featured").finish();
    let slider = doc
        .build(featured, "div")
        .class(c::SLIDER_CONTAINER)
        .rect(HEADER_HEIGHT, 420.0)
        .finish();
    for (i, headline) in ["Election results", "Flood relief", "Tech summit"]
        .iter()
        .enumerate()
    {
        let class = if i == 0 { "slide active" } else { "slide" };
        let slide = doc.build(slider, "div").class(class).finish();
        doc.build(slide, "h2").text(headline).finish();
    }
    doc.build(slider, "button").id(c::SLIDE_PREV).finish();
    doc.build(slider, "button").id(c::SLIDE_NEXT).finish();
    let dots = doc.build(slider, "div").class("slider-dots").finish();
    for i in 0..3 {
        let class = if i == 0 { "dot active" } else { "dot" };
        doc.build(dots, "span").class(class).finish();
    }

    // Article grid
    let main = doc.build(body, "main").finish();
    let sections = [("politics", 900.0), ("sports", 1500.0)];
    let mut titles = CARD_TITLES.iter();
    for (id, top) in sections {
        let section = doc.build(main, "section").id(id).rect(top, 600.0).finish();
        for offset in [0.0, 300.0] {
            let Some(title) = titles.next() else { break };
            let card = doc
                .build(section, "article")
                .class(c::NEWS_CARD)
                .rect(top + offset, 280.0)
                .finish();
            doc.build(card, "img")
                .attr("loading", "lazy")
                .attr("src", "img/card.jpg")
                .rect(top + offset, 160.0)
                .finish();
            doc.build(card, "h3").class(c::NEWS_TITLE).text(title).finish();
        }
    }

    // Sidebar widgets
    let aside = doc.build(body, "aside").finish();
    let search_widget = doc
        .build(aside, "div")
        .class(c::WIDGET)
        .rect(2100.0, 120.0)
        .finish();
    let search_form = doc
        .build(search_widget, "form")
        .class(c::SEARCH_FORM)
        .finish();
    doc.build(search_form, "input").attr("type", "text").finish();
    doc.build(search_form, "button")
        .attr("type", "submit")
        .text("Search")
        .finish();

    let popular = doc
        .build(aside, "div")
        .class(c::WIDGET)
        .rect(2240.0, 200.0)
        .finish();
    for title in ["Ten photos of the week", "Interview with the mayor"] {
        let post = doc.build(popular, "div").class(c::POPULAR_POST).finish();
        doc.build(post, "h4").text(title).finish();
    }

    let newsletter_widget = doc
        .build(aside, "div")
        .class(c::WIDGET)
        .rect(2460.0, 160.0)
        .finish();
    let newsletter = doc
        .build(newsletter_widget, "form")
        .class(c::NEWSLETTER_FORM)
        .finish();
    doc.build(newsletter, "input")
        .class(c::NEWSLETTER_INPUT)
        .attr("type", "email")
        .finish();
    doc.build(newsletter, "button")
        .class(c::NEWSLETTER_BUTTON)
        .attr("type", "submit")
        .text("Subscribe")
        .finish();

    // Footer with share links
    let footer = doc.build(body, "footer").finish();
    for top in [2700.0, 2800.0] {
        doc.build(footer, "div")
            .class(c::FOOTER_SECTION)
            .rect(top, 100.0)
            .finish();
    }
    let share = doc.build(footer, "div").class("social-share").finish();
    for url in [
        "https://facebook.com/sharer?u=news",
        "https://twitter.com/intent/tweet?u=news",
        "https://instagram.com/newsbangla",
        "https://wa.me/?text=news",
        "https://t.me/share/url?url=news",
    ] {
        doc.build(share, "a").attr("href", url).finish();
    }

    doc.build(body, "button")
        .id(c::BACK_TO_TOP)
        .class("back-to-top")
        .finish();

    doc
}
