// SPDX-License-Identifier: MPL-2.0
//! Element ids and class names the widgets look up in the page markup.
//!
//! A widget whose elements are missing simply does not mount.

// ==========================================================================
// Element ids
// ==========================================================================

pub const HEADER: &str = "header";
pub const MOBILE_MENU_BUTTON: &str = "mobileMenuBtn";
pub const MOBILE_NAV: &str = "navMobile";
pub const THEME_TOGGLE: &str = "darkModeToggle";
pub const SEARCH_BUTTON: &str = "searchBtn";
pub const SEARCH_OVERLAY: &str = "searchModal";
pub const SEARCH_CLOSE: &str = "searchModalClose";
pub const SEARCH_INPUT: &str = "searchModalInput";
pub const SLIDE_PREV: &str = "prevBtn";
pub const SLIDE_NEXT: &str = "nextBtn";
pub const TICKER_CONTENT: &str = "tickerContent";
pub const CURRENT_DATE: &str = "current-date";
pub const BACK_TO_TOP: &str = "backToTop";

// ==========================================================================
// Classes
// ==========================================================================

pub const MOBILE_NAV_LINK: &str = "mobile-nav-link";
pub const NAV_LINK: &str = "nav-link";
pub const SLIDER_CONTAINER: &str = "slider-container";
pub const SLIDE: &str = "slide";
pub const DOT: &str = "dot";
pub const TICKER_WRAPPER: &str = "ticker-wrapper";
pub const NEWS_CARD: &str = "news-card";
pub const NEWS_TITLE: &str = "news-title";
pub const POPULAR_POST: &str = "popular-post";
pub const WIDGET: &str = "widget";
pub const FOOTER_SECTION: &str = "footer-section";
pub const NEWSLETTER_FORM: &str = "newsletter-form";
pub const NEWSLETTER_INPUT: &str = "newsletter-input";
pub const NEWSLETTER_BUTTON: &str = "newsletter-btn";
pub const SEARCH_FORM: &str = "search-form";
pub const SEARCH_OVERLAY_FORM: &str = "search-modal-form";

/// Elements watched by the fade-in reveal gate.
pub const REVEAL_TARGETS: [&str; 3] = [NEWS_CARD, WIDGET, FOOTER_SECTION];

// ==========================================================================
// State classes written by the widgets
// ==========================================================================

pub const ACTIVE: &str = "active";
pub const SCROLLED: &str = "scrolled";
pub const VISIBLE: &str = "visible";
pub const FADE_IN: &str = "fade-in";
pub const NOTIFICATION: &str = "notification";
pub const NOTIFICATION_CLOSE: &str = "notification-close";

/// Attribute on the document root carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";
