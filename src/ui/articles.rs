// SPDX-License-Identifier: MPL-2.0
//! News cards, popular posts and social share links.

use crate::config::{SHARE_POPUP_HEIGHT, SHARE_POPUP_WIDTH};
use crate::diagnostics::UserAction;
use crate::dom::{contract as c, Document, NodeId};
use crate::error::Result;
use crate::ui::notifications::Kind;
use crate::ui::Shell;

/// Popup window name used for every share dialog.
pub const SHARE_WINDOW_NAME: &str = "social-share";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A card or popular post was activated by click or keyboard.
    Open(NodeId),
    /// A social link was clicked.
    Share(NodeId),
}

/// Social networks recognized in share links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Facebook,
    Twitter,
    Instagram,
    WhatsApp,
    Telegram,
}

impl Network {
    /// Classifies a link target. Messenger hosts are checked first.
    #[must_use]
    pub fn from_url(url: &str) -> Option<Self> {
        [
            ("wa.me", Network::WhatsApp),
            ("t.me", Network::Telegram),
            ("facebook.com", Network::Facebook),
            ("twitter.com", Network::Twitter),
            ("instagram.com", Network::Instagram),
        ]
        .into_iter()
        .find(|(host, _)| url.contains(host))
        .map(|(_, network)| network)
    }

    /// Messenger links are left to the browser instead of a popup.
    #[must_use]
    pub fn opens_popup(self) -> bool {
        !matches!(self, Network::WhatsApp | Network::Telegram)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Network::Facebook => "facebook",
            Network::Twitter => "twitter",
            Network::Instagram => "instagram",
            Network::WhatsApp => "whatsapp",
            Network::Telegram => "telegram",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardKind {
    News,
    Popular,
}

#[derive(Debug, Default)]
pub struct Articles {
    cards: Vec<(NodeId, CardKind)>,
}

impl Articles {
    pub fn mount(doc: &dyn Document) -> Self {
        let news = doc
            .elements_by_class(c::NEWS_CARD)
            .into_iter()
            .map(|card| (card, CardKind::News));
        let popular = doc
            .elements_by_class(c::POPULAR_POST)
            .into_iter()
            .map(|post| (post, CardKind::Popular));
        Self {
            cards: news.chain(popular).collect(),
        }
    }

    /// Makes every card reachable with the keyboard.
    pub fn start(&self, shell: &mut Shell<'_>) -> Result<()> {
        for (card, _) in &self.cards {
            shell.document.set_attribute(*card, "tabindex", "0")?;
        }
        Ok(())
    }

    pub fn update(&mut self, shell: &mut Shell<'_>, message: Message) -> Result<()> {
        match message {
            Message::Open(card) => {
                let Some(title) = self.title(&*shell.document, card) else {
                    return Ok(());
                };
                shell
                    .diagnostics
                    .log_action_with_details(UserAction::OpenArticle, Some(title.clone()));
                let text = shell.tr_with_args("notification-open-article", &[("title", &title)]);
                shell.notify(Kind::Info, text);
                Ok(())
            }
            Message::Share(link) => {
                share(shell, link);
                Ok(())
            }
        }
    }

    fn title(&self, doc: &dyn Document, card: NodeId) -> Option<String> {
        let (_, kind) = self.cards.iter().find(|(node, _)| *node == card)?;
        let heading = match kind {
            CardKind::News => doc.descendants_by_class(card, c::NEWS_TITLE),
            CardKind::Popular => doc.descendants_by_tag(card, "h4"),
        };
        heading
            .first()
            .and_then(|node| doc.text(*node))
            .filter(|title| !title.is_empty())
    }

    /// The card containing `node`, if any.
    pub fn card_containing(&self, doc: &dyn Document, node: NodeId) -> Option<NodeId> {
        self.cards
            .iter()
            .map(|(card, _)| *card)
            .find(|card| doc.contains(*card, node))
    }
}

/// Popup features centering a share dialog on a viewport of `width` x `height`.
#[must_use]
pub fn popup_features(width: f64, height: f64) -> String {
    let left = width / 2.0 - SHARE_POPUP_WIDTH / 2.0;
    let top = height / 2.0 - SHARE_POPUP_HEIGHT / 2.0;
    format!(
        "width={SHARE_POPUP_WIDTH},height={SHARE_POPUP_HEIGHT},left={left},top={top},resizable=yes,scrollbars=yes"
    )
}

fn share(shell: &mut Shell<'_>, link: NodeId) {
    let Some(url) = shell.document.attribute(link, "href") else {
        return;
    };
    let Some(network) = Network::from_url(&url) else {
        return;
    };
    shell.diagnostics.log_action(UserAction::Share {
        network: network.as_str().to_string(),
    });
    if network.opens_popup() {
        let viewport = shell.document.viewport();
        let features = popup_features(viewport.width, viewport.height);
        shell.document.open_window(&url, SHARE_WINDOW_NAME, &features);
    }
}

/// True for links the share handler recognizes.
#[must_use]
pub fn is_share_link(doc: &dyn Document, node: NodeId) -> bool {
    doc.attribute(node, "href")
        .is_some_and(|href| Network::from_url(&href).is_some())
}
