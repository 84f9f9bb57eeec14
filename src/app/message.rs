// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::dom::NodeId;
use crate::ui::forms::{NewsletterMessage, SearchMessage};
use crate::ui::{articles, clock, navigation, notifications, overlays, slider, theming, ticker};

/// Top-level messages consumed by `App::update`. The variants forward
/// widget messages while keeping a single update entrypoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Notification(notifications::Message),
    Theme(theming::Message),
    Slider(slider::Message),
    Ticker(ticker::Message),
    Clock(clock::Message),
    Overlay(overlays::Message),
    Newsletter(NewsletterMessage),
    Search(SearchMessage),
    Navigation(navigation::Message),
    Articles(articles::Message),
    /// The window scroll position changed; re-run the visibility gates.
    Scrolled,
    /// A lazily loaded image finished loading.
    ImageLoaded(NodeId),
    VisibilityChanged {
        hidden: bool,
    },
}

macro_rules! forward {
    ($($variant:ident($inner:ty)),* $(,)?) => {
        $(
            impl From<$inner> for Message {
                fn from(message: $inner) -> Self {
                    Message::$variant(message)
                }
            }
        )*
    };
}

forward!(
    Notification(notifications::Message),
    Theme(theming::Message),
    Slider(slider::Message),
    Ticker(ticker::Message),
    Clock(clock::Message),
    Overlay(overlays::Message),
    Newsletter(NewsletterMessage),
    Search(SearchMessage),
    Navigation(navigation::Message),
    Articles(articles::Message),
);

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `bn-BD`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (for the preference cell).
    /// Takes precedence over `NEWS_PORTAL_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `NEWS_PORTAL_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Where to write the diagnostics report once the run ends.
    pub diagnostics: Option<String>,
}
