// SPDX-License-Identifier: MPL-2.0
//! Page widgets.
//!
//! Each widget owns its state, keeps [`crate::dom::NodeId`] handles to the
//! elements it projects into, and reacts to its own `Message` type. The app
//! hands every widget a [`Shell`] for the duration of one update.

pub mod articles;
pub mod clock;
pub mod design_tokens;
pub mod forms;
pub mod navigation;
pub mod notifications;
pub mod overlays;
pub mod shell;
pub mod slider;
pub mod state;
pub mod theming;
pub mod ticker;
pub mod visibility;

pub use shell::{Effects, Notice, Shell};
