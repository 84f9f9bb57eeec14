// SPDX-License-Identifier: MPL-2.0
//! Notification center.
//!
//! A single-slot queue of transient status messages. Showing a new
//! notification removes whatever is on screen first, so at most one
//! notification element exists at any time.
//!
//! # Components
//!
//! - [`Notification`]: message, kind and creation time
//! - [`NotificationCenter`]: owns the visible element and its timers
//!
//! # Lifecycle
//!
//! ```text
//! notify ──► visible ──(4000 ms or close)──► retiring ──(300 ms)──► detached
//! ```
//!
//! Warnings and errors are mirrored into diagnostics when shown.

mod center;
mod notification;

pub use center::{Message, NotificationCenter};
pub use notification::{Kind, Notification, NotificationId};
