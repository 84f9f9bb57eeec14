// SPDX-License-Identifier: MPL-2.0
//! `news_portal` is the behavior layer of a static news portal page.
//!
//! It runs headless over a [`dom::Document`]: a featured slider, a breaking
//! news ticker, the header date, light/dark theming backed by a persisted
//! preference, scroll-driven visibility gates, the mobile menu and search
//! overlay, and simulated form feedback, all reporting to a single-slot
//! notification center. Time is virtual ([`scheduler::Scheduler`]), so hosts
//! and tests decide when timers fire.

#![doc(html_root_url = "https://docs.rs/news_portal/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod dom;
pub mod error;
pub mod i18n;
pub mod preferences;
pub mod scheduler;
pub mod ui;

#[cfg(test)]
mod test_utils;
