// SPDX-License-Identifier: MPL-2.0
//! Small state primitives shared by the widgets.
//!
//! - [`SlideInterval`] - clamped autoplay period
//! - [`ExclusiveRegion`] - slot where opening one occupant closes the previous one
//! - [`OneShot`] - per-element flags that can only go from unset to set

pub mod exclusive;
pub mod one_shot;
pub mod slide_interval;

pub use exclusive::ExclusiveRegion;
pub use one_shot::OneShot;
pub use slide_interval::SlideInterval;
