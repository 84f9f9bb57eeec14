// SPDX-License-Identifier: MPL-2.0
//! Slide interval domain type for the featured slider.
//!
//! This module provides a type-safe wrapper for the autoplay period in
//! milliseconds.

use crate::config::{DEFAULT_SLIDE_INTERVAL_MS, MAX_SLIDE_INTERVAL_MS, MIN_SLIDE_INTERVAL_MS};
use std::time::Duration;

/// Autoplay period of the featured slider.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–60 seconds).
///
/// # Example
///
/// ```
/// use news_portal::ui::state::SlideInterval;
///
/// let interval = SlideInterval::new(8000);
/// assert_eq!(interval.millis(), 8000);
///
/// // Values outside range are clamped
/// let too_fast = SlideInterval::new(10);
/// assert_eq!(too_fast.millis(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideInterval(u64);

impl SlideInterval {
    /// Creates a new interval, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_SLIDE_INTERVAL_MS, MAX_SLIDE_INTERVAL_MS))
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for SlideInterval {
    fn default() -> Self {
        Self(DEFAULT_SLIDE_INTERVAL_MS)
    }
}
