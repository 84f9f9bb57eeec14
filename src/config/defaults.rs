// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all timing and threshold constants.
//!
//! This module serves as the single source of truth for the numbers the
//! widgets run on. Constants are organized by widget.
//!
//! # Categories
//!
//! - **Notifications**: Auto-retire delay and exit transition
//! - **Theme**: Transition window after a toggle
//! - **Slider**: Autoplay interval and its bounds
//! - **Ticker / Clock**: Marquee loop and date refresh
//! - **Visibility**: Scroll thresholds and reveal tolerances
//! - **Overlays**: Mobile breakpoint and search focus delay
//! - **Forms**: Simulated newsletter round trip

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Time a notification stays visible before it retires itself (ms).
pub const NOTIFICATION_TIMEOUT_MS: u64 = 4000;

/// Duration of the exit transition before the element is detached (ms).
pub const NOTIFICATION_EXIT_MS: u64 = 300;

// ==========================================================================
// Theme Defaults
// ==========================================================================

/// Duration of the color transition applied after a theme switch (ms).
pub const THEME_TRANSITION_MS: u64 = 300;

// ==========================================================================
// Slider Defaults
// ==========================================================================

/// Default autoplay interval between slides (ms).
pub const DEFAULT_SLIDE_INTERVAL_MS: u64 = 5000;

/// Minimum accepted autoplay interval (ms).
pub const MIN_SLIDE_INTERVAL_MS: u64 = 1000;

/// Maximum accepted autoplay interval (ms).
pub const MAX_SLIDE_INTERVAL_MS: u64 = 60_000;

// ==========================================================================
// Ticker / Clock Defaults
// ==========================================================================

/// Length of one ticker marquee loop (s).
pub const TICKER_LOOP_SECS: u64 = 60;

/// Refresh period of the date display (ms).
pub const CLOCK_REFRESH_MS: u64 = 60_000;

// ==========================================================================
// Visibility Defaults
// ==========================================================================

/// Scroll offset past which the header switches to its compact style (px).
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 100.0;

/// Scroll offset past which the back-to-top button shows (px).
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

/// Fraction of an element that must be in view to reveal it.
pub const REVEAL_RATIO: f64 = 0.1;

/// Bottom margin subtracted from the viewport when testing reveals (px).
pub const REVEAL_BOTTOM_MARGIN_PX: f64 = 50.0;

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Viewport width above which the mobile menu closes itself (px).
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Delay before the search input receives focus after opening (ms).
pub const SEARCH_FOCUS_DELAY_MS: u64 = 100;

/// Size of the social share popup (px).
pub const SHARE_POPUP_WIDTH: f64 = 600.0;
pub const SHARE_POPUP_HEIGHT: f64 = 400.0;

// ==========================================================================
// Form Defaults
// ==========================================================================

/// Simulated newsletter request latency (ms).
pub const NEWSLETTER_SUBMIT_DELAY_MS: u64 = 1000;

/// How long the "subscribed" state is shown before the form resets (ms).
pub const NEWSLETTER_RESET_DELAY_MS: u64 = 2000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostic buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostic buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(NOTIFICATION_EXIT_MS < NOTIFICATION_TIMEOUT_MS);

    assert!(MIN_SLIDE_INTERVAL_MS > 0);
    assert!(MAX_SLIDE_INTERVAL_MS >= MIN_SLIDE_INTERVAL_MS);
    assert!(DEFAULT_SLIDE_INTERVAL_MS >= MIN_SLIDE_INTERVAL_MS);
    assert!(DEFAULT_SLIDE_INTERVAL_MS <= MAX_SLIDE_INTERVAL_MS);

    assert!(HEADER_SCROLL_THRESHOLD_PX < BACK_TO_TOP_THRESHOLD_PX);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
