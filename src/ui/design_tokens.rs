// SPDX-License-Identifier: MPL-2.0
#![doc = r##"
# Design Tokens

Color and motion values the widgets write into inline styles. Everything
else about the page's look lives in its stylesheet.

## Organization

- **Palette**: Notification and feedback colors (CSS hex)
- **Motion**: Animation and transition shorthands

## Examples

```
use news_portal::ui::design_tokens::{motion, palette};

assert_eq!(palette::SUCCESS_600, "#059669");
assert!(motion::NOTIFICATION_EXIT.starts_with("slideOutRight"));
```
"##]

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    pub const WHITE: &str = "white";

    // Semantic colors
    pub const ERROR_600: &str = "#DC2626";
    pub const SUCCESS_600: &str = "#059669";
    pub const INFO_600: &str = "#2563EB";
    pub const WARNING_600: &str = "#EA580C";
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    pub const NOTIFICATION_ENTER: &str = "slideInRight 0.3s ease-out";
    pub const NOTIFICATION_EXIT: &str = "slideOutRight 0.3s ease-in";
    pub const THEME_TRANSITION: &str = "background-color 0.3s ease, color 0.3s ease";
    pub const IMAGE_FADE: &str = "opacity 0.3s ease-in-out";
}
