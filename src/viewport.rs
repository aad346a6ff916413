//! Viewport classification.
//!
//! The host reports either a mobile flag directly or the viewport width in
//! CSS pixels; widths at or below the configured breakpoint count as mobile.

use crate::config::ViewportConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Mobile,
    Desktop,
}

impl Viewport {
    pub fn from_mobile_flag(is_mobile: bool) -> Self {
        if is_mobile {
            Viewport::Mobile
        } else {
            Viewport::Desktop
        }
    }

    pub fn from_width(width: u32, config: &ViewportConfig) -> Self {
        Self::from_mobile_flag(width <= config.mobile_max_width)
    }

    pub fn is_mobile(self) -> bool {
        self == Viewport::Mobile
    }
}
