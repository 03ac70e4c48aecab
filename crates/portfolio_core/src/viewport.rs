//! Viewport classification used by card and toast rendering.
//!
//! # Invariants
//! - `Breakpoint::for_width` returns the largest breakpoint whose minimum
//!   width is `<= width`.
//! - Device classes partition widths: mobile `<= 768`, tablet `769..=1024`,
//!   desktop `> 1024`.

use serde::{Deserialize, Serialize};

const MOBILE_MAX_WIDTH: u32 = 768;
const TABLET_MAX_WIDTH: u32 = 1024;
/// Cards switch to the short animation stagger below this width.
const CARD_COMPACT_WIDTH: u32 = 768;
const CARD_DELAY_COMPACT_MS: u32 = 50;
const CARD_DELAY_WIDE_MS: u32 = 100;

/// Named layout breakpoints, ordered by minimum width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

const BREAKPOINTS: &[(Breakpoint, u32)] = &[
    (Breakpoint::Xxl, 1400),
    (Breakpoint::Xl, 1200),
    (Breakpoint::Lg, 992),
    (Breakpoint::Md, 768),
    (Breakpoint::Sm, 576),
    (Breakpoint::Xs, 0),
];

impl Breakpoint {
    pub fn for_width(width: u32) -> Self {
        BREAKPOINTS
            .iter()
            .find(|(_, min_width)| width >= *min_width)
            .map_or(Self::Xs, |(breakpoint, _)| *breakpoint)
    }

    /// Stable string id, as written to `data-breakpoint`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "xxl",
        }
    }
}

/// Current viewport metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 1280 }
    }
}

impl Viewport {
    pub fn new(width: u32) -> Self {
        Self { width }
    }

    pub fn is_mobile(self) -> bool {
        self.width <= MOBILE_MAX_WIDTH
    }

    pub fn is_tablet(self) -> bool {
        self.width > MOBILE_MAX_WIDTH && self.width <= TABLET_MAX_WIDTH
    }

    pub fn is_desktop(self) -> bool {
        self.width > TABLET_MAX_WIDTH
    }

    pub fn breakpoint(self) -> Breakpoint {
        Breakpoint::for_width(self.width)
    }

    /// Device class name applied to the page body.
    pub fn device_class(self) -> &'static str {
        if self.is_mobile() {
            "mobile-device"
        } else {
            "desktop-device"
        }
    }

    /// Scroll-animation delay for the card at `index`.
    pub fn card_animation_delay_ms(self, index: usize) -> u32 {
        let step = if self.width < CARD_COMPACT_WIDTH {
            CARD_DELAY_COMPACT_MS
        } else {
            CARD_DELAY_WIDE_MS
        };
        u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step)
    }
}

/// Reported when a resize crosses a breakpoint boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakpointChange {
    pub from: Breakpoint,
    pub to: Breakpoint,
}

/// Remembers the last breakpoint and reports only real transitions.
#[derive(Debug, Clone)]
pub struct BreakpointTracker {
    current: Breakpoint,
}

impl BreakpointTracker {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            current: viewport.breakpoint(),
        }
    }

    pub fn current(&self) -> Breakpoint {
        self.current
    }

    /// Feeds a new viewport; returns the transition if the breakpoint moved.
    pub fn observe(&mut self, viewport: Viewport) -> Option<BreakpointChange> {
        let next = viewport.breakpoint();
        if next == self.current {
            return None;
        }
        let change = BreakpointChange {
            from: self.current,
            to: next,
        };
        self.current = next;
        log::debug!(
            "event=breakpoint_change module=viewport from={} to={}",
            change.from.as_str(),
            change.to.as_str()
        );
        Some(change)
    }
}
