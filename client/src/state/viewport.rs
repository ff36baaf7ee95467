//! Narrow/wide layout mode derived from the viewport width.
//!
//! DESIGN
//! ======
//! The mode is a pure function of the last observed width. `ViewportTracker`
//! only remembers that width so callers can ask whether a resize actually
//! changed the mode; there is no hysteresis around the breakpoint.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Widths at or below this value render the narrow layout.
pub const NARROW_BREAKPOINT: f64 = 768.0;

pub const LOGO_WIDE_SRC: &str = "/assets/images/logo-color.png";
pub const LOGO_NARROW_SRC: &str = "/assets/images/monogram-color.png";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewportMode {
    Narrow,
    #[default]
    Wide,
}

impl ViewportMode {
    /// Classify a width against [`NARROW_BREAKPOINT`] (inclusive).
    pub fn from_width(width: f64) -> Self {
        if width <= NARROW_BREAKPOINT { Self::Narrow } else { Self::Wide }
    }

    pub fn is_narrow(self) -> bool {
        self == Self::Narrow
    }

    /// Logo asset for this layout: the monogram when narrow, the full logo otherwise.
    pub fn logo_src(self) -> &'static str {
        match self {
            Self::Narrow => LOGO_NARROW_SRC,
            Self::Wide => LOGO_WIDE_SRC,
        }
    }
}

/// Last observed width and the mode it implies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTracker {
    width: f64,
    mode: ViewportMode,
}

impl ViewportTracker {
    /// Seed from the width observed at mount.
    pub fn new(width: f64) -> Self {
        Self { width, mode: ViewportMode::from_width(width) }
    }

    /// Record a resize. Returns `true` when the mode changed.
    pub fn observe(&mut self, width: f64) -> bool {
        let next = ViewportMode::from_width(width);
        let changed = next != self.mode;
        self.width = width;
        self.mode = next;
        changed
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }
}
