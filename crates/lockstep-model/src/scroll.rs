#![forbid(unsafe_code)]

//! Scroll measure and scroll deltas.
//!
//! The offset unit is whatever the host reports (rows, pixels,
//! fractional lines); it only has to be monotonic within one document.
//! The engine never interprets absolute offsets. It forms a delta
//! against the source pane's baseline and adds that delta on top of each
//! peer's own baseline, which is why the arithmetic lives here as a
//! small closed algebra instead of bare `f64` math at call sites.

use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A pane's scroll position, in host-defined units.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScrollOffset(f64);

impl ScrollOffset {
    /// Offset zero (top of the document for most hosts).
    pub const ZERO: Self = Self(0.0);

    /// Wrap a raw host scroll value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// The raw host scroll value.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

/// A relative scroll movement between two offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScrollDelta(f64);

impl ScrollDelta {
    /// No movement.
    pub const ZERO: Self = Self(0.0);

    /// Wrap a raw delta value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// The raw delta value.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Sub for ScrollOffset {
    type Output = ScrollDelta;

    fn sub(self, rhs: Self) -> ScrollDelta {
        ScrollDelta(self.0 - rhs.0)
    }
}

impl Add<ScrollDelta> for ScrollOffset {
    type Output = Self;

    fn add(self, delta: ScrollDelta) -> Self {
        Self(self.0 + delta.0)
    }
}

impl Neg for ScrollDelta {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}
