// Copyright 2025 the Viewcull Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

/// Axis-aligned rectangle in canvas space, stored as origin and extent.
///
/// Extents are expected to be non-negative. All comparisons are closed: two
/// rectangles that only share an edge still intersect, and a rectangle touching
/// the inside of another's edge is still contained.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Bounds {
    /// Create bounds from origin and size.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Zero-extent bounds at a point.
    pub const fn point(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0, 0.0)
    }

    /// Square bounds enclosing the circle of `radius` around `(x, y)`.
    ///
    /// Negative radii are clamped to zero, which degenerates to [`Bounds::point`].
    pub fn from_point_radius(x: f64, y: f64, radius: f64) -> Self {
        let r = if radius > 0.0 { radius } else { 0.0 };
        Self::new(x - r, y - r, r * 2.0, r * 2.0)
    }

    /// Right edge (`x + width`).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether every coordinate is finite (no NaN or infinity).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Closed-interval overlap on both axes.
    ///
    /// Any comparison against NaN is false, so NaN bounds never intersect.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }

    /// Whether `other` lies entirely within `self`, edges included.
    #[inline]
    pub fn contains(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Split into four quadrants: top-left, top-right, bottom-left, bottom-right.
    ///
    /// Each half extent is floored, so odd sizes leave an uncovered remainder
    /// strip along the right and bottom edges.
    pub(crate) fn quadrants(&self) -> [Self; 4] {
        let hw = floor_half(self.width);
        let hh = floor_half(self.height);
        [
            Self::new(self.x, self.y, hw, hh),
            Self::new(self.x + hw, self.y, hw, hh),
            Self::new(self.x, self.y + hh, hw, hh),
            Self::new(self.x + hw, self.y + hh, hw, hh),
        ]
    }
}

// `f64::floor` needs std; extents are non-negative so dropping the
// fractional part is the same thing.
#[inline]
fn floor_half(extent: f64) -> f64 {
    let half = extent / 2.0;
    half - half % 1.0
}

#[cfg(feature = "kurbo")]
impl From<kurbo::Rect> for Bounds {
    fn from(r: kurbo::Rect) -> Self {
        let r = r.abs();
        Self::new(r.x0, r.y0, r.width(), r.height())
    }
}

#[cfg(feature = "kurbo")]
impl From<Bounds> for kurbo::Rect {
    fn from(b: Bounds) -> Self {
        Self::new(b.x, b.y, b.right(), b.bottom())
    }
}
