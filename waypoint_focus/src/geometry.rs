// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer rectangles and offsets used by the focus search.

/// Axis-aligned integer rectangle in a shared root coordinate space.
///
/// `right` and `bottom` are exclusive edges, so a rectangle at `(0, 0, 10, 10)`
/// and one at `(10, 0, 20, 10)` touch but do not overlap. All predicates in this
/// crate assume `left <= right` and `top <= bottom`; zero-sized rectangles are
/// allowed and are used to search from a point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge (inclusive).
    pub left: i32,
    /// Top edge (inclusive).
    pub top: i32,
    /// Right edge (exclusive).
    pub right: i32,
    /// Bottom edge (exclusive).
    pub bottom: i32,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create a rectangle from its four edges.
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a zero-sized rectangle at a point.
    #[inline]
    pub const fn from_point(x: i32, y: i32) -> Self {
        Self::new(x, y, x, y)
    }

    /// Horizontal extent.
    ///
    /// Widened to `i64` so that rectangles spanning the whole `i32` range do
    /// not overflow.
    #[inline]
    pub const fn width(&self) -> i64 {
        self.right as i64 - self.left as i64
    }

    /// Vertical extent, widened like [`Rect::width`].
    #[inline]
    pub const fn height(&self) -> i64 {
        self.bottom as i64 - self.top as i64
    }

    /// Horizontal center, rounded towards `left`.
    #[inline]
    pub const fn center_x(&self) -> i32 {
        saturate(self.left as i64 + self.width() / 2)
    }

    /// Vertical center, rounded towards `top`.
    #[inline]
    pub const fn center_y(&self) -> i32 {
        saturate(self.top as i64 + self.height() / 2)
    }

    /// Whether the rectangle has no area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// The same rectangle moved by `(dx, dy)`. Edges saturate at the `i32` range.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.left.saturating_add(dx),
            self.top.saturating_add(dy),
            self.right.saturating_add(dx),
            self.bottom.saturating_add(dy),
        )
    }

    /// Whether `other` lies entirely inside this rectangle.
    ///
    /// An empty rectangle contains nothing, not even another empty rectangle.
    #[inline]
    pub const fn contains(&self, other: &Self) -> bool {
        !self.is_empty()
            && self.left <= other.left
            && self.top <= other.top
            && self.right >= other.right
            && self.bottom >= other.bottom
    }

    /// Round a [`kurbo::Rect`] outwards to the smallest enclosing integer rectangle.
    ///
    /// The input is normalized first, so flipped rectangles produce the same result
    /// as their upright equivalent. Coordinates outside the `i32` range saturate.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Float-to-int `as` casts saturate, and `expand` already produced whole numbers."
    )]
    pub fn from_kurbo(rect: kurbo::Rect) -> Self {
        let r = rect.abs().expand();
        Self::new(r.x0 as i32, r.y0 as i32, r.x1 as i32, r.y1 as i32)
    }

    /// Convert to a [`kurbo::Rect`].
    pub fn to_kurbo(self) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(self.left),
            f64::from(self.top),
            f64::from(self.right),
            f64::from(self.bottom),
        )
    }
}

/// Signed offset from a search point to the edge of the element it found.
///
/// Used as the in/out accumulator of
/// [`find_nearest_touchable`](crate::find_nearest_touchable): only the axis
/// matching the search direction is written, the other is left untouched.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    /// Horizontal component.
    pub dx: i32,
    /// Vertical component.
    pub dy: i32,
}

/// Clamp a widened coordinate back into the `i32` range.
#[allow(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to the `i32` range first."
)]
pub(crate) const fn saturate(value: i64) -> i32 {
    if value < i32::MIN as i64 {
        i32::MIN
    } else if value > i32::MAX as i64 {
        i32::MAX
    } else {
        value as i32
    }
}
