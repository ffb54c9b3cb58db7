//! # Geometry Primitives
//!
//! Plain value types for the layout engine: axis-aligned rectangles, per-side
//! edge values and points, plus the two fitting helpers everything else is
//! built from.
//!
//! All coordinates are `f64` pixels with the origin at the top-left of the
//! canvas and `y` growing downwards.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle. Width and height are expected to be
/// non-negative; nothing here enforces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle of the given size anchored at the origin.
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Move by `(dx, dy)` without resizing.
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Whether `other` lies entirely inside `self`, allowing `tolerance`
    /// pixels of floating-point slop on every side.
    pub fn contains_rect(&self, other: &Rect, tolerance: f64) -> bool {
        other.x >= self.x - tolerance
            && other.y >= self.y - tolerance
            && other.right() <= self.right() + tolerance
            && other.bottom() <= self.bottom() + tolerance
    }

    /// Shrink by a different inset on each side. See [`clip`].
    #[must_use]
    pub fn clip(&self, insets: Edges) -> Self {
        clip(self, insets)
    }

    /// Shrink by the same inset on all four sides.
    #[must_use]
    pub fn clip_uniform(&self, inset: f64) -> Self {
        clip(self, Edges::uniform(inset))
    }
}

/// A point in pixel space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Edge values (top, right, bottom, left) used for margins and insets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Edges {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }

    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// Multiply every side by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(
            self.top * factor,
            self.right * factor,
            self.bottom * factor,
            self.left * factor,
        )
    }

    /// Add `extra` to every side.
    #[must_use]
    pub fn grown(&self, extra: f64) -> Self {
        Self::new(
            self.top + extra,
            self.right + extra,
            self.bottom + extra,
            self.left + extra,
        )
    }
}

/// Find the largest rectangle with the given width:height `ratio` that fits
/// centered inside `container`, then shrink it on every side by
/// `inset_fraction` of the container's shorter side.
///
/// Algorithm:
/// 1. If the target is wider than the container, the width is the
///    constraint; otherwise the height is.
/// 2. Derive the other dimension from the ratio.
/// 3. If that still overflows the container, scale both down by the overflow.
/// 4. Center, then apply the inset.
///
/// A container with zero or negative width/height gives a meaningless
/// (possibly NaN) result; callers validate sizes before getting here.
pub fn center_fit(container: &Rect, ratio: f64, inset_fraction: f64) -> Rect {
    let container_ratio = container.width / container.height;

    let (mut width, mut height) = if ratio > container_ratio {
        (container.width, container.width / ratio)
    } else {
        (container.height * ratio, container.height)
    };

    let overflow = (width / container.width).max(height / container.height);
    if overflow > 1.0 {
        width /= overflow;
        height /= overflow;
    }

    let x = container.x + (container.width - width) / 2.0;
    let y = container.y + (container.height - height) / 2.0;
    let inset = container.min_side() * inset_fraction;

    Rect::new(x + inset, y + inset, width - 2.0 * inset, height - 2.0 * inset)
}

/// Shrink `rect` by the given per-side insets:
/// `(x + left, y + top, width - left - right, height - top - bottom)`.
pub fn clip(rect: &Rect, insets: Edges) -> Rect {
    Rect::new(
        rect.x + insets.left,
        rect.y + insets.top,
        rect.width - insets.horizontal(),
        rect.height - insets.vertical(),
    )
}
