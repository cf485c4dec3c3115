//! Core types for imflex.
//!
//! These types define the foundation that everything builds on.
//! They flow through the frame pipeline and define what a renderer understands.

// =============================================================================
// Pass
// =============================================================================

/// The two sequential executions of the declarative UI code within one frame.
///
/// The same call graph runs twice: once to establish the tree and style
/// (Build), and once after layout to read final geometry and emit draw
/// commands (Render). Command API mutators consult the current pass and are
/// inert outside of Build; draw emission is inert outside of Render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pass {
    /// First pass: create/configure nodes. Mutators are live.
    #[default]
    Build,
    /// Second pass: geometry is final. Mutators are inert, draw emission live.
    Render,
}

// =============================================================================
// Axis
// =============================================================================

/// One of the two layout axes.
///
/// A container's main axis is the one its children are distributed along;
/// the cross axis is the orthogonal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The orthogonal axis.
    #[inline]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

// =============================================================================
// Vec2
// =============================================================================

/// A 2D point or offset in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Check against exact zero. Scroll offsets are "active" only when non-zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// =============================================================================
// Edges
// =============================================================================

/// Per-edge spacing values (margin or padding).
///
/// Negative values are legal; the layout algorithm resolves them
/// arithmetically rather than rejecting them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// All four edges set to the same value.
    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Horizontal/vertical pairs: `x` → left+right, `y` → top+bottom.
    pub const fn xy(x: f32, y: f32) -> Self {
        Self {
            top: y,
            right: x,
            bottom: y,
            left: x,
        }
    }

    /// Positional: (top, right, bottom, left), CSS order.
    pub const fn trbl(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The leading edge along an axis (left or top).
    #[inline]
    pub const fn leading(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// The trailing edge along an axis (right or bottom).
    #[inline]
    pub const fn trailing(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }

    /// Sum of both edges along an axis.
    #[inline]
    pub const fn sum(self, axis: Axis) -> f32 {
        self.leading(axis) + self.trailing(axis)
    }
}

// =============================================================================
// Rect
// =============================================================================

/// An axis-aligned rectangle: position plus size, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        w: 0.0,
        h: 0.0,
    };

    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Midpoint of the rectangle.
    pub fn center(self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Shrink by per-edge spacing (padding). Sizes clamp to zero; the
    /// resulting origin may move past the original bounds when the spacing
    /// exceeds the rect.
    pub fn shrink(self, edges: Edges) -> Self {
        Self {
            x: self.x + edges.left,
            y: self.y + edges.top,
            w: (self.w - edges.left - edges.right).max(0.0),
            h: (self.h - edges.top - edges.bottom).max(0.0),
        }
    }

    /// Grow by per-edge spacing (margin). Sizes clamp to zero for negative
    /// edge values larger than the rect.
    pub fn grow(self, edges: Edges) -> Self {
        Self {
            x: self.x - edges.left,
            y: self.y - edges.top,
            w: (self.w + edges.left + edges.right).max(0.0),
            h: (self.h + edges.top + edges.bottom).max(0.0),
        }
    }

    /// Position along an axis.
    #[inline]
    pub const fn origin(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Size along an axis.
    #[inline]
    pub const fn size(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.w,
            Axis::Vertical => self.h,
        }
    }

    /// Assign position and size along one axis, leaving the other untouched.
    #[inline]
    pub fn set_axis(&mut self, axis: Axis, origin: f32, size: f32) {
        match axis {
            Axis::Horizontal => {
                self.x = origin;
                self.w = size;
            }
            Axis::Vertical => {
                self.y = origin;
                self.h = size;
            }
        }
    }
}

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// Alpha 255 = fully opaque, 0 = fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Check if color is fully transparent.
    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_shrink_grow() {
        let rect = Rect::new(10.0, 10.0, 100.0, 50.0);

        let inner = rect.shrink(Edges::uniform(5.0));
        assert_eq!(inner, Rect::new(15.0, 15.0, 90.0, 40.0));

        let outer = rect.grow(Edges::uniform(5.0));
        assert_eq!(outer, Rect::new(5.0, 5.0, 110.0, 60.0));
    }

    #[test]
    fn test_rect_shrink_clamps_size() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let inner = rect.shrink(Edges::uniform(20.0));
        assert_eq!(inner.w, 0.0);
        assert_eq!(inner.h, 0.0);
    }

    #[test]
    fn test_rect_center() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(rect.center(), Vec2::new(50.0, 25.0));
    }

    #[test]
    fn test_rect_axis_accessors() {
        let mut rect = Rect::new(1.0, 2.0, 30.0, 40.0);
        assert_eq!(rect.origin(Axis::Horizontal), 1.0);
        assert_eq!(rect.origin(Axis::Vertical), 2.0);
        assert_eq!(rect.size(Axis::Horizontal), 30.0);
        assert_eq!(rect.size(Axis::Vertical), 40.0);

        rect.set_axis(Axis::Vertical, 5.0, 60.0);
        assert_eq!(rect, Rect::new(1.0, 5.0, 30.0, 60.0));
    }

    #[test]
    fn test_edges_constructors() {
        assert_eq!(Edges::uniform(3.0), Edges::trbl(3.0, 3.0, 3.0, 3.0));
        assert_eq!(Edges::xy(2.0, 7.0), Edges::trbl(7.0, 2.0, 7.0, 2.0));
    }

    #[test]
    fn test_edges_axis_accessors() {
        let edges = Edges::trbl(1.0, 2.0, 3.0, 4.0);
        assert_eq!(edges.leading(Axis::Vertical), 1.0);
        assert_eq!(edges.trailing(Axis::Horizontal), 2.0);
        assert_eq!(edges.trailing(Axis::Vertical), 3.0);
        assert_eq!(edges.leading(Axis::Horizontal), 4.0);
        assert_eq!(edges.sum(Axis::Horizontal), 6.0);
        assert_eq!(edges.sum(Axis::Vertical), 4.0);
    }

    #[test]
    fn test_axis_cross() {
        assert_eq!(Axis::Horizontal.cross(), Axis::Vertical);
        assert_eq!(Axis::Vertical.cross(), Axis::Horizontal);
    }
}
