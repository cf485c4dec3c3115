//! Style - the per-node sizing/spacing/alignment record.
//!
//! A Style is plain data attached to exactly one node. No validation happens
//! on set: negative sizes, percentages above 1.0 and negative margins are all
//! legal inputs that the layout algorithm resolves arithmetically.

use bitflags::bitflags;

use crate::types::{Axis, Edges};

/// Sentinel for "unset / derive from expansion or content".
///
/// Any size `>= 0` is a fixed pixel request; anything below is unset.
pub const UNSET: f32 = -1.0;

// =============================================================================
// Direction
// =============================================================================

/// The main axis along which a container distributes its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// No distribution: children are sized individually and overlaid at the
    /// content origin (manual positioning via `left`/`top` stays in effect).
    None,
    /// Children flow left to right.
    Horizontal,
    /// Children flow top to bottom.
    #[default]
    Vertical,
}

impl Direction {
    /// The main axis, if this direction distributes at all.
    #[inline]
    pub const fn main_axis(self) -> Option<Axis> {
        match self {
            Self::None => None,
            Self::Horizontal => Some(Axis::Horizontal),
            Self::Vertical => Some(Axis::Vertical),
        }
    }
}

// =============================================================================
// Expand
// =============================================================================

bitflags! {
    /// Expansion intent: which axes claim a share of the parent's leftover
    /// space. `ALL` is the both-axes form.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Expand: u8 {
        const WIDTH = 1 << 0;
        const HEIGHT = 1 << 1;
        const ALL = Self::WIDTH.bits() | Self::HEIGHT.bits();
    }
}

impl Expand {
    /// The flag covering one axis.
    #[inline]
    pub const fn axis(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::WIDTH,
            Axis::Vertical => Self::HEIGHT,
        }
    }
}

// =============================================================================
// Style
// =============================================================================

/// Sizing/spacing/alignment intent for one node.
///
/// Copied by value; rebuilt from scratch every frame by the Command API.
///
/// Sizing per axis resolves in this order: expansion (share of the parent's
/// leftover space), fixed pixels (`>= 0`), content-derived. `align_content_*`
/// are fractions in [0,1] of the leftover space used as a collective offset
/// for all children (0 = start, 0.5 = center, 1 = end).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub width: f32,
    pub height: f32,
    pub margin: Edges,
    pub padding: Edges,
    /// Distinguishes a uniform `margin(v)` call from explicitly asymmetric
    /// edges. Introspection only - never consulted by layout.
    pub has_specific_margins: bool,
    /// Inter-child spacing along the main axis.
    pub gap: f32,
    pub align_content_x: f32,
    pub align_content_y: f32,
    /// Reserved: stored but not consumed by the distribution algorithm.
    pub align_self: f32,
    pub expand: Expand,
    /// This node's share of expanding space relative to expanding siblings,
    /// not a fraction of the parent. Defaults to 1.0 even when expansion is
    /// disabled.
    pub expand_w_pct: f32,
    pub expand_h_pct: f32,
    pub direction: Direction,
    /// Reserved: stored but the current algorithm does not wrap.
    pub wrap: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            width: UNSET,
            height: UNSET,
            margin: Edges::ZERO,
            padding: Edges::ZERO,
            has_specific_margins: false,
            gap: 0.0,
            align_content_x: 0.0,
            align_content_y: 0.0,
            align_self: 0.5,
            expand: Expand::empty(),
            expand_w_pct: 1.0,
            expand_h_pct: 1.0,
            direction: Direction::Vertical,
            wrap: false,
        }
    }
}

impl Style {
    /// The requested fixed size along an axis (`UNSET` when not fixed).
    #[inline]
    pub const fn fixed(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Whether a fixed pixel size was requested along an axis.
    #[inline]
    pub const fn has_fixed(&self, axis: Axis) -> bool {
        self.fixed(axis) >= 0.0
    }

    /// Whether this node claims leftover space along an axis.
    #[inline]
    pub fn expands(&self, axis: Axis) -> bool {
        self.expand.contains(Expand::axis(axis))
    }

    /// Expansion share along an axis.
    #[inline]
    pub const fn expand_pct(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.expand_w_pct,
            Axis::Vertical => self.expand_h_pct,
        }
    }

    /// Content alignment factor governing offsets along an axis.
    #[inline]
    pub const fn align_factor(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.align_content_x,
            Axis::Vertical => self.align_content_y,
        }
    }
}
