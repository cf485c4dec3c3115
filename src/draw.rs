//! Draw commands - plain data handed to an external rendering backend.
//!
//! The core never paints. During the Render pass application code appends
//! commands to each node's draw list; `Ui::paint_list` flattens the tree into
//! paint order (effective z-index ascending, tree order within a z) together
//! with the resolved clip flag and cumulative scroll offset the backend needs.

use crate::types::{Color, Rect, Vec2};

// =============================================================================
// DrawCommand
// =============================================================================

/// One backend-agnostic draw operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled rectangle.
    Rect { rect: Rect, color: Color },
    /// Rectangle outline.
    Border {
        rect: Rect,
        color: Color,
        thickness: f32,
    },
    /// Text run anchored at a point. Shaping/measurement is the backend's job.
    Text {
        pos: Vec2,
        content: String,
        size: f32,
        color: Color,
    },
    /// Single icon glyph anchored at a point.
    Icon {
        pos: Vec2,
        glyph: String,
        size: f32,
        color: Color,
    },
}

// =============================================================================
// PaintNode
// =============================================================================

/// One node's contribution to the flattened paint order.
///
/// Everything a renderer reads is resolved here: the effective z-index from
/// the scope cascade, whether the node clips its content, and the cumulative
/// scroll offset already applied to `rect`.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintNode {
    /// The node's frame-stable identifier.
    pub id: String,
    /// Effective z-index (lower paints first).
    pub z: i32,
    /// Whether content should be clipped to `rect`.
    pub clip: bool,
    /// Sum of active ancestor scroll offsets.
    pub scroll: Vec2,
    /// Final screen rectangle.
    pub rect: Rect,
    pub commands: Vec<DrawCommand>,
}
