//! Layout calculation - turns style plus available space into rectangles.
//!
//! # Algorithm
//!
//! Given a root with a known rectangle (the screen), the solver walks the
//! tree top-down. For every container it distributes children along the
//! container's main axis and resolves each child's cross-axis size
//! individually, then recurses. A final pass subtracts accumulated ancestor
//! scroll offsets from positions.
//!
//! Per-axis size resolution, in order:
//!
//! 1. Expansion requested → share of the available space.
//! 2. Fixed size (`>= 0`) → used directly.
//! 3. Content-derived: leaves fall back to their existing rect size or a
//!    minimum; containers take the bounding size of their children.
//!
//! The algorithm never errors and never panics: negative available space
//! clamps to zero before distribution, percentage normalization falls back
//! to an even split when the shares sum to zero, and a zero-sized parent
//! produces zero-sized children.

use tracing::trace;

use crate::style::Direction;
use crate::tree::{NodeId, Tree};
use crate::types::{Axis, Rect, Vec2};

/// Minimum size a child is floored to while its parent still has space for
/// it, so zero-area layout bugs don't silently collapse content.
pub const MIN_NODE_SIZE: f32 = 10.0;

/// Ceiling for the content-derived height of a horizontally-laid-out child.
const MAX_AUTO_HEIGHT: f32 = 120.0;

/// Ceiling for the content-derived width of a vertically-laid-out child.
const MAX_AUTO_WIDTH: f32 = 240.0;

// =============================================================================
// Entry point
// =============================================================================

/// Compute and assign rectangles for every descendant of `root`.
///
/// The root's own rectangle is the input (the screen rect); it is never
/// reassigned here. Runs exactly once per frame, between the Build and
/// Render passes.
pub fn solve(tree: &mut Tree, root: NodeId) {
    trace!(nodes = tree.len(), "calculating layout");
    layout_children(tree, root);
    apply_scroll_offsets(tree, root, Vec2::ZERO);
}

fn layout_children(tree: &mut Tree, parent: NodeId) {
    let kids = tree.node(parent).children().to_vec();
    if kids.is_empty() {
        return;
    }

    let content = tree.node(parent).inner_rect();
    match tree.node(parent).style.direction {
        Direction::Vertical => distribute(tree, parent, &kids, Axis::Vertical, content),
        Direction::Horizontal => distribute(tree, parent, &kids, Axis::Horizontal, content),
        Direction::None => overlay(tree, parent, &kids, content),
    }

    for kid in kids {
        layout_children(tree, kid);
    }
}

// =============================================================================
// Main-axis distribution
// =============================================================================

fn distribute(tree: &mut Tree, parent: NodeId, kids: &[NodeId], axis: Axis, content: Rect) {
    let parent_style = tree.node(parent).style;
    let cross = axis.cross();
    let gap = parent_style.gap;
    let total_gap = gap * (kids.len() - 1) as f32;
    let available_main = (content.size(axis) - total_gap).max(0.0);

    // Partition into fixed and expanding sets; fixed children contribute
    // their size plus margins up front.
    let mut main_sizes = vec![0.0_f32; kids.len()];
    let mut expanding: Vec<usize> = Vec::new();
    let mut fixed_total = 0.0_f32;
    for (i, &kid) in kids.iter().enumerate() {
        let style = tree.node(kid).style;
        if style.expands(axis) {
            expanding.push(i);
        } else {
            let size = if style.has_fixed(axis) {
                style.fixed(axis)
            } else {
                content_size(tree, kid, axis)
            };
            main_sizes[i] = size;
            fixed_total += size + style.margin.sum(axis);
        }
    }
    let remaining = (available_main - fixed_total).max(0.0);

    if kids.len() == 1 && expanding.len() == 1 {
        // A lone expanding child takes its share of the whole axis directly,
        // avoiding percentage-normalization artifacts.
        let style = tree.node(kids[0]).style;
        main_sizes[0] =
            ((available_main - style.margin.sum(axis)) * style.expand_pct(axis)).max(0.0);
    } else if !expanding.is_empty() {
        let total_pct: f32 = expanding
            .iter()
            .map(|&i| tree.node(kids[i]).style.expand_pct(axis))
            .sum();
        for &i in &expanding {
            // Zero-percentage siblings still split the space evenly.
            main_sizes[i] = if total_pct <= 0.0 {
                remaining / expanding.len() as f32
            } else {
                remaining * tree.node(kids[i]).style.expand_pct(axis) / total_pct
            };
        }
    }

    // Cross-axis sizes are resolved per child with the same fixed/expand/
    // content rules, against the container's full content extent.
    let mut cross_sizes = vec![0.0_f32; kids.len()];
    for (i, &kid) in kids.iter().enumerate() {
        cross_sizes[i] = resolve_axis_size(tree, kid, cross, content.size(cross));
    }

    for (i, &kid) in kids.iter().enumerate() {
        let margin = tree.node(kid).style.margin;
        main_sizes[i] = floor_size(main_sizes[i], available_main - margin.sum(axis));
        cross_sizes[i] = floor_size(cross_sizes[i], content.size(cross) - margin.sum(cross));
    }

    // Content alignment shifts the whole run once, by a fraction of the
    // leftover main-axis space.
    let used = main_sizes
        .iter()
        .zip(kids)
        .map(|(&size, &kid)| size + tree.node(kid).style.margin.sum(axis))
        .sum::<f32>()
        + total_gap;
    let leftover = (content.size(axis) - used).max(0.0);
    let mut cursor = content.origin(axis) + parent_style.align_factor(axis) * leftover;

    for (i, &kid) in kids.iter().enumerate() {
        let style = tree.node(kid).style;
        let main_pos = cursor + style.margin.leading(axis);
        let cross_pos = content.origin(cross)
            + style.margin.leading(cross)
            + parent_style.align_factor(cross)
                * (content.size(cross) - cross_sizes[i] - style.margin.sum(cross));

        place(tree, kid, axis, main_pos, main_sizes[i], cross_pos, cross_sizes[i]);

        cursor = main_pos + main_sizes[i] + style.margin.trailing(axis) + gap;
    }
}

/// Assign a child's rect, respecting manual `left`/`top` overrides:
/// a manually positioned axis keeps its coordinate while sizing still applies.
fn place(
    tree: &mut Tree,
    kid: NodeId,
    axis: Axis,
    main_pos: f32,
    main_size: f32,
    cross_pos: f32,
    cross_size: f32,
) {
    let node = tree.node_mut(kid);
    let (manual_main, manual_cross) = match axis {
        Axis::Horizontal => (node.manual_x, node.manual_y),
        Axis::Vertical => (node.manual_y, node.manual_x),
    };
    let main_pos = if manual_main {
        node.rect.origin(axis)
    } else {
        main_pos
    };
    let cross_pos = if manual_cross {
        node.rect.origin(axis.cross())
    } else {
        cross_pos
    };
    node.rect.set_axis(axis, main_pos, main_size);
    node.rect.set_axis(axis.cross(), cross_pos, cross_size);
}

// =============================================================================
// Overlay (Direction::None)
// =============================================================================

/// Containers without a main axis size each child independently and stack
/// them at the content origin; alignment and margins still apply, and manual
/// positions stay untouched.
fn overlay(tree: &mut Tree, parent: NodeId, kids: &[NodeId], content: Rect) {
    let parent_style = tree.node(parent).style;
    for &kid in kids {
        let style = tree.node(kid).style;
        let mut size = [0.0_f32; 2];
        let mut pos = [0.0_f32; 2];
        for (slot, axis) in [Axis::Horizontal, Axis::Vertical].into_iter().enumerate() {
            let resolved = resolve_axis_size(tree, kid, axis, content.size(axis));
            size[slot] = floor_size(resolved, content.size(axis) - style.margin.sum(axis));
            pos[slot] = content.origin(axis)
                + style.margin.leading(axis)
                + parent_style.align_factor(axis)
                    * (content.size(axis) - size[slot] - style.margin.sum(axis));
        }

        let node = tree.node_mut(kid);
        if !node.manual_x {
            node.rect.x = pos[0];
        }
        if !node.manual_y {
            node.rect.y = pos[1];
        }
        node.rect.w = size[0];
        node.rect.h = size[1];
    }
}

// =============================================================================
// Size resolution
// =============================================================================

/// Resolve one axis of one node: expansion share, fixed pixels, or content.
fn resolve_axis_size(tree: &Tree, node: NodeId, axis: Axis, available: f32) -> f32 {
    let style = tree.node(node).style;
    if style.expands(axis) {
        available * style.expand_pct(axis)
    } else if style.has_fixed(axis) {
        style.fixed(axis)
    } else {
        content_size(tree, node, axis)
    }
}

/// Content-derived size of a node along an axis.
///
/// Leaves fall back to their existing rect size (or the minimum); containers
/// take the bounding size of their children - summed along their own main
/// axis, the maximum across it - including child margins, own gaps and own
/// padding. Auto-sized containers laid out across the measured axis are
/// clamped to a ceiling so deeply nested auto-sizing cannot run away.
fn content_size(tree: &Tree, node: NodeId, axis: Axis) -> f32 {
    let style = tree.node(node).style;
    if style.has_fixed(axis) {
        return style.fixed(axis);
    }

    let kids = tree.node(node).children();
    if kids.is_empty() {
        let existing = tree.node(node).rect.size(axis);
        return if existing > 0.0 {
            existing
        } else {
            MIN_NODE_SIZE
        };
    }

    let mut total = 0.0_f32;
    if style.direction.main_axis() == Some(axis) {
        for &kid in kids {
            total += content_size(tree, kid, axis) + tree.node(kid).style.margin.sum(axis);
        }
        total += style.gap * (kids.len() - 1) as f32;
    } else {
        for &kid in kids {
            let extent = content_size(tree, kid, axis) + tree.node(kid).style.margin.sum(axis);
            total = total.max(extent);
        }
    }
    total += style.padding.sum(axis);

    if !style.expands(axis) && crosses(style.direction, axis) {
        total = total.min(auto_ceiling(axis));
    }
    total.max(0.0)
}

/// Whether a node laid out in `direction` runs across the measured axis.
const fn crosses(direction: Direction, axis: Axis) -> bool {
    matches!(
        (direction, axis),
        (Direction::Horizontal, Axis::Vertical) | (Direction::Vertical, Axis::Horizontal)
    )
}

const fn auto_ceiling(axis: Axis) -> f32 {
    match axis {
        Axis::Horizontal => MAX_AUTO_WIDTH,
        Axis::Vertical => MAX_AUTO_HEIGHT,
    }
}

/// Clamp a computed size to `>= 0`, flooring it at [`MIN_NODE_SIZE`] while
/// positive space remains for this child on the axis.
fn floor_size(size: f32, available_for_child: f32) -> f32 {
    let size = size.max(0.0);
    if available_for_child > 0.0 && size < MIN_NODE_SIZE {
        MIN_NODE_SIZE
    } else {
        size
    }
}

// =============================================================================
// Scroll offsets
// =============================================================================

/// Subtract the accumulated ancestor scroll offsets from every node's
/// position. Displacement only - sizing is never affected.
fn apply_scroll_offsets(tree: &mut Tree, node: NodeId, acc: Vec2) {
    if !acc.is_zero() {
        let rect = &mut tree.node_mut(node).rect;
        rect.x -= acc.x;
        rect.y -= acc.y;
    }
    let next = match tree.scope(node).active_scroll_offset() {
        Some(offset) => acc + offset,
        None => acc,
    };
    for kid in tree.node(node).children().to_vec() {
        apply_scroll_offsets(tree, kid, next);
    }
}
