//! Scope - per-node carrier of optionally-inherited attributes.
//!
//! Every node owns exactly one scope. An attribute left unset resolves by
//! walking up the parent chain; if no ancestor set it either, a fixed
//! type-specific default applies. The walk is read-only, so it is safe to
//! repeat any number of times per frame.
//!
//! Z-ordering, clipping and scroll offsets propagate this way so they never
//! have to be re-specified at every level of the tree.

use crate::tree::{NodeId, Tree};
use crate::types::{Color, Vec2};

/// Default text size when no scope in the chain sets one.
pub const DEFAULT_TEXT_SIZE: f32 = 16.0;

/// Default z-index when no scope in the chain sets one.
pub const DEFAULT_Z_INDEX: i32 = 0;

// =============================================================================
// Scope
// =============================================================================

/// Nullable overlay of inheritable attributes, bound one-to-one with a node.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    pub text_color: Option<Color>,
    pub text_size: Option<f32>,
    pub text_font: Option<String>,
    pub icon_font: Option<String>,
    pub z_index: Option<i32>,
    pub clip: Option<bool>,
    /// Identity of the scroll container this subtree belongs to.
    pub scroll_container: Option<String>,
    /// Whether this node is itself a scroll container whose local offset
    /// displaces descendants.
    pub is_scroll_container: bool,
    /// Local scroll offset, subtracted from descendant positions.
    pub scroll_offset: Option<Vec2>,
}

impl Scope {
    /// The local scroll offset when this scope actively scrolls.
    pub(crate) fn active_scroll_offset(&self) -> Option<Vec2> {
        if !self.is_scroll_container {
            return None;
        }
        self.scroll_offset.filter(|offset| !offset.is_zero())
    }
}

// =============================================================================
// Cascade resolution
// =============================================================================

impl Tree {
    /// Walk `node` and its ancestors, returning the first value `pick`
    /// extracts. The parent chain is a tree, so the walk always terminates.
    fn resolve<T>(&self, node: NodeId, pick: impl Fn(&Scope) -> Option<T>) -> Option<T> {
        let mut current = Some(node);
        while let Some(id) = current {
            if let Some(value) = pick(self.scope(id)) {
                return Some(value);
            }
            current = self.node(id).parent();
        }
        None
    }

    /// Effective text color: own, nearest ancestor's, or black.
    pub fn resolve_text_color(&self, node: NodeId) -> Color {
        self.resolve(node, |scope| scope.text_color)
            .unwrap_or(Color::BLACK)
    }

    /// Effective text size: own, nearest ancestor's, or [`DEFAULT_TEXT_SIZE`].
    pub fn resolve_text_size(&self, node: NodeId) -> f32 {
        self.resolve(node, |scope| scope.text_size)
            .unwrap_or(DEFAULT_TEXT_SIZE)
    }

    /// Effective text font; `None` means the backend's default face.
    pub fn resolve_text_font(&self, node: NodeId) -> Option<String> {
        self.resolve(node, |scope| scope.text_font.clone())
    }

    /// Effective icon font; `None` means the backend's default face.
    pub fn resolve_icon_font(&self, node: NodeId) -> Option<String> {
        self.resolve(node, |scope| scope.icon_font.clone())
    }

    /// Effective z-index: own explicit value always wins, else the nearest
    /// ancestor's explicit value, else [`DEFAULT_Z_INDEX`]. Renderers sort
    /// the flattened tree by this (lower paints first).
    pub fn resolve_z_index(&self, node: NodeId) -> i32 {
        self.resolve(node, |scope| scope.z_index)
            .unwrap_or(DEFAULT_Z_INDEX)
    }

    /// Effective clip flag (default: no clipping).
    pub fn resolve_clip(&self, node: NodeId) -> bool {
        self.resolve(node, |scope| scope.clip).unwrap_or(false)
    }

    /// Identity of the nearest enclosing scroll container, if any.
    pub fn resolve_scroll_container(&self, node: NodeId) -> Option<String> {
        self.resolve(node, |scope| scope.scroll_container.clone())
    }

    /// Sum of the active scroll offsets of all strict ancestors.
    ///
    /// This is the total displacement the layout applies to `node`: its
    /// displayed position equals its geometric position minus this value.
    /// Sizing is never affected.
    pub fn cumulative_scroll_offset(&self, node: NodeId) -> Vec2 {
        let mut total = Vec2::ZERO;
        let mut current = self.node(node).parent();
        while let Some(id) = current {
            if let Some(offset) = self.scope(id).active_scroll_offset() {
                total = total + offset;
            }
            current = self.node(id).parent();
        }
        total
    }
}
