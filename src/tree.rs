//! Node tree - arena of nodes indexed by handle.
//!
//! Nodes live in a flat arena; parent/child relationships are stored as
//! indices rather than owning pointers, so mutation during traversal never
//! fights the borrow checker and no reference cycle can form. The tree is
//! frame-scoped: it is cleared at `begin_frame` and rebuilt from scratch by
//! the Build pass.
//!
//! Nodes and scopes are parallel arrays sharing one index space: the node at
//! slot `i` owns the scope at slot `i`.

use crate::draw::DrawCommand;
use crate::error::TreeError;
use crate::scope::Scope;
use crate::style::Style;
use crate::types::{Rect, Vec2};

// =============================================================================
// NodeId
// =============================================================================

/// Handle to a node in the arena. Valid for the current frame only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

// =============================================================================
// Node
// =============================================================================

/// A tree entity: one style, one computed rectangle, one draw list.
///
/// The identifier is assigned at construction and stays stable across the
/// two passes of a frame - the frame context guarantees that the Render pass
/// re-derives the same identifiers the Build pass produced.
#[derive(Debug, Clone)]
pub struct Node {
    id: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub style: Style,
    /// Computed screen rectangle. Zero until the calculation runs, except
    /// for components positioned manually via `left`/`top`.
    pub rect: Rect,
    /// Replaceable list of draw commands, owned by the node.
    pub draw_list: Vec<DrawCommand>,
    /// Set when `left` was called: distribution leaves x alone.
    pub(crate) manual_x: bool,
    /// Set when `top` was called: distribution leaves y alone.
    pub(crate) manual_y: bool,
}

impl Node {
    fn new(id: String, parent: Option<NodeId>) -> Self {
        Self {
            id,
            parent,
            children: Vec::new(),
            style: Style::default(),
            rect: Rect::ZERO,
            draw_list: Vec::new(),
            manual_x: false,
            manual_y: false,
        }
    }

    /// The frame-stable identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Non-owning back-reference to the parent.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in distribution order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Rect shrunk by padding - the area available to children.
    pub fn inner_rect(&self) -> Rect {
        self.rect.shrink(self.style.padding)
    }

    /// Rect grown by margin - the total footprint including reserved spacing.
    pub fn outer_rect(&self) -> Rect {
        self.rect.grow(self.style.margin)
    }

    /// Midpoint of the rect.
    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }
}

// =============================================================================
// Tree
// =============================================================================

/// Arena owning all nodes and scopes of the current frame.
#[derive(Debug, Default)]
pub struct Tree {
    nodes: Vec<Node>,
    scopes: Vec<Scope>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every node and scope. Handles from before this call are stale.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.scopes.clear();
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a node (and its scope) and link it under `parent`.
    pub fn alloc(&mut self, id: impl Into<String>, parent: Option<NodeId>) -> NodeId {
        let node_id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id.into(), parent));
        self.scopes.push(Scope::default());
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(node_id);
        }
        node_id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn scope(&self, id: NodeId) -> &Scope {
        &self.scopes[id.0]
    }

    pub fn scope_mut(&mut self, id: NodeId) -> &mut Scope {
        &mut self.scopes[id.0]
    }

    // =========================================================================
    // Child management
    // =========================================================================

    /// Link `child` under `parent`, unlinking it from its previous parent
    /// first. Appends at the end of the child list.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(old) = self.nodes[child.0].parent {
            self.nodes[old.0].children.retain(|&c| c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Unlink `child` from `parent`. Returns whether it was a child.
    /// The node itself stays in the arena until the frame ends.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        let children = &mut self.nodes[parent.0].children;
        let before = children.len();
        children.retain(|&c| c != child);
        let removed = children.len() != before;
        if removed {
            self.nodes[child.0].parent = None;
        }
        removed
    }

    /// Unlink the direct child carrying `id`.
    pub fn remove_child_by_id(&mut self, parent: NodeId, id: &str) -> Result<NodeId, TreeError> {
        let child = self.nodes[parent.0]
            .children
            .iter()
            .copied()
            .find(|&c| self.nodes[c.0].id == id)
            .ok_or_else(|| TreeError::NodeNotFound { id: id.to_string() })?;
        self.remove_child(parent, child);
        Ok(child)
    }

    /// Unlink every child of `parent`.
    pub fn clear_children(&mut self, parent: NodeId) {
        let children = std::mem::take(&mut self.nodes[parent.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
        }
    }

    pub fn first_child(&self, parent: NodeId) -> Option<NodeId> {
        self.nodes[parent.0].children.first().copied()
    }

    pub fn last_child(&self, parent: NodeId) -> Option<NodeId> {
        self.nodes[parent.0].children.last().copied()
    }

    // =========================================================================
    // Search / diagnostics
    // =========================================================================

    /// Depth-first search for `id` in the subtree rooted at `from`
    /// (inclusive). First match wins.
    pub fn find(&self, from: NodeId, id: &str) -> Option<NodeId> {
        if self.nodes[from.0].id == id {
            return Some(from);
        }
        for &child in &self.nodes[from.0].children {
            if let Some(found) = self.find(child, id) {
                return Some(found);
            }
        }
        None
    }

    /// Identifiers from the root down to `node` (inclusive), for diagnostics.
    pub fn ancestor_path(&self, node: NodeId) -> Vec<String> {
        let mut path = Vec::new();
        let mut current = Some(node);
        while let Some(id) = current {
            path.push(self.nodes[id.0].id.clone());
            current = self.nodes[id.0].parent;
        }
        path.reverse();
        path
    }
}
