//! Frame context - pass state, node identity and the per-frame lifecycle.
//!
//! A frame runs the same declarative UI code twice. The Build pass creates
//! the tree and records styles; `calculate_layout` then solves every
//! rectangle in one sweep; the Render pass re-runs the code with mutators
//! inert so geometry reads return final values and draw commands can be
//! emitted against them.
//!
//! Identity bridges the two passes: each `node(key)` call derives a
//! frame-stable identifier from the caller's key plus a per-pass occurrence
//! counter, so the Nth call with a given key resolves to the same node in
//! both passes as long as the call sequence is deterministic. Loops reuse
//! one key and get "key", "key#1", "key#2" and so on.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::commands::NodeRef;
use crate::draw::PaintNode;
use crate::error::TreeError;
use crate::layout;
use crate::tree::{Node, NodeId, Tree};
use crate::types::{Pass, Rect};

/// Identifier of the implicit root node backing the screen rect.
pub const ROOT_ID: &str = "root";

// =============================================================================
// Ui
// =============================================================================

/// Per-frame UI context. One instance drives the whole two-pass protocol:
///
/// ```
/// use imflex::{Rect, Ui};
///
/// let mut ui = Ui::new();
/// ui.begin_frame(Rect::new(0.0, 0.0, 800.0, 600.0));
/// ui.node("panel").expand(1.0, 1.0).padding(8.0);
/// ui.calculate_layout();
/// let rect = ui.node("panel").rect();
/// assert_eq!(rect.w, 800.0);
/// let paint = ui.end_frame();
/// assert_eq!(paint.len(), 2);
/// ```
pub struct Ui {
    pub(crate) tree: Tree,
    pub(crate) root: NodeId,
    pub(crate) pass: Pass,
    screen: Rect,
    /// Stack of enclosing containers; `node()` attaches under the top.
    pub(crate) parents: Vec<NodeId>,
    /// Per-key call counts for the current pass, reset at the pass flip.
    occurrences: HashMap<String, usize>,
    /// Ids claimed so far in the current pass (root included), reset at the
    /// pass flip. Keeps literal keys from colliding with generated ids.
    claimed: HashSet<String>,
    /// Identifier to arena handle, spanning both passes of the frame.
    ids: HashMap<String, NodeId>,
}

impl Ui {
    pub fn new() -> Self {
        let mut ui = Self {
            tree: Tree::new(),
            root: NodeId(0),
            pass: Pass::Build,
            screen: Rect::ZERO,
            parents: Vec::new(),
            occurrences: HashMap::new(),
            claimed: HashSet::new(),
            ids: HashMap::new(),
        };
        ui.begin_frame(Rect::ZERO);
        ui
    }

    /// Start a frame: discard last frame's tree, allocate a fresh root
    /// covering `screen`, and enter the Build pass.
    pub fn begin_frame(&mut self, screen: Rect) {
        self.tree.clear();
        self.parents.clear();
        self.occurrences.clear();
        self.claimed.clear();
        self.ids.clear();

        self.root = self.tree.alloc(ROOT_ID, None);
        self.tree.node_mut(self.root).rect = screen;
        self.ids.insert(ROOT_ID.to_string(), self.root);
        self.claimed.insert(ROOT_ID.to_string());
        self.screen = screen;
        self.pass = Pass::Build;
    }

    pub fn pass(&self) -> Pass {
        self.pass
    }

    pub fn screen(&self) -> Rect {
        self.screen
    }

    /// Read access to the frame's tree, for resolution queries.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Handle to the implicit root node.
    pub fn root(&mut self) -> NodeRef<'_> {
        let root = self.root;
        NodeRef::new(self, root)
    }

    // =========================================================================
    // Node identity
    // =========================================================================

    /// Derive the frame identifier for the next call with `key`: the key
    /// itself the first time, then "key#1", "key#2" and so on.
    fn frame_id(&mut self, key: &str) -> String {
        let count = self.occurrences.entry(key.to_string()).or_insert(0);
        let id = if *count == 0 {
            key.to_string()
        } else {
            format!("{key}#{count}")
        };
        *count += 1;
        id
    }

    /// Declare (Build) or address (Render) a node under the current parent.
    ///
    /// Every call consumes one occurrence of `key`, in both passes alike: a
    /// loop body calling `node("item")` three times owns three nodes. To
    /// read and then mutate the same node within a pass, hold the returned
    /// handle instead of calling again:
    ///
    /// ```
    /// # use imflex::{Rect, Ui};
    /// # let mut ui = Ui::new();
    /// # ui.begin_frame(Rect::new(0.0, 0.0, 100.0, 100.0));
    /// let item = ui.node("item").width(40.0);
    /// let rect = item.rect();
    /// # assert_eq!(rect, Rect::ZERO); // final only after calculate_layout
    /// ```
    ///
    /// During Render a miss means the call sequence diverged between the
    /// passes; the node is recreated with default style so the frame can
    /// finish, and a warning records the divergence.
    pub fn node(&mut self, key: &str) -> NodeRef<'_> {
        let mut id = self.frame_id(key);
        // A literal key like "item#1" can collide with a generated id; keep
        // counting until the id is free. The claimed set evolves identically
        // in both passes, so the disambiguation is stable across the flip.
        while !self.claimed.insert(id.clone()) {
            warn!(id = %id, "node id collides with a generated one, disambiguating");
            id = self.frame_id(key);
        }
        let parent = self.parents.last().copied().unwrap_or(self.root);

        let node_id = match self.ids.get(&id) {
            Some(&existing) => existing,
            None => {
                if self.pass == Pass::Render {
                    warn!(id = %id, "node missing during render pass, recreating");
                }
                let node_id = self.tree.alloc(id.clone(), Some(parent));
                self.ids.insert(id, node_id);
                node_id
            }
        };
        NodeRef::new(self, node_id)
    }

    /// Arena handle of the node carrying `id`, if it exists this frame.
    pub fn get_id(&self, id: &str) -> Result<NodeId, TreeError> {
        self.ids
            .get(id)
            .copied()
            .ok_or_else(|| TreeError::NodeNotFound { id: id.to_string() })
    }

    /// The node carrying `id`, if it exists this frame.
    pub fn get(&self, id: &str) -> Result<&Node, TreeError> {
        self.get_id(id).map(|node_id| self.tree.node(node_id))
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Solve all rectangles and flip to the Render pass.
    ///
    /// Called exactly once per frame, between the two runs of the UI code.
    /// Occurrence counters restart so the Render pass re-derives the same
    /// identifiers the Build pass produced.
    pub fn calculate_layout(&mut self) {
        layout::solve(&mut self.tree, self.root);
        self.pass = Pass::Render;
        self.occurrences.clear();
        self.claimed.clear();
        self.claimed.insert(ROOT_ID.to_string());
        self.parents.clear();
    }

    /// Flatten the tree into paint order: every node with its resolved
    /// z-index, clip flag, scroll displacement and draw list, sorted by z
    /// (stable, so tree order breaks ties within a layer).
    pub fn paint_list(&self) -> Vec<PaintNode> {
        let mut list = Vec::new();
        self.collect_paint(self.root, &mut list);
        list.sort_by_key(|paint| paint.z);
        list
    }

    /// Finish the frame and hand the renderer its input.
    pub fn end_frame(&mut self) -> Vec<PaintNode> {
        self.paint_list()
    }

    fn collect_paint(&self, node: NodeId, out: &mut Vec<PaintNode>) {
        let n = self.tree.node(node);
        out.push(PaintNode {
            id: n.id().to_string(),
            z: self.tree.resolve_z_index(node),
            clip: self.tree.resolve_clip(node),
            scroll: self.tree.cumulative_scroll_offset(node),
            rect: n.rect,
            commands: n.draw_list.clone(),
        });
        for &child in n.children() {
            self.collect_paint(child, out);
        }
    }
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}
