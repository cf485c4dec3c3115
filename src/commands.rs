//! Command API - pass-gated fluent mutation of one node.
//!
//! Every mutator follows one contract: if the frame's current pass is not
//! Build, the call is a no-op and the same node reference is returned
//! unchanged. The two-pass protocol depends on this - the same declarative
//! code runs twice per frame, but only the first run may affect layout.
//! Draw emission is gated the opposite way (Render only) so the doubled call
//! graph never double-emits.
//!
//! Overloads from the fluent surface map to separate methods: `margin(v)`
//! sets all four edges, `margin_xy(x, y)` sets horizontal/vertical pairs,
//! `margin_trbl(t, r, b, l)` sets edges positionally. Later calls fully
//! overwrite earlier ones.

use crate::draw::DrawCommand;
use crate::frame::Ui;
use crate::scope::Scope;
use crate::style::{Direction, Expand};
use crate::tree::{Node, NodeId};
use crate::types::{Color, Edges, Pass, Rect, Vec2};

/// Fluent handle to one node within the current frame.
///
/// Obtained from [`Ui::node`] / [`Ui::root`]; mutators consume and return
/// the handle for chaining.
pub struct NodeRef<'ui> {
    ui: &'ui mut Ui,
    id: NodeId,
}

impl<'ui> NodeRef<'ui> {
    pub(crate) fn new(ui: &'ui mut Ui, id: NodeId) -> Self {
        Self { ui, id }
    }

    /// Arena handle of this node, valid for the current frame.
    pub fn node_id(&self) -> NodeId {
        self.id
    }

    /// The node's frame-stable identifier.
    pub fn id(&self) -> &str {
        self.ui.tree.node(self.id).id()
    }

    /// Run `mutate` against the node during the Build pass only.
    fn on_build(self, mutate: impl FnOnce(&mut Node)) -> Self {
        if self.ui.pass == Pass::Build {
            mutate(self.ui.tree.node_mut(self.id));
        }
        self
    }

    /// Run `mutate` against the node's scope during the Build pass only.
    fn on_build_scope(self, mutate: impl FnOnce(&mut Scope)) -> Self {
        if self.ui.pass == Pass::Build {
            mutate(self.ui.tree.scope_mut(self.id));
        }
        self
    }

    // =========================================================================
    // Sizing
    // =========================================================================

    /// Request a fixed width in pixels.
    pub fn width(self, width: f32) -> Self {
        self.on_build(|node| node.style.width = width)
    }

    /// Request a fixed height in pixels.
    pub fn height(self, height: f32) -> Self {
        self.on_build(|node| node.style.height = height)
    }

    /// Request fixed width and height in one call.
    pub fn size(self, width: f32, height: f32) -> Self {
        self.on_build(|node| {
            node.style.width = width;
            node.style.height = height;
        })
    }

    /// Expand in both axes, claiming the given shares of leftover space
    /// relative to expanding siblings.
    pub fn expand(self, w_pct: f32, h_pct: f32) -> Self {
        self.on_build(|node| {
            node.style.expand = Expand::ALL;
            node.style.expand_w_pct = w_pct;
            node.style.expand_h_pct = h_pct;
        })
    }

    /// Expand horizontally only.
    pub fn expand_width(self, pct: f32) -> Self {
        self.on_build(|node| {
            node.style.expand |= Expand::WIDTH;
            node.style.expand_w_pct = pct;
        })
    }

    /// Expand vertically only.
    pub fn expand_height(self, pct: f32) -> Self {
        self.on_build(|node| {
            node.style.expand |= Expand::HEIGHT;
            node.style.expand_h_pct = pct;
        })
    }

    // =========================================================================
    // Spacing
    // =========================================================================

    /// Uniform margin on all four edges.
    pub fn margin(self, value: f32) -> Self {
        self.on_build(|node| {
            node.style.margin = Edges::uniform(value);
            node.style.has_specific_margins = false;
        })
    }

    /// Margin as (horizontal, vertical) pairs.
    pub fn margin_xy(self, x: f32, y: f32) -> Self {
        self.on_build(|node| {
            node.style.margin = Edges::xy(x, y);
            node.style.has_specific_margins = true;
        })
    }

    /// Margin per edge, positionally (top, right, bottom, left).
    pub fn margin_trbl(self, top: f32, right: f32, bottom: f32, left: f32) -> Self {
        self.on_build(|node| {
            node.style.margin = Edges::trbl(top, right, bottom, left);
            node.style.has_specific_margins = true;
        })
    }

    /// Uniform padding on all four edges.
    pub fn padding(self, value: f32) -> Self {
        self.on_build(|node| node.style.padding = Edges::uniform(value))
    }

    /// Padding as (horizontal, vertical) pairs.
    pub fn padding_xy(self, x: f32, y: f32) -> Self {
        self.on_build(|node| node.style.padding = Edges::xy(x, y))
    }

    /// Padding per edge, positionally (top, right, bottom, left).
    pub fn padding_trbl(self, top: f32, right: f32, bottom: f32, left: f32) -> Self {
        self.on_build(|node| node.style.padding = Edges::trbl(top, right, bottom, left))
    }

    /// Inter-child spacing along the main axis.
    pub fn gap(self, gap: f32) -> Self {
        self.on_build(|node| node.style.gap = gap)
    }

    // =========================================================================
    // Flow
    // =========================================================================

    /// Main axis along which children are distributed.
    pub fn direction(self, direction: Direction) -> Self {
        self.on_build(|node| node.style.direction = direction)
    }

    /// Collective child alignment factors in [0,1] per axis
    /// (0 = start, 0.5 = center, 1 = end).
    pub fn align_content(self, x: f32, y: f32) -> Self {
        self.on_build(|node| {
            node.style.align_content_x = x;
            node.style.align_content_y = y;
        })
    }

    /// Reserved: stored in the style but not yet consumed by distribution.
    pub fn align_self(self, factor: f32) -> Self {
        self.on_build(|node| node.style.align_self = factor)
    }

    /// Reserved: stored in the style; the current algorithm does not wrap.
    pub fn wrap(self, wrap: bool) -> Self {
        self.on_build(|node| node.style.wrap = wrap)
    }

    // =========================================================================
    // Manual position
    // =========================================================================

    /// Absolute x override, written straight to the rectangle and honored
    /// through layout (the calculation leaves this axis's position alone).
    pub fn left(self, x: f32) -> Self {
        self.on_build(|node| {
            node.rect.x = x;
            node.manual_x = true;
        })
    }

    /// Absolute y override, written straight to the rectangle.
    pub fn top(self, y: f32) -> Self {
        self.on_build(|node| {
            node.rect.y = y;
            node.manual_y = true;
        })
    }

    // =========================================================================
    // Scope attributes
    // =========================================================================

    /// Text color for this subtree.
    pub fn text_color(self, color: Color) -> Self {
        self.on_build_scope(|scope| scope.text_color = Some(color))
    }

    /// Text size for this subtree.
    pub fn text_size(self, size: f32) -> Self {
        self.on_build_scope(|scope| scope.text_size = Some(size))
    }

    /// Text font for this subtree.
    pub fn text_font(self, font: &str) -> Self {
        self.on_build_scope(|scope| scope.text_font = Some(font.to_string()))
    }

    /// Icon font for this subtree.
    pub fn icon_font(self, font: &str) -> Self {
        self.on_build_scope(|scope| scope.icon_font = Some(font.to_string()))
    }

    /// Z-index for this subtree (lower paints first).
    pub fn z_index(self, z: i32) -> Self {
        self.on_build_scope(|scope| scope.z_index = Some(z))
    }

    /// Whether this subtree clips its content to the node's rect.
    pub fn clip(self, clip: bool) -> Self {
        self.on_build_scope(|scope| scope.clip = Some(clip))
    }

    /// Mark this node a scroll container with the given identity.
    pub fn scroll_container(self, id: &str) -> Self {
        self.on_build_scope(|scope| {
            scope.scroll_container = Some(id.to_string());
            scope.is_scroll_container = true;
        })
    }

    /// Local scroll offset, subtracted from descendant positions after
    /// layout (requires [`Self::scroll_container`]).
    pub fn scroll_offset(self, offset: Vec2) -> Self {
        self.on_build_scope(|scope| scope.scroll_offset = Some(offset))
    }

    // =========================================================================
    // Children
    // =========================================================================

    /// Declare children: nodes created inside `body` attach to this node.
    /// Runs in both passes (structure, not mutation).
    pub fn children(self, body: impl FnOnce(&mut Ui)) -> Self {
        self.ui.parents.push(self.id);
        body(self.ui);
        self.ui.parents.pop();
        self
    }

    // =========================================================================
    // Draw emission (Render pass)
    // =========================================================================

    /// Append a draw command. Inert outside the Render pass so the doubled
    /// call graph never emits twice.
    pub fn draw(self, command: DrawCommand) -> Self {
        if self.ui.pass == Pass::Render {
            self.ui.tree.node_mut(self.id).draw_list.push(command);
        }
        self
    }

    /// Replace the node's entire draw list. Render pass only.
    pub fn set_draw_list(self, commands: Vec<DrawCommand>) -> Self {
        if self.ui.pass == Pass::Render {
            self.ui.tree.node_mut(self.id).draw_list = commands;
        }
        self
    }

    // =========================================================================
    // Geometry reads
    // =========================================================================

    /// Computed rectangle (final after `calculate_layout`).
    pub fn rect(&self) -> Rect {
        self.ui.tree.node(self.id).rect
    }

    /// Rect shrunk by padding.
    pub fn inner_rect(&self) -> Rect {
        self.ui.tree.node(self.id).inner_rect()
    }

    /// Rect grown by margin.
    pub fn outer_rect(&self) -> Rect {
        self.ui.tree.node(self.id).outer_rect()
    }

    /// Midpoint of the rect.
    pub fn center(&self) -> Vec2 {
        self.ui.tree.node(self.id).center()
    }

    /// Copy of the node's style, for introspection.
    pub fn style(&self) -> crate::style::Style {
        self.ui.tree.node(self.id).style
    }

    // =========================================================================
    // Scope reads (cascade-resolved)
    // =========================================================================

    pub fn resolved_text_color(&self) -> Color {
        self.ui.tree.resolve_text_color(self.id)
    }

    pub fn resolved_text_size(&self) -> f32 {
        self.ui.tree.resolve_text_size(self.id)
    }

    pub fn resolved_text_font(&self) -> Option<String> {
        self.ui.tree.resolve_text_font(self.id)
    }

    pub fn resolved_icon_font(&self) -> Option<String> {
        self.ui.tree.resolve_icon_font(self.id)
    }

    pub fn resolved_z_index(&self) -> i32 {
        self.ui.tree.resolve_z_index(self.id)
    }

    pub fn resolved_clip(&self) -> bool {
        self.ui.tree.resolve_clip(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ui() -> Ui {
        let mut ui = Ui::new();
        ui.begin_frame(Rect::new(0.0, 0.0, 800.0, 600.0));
        ui
    }

    #[test]
    fn test_mutators_apply_during_build() {
        let mut ui = ui();
        ui.node("a")
            .width(100.0)
            .height(80.0)
            .gap(4.0)
            .direction(Direction::Horizontal);

        let style = ui.get("a").unwrap().style;
        assert_eq!(style.width, 100.0);
        assert_eq!(style.height, 80.0);
        assert_eq!(style.gap, 4.0);
        assert_eq!(style.direction, Direction::Horizontal);
    }

    #[test]
    fn test_mutators_are_inert_outside_build() {
        let mut ui = ui();
        ui.node("a").width(100.0);
        ui.calculate_layout();

        // Same declarative code, second pass: must not touch the style and
        // must still hand back a usable reference.
        let rect = ui.node("a").width(500.0).margin(9.0).rect();
        assert_eq!(rect.w, 100.0);

        let style = ui.get("a").unwrap().style;
        assert_eq!(style.width, 100.0);
        assert_eq!(style.margin, Edges::ZERO);
    }

    #[test]
    fn test_margin_overload_mapping() {
        let mut ui = ui();
        ui.node("uniform").margin(3.0);
        ui.node("pairs").margin_xy(2.0, 7.0);
        ui.node("edges").margin_trbl(1.0, 2.0, 3.0, 4.0);

        let uniform = ui.get("uniform").unwrap().style;
        assert_eq!(uniform.margin, Edges::uniform(3.0));
        assert!(!uniform.has_specific_margins);

        // Two-value: horizontal → right/left, vertical → top/bottom.
        let pairs = ui.get("pairs").unwrap().style;
        assert_eq!(pairs.margin, Edges::trbl(7.0, 2.0, 7.0, 2.0));
        assert!(pairs.has_specific_margins);

        // Four-value: positional (top, right, bottom, left).
        let edges = ui.get("edges").unwrap().style;
        assert_eq!(edges.margin, Edges::trbl(1.0, 2.0, 3.0, 4.0));
        assert!(edges.has_specific_margins);
    }

    #[test]
    fn test_padding_overload_mapping() {
        let mut ui = ui();
        ui.node("a").padding_xy(2.0, 7.0);
        ui.node("b").padding_trbl(1.0, 2.0, 3.0, 4.0);

        assert_eq!(ui.get("a").unwrap().style.padding, Edges::trbl(7.0, 2.0, 7.0, 2.0));
        assert_eq!(ui.get("b").unwrap().style.padding, Edges::trbl(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_later_calls_overwrite() {
        let mut ui = ui();
        ui.node("a").margin_trbl(1.0, 2.0, 3.0, 4.0).margin(5.0);

        let style = ui.get("a").unwrap().style;
        assert_eq!(style.margin, Edges::uniform(5.0));
        assert!(!style.has_specific_margins);
    }

    #[test]
    fn test_expand_flags_and_percentages() {
        let mut ui = ui();
        ui.node("both").expand(0.5, 0.25);
        ui.node("w").expand_width(2.0);
        ui.node("h").expand_height(1.0);

        let both = ui.get("both").unwrap().style;
        assert_eq!(both.expand, Expand::ALL);
        assert_eq!(both.expand_w_pct, 0.5);
        assert_eq!(both.expand_h_pct, 0.25);

        let w = ui.get("w").unwrap().style;
        assert_eq!(w.expand, Expand::WIDTH);
        assert_eq!(w.expand_w_pct, 2.0);
        // The other share keeps its default even while that axis is off.
        assert_eq!(w.expand_h_pct, 1.0);

        assert_eq!(ui.get("h").unwrap().style.expand, Expand::HEIGHT);
    }

    #[test]
    fn test_left_top_write_rect_immediately() {
        let mut ui = ui();
        let rect = ui.node("a").left(40.0).top(12.0).rect();
        assert_eq!(rect.x, 40.0);
        assert_eq!(rect.y, 12.0);
    }

    #[test]
    fn test_draw_is_inert_during_build() {
        let mut ui = ui();
        ui.node("a").width(50.0).draw(DrawCommand::Rect {
            rect: Rect::ZERO,
            color: Color::RED,
        });
        assert!(ui.get("a").unwrap().draw_list.is_empty());

        ui.calculate_layout();
        ui.node("a").draw(DrawCommand::Rect {
            rect: Rect::ZERO,
            color: Color::RED,
        });
        assert_eq!(ui.get("a").unwrap().draw_list.len(), 1);
    }

    #[test]
    fn test_scope_setters_cascade_to_children() {
        let mut ui = ui();
        ui.node("panel").z_index(3).text_color(Color::BLUE).children(|ui| {
            ui.node("label");
        });

        let panel_id = ui.get_id("panel").unwrap();
        let label_id = ui.get_id("label").unwrap();
        assert_eq!(ui.tree().resolve_z_index(label_id), 3);
        assert_eq!(ui.tree().resolve_text_color(label_id), Color::BLUE);
        assert_eq!(ui.tree().resolve_z_index(panel_id), 3);
    }

    #[test]
    fn test_scroll_container_marks_scope() {
        let mut ui = ui();
        ui.node("list")
            .scroll_container("list")
            .scroll_offset(Vec2::new(0.0, 25.0));

        let id = ui.get_id("list").unwrap();
        let scope = ui.tree().scope(id);
        assert!(scope.is_scroll_container);
        assert_eq!(scope.scroll_offset, Some(Vec2::new(0.0, 25.0)));
        assert_eq!(scope.scroll_container.as_deref(), Some("list"));
    }
}
