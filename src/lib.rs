//! # imflex
//!
//! Immediate-mode flexbox layout engine: a frame-scoped node tree, a
//! constraint solver, and a two-pass protocol for declarative UI code.
//!
//! The same UI function runs twice per frame. During the **Build** pass
//! every [`NodeRef`] mutator is live and records sizing, spacing, flow and
//! scope attributes onto a freshly rebuilt tree. [`Ui::calculate_layout`]
//! then solves every rectangle in a single sweep. During the **Render**
//! pass the mutators are inert, geometry reads return final values, and
//! draw commands may be emitted. [`Ui::end_frame`] flattens the tree into
//! a z-sorted [`PaintNode`] list for the renderer.
//!
//! ```
//! use imflex::{Color, Direction, DrawCommand, Rect, Ui};
//!
//! fn app(ui: &mut Ui) {
//!     ui.node("toolbar")
//!         .height(40.0)
//!         .expand_width(1.0)
//!         .direction(Direction::Horizontal);
//!     ui.node("body").expand(1.0, 1.0).children(|ui| {
//!         let card = ui.node("card").size(200.0, 120.0);
//!         let rect = card.rect();
//!         card.draw(DrawCommand::Rect { rect, color: Color::GRAY });
//!     });
//! }
//!
//! let mut ui = Ui::new();
//! ui.begin_frame(Rect::new(0.0, 0.0, 800.0, 600.0));
//! app(&mut ui);
//! ui.calculate_layout();
//! app(&mut ui);
//! let paint = ui.end_frame();
//! assert!(paint.iter().any(|p| !p.commands.is_empty()));
//! ```
//!
//! Attributes that cascade (text color and size, fonts, z-index, clipping,
//! scroll membership) live in per-node [`Scope`]s and resolve up the parent
//! chain, so they are set once at a subtree root and inherited below.

pub mod commands;
pub mod draw;
pub mod error;
pub mod frame;
pub mod layout;
pub mod scope;
pub mod style;
pub mod tree;
pub mod types;

pub use commands::NodeRef;
pub use draw::{DrawCommand, PaintNode};
pub use error::TreeError;
pub use frame::{Ui, ROOT_ID};
pub use layout::{solve, MIN_NODE_SIZE};
pub use scope::{Scope, DEFAULT_TEXT_SIZE, DEFAULT_Z_INDEX};
pub use style::{Direction, Expand, Style, UNSET};
pub use tree::{Node, NodeId, Tree};
pub use types::{Axis, Color, Edges, Pass, Rect, Vec2};
