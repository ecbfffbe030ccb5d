// ABOUTME: Recursive split-pane layout engine.
// ABOUTME: Owns the pane tree, split mutation, divider drags, and geometry.

mod panel;
mod resize;
mod tree;
mod walk;

pub use panel::SidePanel;
pub use resize::ResizeController;
pub use tree::{LayoutError, LayoutTree, LeafInfo, Node, NodeId, Orientation, Position};
pub use walk::{split_container, walk, PaneGeometry};
