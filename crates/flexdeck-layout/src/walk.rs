// ABOUTME: Pure render walk mapping the pane tree onto concrete rectangles.
// ABOUTME: Deterministic and gap-free for arbitrary nesting depth.

use flexdeck_core::Rect;

use crate::tree::{LayoutTree, Node, NodeId, Orientation};

/// One pane as the presentation layer should draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct PaneGeometry {
    pub id: NodeId,
    pub widget: Option<String>,
    pub rect: Rect,
}

/// Map the tree onto `root` and return leaf rectangles in child order.
///
/// `padding` is the fixed gap between siblings, subtracted from the
/// split axis before the ratio is applied; sibling extents therefore
/// sum to the parent's extent minus padding, with no overlap. Pure:
/// identical inputs always produce identical output.
pub fn walk(tree: &LayoutTree, root: Rect, padding: f32) -> Vec<PaneGeometry> {
    let mut out = Vec::new();
    walk_node(tree.root(), root, padding, &mut out);
    out
}

/// Rectangle allotted to `split` when the tree is mapped onto `root`.
///
/// This is the container a divider drag is measured against: the
/// ratio delta is pointer movement divided by this rect's extent
/// along the split axis, not the workspace's.
pub fn split_container(
    tree: &LayoutTree,
    root: Rect,
    padding: f32,
    split: NodeId,
) -> Option<Rect> {
    container_of(tree.root(), root, padding, split)
}

fn container_of(node: &Node, rect: Rect, padding: f32, target: NodeId) -> Option<Rect> {
    match node {
        Node::Leaf { .. } => None,
        Node::Split {
            id,
            orientation,
            ratio,
            first,
            second,
        } => {
            if *id == target {
                return Some(rect);
            }
            let (first_rect, second_rect) = split_rect(rect, *orientation, *ratio, padding);
            container_of(first, first_rect, padding, target)
                .or_else(|| container_of(second, second_rect, padding, target))
        }
    }
}

fn walk_node(node: &Node, rect: Rect, padding: f32, out: &mut Vec<PaneGeometry>) {
    match node {
        Node::Leaf { id, widget } => out.push(PaneGeometry {
            id: *id,
            widget: widget.clone(),
            rect,
        }),
        Node::Split {
            orientation,
            ratio,
            first,
            second,
            ..
        } => {
            let (first_rect, second_rect) = split_rect(rect, *orientation, *ratio, padding);
            walk_node(first, first_rect, padding, out);
            walk_node(second, second_rect, padding, out);
        }
    }
}

fn split_rect(rect: Rect, orientation: Orientation, ratio: f32, padding: f32) -> (Rect, Rect) {
    match orientation {
        // Horizontal divider: children stacked top/bottom.
        Orientation::Horizontal => {
            let usable = (rect.height - padding).max(0.0);
            let first_height = usable * ratio;
            (
                Rect::new(rect.x, rect.y, rect.width, first_height),
                Rect::new(
                    rect.x,
                    rect.y + first_height + padding,
                    rect.width,
                    usable - first_height,
                ),
            )
        }
        // Vertical divider: children arranged left/right.
        Orientation::Vertical => {
            let usable = (rect.width - padding).max(0.0);
            let first_width = usable * ratio;
            (
                Rect::new(rect.x, rect.y, first_width, rect.height),
                Rect::new(
                    rect.x + first_width + padding,
                    rect.y,
                    usable - first_width,
                    rect.height,
                ),
            )
        }
    }
}
