// ABOUTME: Interactive divider-drag state machine.
// ABOUTME: One session at a time, scoped to a single split node.

use crate::tree::{LayoutError, LayoutTree, NodeId};

/// Transient record of an in-flight divider drag.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    split: NodeId,
    start_coord: f32,
    start_ratio: f32,
}

/// Idle/Dragging state machine that redistributes space between the
/// two children of one split node.
///
/// The controller never touches any node other than the one recorded
/// at drag start. Hosts are expected to feed it pointer events from a
/// globally scoped listener so the session ends on pointer-up even
/// when the pointer has left the divider element.
#[derive(Debug, Default)]
pub struct ResizeController {
    session: Option<DragSession>,
}

impl ResizeController {
    pub fn new() -> Self {
        Self { session: None }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The split node currently being dragged, if any.
    pub fn active_split(&self) -> Option<NodeId> {
        self.session.as_ref().map(|s| s.split)
    }

    /// Pointer-down on a divider: record the split, the pointer's
    /// coordinate along the split axis, and the ratio at drag start.
    ///
    /// A pointer-down while a session is live force-ends the previous
    /// session; overlapping sessions are a host bug we guard against.
    pub fn begin_drag(
        &mut self,
        tree: &LayoutTree,
        split: NodeId,
        axis_coord: f32,
    ) -> Result<(), LayoutError> {
        if let Some(previous) = self.session.take() {
            tracing::warn!(
                "Drag started on {} while {} was still active; ending previous session",
                split,
                previous.split
            );
        }
        let start_ratio = tree.ratio(split)?;
        self.session = Some(DragSession {
            split,
            start_coord: axis_coord,
            start_ratio,
        });
        Ok(())
    }

    /// Pointer-move: recompute and commit the ratio in one step.
    ///
    /// `extent` is the container's size along the split axis. Returns
    /// the ratio actually stored, or `None` when no session is live
    /// (global mouse-move listeners fire regardless of drag state).
    pub fn update_drag(
        &mut self,
        tree: &mut LayoutTree,
        axis_coord: f32,
        extent: f32,
    ) -> Result<Option<f32>, LayoutError> {
        let Some(session) = self.session else {
            return Ok(None);
        };
        if extent <= 0.0 {
            return Err(LayoutError::InvalidSelection(format!(
                "container extent must be positive, got {extent}"
            )));
        }
        let delta = axis_coord - session.start_coord;
        let ratio = tree.set_ratio(session.split, session.start_ratio + delta / extent)?;
        Ok(Some(ratio))
    }

    /// Pointer-up: discard the session record. Idempotent.
    pub fn end_drag(&mut self) -> Option<NodeId> {
        self.session.take().map(|s| s.split)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Orientation, Position};
    use crate::walk::split_container;
    use flexdeck_core::Rect;
    use flexdeck_widgets::WidgetRegistry;

    fn tree_with_split() -> (LayoutTree, NodeId) {
        let registry = WidgetRegistry::with_builtins();
        let mut tree = LayoutTree::new();
        let root = tree.leaves()[0].id;
        tree.split(
            root,
            Orientation::Vertical,
            Position::Right,
            "Clock",
            &registry,
        )
        .unwrap();
        let split = tree.splits()[0];
        (tree, split)
    }

    #[test]
    fn drag_by_fifth_of_extent_moves_ratio_to_point_seven() {
        let (mut tree, split) = tree_with_split();
        let mut controller = ResizeController::new();

        controller.begin_drag(&tree, split, 500.0).unwrap();
        let ratio = controller
            .update_drag(&mut tree, 700.0, 1000.0)
            .unwrap()
            .unwrap();
        assert!((ratio - 0.7).abs() < 1e-4);

        controller.end_drag();
        assert!((tree.ratio(split).unwrap() - 0.7).abs() < 1e-4);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn ratio_is_monotonic_and_clamped_across_a_session() {
        let (mut tree, split) = tree_with_split();
        let mut controller = ResizeController::new();
        controller.begin_drag(&tree, split, 0.0).unwrap();

        let mut last = tree.ratio(split).unwrap();
        for coord in [50.0, 120.0, 300.0, 600.0, 2000.0] {
            let ratio = controller
                .update_drag(&mut tree, coord, 1000.0)
                .unwrap()
                .unwrap();
            assert!(ratio >= last);
            assert!(ratio <= 0.9);
            last = ratio;
        }
        assert!((last - 0.9).abs() < 1e-4);
    }

    #[test]
    fn moves_are_relative_to_drag_start_not_each_other() {
        let (mut tree, split) = tree_with_split();
        let mut controller = ResizeController::new();
        controller.begin_drag(&tree, split, 400.0).unwrap();

        controller.update_drag(&mut tree, 500.0, 1000.0).unwrap();
        // jumping back to the start coordinate restores the start ratio
        let ratio = controller
            .update_drag(&mut tree, 400.0, 1000.0)
            .unwrap()
            .unwrap();
        assert!((ratio - 0.5).abs() < 1e-4);
    }

    #[test]
    fn update_without_session_is_a_no_op() {
        let (mut tree, split) = tree_with_split();
        let mut controller = ResizeController::new();
        assert!(controller
            .update_drag(&mut tree, 123.0, 1000.0)
            .unwrap()
            .is_none());
        assert!((tree.ratio(split).unwrap() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn begin_on_unknown_split_fails_and_stays_idle() {
        let (tree, _) = tree_with_split();
        let mut controller = ResizeController::new();
        let result = controller.begin_drag(&tree, NodeId(777), 0.0);
        assert!(matches!(result, Err(LayoutError::SplitNotFound(_))));
        assert!(!controller.is_dragging());
    }

    #[test]
    fn second_begin_replaces_the_active_session() {
        let registry = WidgetRegistry::with_builtins();
        let (mut tree, first_split) = tree_with_split();
        let leaf = tree.leaves()[0].id;
        tree.split(
            leaf,
            Orientation::Horizontal,
            Position::Bottom,
            "Calendar",
            &registry,
        )
        .unwrap();
        let second_split = tree
            .splits()
            .into_iter()
            .find(|s| *s != first_split)
            .unwrap();

        let mut controller = ResizeController::new();
        controller.begin_drag(&tree, first_split, 0.0).unwrap();
        controller.begin_drag(&tree, second_split, 0.0).unwrap();
        assert_eq!(controller.active_split(), Some(second_split));

        // the new session only writes the node it targets
        controller.update_drag(&mut tree, 100.0, 1000.0).unwrap();
        assert!((tree.ratio(first_split).unwrap() - 0.5).abs() < 1e-4);
        assert!((tree.ratio(second_split).unwrap() - 0.6).abs() < 1e-4);
    }

    #[test]
    fn nested_divider_tracks_pointer_against_its_own_container() {
        let registry = WidgetRegistry::with_builtins();
        let mut tree = LayoutTree::new();
        let root = tree.leaves()[0].id;
        let right = tree
            .split(
                root,
                Orientation::Vertical,
                Position::Right,
                "Clock",
                &registry,
            )
            .unwrap();
        tree.split(
            right,
            Orientation::Vertical,
            Position::Right,
            "Calendar",
            &registry,
        )
        .unwrap();
        let inner = tree.splits()[1];

        // the inner split only owns the right half of the workspace
        let workspace = Rect::new(0.0, 0.0, 1200.0, 800.0);
        let container = split_container(&tree, workspace, 0.0, inner).unwrap();
        assert!((container.width - 600.0).abs() < 1e-4);

        // moving the pointer 20% of the inner container yields 0.7,
        // which dividing by the workspace width would not
        let mut controller = ResizeController::new();
        controller.begin_drag(&tree, inner, container.x).unwrap();
        let ratio = controller
            .update_drag(
                &mut tree,
                container.x + container.width * 0.2,
                container.width,
            )
            .unwrap()
            .unwrap();
        assert!((ratio - 0.7).abs() < 1e-4);
    }

    #[test]
    fn zero_extent_is_rejected() {
        let (mut tree, split) = tree_with_split();
        let mut controller = ResizeController::new();
        controller.begin_drag(&tree, split, 0.0).unwrap();
        assert!(controller.update_drag(&mut tree, 10.0, 0.0).is_err());
    }

    #[test]
    fn end_drag_is_idempotent() {
        let (tree, split) = tree_with_split();
        let mut controller = ResizeController::new();
        controller.begin_drag(&tree, split, 0.0).unwrap();
        assert_eq!(controller.end_drag(), Some(split));
        assert_eq!(controller.end_drag(), None);
    }
}
