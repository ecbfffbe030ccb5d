// ABOUTME: Binary tree structure for widget pane layout.
// ABOUTME: Supports splitting a leaf in a chosen direction and ratio updates.

use std::collections::HashSet;
use std::fmt;

use flexdeck_core::LayoutSettings;
use flexdeck_widgets::WidgetRegistry;

/// Unique node identifier. Monotonically increasing, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// Axis of a split's divider line.
///
/// Horizontal means the divider is a horizontal line, so the children
/// stack top/bottom. Vertical means a vertical divider, children
/// side by side left/right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Which slot the newly created leaf lands in when splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Top,
    Bottom,
    Left,
    Right,
}

impl Position {
    /// The split axis this position implies.
    pub fn orientation(self) -> Orientation {
        match self {
            Position::Top | Position::Bottom => Orientation::Horizontal,
            Position::Left | Position::Right => Orientation::Vertical,
        }
    }

    /// True when the new leaf goes into the first child slot.
    pub fn leads(self) -> bool {
        matches!(self, Position::Top | Position::Left)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf {
        id: NodeId,
        /// Registry key of the bound widget; `None` renders a placeholder.
        widget: Option<String>,
    },
    Split {
        id: NodeId,
        orientation: Orientation,
        /// Fraction of the split's extent given to `first`.
        ratio: f32,
        first: Box<Node>,
        second: Box<Node>,
    },
}

impl Node {
    pub fn id(&self) -> NodeId {
        match self {
            Node::Leaf { id, .. } | Node::Split { id, .. } => *id,
        }
    }
}

/// A leaf as reported to selection UIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafInfo {
    pub id: NodeId,
    pub widget: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("No leaf with id {0}")]
    LeafNotFound(NodeId),

    #[error("No split with id {0}")]
    SplitNotFound(NodeId),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Layout invariant violated: {0}")]
    Invariant(String),
}

#[derive(Debug)]
pub struct LayoutTree {
    root: Node,
    next_id: u64,
    ratio_min: f32,
    ratio_max: f32,
}

impl LayoutTree {
    /// Tree with a single unbound root leaf and default ratio bounds.
    pub fn new() -> Self {
        Self::with_settings(&LayoutSettings::default())
    }

    pub fn with_settings(settings: &LayoutSettings) -> Self {
        Self {
            root: Node::Leaf {
                id: NodeId(0),
                widget: None,
            },
            next_id: 1,
            ratio_min: settings.ratio_min,
            ratio_max: settings.ratio_max,
        }
    }

    /// Bind a widget to the root leaf at construction time.
    ///
    /// The key is validated against the registry the same way `split`
    /// validates, so stored bindings always resolve at render time.
    pub fn with_root_widget(
        settings: &LayoutSettings,
        widget_key: &str,
        registry: &WidgetRegistry,
    ) -> Result<Self, LayoutError> {
        if widget_key.is_empty() {
            return Err(LayoutError::InvalidSelection(
                "widget key must not be empty".to_string(),
            ));
        }
        if !registry.has(widget_key) {
            return Err(LayoutError::InvalidSelection(format!(
                "widget key {widget_key:?} is not registered"
            )));
        }
        let mut tree = Self::with_settings(settings);
        tree.root = Node::Leaf {
            id: NodeId(0),
            widget: Some(widget_key.to_string()),
        };
        Ok(tree)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// All leaves in pre-order, first child before second.
    pub fn leaves(&self) -> Vec<LeafInfo> {
        let mut result = Vec::new();
        collect_leaves(&self.root, &mut result);
        result
    }

    /// All split node ids in pre-order (the draggable dividers).
    pub fn splits(&self) -> Vec<NodeId> {
        let mut result = Vec::new();
        collect_splits(&self.root, &mut result);
        result
    }

    pub fn clamp_ratio(&self, ratio: f32) -> f32 {
        ratio.clamp(self.ratio_min, self.ratio_max)
    }

    /// Split the given leaf, returning the new leaf's id.
    ///
    /// The original leaf keeps its id and widget binding; the new leaf
    /// is bound to `widget_key` and placed according to `position`. All
    /// validation happens before the first write, so a failed split
    /// leaves the tree untouched.
    pub fn split(
        &mut self,
        leaf: NodeId,
        orientation: Orientation,
        position: Position,
        widget_key: &str,
        registry: &WidgetRegistry,
    ) -> Result<NodeId, LayoutError> {
        if position.orientation() != orientation {
            return Err(LayoutError::InvalidSelection(format!(
                "position {position:?} does not belong to a {orientation:?} split"
            )));
        }
        if widget_key.is_empty() {
            return Err(LayoutError::InvalidSelection(
                "widget key must not be empty".to_string(),
            ));
        }
        if !registry.has(widget_key) {
            return Err(LayoutError::InvalidSelection(format!(
                "widget key {widget_key:?} is not registered"
            )));
        }
        match find_node(&self.root, leaf) {
            Some(Node::Leaf { .. }) => {}
            _ => return Err(LayoutError::LeafNotFound(leaf)),
        }

        let split_id = self.alloc_id();
        let new_leaf_id = self.alloc_id();
        let new_leaf = Node::Leaf {
            id: new_leaf_id,
            widget: Some(widget_key.to_string()),
        };

        let mut make_split = Some(move |original: Node| {
            let (first, second) = if position.leads() {
                (new_leaf, original)
            } else {
                (original, new_leaf)
            };
            Node::Split {
                id: split_id,
                orientation,
                ratio: 0.5,
                first: Box::new(first),
                second: Box::new(second),
            }
        });
        // Presence was checked above; a miss here means the tree changed
        // underneath us mid-call, which cannot happen with &mut self.
        if !replace_leaf(&mut self.root, leaf, &mut make_split) {
            return Err(LayoutError::Invariant(format!(
                "leaf {leaf} vanished between lookup and replacement"
            )));
        }

        tracing::debug!("Split leaf {} into {} + {}", leaf, split_id, new_leaf_id);
        Ok(new_leaf_id)
    }

    /// Current ratio of a split node.
    pub fn ratio(&self, split: NodeId) -> Result<f32, LayoutError> {
        match find_node(&self.root, split) {
            Some(Node::Split { ratio, .. }) => Ok(*ratio),
            _ => Err(LayoutError::SplitNotFound(split)),
        }
    }

    /// Write a split node's ratio, clamped to the configured bounds.
    /// Returns the value actually stored.
    pub fn set_ratio(&mut self, split: NodeId, ratio: f32) -> Result<f32, LayoutError> {
        let clamped = self.clamp_ratio(ratio);
        match find_ratio_mut(&mut self.root, split) {
            Some(slot) => {
                *slot = clamped;
                Ok(clamped)
            }
            None => Err(LayoutError::SplitNotFound(split)),
        }
    }

    /// Invariant sweep: unique ids, ratios within bounds.
    ///
    /// A failure here is a bug in the engine, not bad input; it is
    /// logged at error level and must not be swallowed by callers.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut seen = HashSet::new();
        if let Err(e) = check_node(&self.root, self.ratio_min, self.ratio_max, &mut seen) {
            tracing::error!("Layout invariant violated: {e}");
            return Err(e);
        }
        Ok(())
    }

    fn alloc_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_leaves(node: &Node, out: &mut Vec<LeafInfo>) {
    match node {
        Node::Leaf { id, widget } => out.push(LeafInfo {
            id: *id,
            widget: widget.clone(),
        }),
        Node::Split { first, second, .. } => {
            collect_leaves(first, out);
            collect_leaves(second, out);
        }
    }
}

fn collect_splits(node: &Node, out: &mut Vec<NodeId>) {
    if let Node::Split {
        id, first, second, ..
    } = node
    {
        out.push(*id);
        collect_splits(first, out);
        collect_splits(second, out);
    }
}

fn find_node<'a>(node: &'a Node, target: NodeId) -> Option<&'a Node> {
    if node.id() == target {
        return Some(node);
    }
    match node {
        Node::Leaf { .. } => None,
        Node::Split { first, second, .. } => {
            find_node(first, target).or_else(|| find_node(second, target))
        }
    }
}

fn find_ratio_mut(node: &mut Node, target: NodeId) -> Option<&mut f32> {
    match node {
        Node::Leaf { .. } => None,
        Node::Split {
            id,
            ratio,
            first,
            second,
            ..
        } => {
            if *id == target {
                Some(ratio)
            } else {
                find_ratio_mut(first, target).or_else(|| find_ratio_mut(second, target))
            }
        }
    }
}

fn replace_leaf(
    node: &mut Node,
    target: NodeId,
    make_split: &mut Option<impl FnOnce(Node) -> Node>,
) -> bool {
    match node {
        Node::Leaf { id, .. } if *id == target => {
            let Some(make_split) = make_split.take() else {
                return false;
            };
            let placeholder = Node::Leaf {
                id: target,
                widget: None,
            };
            let original = std::mem::replace(node, placeholder);
            *node = make_split(original);
            true
        }
        Node::Leaf { .. } => false,
        Node::Split { first, second, .. } => {
            replace_leaf(first, target, make_split) || replace_leaf(second, target, make_split)
        }
    }
}

fn check_node(
    node: &Node,
    ratio_min: f32,
    ratio_max: f32,
    seen: &mut HashSet<NodeId>,
) -> Result<(), LayoutError> {
    if !seen.insert(node.id()) {
        return Err(LayoutError::Invariant(format!(
            "duplicate node id {}",
            node.id()
        )));
    }
    if let Node::Split {
        id,
        ratio,
        first,
        second,
        ..
    } = node
    {
        if !(ratio_min..=ratio_max).contains(ratio) {
            return Err(LayoutError::Invariant(format!(
                "split {id} ratio {ratio} outside [{ratio_min}, {ratio_max}]"
            )));
        }
        check_node(first, ratio_min, ratio_max, seen)?;
        check_node(second, ratio_min, ratio_max, seen)?;
    }
    Ok(())
}
