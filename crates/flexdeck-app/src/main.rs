// ABOUTME: Interactive demo shell for the flexdeck layout engine.
// ABOUTME: Drives split commands and divider drags from a stdin command loop.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use flexdeck_core::{Config, Rect};
use flexdeck_layout::{
    split_container, walk, LayoutTree, Node, NodeId, Orientation, Position, ResizeController,
    SidePanel,
};
use flexdeck_widgets::WidgetRegistry;

struct App {
    config: Config,
    registry: WidgetRegistry,
    tree: LayoutTree,
    resize: ResizeController,
    panel: SidePanel,
}

impl App {
    fn new() -> Result<Self> {
        let config = Config::load_or_default();
        tracing::info!(
            "Loaded config: workspace {}x{}, padding {}",
            config.workspace_width,
            config.workspace_height,
            config.layout.pane_padding
        );

        let registry = WidgetRegistry::with_builtins();
        let tree = LayoutTree::with_root_widget(&config.layout, "Clock", &registry)?;
        Ok(Self {
            registry,
            tree,
            resize: ResizeController::new(),
            panel: SidePanel::new(&config.sidebar),
            config,
        })
    }

    fn workspace_rect(&self) -> Rect {
        let width = if self.panel.is_visible() {
            (self.config.workspace_width - self.panel.width()).max(0.0)
        } else {
            self.config.workspace_width
        };
        Rect::new(0.0, 0.0, width, self.config.workspace_height)
    }

    fn handle(&mut self, line: &str) -> bool {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let result = match parts.as_slice() {
            [] => Ok(()),
            ["quit"] | ["exit"] => return false,
            ["help"] => {
                print_help();
                Ok(())
            }
            ["widgets"] => {
                for key in self.registry.keys() {
                    println!("  {key}");
                }
                Ok(())
            }
            ["leaves"] => {
                for leaf in self.tree.leaves() {
                    let widget = leaf.widget.as_deref().unwrap_or("-");
                    println!("  {}  {widget}", leaf.id);
                }
                Ok(())
            }
            ["tree"] => {
                print_node(self.tree.root(), 0);
                Ok(())
            }
            ["split", leaf, orientation, position, widget] => {
                self.split(leaf, orientation, position, widget)
            }
            ["drag", split, coord] => self.begin_drag(split, coord),
            ["move", coord] => self.update_drag(coord),
            ["drop"] => {
                if let Some(split) = self.resize.end_drag() {
                    tracing::info!("Drag on {} committed", split);
                }
                Ok(())
            }
            ["walk"] => {
                self.walk();
                Ok(())
            }
            ["hit", x, y] => self.hit(x, y),
            ["config-save"] => match self.config.save_to_default() {
                Ok(path) => {
                    println!("saved {}", path.display());
                    Ok(())
                }
                Err(e) => Err(e.to_string()),
            },
            ["panel"] => {
                self.panel.toggle();
                println!(
                    "panel {}",
                    if self.panel.is_visible() { "open" } else { "closed" }
                );
                Ok(())
            }
            ["panel-drag"] => {
                self.panel.begin_resize();
                Ok(())
            }
            ["panel-move", x] => match x.parse::<f32>() {
                Ok(x) => {
                    self.panel.resize(self.config.workspace_width, x);
                    println!(
                        "panel width {:.0}, {}",
                        self.panel.width(),
                        if self.panel.is_visible() { "open" } else { "closed" }
                    );
                    Ok(())
                }
                Err(_) => Err(format!("not a coordinate: {x}")),
            },
            ["panel-drop"] => {
                self.panel.end_resize();
                Ok(())
            }
            _ => Err(format!("unknown command: {line} (try 'help')")),
        };

        if let Err(message) = result {
            println!("error: {message}");
        }
        true
    }

    fn split(
        &mut self,
        leaf: &str,
        orientation: &str,
        position: &str,
        widget: &str,
    ) -> std::result::Result<(), String> {
        let leaf = parse_node_id(leaf)?;
        let orientation = parse_orientation(orientation)?;
        let position = parse_position(position)?;
        let new_leaf = self
            .tree
            .split(leaf, orientation, position, widget, &self.registry)
            .map_err(|e| e.to_string())?;
        self.tree.validate().map_err(|e| e.to_string())?;
        tracing::info!(
            "Split {} -> new leaf {}, total leaves: {}",
            leaf,
            new_leaf,
            self.tree.leaves().len()
        );
        println!("new leaf {new_leaf}");
        Ok(())
    }

    fn begin_drag(&mut self, split: &str, coord: &str) -> std::result::Result<(), String> {
        let split = parse_node_id(split)?;
        let coord: f32 = coord.parse().map_err(|_| format!("not a coordinate: {coord}"))?;
        self.resize
            .begin_drag(&self.tree, split, coord)
            .map_err(|e| e.to_string())
    }

    fn update_drag(&mut self, coord: &str) -> std::result::Result<(), String> {
        let coord: f32 = coord.parse().map_err(|_| format!("not a coordinate: {coord}"))?;
        let Some(split) = self.resize.active_split() else {
            return Ok(());
        };
        // the drag is relative to the split's own container, not the
        // whole workspace
        let container = split_container(
            &self.tree,
            self.workspace_rect(),
            self.config.layout.pane_padding,
            split,
        )
        .ok_or_else(|| format!("no split with id {split}"))?;
        let extent = match find_orientation(self.tree.root(), split) {
            Some(Orientation::Horizontal) => container.height,
            Some(Orientation::Vertical) => container.width,
            None => return Err(format!("no split with id {split}")),
        };
        match self
            .resize
            .update_drag(&mut self.tree, coord, extent)
            .map_err(|e| e.to_string())?
        {
            Some(ratio) => println!("ratio {ratio:.3}"),
            None => {}
        }
        Ok(())
    }

    fn hit(&self, x: &str, y: &str) -> std::result::Result<(), String> {
        let x: f32 = x.parse().map_err(|_| format!("not a coordinate: {x}"))?;
        let y: f32 = y.parse().map_err(|_| format!("not a coordinate: {y}"))?;
        let panes = walk(
            &self.tree,
            self.workspace_rect(),
            self.config.layout.pane_padding,
        );
        match panes.iter().find(|p| p.rect.contains(x, y)) {
            Some(pane) => println!("{}  {}", pane.id, pane.widget.as_deref().unwrap_or("-")),
            None => println!("no pane at ({x}, {y})"),
        }
        Ok(())
    }

    fn walk(&self) {
        let panes = walk(
            &self.tree,
            self.workspace_rect(),
            self.config.layout.pane_padding,
        );
        for pane in panes {
            println!(
                "{}  [{:.0},{:.0} {:.0}x{:.0}]",
                pane.id, pane.rect.x, pane.rect.y, pane.rect.width, pane.rect.height
            );
            match pane.widget.as_deref() {
                Some(key) => match self.registry.resolve(key) {
                    Ok(widget) => {
                        let visual = widget.render();
                        println!("    == {} ==", visual.title);
                        for line in visual.lines {
                            println!("    {line}");
                        }
                    }
                    Err(e) => tracing::error!("Failed to resolve widget {key:?}: {e}"),
                },
                None => println!("    No component connected"),
            }
        }
    }
}

fn parse_node_id(text: &str) -> std::result::Result<NodeId, String> {
    let raw = text.strip_prefix("node-").unwrap_or(text);
    raw.parse::<u64>()
        .map(NodeId)
        .map_err(|_| format!("not a node id: {text}"))
}

fn parse_orientation(text: &str) -> std::result::Result<Orientation, String> {
    match text {
        "horizontal" | "h" => Ok(Orientation::Horizontal),
        "vertical" | "v" => Ok(Orientation::Vertical),
        _ => Err(format!("not an orientation: {text}")),
    }
}

fn parse_position(text: &str) -> std::result::Result<Position, String> {
    match text {
        "top" => Ok(Position::Top),
        "bottom" => Ok(Position::Bottom),
        "left" => Ok(Position::Left),
        "right" => Ok(Position::Right),
        _ => Err(format!("not a position: {text}")),
    }
}

fn find_orientation(node: &Node, target: NodeId) -> Option<Orientation> {
    match node {
        Node::Leaf { .. } => None,
        Node::Split {
            id,
            orientation,
            first,
            second,
            ..
        } => {
            if *id == target {
                Some(*orientation)
            } else {
                find_orientation(first, target).or_else(|| find_orientation(second, target))
            }
        }
    }
}

fn print_node(node: &Node, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Leaf { id, widget } => {
            println!("{indent}{} leaf {}", id, widget.as_deref().unwrap_or("-"));
        }
        Node::Split {
            id,
            orientation,
            ratio,
            first,
            second,
        } => {
            println!("{indent}{id} split {orientation:?} @ {ratio:.2}");
            print_node(first, depth + 1);
            print_node(second, depth + 1);
        }
    }
}

fn print_help() {
    println!("  widgets                                    list registered widgets");
    println!("  leaves                                     list leaves for selection");
    println!("  tree                                       print the layout tree");
    println!("  split <leaf> <h|v> <top|bottom|left|right> <Widget>");
    println!("  drag <split> <coord>                       start a divider drag");
    println!("  move <coord>                               pointer-move during a drag");
    println!("  drop                                       pointer-up, commit the drag");
    println!("  walk                                       print pane rectangles and widgets");
    println!("  hit <x> <y>                                find the pane under a point");
    println!("  panel | panel-drag | panel-move <x> | panel-drop");
    println!("  config-save                                write current config to disk");
    println!("  quit");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting flexdeck");

    let mut app = App::new()?;
    let stdin = io::stdin();
    print!("> ");
    io::stdout().flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        if !app.handle(&line) {
            break;
        }
        print!("> ");
        io::stdout().flush()?;
    }

    tracing::info!("Exiting");
    Ok(())
}
