// ABOUTME: Shared types and configuration for flexdeck.
// ABOUTME: Defines geometry primitives and config file handling.

pub mod config;
pub mod geometry;

pub use config::{Config, ConfigError, LayoutSettings, SidebarSettings};
pub use geometry::Rect;
