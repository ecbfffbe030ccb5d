// ABOUTME: Widget registry and built-in widgets for flexdeck.
// ABOUTME: Maps string keys to render capabilities resolved at draw time.

pub mod calendar;
pub mod clock;
pub mod registry;
pub mod search;

pub use calendar::Calendar;
pub use clock::Clock;
pub use registry::{RegistryError, Visual, Widget, WidgetRegistry};
pub use search::SearchBar;
