//! Built-in widgets.

/// Container widget.
pub mod container;
/// Tab header widget.
pub mod tab;
/// Tabbed area widget.
pub mod tabbed_area;

pub use container::Container;
pub use tab::Tab;
pub use tabbed_area::TabbedArea;
