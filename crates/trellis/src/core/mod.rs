//! Core types for the trellis widget toolkit.

// Core modules - public
/// Configuration loading.
pub mod config;
/// Core error types.
pub mod error;
/// Input and notification event types.
pub mod event;
/// Font metrics and text drawing.
pub mod font;
/// The drawing boundary.
pub mod graphics;
/// Listener interfaces.
pub mod listener;
/// Node data stored in the arena.
pub mod node;
/// Colors and palettes.
pub mod style;
/// Headless helpers for tests and hosts.
pub mod testing;

// Core modules - internal
/// Widget hook contexts.
pub mod context;
/// Widget-event, action and death distribution.
pub mod distribute;
/// Recursive draw and logic passes.
pub mod draw;
/// Focus handlers and focus navigation.
pub mod focus;
/// Host-facing input driver.
pub mod gui;
/// Hit-testing.
pub mod hit;
/// Node ID types.
pub mod id;
/// Arena state and tree mutation.
pub mod world;

// Public exports from internal modules
pub use context::{Context, DrawContext};
pub use focus::{FocusHandler, FocusManager};
pub use gui::Gui;
pub use id::{FocusHandlerId, NodeId, TypedId};
pub use world::Core;
