//! Trellis: a retained-mode widget toolkit core.
//!
//! Trellis keeps a tree of widgets in an arena, draws it through a host-supplied
//! [`Graphics`](graphics::Graphics) implementation, and routes key and mouse
//! input to the widget under the pointer or the widget with focus.
//!
//! # Quick Start
//!
//! The main entry points are:
//! - [`Gui`] - The host-facing driver: logic ticks, drawing, input injection
//! - [`Core`] - The widget arena, focus handlers and event distribution
//! - [`Widget`] - The trait implemented by all widgets
//!
//! # Module Organization
//!
//! - [`geom`] - Geometry primitives (Rect, Point, Frame)
//! - [`widgets`] - Built-in widget implementations

#![warn(missing_docs)]

// Internal core module - re-export specific items below
mod core;

// Public modules
pub mod widget;
pub mod widgets;

/// Geometry primitives.
pub mod geom {
    pub use ::geom::*;
}

// Re-export core application types
pub use crate::core::{
    Context, Core, DrawContext, FocusHandler, FocusHandlerId, FocusManager, Gui, NodeId, TypedId,
};
pub use crate::core::{config, error, event, font, graphics, listener, node, style, testing};

// Re-export widget trait and event outcome
pub use widget::{EventOutcome, Widget};
