//! Input and notification events.
//!
//! Input events (`KeyInput`, `MouseInput`) are pushed by the host into the
//! [`Gui`](crate::Gui). Everything else is produced by the toolkit and fanned
//! out to widget hooks and registered listeners.

/// Keystrokes, modifiers and key events.
pub mod key;
/// Mouse buttons, actions and mouse events.
pub mod mouse;

pub use key::{Key, KeyAction, KeyCode, KeyEvent, KeyInput};
pub use mouse::{Button, MouseEvent, MouseEventKind, MouseInput};

use crate::NodeId;

/// An action performed by a widget, e.g. a tab selection change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionEvent {
    /// The widget that fired the action.
    pub source: NodeId,
    /// The source's action event id at the time it fired.
    pub id: String,
}

/// Focus transition kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusKind {
    /// The widget received focus.
    Gained,
    /// The widget lost focus.
    Lost,
}

/// A focus change on a single widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusEvent {
    /// The widget whose focus changed.
    pub source: NodeId,
    /// Gained or lost.
    pub kind: FocusKind,
}

/// Sent to death listeners immediately before a widget leaves the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeathEvent {
    /// The widget being destroyed.
    pub source: NodeId,
}

/// Geometry and visibility notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetEventKind {
    /// The widget changed size.
    Resized,
    /// The widget changed position.
    Moved,
    /// The widget was hidden.
    Hidden,
    /// The widget was shown.
    Shown,
    /// An ancestor changed position.
    AncestorMoved,
    /// An ancestor was hidden.
    AncestorHidden,
    /// An ancestor was shown.
    AncestorShown,
}

impl WidgetEventKind {
    /// The ancestor notification fanned out to descendants, if any.
    pub fn ancestor_kind(&self) -> Option<Self> {
        match self {
            Self::Moved => Some(Self::AncestorMoved),
            Self::Hidden => Some(Self::AncestorHidden),
            Self::Shown => Some(Self::AncestorShown),
            _ => None,
        }
    }
}

/// A geometry or visibility notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetEvent {
    /// The widget that changed. For ancestor kinds this is the ancestor.
    pub source: NodeId,
    /// What happened.
    pub kind: WidgetEventKind,
}
