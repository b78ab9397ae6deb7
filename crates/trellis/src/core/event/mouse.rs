use crate::{NodeId, event::key, geom::Point};

/// Mouse button codes.
#[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Button {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button.
    Middle,
    /// No button (for move/scroll).
    None,
}

/// Raw mouse action kinds reported by the host.
#[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Action {
    /// Button press.
    Pressed,
    /// Button release.
    Released,
    /// Pointer moved.
    Moved,
    /// Scroll wheel up.
    WheelUp,
    /// Scroll wheel down.
    WheelDown,
    /// Horizontal scroll left.
    WheelLeft,
    /// Horizontal scroll right.
    WheelRight,
}

/// Raw mouse input pushed by the host. The location is in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseInput {
    /// Action type.
    pub action: Action,
    /// Button involved, `Button::None` for moves and wheel input.
    pub button: Button,
    /// Cursor location in screen space.
    pub location: Point,
    /// Keyboard modifiers.
    pub modifiers: key::Mods,
    /// Host timestamp in milliseconds, used for click counting.
    pub timestamp_ms: u64,
}

impl MouseInput {
    /// Construct an input with no modifiers.
    pub fn new(
        action: Action,
        button: Button,
        location: impl Into<Point>,
        timestamp_ms: u64,
    ) -> Self {
        Self {
            action,
            button,
            location: location.into(),
            modifiers: key::Empty,
            timestamp_ms,
        }
    }

    /// A button press.
    pub fn pressed(button: Button, location: impl Into<Point>, timestamp_ms: u64) -> Self {
        Self::new(Action::Pressed, button, location, timestamp_ms)
    }

    /// A button release.
    pub fn released(button: Button, location: impl Into<Point>, timestamp_ms: u64) -> Self {
        Self::new(Action::Released, button, location, timestamp_ms)
    }

    /// A pointer move.
    pub fn moved(location: impl Into<Point>, timestamp_ms: u64) -> Self {
        Self::new(Action::Moved, Button::None, location, timestamp_ms)
    }
}

/// The kind of mouse event delivered to widgets.
#[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
pub enum MouseEventKind {
    /// A button went down over the widget.
    Pressed,
    /// A button went up.
    Released,
    /// A press and release on the same widget.
    Clicked,
    /// The pointer moved with no button held.
    Moved,
    /// The pointer moved with a button held.
    Dragged,
    /// The pointer entered the widget.
    Entered,
    /// The pointer left the widget.
    Exited,
    /// Wheel scrolled up.
    WheelMovedUp,
    /// Wheel scrolled down.
    WheelMovedDown,
    /// Wheel scrolled left.
    WheelMovedLeft,
    /// Wheel scrolled right.
    WheelMovedRight,
}

/// A mouse event delivered to widgets and mouse listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// Event kind.
    pub kind: MouseEventKind,
    /// Button involved.
    pub button: Button,
    /// Location relative to the widget currently receiving the event.
    pub location: Point,
    /// Number of consecutive clicks within the double-click window.
    pub click_count: u32,
    /// Keyboard modifiers.
    pub modifiers: key::Mods,
    /// The widget the event was sent to first.
    pub source: NodeId,
    /// The widget currently receiving the event.
    pub distributor: NodeId,
}
