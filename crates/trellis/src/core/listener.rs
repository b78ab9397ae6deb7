//! Listener interfaces.
//!
//! Listeners are registered on a node as non-owning references: the node
//! keeps a `Weak` handle and silently skips listeners whose owner has dropped
//! them. Listener methods take `&self`; implementations that need to record
//! state use interior mutability. Every callback receives the [`Core`] so it
//! can query or mutate the tree, but a listener must not add or remove
//! children of the widget currently being traversed.

use std::rc::{Rc, Weak};

use crate::{
    Core, EventOutcome,
    event::{
        ActionEvent, DeathEvent, FocusEvent, FocusKind, KeyAction, KeyEvent, MouseEvent,
        MouseEventKind, WidgetEvent, WidgetEventKind,
    },
};

/// Receives action events.
pub trait ActionListener {
    /// A widget performed its action.
    fn action(&self, event: &ActionEvent, core: &mut Core);
}

/// Receives death events.
pub trait DeathListener {
    /// A widget is about to be destroyed.
    fn death(&self, event: &DeathEvent, core: &mut Core);
}

/// Receives focus events.
pub trait FocusListener {
    /// The widget received focus.
    fn focus_gained(&self, _event: &FocusEvent, _core: &mut Core) {}
    /// The widget lost focus.
    fn focus_lost(&self, _event: &FocusEvent, _core: &mut Core) {}
}

/// Receives key events. Returning anything but `Ignore` consumes the event.
pub trait KeyListener {
    /// A key was pressed.
    fn key_pressed(&self, _event: &KeyEvent, _core: &mut Core) -> EventOutcome {
        EventOutcome::Ignore
    }
    /// A key was released.
    fn key_released(&self, _event: &KeyEvent, _core: &mut Core) -> EventOutcome {
        EventOutcome::Ignore
    }
}

/// Receives mouse events. Returning anything but `Ignore` consumes the event.
pub trait MouseListener {
    /// The pointer entered the widget.
    fn mouse_entered(&self, _event: &MouseEvent, _core: &mut Core) -> EventOutcome {
        EventOutcome::Ignore
    }
    /// The pointer left the widget.
    fn mouse_exited(&self, _event: &MouseEvent, _core: &mut Core) -> EventOutcome {
        EventOutcome::Ignore
    }
    /// A button was pressed.
    fn mouse_pressed(&self, _event: &MouseEvent, _core: &mut Core) -> EventOutcome {
        EventOutcome::Ignore
    }
    /// A button was released.
    fn mouse_released(&self, _event: &MouseEvent, _core: &mut Core) -> EventOutcome {
        EventOutcome::Ignore
    }
    /// A button was clicked.
    fn mouse_clicked(&self, _event: &MouseEvent, _core: &mut Core) -> EventOutcome {
        EventOutcome::Ignore
    }
    /// The pointer moved.
    fn mouse_moved(&self, _event: &MouseEvent, _core: &mut Core) -> EventOutcome {
        EventOutcome::Ignore
    }
    /// The pointer moved with a button held.
    fn mouse_dragged(&self, _event: &MouseEvent, _core: &mut Core) -> EventOutcome {
        EventOutcome::Ignore
    }
    /// The wheel moved in any direction.
    fn mouse_wheel(&self, _event: &MouseEvent, _core: &mut Core) -> EventOutcome {
        EventOutcome::Ignore
    }
}

/// Receives geometry and visibility notifications.
pub trait WidgetListener {
    /// The widget was resized.
    fn widget_resized(&self, _event: &WidgetEvent, _core: &mut Core) {}
    /// The widget was moved.
    fn widget_moved(&self, _event: &WidgetEvent, _core: &mut Core) {}
    /// The widget was hidden.
    fn widget_hidden(&self, _event: &WidgetEvent, _core: &mut Core) {}
    /// The widget was shown.
    fn widget_shown(&self, _event: &WidgetEvent, _core: &mut Core) {}
    /// An ancestor of the widget was moved.
    fn ancestor_moved(&self, _event: &WidgetEvent, _core: &mut Core) {}
    /// An ancestor of the widget was hidden.
    fn ancestor_hidden(&self, _event: &WidgetEvent, _core: &mut Core) {}
    /// An ancestor of the widget was shown.
    fn ancestor_shown(&self, _event: &WidgetEvent, _core: &mut Core) {}
}

/// Route a focus event to the matching listener method.
pub(crate) fn deliver_focus(l: &dyn FocusListener, event: &FocusEvent, core: &mut Core) {
    match event.kind {
        FocusKind::Gained => l.focus_gained(event, core),
        FocusKind::Lost => l.focus_lost(event, core),
    }
}

/// Route a key event to the matching listener method.
pub(crate) fn deliver_key(l: &dyn KeyListener, event: &KeyEvent, core: &mut Core) -> EventOutcome {
    match event.action {
        KeyAction::Pressed => l.key_pressed(event, core),
        KeyAction::Released => l.key_released(event, core),
    }
}

/// Route a mouse event to the matching listener method.
pub(crate) fn deliver_mouse(
    l: &dyn MouseListener,
    event: &MouseEvent,
    core: &mut Core,
) -> EventOutcome {
    match event.kind {
        MouseEventKind::Entered => l.mouse_entered(event, core),
        MouseEventKind::Exited => l.mouse_exited(event, core),
        MouseEventKind::Pressed => l.mouse_pressed(event, core),
        MouseEventKind::Released => l.mouse_released(event, core),
        MouseEventKind::Clicked => l.mouse_clicked(event, core),
        MouseEventKind::Moved => l.mouse_moved(event, core),
        MouseEventKind::Dragged => l.mouse_dragged(event, core),
        MouseEventKind::WheelMovedUp
        | MouseEventKind::WheelMovedDown
        | MouseEventKind::WheelMovedLeft
        | MouseEventKind::WheelMovedRight => l.mouse_wheel(event, core),
    }
}

/// Route a widget event to the matching listener method.
pub(crate) fn deliver_widget(l: &dyn WidgetListener, event: &WidgetEvent, core: &mut Core) {
    match event.kind {
        WidgetEventKind::Resized => l.widget_resized(event, core),
        WidgetEventKind::Moved => l.widget_moved(event, core),
        WidgetEventKind::Hidden => l.widget_hidden(event, core),
        WidgetEventKind::Shown => l.widget_shown(event, core),
        WidgetEventKind::AncestorMoved => l.ancestor_moved(event, core),
        WidgetEventKind::AncestorHidden => l.ancestor_hidden(event, core),
        WidgetEventKind::AncestorShown => l.ancestor_shown(event, core),
    }
}

/// An ordered list of non-owning listener references.
pub struct ListenerList<T: ?Sized> {
    /// Registered listeners in registration order.
    entries: Vec<Weak<T>>,
}

impl<T: ?Sized> Default for ListenerList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: ?Sized> ListenerList<T> {
    /// Register a listener. Registering the same listener twice is a no-op.
    pub fn add(&mut self, listener: Weak<T>) {
        self.prune();
        if !self.entries.iter().any(|w| Weak::ptr_eq(w, &listener)) {
            self.entries.push(listener);
        }
    }

    /// Unregister a listener. Returns `true` if it was registered.
    pub fn remove(&mut self, listener: &Weak<T>) -> bool {
        let before = self.entries.len();
        self.entries.retain(|w| !Weak::ptr_eq(w, listener));
        before != self.entries.len()
    }

    /// Drop entries whose listener no longer exists.
    fn prune(&mut self) {
        self.entries.retain(|w| w.strong_count() > 0);
    }

    /// Number of live listeners.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|w| w.strong_count() > 0).count()
    }

    /// True if no live listener is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Upgrade every live listener, in registration order. Delivery iterates
    /// this snapshot so callbacks may register or unregister listeners.
    pub fn snapshot(&self) -> Vec<Rc<T>> {
        self.entries.iter().filter_map(Weak::upgrade).collect()
    }
}

/// Per-category listener registries held by every node.
#[derive(Default)]
pub struct Listeners {
    /// Action listeners.
    pub(crate) action: ListenerList<dyn ActionListener>,
    /// Death listeners.
    pub(crate) death: ListenerList<dyn DeathListener>,
    /// Focus listeners.
    pub(crate) focus: ListenerList<dyn FocusListener>,
    /// Key listeners.
    pub(crate) key: ListenerList<dyn KeyListener>,
    /// Mouse listeners.
    pub(crate) mouse: ListenerList<dyn MouseListener>,
    /// Widget listeners.
    pub(crate) widget: ListenerList<dyn WidgetListener>,
}
