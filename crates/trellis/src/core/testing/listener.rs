use std::{
    cell::{Cell, RefCell},
    mem,
};

use crate::{
    Core, EventOutcome,
    event::{ActionEvent, DeathEvent, FocusEvent, KeyEvent, MouseEvent, WidgetEvent},
    listener::{
        ActionListener, DeathListener, FocusListener, KeyListener, MouseListener, WidgetListener,
    },
};

/// An event seen by a [`RecordingListener`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    /// An action event.
    Action(ActionEvent),
    /// A death event.
    Death(DeathEvent),
    /// A focus event.
    Focus(FocusEvent),
    /// A key event.
    Key(KeyEvent),
    /// A mouse event.
    Mouse(MouseEvent),
    /// A widget event.
    Widget(WidgetEvent),
}

/// A listener for every category that records what it receives.
///
/// Register it through an `Rc`; the arena keeps only a weak reference.
#[derive(Debug)]
pub struct RecordingListener {
    /// Events in arrival order.
    events: RefCell<Vec<Recorded>>,
    /// Outcome returned for key and mouse events.
    outcome: Cell<EventOutcome>,
}

impl Default for RecordingListener {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingListener {
    /// A listener that ignores input.
    pub fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
            outcome: Cell::new(EventOutcome::Ignore),
        }
    }

    /// A listener that consumes key and mouse input.
    pub fn consuming() -> Self {
        let l = Self::new();
        l.outcome.set(EventOutcome::Handle);
        l
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<Recorded> {
        mem::take(&mut *self.events.borrow_mut())
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Recorded mouse events.
    pub fn mouse_events(&self) -> Vec<MouseEvent> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Recorded::Mouse(m) => Some(*m),
                _ => None,
            })
            .collect()
    }

    /// Recorded widget events.
    pub fn widget_events(&self) -> Vec<WidgetEvent> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Recorded::Widget(w) => Some(*w),
                _ => None,
            })
            .collect()
    }

    /// Append an event.
    fn push(&self, e: Recorded) {
        self.events.borrow_mut().push(e);
    }
}

impl ActionListener for RecordingListener {
    fn action(&self, event: &ActionEvent, _core: &mut Core) {
        self.push(Recorded::Action(event.clone()));
    }
}

impl DeathListener for RecordingListener {
    fn death(&self, event: &DeathEvent, _core: &mut Core) {
        self.push(Recorded::Death(*event));
    }
}

impl FocusListener for RecordingListener {
    fn focus_gained(&self, event: &FocusEvent, _core: &mut Core) {
        self.push(Recorded::Focus(*event));
    }

    fn focus_lost(&self, event: &FocusEvent, _core: &mut Core) {
        self.push(Recorded::Focus(*event));
    }
}

impl KeyListener for RecordingListener {
    fn key_pressed(&self, event: &KeyEvent, _core: &mut Core) -> EventOutcome {
        self.push(Recorded::Key(*event));
        self.outcome.get()
    }

    fn key_released(&self, event: &KeyEvent, _core: &mut Core) -> EventOutcome {
        self.push(Recorded::Key(*event));
        self.outcome.get()
    }
}

impl MouseListener for RecordingListener {
    fn mouse_entered(&self, event: &MouseEvent, _core: &mut Core) -> EventOutcome {
        self.push(Recorded::Mouse(*event));
        self.outcome.get()
    }

    fn mouse_exited(&self, event: &MouseEvent, _core: &mut Core) -> EventOutcome {
        self.push(Recorded::Mouse(*event));
        self.outcome.get()
    }

    fn mouse_pressed(&self, event: &MouseEvent, _core: &mut Core) -> EventOutcome {
        self.push(Recorded::Mouse(*event));
        self.outcome.get()
    }

    fn mouse_released(&self, event: &MouseEvent, _core: &mut Core) -> EventOutcome {
        self.push(Recorded::Mouse(*event));
        self.outcome.get()
    }

    fn mouse_clicked(&self, event: &MouseEvent, _core: &mut Core) -> EventOutcome {
        self.push(Recorded::Mouse(*event));
        self.outcome.get()
    }

    fn mouse_moved(&self, event: &MouseEvent, _core: &mut Core) -> EventOutcome {
        self.push(Recorded::Mouse(*event));
        self.outcome.get()
    }

    fn mouse_dragged(&self, event: &MouseEvent, _core: &mut Core) -> EventOutcome {
        self.push(Recorded::Mouse(*event));
        self.outcome.get()
    }

    fn mouse_wheel(&self, event: &MouseEvent, _core: &mut Core) -> EventOutcome {
        self.push(Recorded::Mouse(*event));
        self.outcome.get()
    }
}

impl WidgetListener for RecordingListener {
    fn widget_resized(&self, event: &WidgetEvent, _core: &mut Core) {
        self.push(Recorded::Widget(*event));
    }

    fn widget_moved(&self, event: &WidgetEvent, _core: &mut Core) {
        self.push(Recorded::Widget(*event));
    }

    fn widget_hidden(&self, event: &WidgetEvent, _core: &mut Core) {
        self.push(Recorded::Widget(*event));
    }

    fn widget_shown(&self, event: &WidgetEvent, _core: &mut Core) {
        self.push(Recorded::Widget(*event));
    }

    fn ancestor_moved(&self, event: &WidgetEvent, _core: &mut Core) {
        self.push(Recorded::Widget(*event));
    }

    fn ancestor_hidden(&self, event: &WidgetEvent, _core: &mut Core) {
        self.push(Recorded::Widget(*event));
    }

    fn ancestor_shown(&self, event: &WidgetEvent, _core: &mut Core) {
        self.push(Recorded::Widget(*event));
    }
}
