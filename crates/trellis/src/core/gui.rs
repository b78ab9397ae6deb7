use std::{
    mem,
    rc::{Rc, Weak},
};

use tracing::{debug, trace};

use crate::{
    Core, EventOutcome, FocusHandlerId, FocusManager, NodeId,
    config::GuiConfig,
    core::{distribute, focus::FocusHandler},
    error::Result,
    event::{
        KeyAction, KeyEvent, KeyInput, MouseEvent, MouseEventKind, MouseInput,
        mouse::{Action, Button},
    },
    geom::Point,
    graphics::Graphics,
    listener::{KeyListener, ListenerList, deliver_key},
};

/// The last button press, used for click counting.
#[derive(Debug, Clone, Copy)]
struct LastPress {
    /// Widget that received the press.
    node: NodeId,
    /// Button pressed.
    button: Button,
    /// Host timestamp of the press.
    timestamp_ms: u64,
}

/// The host-facing driver.
///
/// A `Gui` owns the widget arena, a top widget and a focus handler for the
/// top widget's tree. Hosts call [`logic`](Self::logic) and
/// [`draw`](Self::draw) once per frame and push raw input as it arrives.
pub struct Gui {
    /// The widget arena.
    core: Core,
    /// Root of the displayed tree.
    top: Option<NodeId>,
    /// Focus handler installed on the top widget's tree.
    focus_handler: FocusHandlerId,
    /// Configuration.
    config: GuiConfig,
    /// Last press, for click counting.
    last_press: Option<LastPress>,
    /// Current click count.
    click_count: u32,
    /// Chain of widgets under the pointer, outermost first.
    widgets_with_mouse: Vec<NodeId>,
    /// Listeners that see every key input before any widget.
    key_listeners: ListenerList<dyn KeyListener>,
}

impl Default for Gui {
    fn default() -> Self {
        Self::new(GuiConfig::default())
    }
}

impl Gui {
    /// Construct a driver with an empty arena.
    pub fn new(config: GuiConfig) -> Self {
        let mut core = Core::with_defaults(config.palette, config.frame_size);
        let focus_handler = core.create_focus_handler();
        Self {
            core,
            top: None,
            focus_handler,
            config,
            last_press: None,
            click_count: 0,
            widgets_with_mouse: Vec::new(),
            key_listeners: ListenerList::default(),
        }
    }

    /// The widget arena.
    pub fn core(&self) -> &Core {
        &self.core
    }

    /// The widget arena, mutably.
    pub fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    /// The configuration.
    pub fn config(&self) -> &GuiConfig {
        &self.config
    }

    /// The focus handler managing the top widget's tree.
    pub fn focus_handler(&self) -> FocusHandlerId {
        self.focus_handler
    }

    /// The top widget, if it still exists.
    pub fn top(&self) -> Option<NodeId> {
        self.top.filter(|t| self.core.exists(*t))
    }

    /// Replace the top widget. The previous tree leaves the focus handler and
    /// the new tree joins it. Passing `None` clears the top widget.
    pub fn set_top(&mut self, top: Option<NodeId>) -> Result<()> {
        if let Some(old) = self.top()
            && Some(old) != top
        {
            self.core.set_focus_handler(old, None)?;
        }
        if let Some(new) = top {
            self.core.set_focus_handler(new, Some(self.focus_handler))?;
        }
        debug!(?top, "top widget");
        self.top = top;
        self.widgets_with_mouse.clear();
        self.last_press = None;
        Ok(())
    }

    /// Register a key listener that sees every key input first.
    pub fn add_key_listener<L: KeyListener + 'static>(&mut self, listener: &Rc<L>) {
        let weak = Rc::downgrade(listener) as Weak<dyn KeyListener>;
        self.key_listeners.add(weak);
    }

    /// Unregister a global key listener. Returns `true` if it was registered.
    pub fn remove_key_listener<L: KeyListener + 'static>(&mut self, listener: &Rc<L>) -> bool {
        let weak = Rc::downgrade(listener) as Weak<dyn KeyListener>;
        self.key_listeners.remove(&weak)
    }

    /// Tick every widget in the top tree.
    pub fn logic(&mut self) -> Result<()> {
        match self.top() {
            Some(top) => self.core.logic(top),
            None => Ok(()),
        }
    }

    /// Draw the top tree.
    pub fn draw(&mut self, g: &mut dyn Graphics) -> Result<()> {
        match self.top() {
            Some(top) if self.core.is_visible(top) => self.core.draw(g, top),
            _ => Ok(()),
        }
    }

    /// The widget that receives key input: the focused widget of the top
    /// handler, descending through internal focus handlers.
    pub fn key_target(&self) -> Option<NodeId> {
        let mut focused = self.handler()?.focused()?;
        while let Some(next) = self
            .core
            .node(focused)
            .and_then(|n| n.internal_focus_handler())
            .and_then(|h| self.core.focus_handler(h))
            .and_then(FocusHandler::focused)
        {
            focused = next;
        }
        Some(focused)
    }

    /// Push a key input. Global key listeners see it first, then the focused
    /// widget and its ancestors until one consumes it. An unconsumed Tab or
    /// shift-Tab press moves focus when tab navigation is enabled.
    pub fn push_key_input(&mut self, input: KeyInput) -> Result<EventOutcome> {
        let Some(top) = self.top() else {
            return Ok(EventOutcome::Ignore);
        };
        let target = self.key_target();
        let source = target.unwrap_or(top);
        let event = KeyEvent {
            action: input.action,
            key: input.key,
            source,
            distributor: source,
        };
        trace!(?source, key = ?input.key, "key input");

        let mut outcome = EventOutcome::Ignore;
        for l in self.key_listeners.snapshot() {
            outcome = outcome.merge(deliver_key(l.as_ref(), &event, &mut self.core));
        }
        if !outcome.is_consumed()
            && let Some(target) = target
        {
            outcome = self.bubble_key(target, &event)?;
        }

        if !outcome.is_consumed()
            && self.config.tab_navigation
            && input.action == KeyAction::Pressed
        {
            let handler = target
                .and_then(|t| self.core.focus_handler_of(t))
                .unwrap_or(self.focus_handler);
            if input.key.is_tab() {
                self.core.tab_next(handler)?;
                outcome = EventOutcome::Handle;
            } else if input.key.is_back_tab() {
                self.core.tab_previous(handler)?;
                outcome = EventOutcome::Handle;
            }
        }
        Ok(outcome)
    }

    /// Deliver a key event from `source` upwards. Disabled widgets are
    /// passed over, and delivery stops at the modal focus holder.
    fn bubble_key(&mut self, source: NodeId, event: &KeyEvent) -> Result<EventOutcome> {
        let mut target = Some(source);
        while let Some(id) = target {
            if self.core.is_enabled(id) {
                let event = KeyEvent {
                    distributor: id,
                    ..*event
                };
                let outcome = distribute::key_event(&mut self.core, id, &event)?;
                if outcome.is_consumed() {
                    return Ok(outcome);
                }
            }
            if self.is_modal_boundary(id, false) {
                break;
            }
            target = self.core.parent(id);
        }
        Ok(EventOutcome::Ignore)
    }

    /// Push a mouse input.
    pub fn push_mouse_input(&mut self, input: MouseInput) -> Result<()> {
        let Some(top) = self.top() else {
            return Ok(());
        };
        let chain = self.chain_under(top, input.location)?;
        let mut source = chain.last().copied().unwrap_or(top);
        if let Some(modal) = self.handler().and_then(FocusHandler::modal_mouse_input_focused)
            && !self.core.is_ancestor(modal, source)
        {
            source = modal;
        }
        trace!(?source, action = ?input.action, "mouse input");

        self.update_widgets_with_mouse(chain, &input)?;

        match input.action {
            Action::Pressed => self.mouse_pressed(source, &input),
            Action::Released => self.mouse_released(source, &input),
            Action::Moved => match self.handler().and_then(FocusHandler::dragged) {
                Some(dragged) if self.core.exists(dragged) => {
                    self.distribute_mouse(dragged, MouseEventKind::Dragged, &input, 0, false)
                }
                _ => self.distribute_mouse(source, MouseEventKind::Moved, &input, 0, false),
            },
            Action::WheelUp => {
                self.distribute_mouse(source, MouseEventKind::WheelMovedUp, &input, 0, false)
            }
            Action::WheelDown => {
                self.distribute_mouse(source, MouseEventKind::WheelMovedDown, &input, 0, false)
            }
            Action::WheelLeft => {
                self.distribute_mouse(source, MouseEventKind::WheelMovedLeft, &input, 0, false)
            }
            Action::WheelRight => {
                self.distribute_mouse(source, MouseEventKind::WheelMovedRight, &input, 0, false)
            }
        }
    }

    /// Handle a button press on `source`.
    fn mouse_pressed(&mut self, source: NodeId, input: &MouseInput) -> Result<()> {
        let source = self
            .handler()
            .and_then(FocusHandler::dragged)
            .filter(|d| self.core.exists(*d))
            .unwrap_or(source);

        let modal = self.handler().and_then(FocusHandler::modal_focused);
        if modal.is_none_or(|m| self.core.is_ancestor(m, source))
            && self.core.focus_handler_of(source).is_some()
        {
            self.core.request_focus(source)?;
        }

        self.click_count = match self.last_press {
            Some(last)
                if last.node == source
                    && last.button == input.button
                    && input.timestamp_ms.saturating_sub(last.timestamp_ms)
                        <= self.config.double_click_ms =>
            {
                self.click_count + 1
            }
            _ => 1,
        };
        self.last_press = Some(LastPress {
            node: source,
            button: input.button,
            timestamp_ms: input.timestamp_ms,
        });

        self.distribute_mouse(source, MouseEventKind::Pressed, input, self.click_count, false)?;

        if let Some(h) = self.core.focus_handler_mut(self.focus_handler) {
            h.last_pressed = Some(source);
            h.dragged = Some(source);
        }
        Ok(())
    }

    /// Handle a button release. The dragged widget receives the release, and
    /// a click follows if the pointer is still over the pressed widget.
    fn mouse_released(&mut self, source: NodeId, input: &MouseInput) -> Result<()> {
        let (dragged, last_pressed) = self
            .handler()
            .map(|h| (h.dragged(), h.last_pressed()))
            .unwrap_or_default();
        let dragged = dragged.filter(|d| self.core.exists(*d));
        let clicked = last_pressed == Some(source);
        let receiver = dragged.unwrap_or(source);

        let count = self.click_count;
        self.distribute_mouse(receiver, MouseEventKind::Released, input, count, false)?;
        if clicked && self.core.exists(receiver) {
            self.distribute_mouse(receiver, MouseEventKind::Clicked, input, count, false)?;
        }

        if let Some(h) = self.core.focus_handler_mut(self.focus_handler) {
            h.dragged = None;
            h.last_pressed = None;
        }
        Ok(())
    }

    /// The chain of visible widgets under a screen point, from the top widget
    /// down to the deepest. Empty if the point is outside the top widget.
    fn chain_under(&self, top: NodeId, location: Point) -> Result<Vec<NodeId>> {
        let local = location - self.core.absolute_position(top)?;
        let inside = self.core.dimension(top)?.at_origin().contains_point(local);
        if !self.core.is_visible(top) || !inside {
            return Ok(Vec::new());
        }
        let mut chain = vec![top];
        let mut current = top;
        let mut p = local;
        while let Some(child) = self.core.widget_at(current, p, None) {
            let origin = self.core.children_area(current).map(|a| a.tl).unwrap_or_default();
            p = p - origin - self.core.dimension(child)?.tl;
            chain.push(child);
            current = child;
        }
        Ok(chain)
    }

    /// Send `Exited` to widgets that left the chain under the pointer and
    /// `Entered` to widgets that joined it.
    fn update_widgets_with_mouse(&mut self, chain: Vec<NodeId>, input: &MouseInput) -> Result<()> {
        let old = mem::take(&mut self.widgets_with_mouse);
        for id in old.iter().rev() {
            if !chain.contains(id) && self.core.exists(*id) {
                self.distribute_mouse(*id, MouseEventKind::Exited, input, 0, true)?;
            }
        }
        for id in &chain {
            if !old.contains(id) {
                self.distribute_mouse(*id, MouseEventKind::Entered, input, 0, true)?;
            }
        }
        if let Some(h) = self.core.focus_handler_mut(self.focus_handler) {
            h.last_with_mouse = chain.last().copied();
        }
        self.widgets_with_mouse = chain;
        Ok(())
    }

    /// Deliver a mouse event to `source` and then up its ancestors until it
    /// is consumed. Disabled widgets are passed over. Widgets outside the
    /// modal focus subtree receive nothing, and delivery never leaves the
    /// modal focus or modal mouse input focus subtree.
    fn distribute_mouse(
        &mut self,
        source: NodeId,
        kind: MouseEventKind,
        input: &MouseInput,
        click_count: u32,
        to_source_only: bool,
    ) -> Result<()> {
        if let Some(modal) = self.handler().and_then(FocusHandler::modal_focused)
            && !self.core.is_ancestor(modal, source)
        {
            return Ok(());
        }
        let mut target = Some(source);
        while let Some(id) = target {
            if self.core.is_enabled(id) {
                let event = self.mouse_event(kind, input, click_count, source, id)?;
                let outcome = distribute::mouse_event(&mut self.core, id, &event)?;
                if outcome.is_consumed() {
                    break;
                }
            }
            if to_source_only || self.is_modal_boundary(id, true) {
                break;
            }
            target = self.core.parent(id);
        }
        Ok(())
    }

    /// Build a mouse event located relative to its receiver.
    fn mouse_event(
        &self,
        kind: MouseEventKind,
        input: &MouseInput,
        click_count: u32,
        source: NodeId,
        distributor: NodeId,
    ) -> Result<MouseEvent> {
        Ok(MouseEvent {
            kind,
            button: input.button,
            location: input.location - self.core.absolute_position(distributor)?,
            click_count,
            modifiers: input.modifiers,
            source,
            distributor,
        })
    }

    /// Does bubbling stop at this widget because it holds modal focus (or,
    /// for mouse input, modal mouse input focus) in its handler?
    fn is_modal_boundary(&self, id: NodeId, mouse: bool) -> bool {
        [Some(self.focus_handler), self.core.focus_handler_of(id)]
            .into_iter()
            .flatten()
            .filter_map(|h| self.core.focus_handler(h))
            .any(|h| {
                h.modal_focused() == Some(id)
                    || (mouse && h.modal_mouse_input_focused() == Some(id))
            })
    }

    /// The top focus handler.
    fn handler(&self) -> Option<&FocusHandler> {
        self.core.focus_handler(self.focus_handler)
    }
}
