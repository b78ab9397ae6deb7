use tracing::debug;

use crate::{
    core::{
        distribute,
        id::{FocusHandlerId, NodeId},
        world::Core,
    },
    error::{Error, Result},
    event::FocusKind,
};

/// Focus state for one widget tree, or for the descendants of a node that
/// owns an internal focus handler.
#[derive(Debug, Default, Clone)]
pub struct FocusHandler {
    /// Managed widgets in registration order, which is also tab order.
    pub(crate) widgets: Vec<NodeId>,
    /// Widget holding keyboard focus.
    pub(crate) focused: Option<NodeId>,
    /// Widget whose subtree receives all input.
    pub(crate) modal_focused: Option<NodeId>,
    /// Widget whose subtree receives all mouse input.
    pub(crate) modal_mouse_input_focused: Option<NodeId>,
    /// Widget that received the last press while a button is held.
    pub(crate) dragged: Option<NodeId>,
    /// Widget that received the last press.
    pub(crate) last_pressed: Option<NodeId>,
    /// Innermost widget the pointer was last over.
    pub(crate) last_with_mouse: Option<NodeId>,
}

impl FocusHandler {
    /// Managed widgets in tab order.
    pub fn widgets(&self) -> &[NodeId] {
        &self.widgets
    }

    /// Widget holding focus.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Widget holding modal focus.
    pub fn modal_focused(&self) -> Option<NodeId> {
        self.modal_focused
    }

    /// Widget holding modal mouse input focus.
    pub fn modal_mouse_input_focused(&self) -> Option<NodeId> {
        self.modal_mouse_input_focused
    }

    /// Widget being dragged.
    pub fn dragged(&self) -> Option<NodeId> {
        self.dragged
    }

    /// Widget that received the last press.
    pub fn last_pressed(&self) -> Option<NodeId> {
        self.last_pressed
    }

    /// Innermost widget the pointer was last over.
    pub fn last_with_mouse(&self) -> Option<NodeId> {
        self.last_with_mouse
    }

    /// Forget every reference to a widget.
    fn forget(&mut self, id: NodeId) {
        self.widgets.retain(|w| *w != id);
        for slot in [
            &mut self.focused,
            &mut self.modal_focused,
            &mut self.modal_mouse_input_focused,
            &mut self.dragged,
            &mut self.last_pressed,
            &mut self.last_with_mouse,
        ] {
            if *slot == Some(id) {
                *slot = None;
            }
        }
    }
}

/// Trait for managing focus, modal focus and focus navigation.
pub trait FocusManager {
    /// Create a new, empty focus handler.
    fn create_focus_handler(&mut self) -> FocusHandlerId;

    /// Look up a focus handler.
    fn focus_handler(&self, handler: FocusHandlerId) -> Option<&FocusHandler>;

    /// Mutable access to a focus handler.
    fn focus_handler_mut(&mut self, handler: FocusHandlerId) -> Option<&mut FocusHandler>;

    /// The focus handler managing a node.
    fn focus_handler_of(&self, node: NodeId) -> Option<FocusHandlerId>;

    /// Install `handler` on a detached tree. Descendants of nodes with an
    /// internal focus handler stay with that handler.
    fn set_focus_handler(&mut self, root: NodeId, handler: Option<FocusHandlerId>) -> Result<()>;

    /// Give a node an internal focus handler for its descendants, creating
    /// one if needed. Descendants re-register with it.
    fn create_internal_focus_handler(&mut self, node: NodeId) -> Result<FocusHandlerId>;

    /// Does the node hold focus in its handler?
    fn is_focused(&self, node: NodeId) -> bool;

    /// Request focus for a node. Returns `true` if the node holds focus
    /// afterwards. Ignored for nodes that cannot be focused or that lie
    /// outside the current modal focus.
    fn request_focus(&mut self, node: NodeId) -> Result<bool>;

    /// Clear focus in a handler.
    fn focus_none(&mut self, handler: FocusHandlerId) -> Result<()>;

    /// Is the node, or one of its ancestors, the modal focus holder?
    fn is_modal_focused(&self, node: NodeId) -> bool;

    /// Is the node, or one of its ancestors, the modal mouse input focus
    /// holder?
    fn is_modal_mouse_input_focused(&self, node: NodeId) -> bool;

    /// Restrict input to the node's subtree. Fails with `ModalFocusHeld` if
    /// another node holds modal focus. Focus outside the subtree is cleared.
    fn request_modal_focus(&mut self, node: NodeId) -> Result<()>;

    /// Restrict mouse input to the node's subtree. Fails with
    /// `ModalMouseInputFocusHeld` if another node holds it.
    fn request_modal_mouse_input_focus(&mut self, node: NodeId) -> Result<()>;

    /// Release modal focus. Only the holder can release it.
    fn release_modal_focus(&mut self, node: NodeId) -> Result<()>;

    /// Release modal mouse input focus. Only the holder can release it.
    fn release_modal_mouse_input_focus(&mut self, node: NodeId) -> Result<()>;

    /// Focus the next focusable widget in registration order, wrapping.
    fn focus_next(&mut self, handler: FocusHandlerId) -> Result<()>;

    /// Focus the previous focusable widget in registration order, wrapping.
    fn focus_previous(&mut self, handler: FocusHandlerId) -> Result<()>;

    /// Like `focus_next`, but skips widgets with tab-in disabled and does
    /// nothing if the focused widget has tab-out disabled.
    fn tab_next(&mut self, handler: FocusHandlerId) -> Result<()>;

    /// Like `focus_previous`, but skips widgets with tab-in disabled and
    /// does nothing if the focused widget has tab-out disabled.
    fn tab_previous(&mut self, handler: FocusHandlerId) -> Result<()>;
}

impl FocusManager for Core {
    fn create_focus_handler(&mut self) -> FocusHandlerId {
        self.focus_handlers.insert(FocusHandler::default())
    }

    fn focus_handler(&self, handler: FocusHandlerId) -> Option<&FocusHandler> {
        self.focus_handlers.get(handler)
    }

    fn focus_handler_mut(&mut self, handler: FocusHandlerId) -> Option<&mut FocusHandler> {
        self.focus_handlers.get_mut(handler)
    }

    fn focus_handler_of(&self, node: NodeId) -> Option<FocusHandlerId> {
        self.nodes.get(node).and_then(|n| n.focus_handler)
    }

    fn set_focus_handler(&mut self, root: NodeId, handler: Option<FocusHandlerId>) -> Result<()> {
        self.node_ref(root)?;
        if let Some(h) = handler
            && !self.focus_handlers.contains_key(h)
        {
            return Err(Error::FocusHandlerNotFound);
        }
        set_focus_handler_subtree(self, root, handler);
        Ok(())
    }

    fn create_internal_focus_handler(&mut self, node: NodeId) -> Result<FocusHandlerId> {
        if let Some(h) = self.node_ref(node)?.internal_focus_handler {
            return Ok(h);
        }
        let h = self.create_focus_handler();
        let children = self.node_ref(node)?.children.clone();
        for child in &children {
            set_focus_handler_subtree(self, *child, None);
        }
        self.node_mut(node)?.internal_focus_handler = Some(h);
        for child in children {
            set_focus_handler_subtree(self, child, Some(h));
        }
        debug!(?node, "internal focus handler");
        Ok(h)
    }

    fn is_focused(&self, node: NodeId) -> bool {
        self.focus_handler_of(node)
            .and_then(|h| self.focus_handlers.get(h))
            .is_some_and(|h| h.focused == Some(node))
    }

    fn request_focus(&mut self, node: NodeId) -> Result<bool> {
        let h = self
            .node_ref(node)?
            .focus_handler
            .ok_or(Error::NoFocusHandler(node))?;
        let handler = self
            .focus_handlers
            .get(h)
            .ok_or(Error::FocusHandlerNotFound)?;
        if handler.focused == Some(node) {
            return Ok(true);
        }
        if !self.is_focusable(node) {
            return Ok(false);
        }
        if let Some(modal) = handler.modal_focused
            && !self.is_ancestor(modal, node)
        {
            return Ok(false);
        }
        change_focus(self, h, Some(node))?;
        Ok(true)
    }

    fn focus_none(&mut self, handler: FocusHandlerId) -> Result<()> {
        change_focus(self, handler, None)
    }

    fn is_modal_focused(&self, node: NodeId) -> bool {
        self.focus_handler_of(node)
            .and_then(|h| self.focus_handlers.get(h))
            .and_then(|h| h.modal_focused)
            .is_some_and(|m| self.is_ancestor(m, node))
    }

    fn is_modal_mouse_input_focused(&self, node: NodeId) -> bool {
        self.focus_handler_of(node)
            .and_then(|h| self.focus_handlers.get(h))
            .and_then(|h| h.modal_mouse_input_focused)
            .is_some_and(|m| self.is_ancestor(m, node))
    }

    fn request_modal_focus(&mut self, node: NodeId) -> Result<()> {
        let h = handler_for(self, node)?;
        let handler = self
            .focus_handlers
            .get_mut(h)
            .ok_or(Error::FocusHandlerNotFound)?;
        if let Some(holder) = handler.modal_focused
            && holder != node
        {
            return Err(Error::ModalFocusHeld(holder));
        }
        handler.modal_focused = Some(node);
        let focused = handler.focused;
        debug!(?node, "modal focus");
        if let Some(f) = focused
            && !self.is_ancestor(node, f)
        {
            change_focus(self, h, None)?;
        }
        Ok(())
    }

    fn request_modal_mouse_input_focus(&mut self, node: NodeId) -> Result<()> {
        let h = handler_for(self, node)?;
        let handler = self
            .focus_handlers
            .get_mut(h)
            .ok_or(Error::FocusHandlerNotFound)?;
        if let Some(holder) = handler.modal_mouse_input_focused
            && holder != node
        {
            return Err(Error::ModalMouseInputFocusHeld(holder));
        }
        handler.modal_mouse_input_focused = Some(node);
        debug!(?node, "modal mouse input focus");
        Ok(())
    }

    fn release_modal_focus(&mut self, node: NodeId) -> Result<()> {
        let h = handler_for(self, node)?;
        if let Some(handler) = self.focus_handlers.get_mut(h)
            && handler.modal_focused == Some(node)
        {
            handler.modal_focused = None;
            debug!(?node, "modal focus released");
        }
        Ok(())
    }

    fn release_modal_mouse_input_focus(&mut self, node: NodeId) -> Result<()> {
        let h = handler_for(self, node)?;
        if let Some(handler) = self.focus_handlers.get_mut(h)
            && handler.modal_mouse_input_focused == Some(node)
        {
            handler.modal_mouse_input_focused = None;
            debug!(?node, "modal mouse input focus released");
        }
        Ok(())
    }

    fn focus_next(&mut self, handler: FocusHandlerId) -> Result<()> {
        cycle_focus(self, handler, true, false)
    }

    fn focus_previous(&mut self, handler: FocusHandlerId) -> Result<()> {
        cycle_focus(self, handler, false, false)
    }

    fn tab_next(&mut self, handler: FocusHandlerId) -> Result<()> {
        cycle_focus(self, handler, true, true)
    }

    fn tab_previous(&mut self, handler: FocusHandlerId) -> Result<()> {
        cycle_focus(self, handler, false, true)
    }
}

/// The node's focus handler, or `NoFocusHandler`.
fn handler_for(core: &Core, node: NodeId) -> Result<FocusHandlerId> {
    core.node_ref(node)?
        .focus_handler
        .ok_or(Error::NoFocusHandler(node))
}

/// Move focus within a handler, sending `Lost` to the previous holder and
/// then `Gained` to the new one.
fn change_focus(core: &mut Core, h: FocusHandlerId, next: Option<NodeId>) -> Result<()> {
    let handler = core
        .focus_handlers
        .get_mut(h)
        .ok_or(Error::FocusHandlerNotFound)?;
    let prev = handler.focused;
    if prev == next {
        return Ok(());
    }
    handler.focused = next;
    debug!(?prev, ?next, "focus");
    if let Some(prev) = prev {
        distribute::focus_event(core, prev, FocusKind::Lost)?;
    }
    if let Some(next) = next {
        distribute::focus_event(core, next, FocusKind::Gained)?;
    }
    Ok(())
}

/// Cyclic search for the next candidate in registration order.
fn cycle_focus(core: &mut Core, h: FocusHandlerId, forward: bool, tabbing: bool) -> Result<()> {
    let handler = core
        .focus_handlers
        .get(h)
        .ok_or(Error::FocusHandlerNotFound)?;
    let widgets = handler.widgets.clone();
    let focused = handler.focused;
    let modal = handler.modal_focused;
    if widgets.is_empty() {
        return Ok(());
    }
    if tabbing
        && let Some(f) = focused
        && !core.is_tab_out_enabled(f)
    {
        return Ok(());
    }

    let n = widgets.len();
    let start = match focused.and_then(|f| widgets.iter().position(|w| *w == f)) {
        Some(i) => i,
        None if forward => n - 1,
        None => 0,
    };
    for step in 1..=n {
        let i = if forward {
            (start + step) % n
        } else {
            (start + n - step) % n
        };
        let candidate = widgets[i];
        let eligible = core.is_focusable(candidate)
            && modal.is_none_or(|m| core.is_ancestor(m, candidate))
            && (!tabbing || core.is_tab_in_enabled(candidate));
        if eligible {
            return change_focus(core, h, Some(candidate));
        }
    }
    Ok(())
}

/// Re-home a subtree's focus registrations. Nodes below a node with an
/// internal focus handler keep their registration.
pub fn set_focus_handler_subtree(core: &mut Core, root: NodeId, handler: Option<FocusHandlerId>) {
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        let Some(node) = core.nodes.get_mut(id) else {
            continue;
        };
        let old = node.focus_handler;
        node.focus_handler = handler;
        let descend = node.internal_focus_handler.is_none();
        let children = node.children.clone();
        if old != handler {
            if let Some(old) = old {
                unregister_focus(core, old, id);
            }
            if let Some(h) = handler.and_then(|h| core.focus_handlers.get_mut(h)) {
                h.widgets.push(id);
            }
        }
        if descend {
            stack.extend(children.into_iter().rev());
        }
    }
}

/// Remove a widget from a handler. Focus held by the widget is cleared
/// without notification.
pub fn unregister_focus(core: &mut Core, h: FocusHandlerId, id: NodeId) {
    if let Some(handler) = core.focus_handlers.get_mut(h) {
        handler.forget(id);
    }
}

/// Drop focus held by widgets that can no longer be focused.
pub fn drop_invalid_focus(core: &mut Core) -> Result<()> {
    let stale: Vec<FocusHandlerId> = core
        .focus_handlers
        .iter()
        .filter(|(_, h)| h.focused.is_some_and(|f| !core.is_focusable(f)))
        .map(|(id, _)| id)
        .collect();
    for h in stale {
        change_focus(core, h, None)?;
    }
    Ok(())
}
