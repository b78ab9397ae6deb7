//! Delivery of toolkit events to widget hooks and listeners.
//!
//! Every delivery first runs the receiving widget's hook, then the node's
//! listeners in registration order. Listener lists are snapshotted before
//! delivery, so callbacks may register or drop listeners freely.

use tracing::trace;

use crate::{
    Core, EventOutcome, NodeId,
    error::Result,
    event::{
        ActionEvent, DeathEvent, FocusEvent, FocusKind, KeyEvent, MouseEvent, WidgetEvent,
        WidgetEventKind,
    },
    listener::{deliver_focus, deliver_key, deliver_mouse, deliver_widget},
};

/// Fire a widget event from `id`. Moved, Hidden and Shown are also sent as
/// their ancestor variants to every descendant, in pre-order.
pub fn widget_event(core: &mut Core, id: NodeId, kind: WidgetEventKind) -> Result<()> {
    trace!(?id, ?kind, "widget event");
    deliver_widget_event(core, id, &WidgetEvent { source: id, kind })?;
    if let Some(ancestor) = kind.ancestor_kind() {
        let event = WidgetEvent {
            source: id,
            kind: ancestor,
        };
        for node in core.subtree_pre_order(id).into_iter().skip(1) {
            deliver_widget_event(core, node, &event)?;
        }
    }
    Ok(())
}

/// Deliver a widget event to a single node.
fn deliver_widget_event(core: &mut Core, id: NodeId, event: &WidgetEvent) -> Result<()> {
    core.run_hook(id, |w, ctx| w.on_widget_event(event, ctx))?;
    let listeners = core
        .nodes
        .get(id)
        .map(|n| n.listeners.widget.snapshot())
        .unwrap_or_default();
    for l in listeners {
        deliver_widget(l.as_ref(), event, core);
    }
    Ok(())
}

/// Fire an action event from a node, carrying its action event id.
pub fn action_event(core: &mut Core, id: NodeId) -> Result<()> {
    let event = ActionEvent {
        source: id,
        id: core.node_ref(id)?.action_event_id.clone(),
    };
    trace!(?id, action = event.id, "action event");
    core.run_hook(id, |w, ctx| w.on_action(&event, ctx))?;
    let listeners = core
        .nodes
        .get(id)
        .map(|n| n.listeners.action.snapshot())
        .unwrap_or_default();
    for l in listeners {
        l.action(&event, core);
    }
    Ok(())
}

/// Deliver a focus change to a node.
pub fn focus_event(core: &mut Core, id: NodeId, kind: FocusKind) -> Result<()> {
    let event = FocusEvent { source: id, kind };
    core.run_hook(id, |w, ctx| w.on_focus(&event, ctx))?;
    let listeners = core
        .nodes
        .get(id)
        .map(|n| n.listeners.focus.snapshot())
        .unwrap_or_default();
    for l in listeners {
        deliver_focus(l.as_ref(), &event, core);
    }
    Ok(())
}

/// Tell a node's death listeners that it is about to leave the arena.
pub fn death_event(core: &mut Core, id: NodeId) {
    let event = DeathEvent { source: id };
    let listeners = core
        .nodes
        .get(id)
        .map(|n| n.listeners.death.snapshot())
        .unwrap_or_default();
    for l in listeners {
        l.death(&event, core);
    }
}

/// Deliver a key event to one node: the widget hook, then every key
/// listener. Returns the merged outcome.
pub fn key_event(core: &mut Core, id: NodeId, event: &KeyEvent) -> Result<EventOutcome> {
    let mut outcome = core
        .run_hook(id, |w, ctx| w.on_key(event, ctx))?
        .unwrap_or(EventOutcome::Ignore);
    let listeners = core
        .nodes
        .get(id)
        .map(|n| n.listeners.key.snapshot())
        .unwrap_or_default();
    for l in listeners {
        outcome = outcome.merge(deliver_key(l.as_ref(), event, core));
    }
    Ok(outcome)
}

/// Deliver a mouse event to one node: the widget hook, then every mouse
/// listener. Returns the merged outcome.
pub fn mouse_event(core: &mut Core, id: NodeId, event: &MouseEvent) -> Result<EventOutcome> {
    let mut outcome = core
        .run_hook(id, |w, ctx| w.on_mouse(event, ctx))?
        .unwrap_or(EventOutcome::Ignore);
    let listeners = core
        .nodes
        .get(id)
        .map(|n| n.listeners.mouse.snapshot())
        .unwrap_or_default();
    for l in listeners {
        outcome = outcome.merge(deliver_mouse(l.as_ref(), event, core));
    }
    Ok(outcome)
}
