use std::{
    any::{Any, type_name},
    rc::{Rc, Weak},
};

use slotmap::SlotMap;
use tracing::{debug, trace};

use crate::{
    Context, FocusHandlerId, NodeId, TypedId,
    core::{
        distribute, draw,
        focus::{self, FocusHandler},
        hit,
    },
    error::{Error, Result},
    event::WidgetEventKind,
    font::{DefaultFont, Font},
    geom::{Point, Rect},
    graphics::Graphics,
    listener::{
        ActionListener, DeathListener, FocusListener, KeyListener, MouseListener, WidgetListener,
    },
    node::Node,
    style::{Color, Palette},
    widget::Widget,
};

/// Generate registration methods for each listener category.
macro_rules! listener_methods {
    ($($field:ident: $trait:ident => $add:ident, $remove:ident;)*) => {
        $(
            #[doc = concat!("Register a [`", stringify!($trait), "`] on a node. The node keeps a")]
            #[doc = "non-owning reference; dropping the last `Rc` unregisters it."]
            pub fn $add<L>(&mut self, id: impl Into<NodeId>, listener: &Rc<L>) -> Result<()>
            where
                L: $trait + 'static,
            {
                let weak = Rc::downgrade(listener) as Weak<dyn $trait>;
                self.node_mut(id.into())?.listeners.$field.add(weak);
                Ok(())
            }

            #[doc = concat!("Unregister a [`", stringify!($trait), "`]. Returns `true` if it was registered.")]
            pub fn $remove<L>(&mut self, id: impl Into<NodeId>, listener: &Rc<L>) -> Result<bool>
            where
                L: $trait + 'static,
            {
                let weak = Rc::downgrade(listener) as Weak<dyn $trait>;
                Ok(self.node_mut(id.into())?.listeners.$field.remove(&weak))
            }
        )*
    };
}

/// Core state: the widget arena, focus handlers and shared defaults.
pub struct Core {
    /// Node storage arena.
    pub(crate) nodes: SlotMap<NodeId, Node>,
    /// Focus handler storage.
    pub(crate) focus_handlers: SlotMap<FocusHandlerId, FocusHandler>,
    /// Font used by nodes without an override.
    pub(crate) global_font: Rc<dyn Font>,
    /// Palette given to newly created nodes.
    pub(crate) default_palette: Palette,
    /// Frame size given to newly created nodes.
    pub(crate) default_frame_size: u32,
}

impl Default for Core {
    fn default() -> Self {
        Self::new()
    }
}

impl Core {
    /// Create an empty arena with the built-in palette and font.
    pub fn new() -> Self {
        Self::with_defaults(Palette::default(), 0)
    }

    /// Create an empty arena whose new nodes start with the given palette
    /// and frame size.
    pub fn with_defaults(palette: Palette, frame_size: u32) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            focus_handlers: SlotMap::with_key(),
            global_font: Rc::new(DefaultFont::default()),
            default_palette: palette,
            default_frame_size: frame_size,
        }
    }

    /// Return a reference to a node by id.
    pub fn node(&self, id: impl Into<NodeId>) -> Option<&Node> {
        self.nodes.get(id.into())
    }

    /// Return a node or a `NodeNotFound` error.
    pub(crate) fn node_ref(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id).ok_or(Error::NodeNotFound(id))
    }

    /// Return a mutable node or a `NodeNotFound` error.
    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(id).ok_or(Error::NodeNotFound(id))
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Create a detached node holding `widget`.
    pub fn create<W>(&mut self, widget: W) -> TypedId<W>
    where
        W: Widget + 'static,
    {
        TypedId::new(self.create_boxed(Box::new(widget)))
    }

    /// Create a detached node from a boxed widget.
    pub fn create_boxed(&mut self, widget: Box<dyn Widget>) -> NodeId {
        let node = Node::new(widget, self.default_palette, self.default_frame_size);
        let name = node.type_name;
        let id = self.nodes.insert(node);
        trace!(?id, name, "create");
        id
    }

    /// Is the widget still alive? Node ids are generational, so an id whose
    /// widget has been destroyed never refers to another widget.
    pub fn exists(&self, id: impl Into<NodeId>) -> bool {
        self.nodes.contains_key(id.into())
    }

    /// The node's parent, if it is attached.
    pub fn parent(&self, id: impl Into<NodeId>) -> Option<NodeId> {
        self.nodes.get(id.into()).and_then(|n| n.parent)
    }

    /// The node's children in draw order. Empty for unknown nodes.
    pub fn children(&self, id: impl Into<NodeId>) -> &[NodeId] {
        self.nodes
            .get(id.into())
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// The root of the tree the node belongs to.
    pub fn top(&self, id: impl Into<NodeId>) -> NodeId {
        let mut current = id.into();
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        current
    }

    /// Return true if `ancestor` is `node` or appears in its parent chain.
    pub fn is_ancestor(&self, ancestor: impl Into<NodeId>, node: impl Into<NodeId>) -> bool {
        let ancestor = ancestor.into();
        let mut current = Some(node.into());
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Attach a detached child as the last child of `parent`. The child's
    /// subtree joins the parent's focus handler, or the parent's internal
    /// focus handler if it has one.
    pub fn add(&mut self, parent: impl Into<NodeId>, child: impl Into<NodeId>) -> Result<()> {
        let parent = parent.into();
        let child = child.into();
        let handler = {
            let p = self.node_ref(parent)?;
            p.internal_focus_handler.or(p.focus_handler)
        };
        if self.node_ref(child)?.parent.is_some() {
            return Err(Error::AlreadyAttached(child));
        }
        if self.is_ancestor(child, parent) {
            return Err(Error::WouldCreateCycle { parent, child });
        }

        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(child);
        }
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = Some(parent);
        }
        focus::set_focus_handler_subtree(self, child, handler);
        debug!(?parent, ?child, "add");
        Ok(())
    }

    /// Detach `child` from `parent`. The child stays alive.
    pub fn remove(&mut self, parent: impl Into<NodeId>, child: impl Into<NodeId>) -> Result<()> {
        let parent = parent.into();
        let child = child.into();
        if !self.node_ref(parent)?.children.contains(&child) {
            return Err(Error::NotAChild { parent, child });
        }
        self.detach_inner(child);
        Ok(())
    }

    /// Detach a node from its parent, if it has one.
    pub fn detach(&mut self, child: impl Into<NodeId>) -> Result<()> {
        let child = child.into();
        if self.node_ref(child)?.parent.is_some() {
            self.detach_inner(child);
        }
        Ok(())
    }

    /// Detach every child of `parent`. The children stay alive.
    pub fn clear(&mut self, parent: impl Into<NodeId>) -> Result<()> {
        let parent = parent.into();
        let children = self.node_ref(parent)?.children.clone();
        for child in children {
            self.detach_inner(child);
        }
        Ok(())
    }

    /// Unlink a child from its parent and from its focus handler.
    fn detach_inner(&mut self, child: NodeId) {
        let Some(parent) = self.parent(child) else {
            return;
        };
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.retain(|id| *id != child);
        }
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = None;
        }
        focus::set_focus_handler_subtree(self, child, None);
        debug!(?parent, ?child, "detach");
    }

    /// Destroy a node and its subtree.
    ///
    /// Destroy hooks run first, in pre-order; a hook may detach descendants
    /// it wants to keep. Death listeners of every remaining node are then
    /// notified, children before parents, and the nodes leave the arena.
    pub fn destroy(&mut self, id: impl Into<NodeId>) -> Result<()> {
        let id = id.into();
        self.node_ref(id)?;

        for node in self.subtree_pre_order(id) {
            if !self.is_ancestor(id, node) {
                continue;
            }
            self.run_hook(node, |w, ctx| w.on_destroy(ctx))?;
        }

        self.detach_inner(id);
        let doomed = self.subtree_post_order(id);
        for node in &doomed {
            distribute::death_event(self, *node);
        }
        for node in &doomed {
            if let Some(n) = self.nodes.remove(*node) {
                if let Some(h) = n.focus_handler {
                    focus::unregister_focus(self, h, *node);
                }
                if let Some(h) = n.internal_focus_handler {
                    self.focus_handlers.remove(h);
                }
            }
        }
        debug!(?id, count = doomed.len(), "destroy");
        Ok(())
    }

    /// Collect a subtree in pre-order, including the root.
    pub(crate) fn subtree_pre_order(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(node_id) = stack.pop() {
            let Some(node) = self.nodes.get(node_id) else {
                continue;
            };
            out.push(node_id);
            for child in node.children.iter().rev() {
                stack.push(*child);
            }
        }
        out
    }

    /// Collect a subtree in post-order, including the root.
    pub(crate) fn subtree_post_order(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![(root, false)];
        while let Some((node_id, visited)) = stack.pop() {
            let Some(node) = self.nodes.get(node_id) else {
                continue;
            };
            if visited {
                out.push(node_id);
                continue;
            }
            stack.push((node_id, true));
            for child in node.children.iter().rev() {
                stack.push((*child, false));
            }
        }
        out
    }

    /// Move a node to the end of its parent's child list, so it is drawn
    /// last and hit first.
    pub fn move_to_top(&mut self, id: impl Into<NodeId>) -> Result<()> {
        let id = id.into();
        if let Some(parent) = self.node_ref(id)?.parent
            && let Some(node) = self.nodes.get_mut(parent)
        {
            node.children.retain(|c| *c != id);
            node.children.push(id);
        }
        Ok(())
    }

    /// Move a node to the start of its parent's child list, so it is drawn
    /// first and hit last.
    pub fn move_to_bottom(&mut self, id: impl Into<NodeId>) -> Result<()> {
        let id = id.into();
        if let Some(parent) = self.node_ref(id)?.parent
            && let Some(node) = self.nodes.get_mut(parent)
        {
            node.children.retain(|c| *c != id);
            node.children.insert(0, id);
        }
        Ok(())
    }

    /// Depth-first search of the descendants of `root` for a node whose id
    /// string equals `name`.
    pub fn find_widget_by_id(&self, root: impl Into<NodeId>, name: &str) -> Option<NodeId> {
        let root = root.into();
        self.subtree_pre_order(root)
            .into_iter()
            .skip(1)
            .find(|id| self.nodes.get(*id).and_then(|n| n.id.as_deref()) == Some(name))
    }

    /// Resize a node so that it exactly encloses its children.
    pub fn resize_to_children(&mut self, id: impl Into<NodeId>) -> Result<()> {
        let id = id.into();
        let mut w = 0i64;
        let mut h = 0i64;
        for child in &self.node_ref(id)?.children {
            if let Some(c) = self.nodes.get(*child) {
                w = w.max(c.dimension.right() as i64);
                h = h.max(c.dimension.bottom() as i64);
            }
        }
        self.set_size(id, w.clamp(0, u32::MAX as i64) as u32, h.clamp(0, u32::MAX as i64) as u32)
    }

    /// The node's dimension relative to its parent's children area.
    pub fn dimension(&self, id: impl Into<NodeId>) -> Result<Rect> {
        Ok(self.node_ref(id.into())?.dimension)
    }

    /// Set the node's dimension. Fires `Resized` if the size changed, then
    /// `Moved` if the position changed.
    pub fn set_dimension(&mut self, id: impl Into<NodeId>, r: Rect) -> Result<()> {
        let id = id.into();
        let node = self.node_mut(id)?;
        let old = node.dimension;
        node.dimension = r;
        if let Some(w) = node.widget.as_deref() {
            node.children_area = w.children_area(r.at_origin());
        }
        if old.w != r.w || old.h != r.h {
            distribute::widget_event(self, id, WidgetEventKind::Resized)?;
        }
        if old.tl != r.tl {
            distribute::widget_event(self, id, WidgetEventKind::Moved)?;
        }
        Ok(())
    }

    /// Set the node's position.
    pub fn set_position(&mut self, id: impl Into<NodeId>, p: impl Into<Point>) -> Result<()> {
        let id = id.into();
        let dim = self.dimension(id)?;
        let p = p.into();
        self.set_dimension(id, Rect::new(p.x, p.y, dim.w, dim.h))
    }

    /// Set the node's size.
    pub fn set_size(&mut self, id: impl Into<NodeId>, w: u32, h: u32) -> Result<()> {
        let id = id.into();
        let dim = self.dimension(id)?;
        self.set_dimension(id, Rect::new(dim.tl.x, dim.tl.y, w, h))
    }

    /// Set the node's x coordinate.
    pub fn set_x(&mut self, id: impl Into<NodeId>, x: i32) -> Result<()> {
        let id = id.into();
        let dim = self.dimension(id)?;
        self.set_position(id, (x, dim.tl.y))
    }

    /// Set the node's y coordinate.
    pub fn set_y(&mut self, id: impl Into<NodeId>, y: i32) -> Result<()> {
        let id = id.into();
        let dim = self.dimension(id)?;
        self.set_position(id, (dim.tl.x, y))
    }

    /// Set the node's width.
    pub fn set_width(&mut self, id: impl Into<NodeId>, w: u32) -> Result<()> {
        let id = id.into();
        let dim = self.dimension(id)?;
        self.set_size(id, w, dim.h)
    }

    /// Set the node's height.
    pub fn set_height(&mut self, id: impl Into<NodeId>, h: u32) -> Result<()> {
        let id = id.into();
        let dim = self.dimension(id)?;
        self.set_size(id, dim.w, h)
    }

    /// The node's position in screen space: its parent's absolute position,
    /// plus the origin of the parent's children area, plus its own relative
    /// position.
    pub fn absolute_position(&self, id: impl Into<NodeId>) -> Result<Point> {
        let mut node = self.node_ref(id.into())?;
        let mut pos = node.dimension.tl;
        while let Some(parent) = node.parent {
            node = self.node_ref(parent)?;
            let area = node.children_area.map(|a| a.tl).unwrap_or_default();
            pos = pos + area + node.dimension.tl;
        }
        Ok(pos)
    }

    /// The node's children area, relative to the node.
    pub fn children_area(&self, id: impl Into<NodeId>) -> Option<Rect> {
        self.nodes.get(id.into()).and_then(|n| n.children_area)
    }

    /// Is the node visible? A node is visible only if it and every ancestor
    /// have their visible flag set.
    pub fn is_visible(&self, id: impl Into<NodeId>) -> bool {
        let mut current = Some(id.into());
        let mut seen = false;
        while let Some(id) = current {
            let Some(node) = self.nodes.get(id) else {
                return false;
            };
            if !node.visible {
                return false;
            }
            seen = true;
            current = node.parent;
        }
        seen
    }

    /// Hide or show a node. Focus held by a node that is no longer
    /// focusable is dropped before `Hidden` fires.
    pub fn set_visible(&mut self, id: impl Into<NodeId>, visible: bool) -> Result<()> {
        let id = id.into();
        let node = self.node_mut(id)?;
        if node.visible == visible {
            return Ok(());
        }
        node.visible = visible;
        focus::drop_invalid_focus(self)?;
        let kind = if visible {
            WidgetEventKind::Shown
        } else {
            WidgetEventKind::Hidden
        };
        distribute::widget_event(self, id, kind)
    }

    /// Is the node enabled? Requires its enabled flag and visibility.
    pub fn is_enabled(&self, id: impl Into<NodeId>) -> bool {
        let id = id.into();
        self.nodes.get(id).is_some_and(|n| n.enabled) && self.is_visible(id)
    }

    /// Enable or disable a node. Disabling drops its focus.
    pub fn set_enabled(&mut self, id: impl Into<NodeId>, enabled: bool) -> Result<()> {
        let id = id.into();
        self.node_mut(id)?.enabled = enabled;
        focus::drop_invalid_focus(self)
    }

    /// Can the node receive focus? Requires its focusable flag, visibility
    /// and enabled state.
    pub fn is_focusable(&self, id: impl Into<NodeId>) -> bool {
        let id = id.into();
        self.nodes.get(id).is_some_and(|n| n.focusable) && self.is_enabled(id)
    }

    /// Set the focusable flag. Clearing it drops the node's focus.
    pub fn set_focusable(&mut self, id: impl Into<NodeId>, focusable: bool) -> Result<()> {
        let id = id.into();
        self.node_mut(id)?.focusable = focusable;
        focus::drop_invalid_focus(self)
    }

    /// May tab navigation move focus into the node?
    pub fn is_tab_in_enabled(&self, id: impl Into<NodeId>) -> bool {
        self.nodes.get(id.into()).is_some_and(|n| n.tab_in)
    }

    /// Allow or forbid tab navigation into the node.
    pub fn set_tab_in_enabled(&mut self, id: impl Into<NodeId>, enabled: bool) -> Result<()> {
        self.node_mut(id.into())?.tab_in = enabled;
        Ok(())
    }

    /// May tab navigation move focus out of the node?
    pub fn is_tab_out_enabled(&self, id: impl Into<NodeId>) -> bool {
        self.nodes.get(id.into()).is_some_and(|n| n.tab_out)
    }

    /// Allow or forbid tab navigation out of the node.
    pub fn set_tab_out_enabled(&mut self, id: impl Into<NodeId>, enabled: bool) -> Result<()> {
        self.node_mut(id.into())?.tab_out = enabled;
        Ok(())
    }

    /// The node's frame size.
    pub fn frame_size(&self, id: impl Into<NodeId>) -> Result<u32> {
        Ok(self.node_ref(id.into())?.frame_size)
    }

    /// Set the node's frame size.
    pub fn set_frame_size(&mut self, id: impl Into<NodeId>, frame_size: u32) -> Result<()> {
        self.node_mut(id.into())?.frame_size = frame_size;
        Ok(())
    }

    /// The node's palette.
    pub fn palette(&self, id: impl Into<NodeId>) -> Result<Palette> {
        Ok(self.node_ref(id.into())?.palette)
    }

    /// Replace the node's palette.
    pub fn set_palette(&mut self, id: impl Into<NodeId>, palette: Palette) -> Result<()> {
        self.node_mut(id.into())?.palette = palette;
        Ok(())
    }

    /// Set the node's base color.
    pub fn set_base_color(&mut self, id: impl Into<NodeId>, c: Color) -> Result<()> {
        self.node_mut(id.into())?.palette.base = c;
        Ok(())
    }

    /// Set the node's foreground color.
    pub fn set_foreground_color(&mut self, id: impl Into<NodeId>, c: Color) -> Result<()> {
        self.node_mut(id.into())?.palette.foreground = c;
        Ok(())
    }

    /// Set the node's background color.
    pub fn set_background_color(&mut self, id: impl Into<NodeId>, c: Color) -> Result<()> {
        self.node_mut(id.into())?.palette.background = c;
        Ok(())
    }

    /// Set the node's selection color.
    pub fn set_selection_color(&mut self, id: impl Into<NodeId>, c: Color) -> Result<()> {
        self.node_mut(id.into())?.palette.selection = c;
        Ok(())
    }

    /// The id carried by action events from the node.
    pub fn action_event_id(&self, id: impl Into<NodeId>) -> Result<&str> {
        Ok(&self.node_ref(id.into())?.action_event_id)
    }

    /// Set the id carried by action events from the node.
    pub fn set_action_event_id(
        &mut self,
        id: impl Into<NodeId>,
        action: impl Into<String>,
    ) -> Result<()> {
        self.node_mut(id.into())?.action_event_id = action.into();
        Ok(())
    }

    /// The node's lookup id.
    pub fn id(&self, id: impl Into<NodeId>) -> Option<&str> {
        self.nodes.get(id.into()).and_then(|n| n.id.as_deref())
    }

    /// Set the node's lookup id, used by
    /// [`find_widget_by_id`](Self::find_widget_by_id).
    pub fn set_id(&mut self, id: impl Into<NodeId>, name: impl Into<String>) -> Result<()> {
        self.node_mut(id.into())?.id = Some(name.into());
        Ok(())
    }

    /// The node's effective font: its override, or the global font.
    pub fn font(&self, id: impl Into<NodeId>) -> Rc<dyn Font> {
        self.nodes
            .get(id.into())
            .and_then(|n| n.font.clone())
            .unwrap_or_else(|| self.global_font.clone())
    }

    /// Set or clear the node's font override and notify its widget.
    pub fn set_font(&mut self, id: impl Into<NodeId>, font: Option<Rc<dyn Font>>) -> Result<()> {
        let id = id.into();
        self.node_mut(id)?.font = font;
        self.run_hook(id, |w, ctx| w.font_changed(ctx))?;
        Ok(())
    }

    /// The font used by nodes without an override.
    pub fn global_font(&self) -> Rc<dyn Font> {
        self.global_font.clone()
    }

    /// Replace the global font and notify every widget that uses it.
    pub fn set_global_font(&mut self, font: Rc<dyn Font>) -> Result<()> {
        self.global_font = font;
        let affected: Vec<NodeId> = self
            .nodes
            .iter()
            .filter(|(_, n)| n.font.is_none())
            .map(|(id, _)| id)
            .collect();
        for id in affected {
            self.run_hook(id, |w, ctx| w.font_changed(ctx))?;
        }
        Ok(())
    }

    /// Take a node's widget out of its slot for a single call. The widget
    /// is put back afterwards unless the node was destroyed meanwhile.
    pub(crate) fn with_widget_mut<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut dyn Widget, &mut Self) -> R,
    ) -> Result<R> {
        let mut widget = self
            .node_mut(id)?
            .widget
            .take()
            .ok_or(Error::ReentrantWidget(id))?;
        let out = f(widget.as_mut(), self);
        if let Some(node) = self.nodes.get_mut(id) {
            node.children_area = widget.children_area(node.dimension.at_origin());
            node.widget = Some(widget);
        }
        Ok(out)
    }

    /// Run a hook on a node's widget. Missing nodes and widgets whose own
    /// hook is already running are skipped.
    pub(crate) fn run_hook<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut dyn Widget, &mut Context) -> Result<R>,
    ) -> Result<Option<R>> {
        let out = self.with_widget_mut(id, |w, core| {
            let mut ctx = Context::new(core, id);
            f(w, &mut ctx)
        });
        match out {
            Ok(r) => r.map(Some),
            Err(Error::NodeNotFound(_) | Error::ReentrantWidget(_)) => {
                trace!(?id, "hook skipped");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Execute a closure with mutable access to a widget of type `W`.
    pub fn with_widget<W, R>(
        &mut self,
        id: impl Into<NodeId>,
        f: impl FnOnce(&mut W, &mut Context) -> Result<R>,
    ) -> Result<R>
    where
        W: Widget + 'static,
    {
        let id = id.into();
        self.with_widget_mut(id, |widget, core| {
            let any = widget as &mut dyn Any;
            let widget = any.downcast_mut::<W>().ok_or(Error::WrongWidgetType {
                node: id,
                expected: type_name::<W>(),
            })?;
            let mut ctx = Context::new(core, id);
            f(widget, &mut ctx)
        })?
    }

    /// Execute a closure with mutable access to a widget using a typed node
    /// ID.
    pub fn with_typed<W, R>(
        &mut self,
        id: TypedId<W>,
        f: impl FnOnce(&mut W, &mut Context) -> Result<R>,
    ) -> Result<R>
    where
        W: Widget + 'static,
    {
        self.with_widget(id, f)
    }

    /// Shared access to a widget of type `W`. Returns `None` if the node is
    /// missing, holds another type, or is running a hook.
    pub fn widget<W>(&self, id: impl Into<NodeId>) -> Option<&W>
    where
        W: Widget + 'static,
    {
        let widget = self.nodes.get(id.into())?.widget.as_deref()?;
        (widget as &dyn Any).downcast_ref::<W>()
    }

    /// Fire an action event from a node, carrying its action event id.
    pub fn distribute_action_event(&mut self, id: impl Into<NodeId>) -> Result<()> {
        distribute::action_event(self, id.into())
    }

    /// The child of `id` under `p`, which is relative to `id`. Children are
    /// searched top-most first; invisible children and `exclude` are
    /// skipped. Nodes without a children area never report a child.
    pub fn widget_at(
        &self,
        id: impl Into<NodeId>,
        p: impl Into<Point>,
        exclude: Option<NodeId>,
    ) -> Option<NodeId> {
        hit::child_at(self, id.into(), p.into(), exclude)
    }

    /// The deepest descendant of `id` under `p`, which is relative to `id`.
    pub fn widget_at_deep(
        &self,
        id: impl Into<NodeId>,
        p: impl Into<Point>,
        exclude: Option<NodeId>,
    ) -> Option<NodeId> {
        hit::deepest_at(self, id.into(), p.into(), exclude)
    }

    /// Every visible child of `id` intersecting `area`, in child order.
    pub fn widgets_in(
        &self,
        id: impl Into<NodeId>,
        area: Rect,
        ignore: Option<NodeId>,
    ) -> Vec<NodeId> {
        hit::children_in(self, id.into(), area, ignore)
    }

    /// Draw a node and its visible descendants.
    pub fn draw(&mut self, g: &mut dyn Graphics, id: impl Into<NodeId>) -> Result<()> {
        draw::draw(self, g, id.into())
    }

    /// Tick a node and its descendants.
    pub fn logic(&mut self, id: impl Into<NodeId>) -> Result<()> {
        draw::logic(self, id.into())
    }

    listener_methods! {
        action: ActionListener => add_action_listener, remove_action_listener;
        death: DeathListener => add_death_listener, remove_death_listener;
        focus: FocusListener => add_focus_listener, remove_focus_listener;
        key: KeyListener => add_key_listener, remove_key_listener;
        mouse: MouseListener => add_mouse_listener, remove_mouse_listener;
        widget: WidgetListener => add_widget_listener, remove_widget_listener;
    }
}
