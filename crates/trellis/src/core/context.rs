use std::rc::Rc;

use crate::{
    Core, FocusManager, NodeId,
    error::Result,
    font::Font,
    geom::{Point, Rect},
    style::Palette,
};

/// Mutable context handed to widget hooks.
///
/// Carries the arena and the id of the node whose hook is running. The
/// node's own widget is out of its slot for the duration of the hook, so
/// re-entering it through the context returns
/// [`Error::ReentrantWidget`](crate::error::Error::ReentrantWidget).
pub struct Context<'a> {
    /// The arena.
    core: &'a mut Core,
    /// Node whose hook is running.
    id: NodeId,
}

impl<'a> Context<'a> {
    /// Construct a context for a node.
    pub(crate) fn new(core: &'a mut Core, id: NodeId) -> Self {
        Self { core, id }
    }

    /// The node whose hook is running.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Shared access to the arena.
    pub fn core(&self) -> &Core {
        self.core
    }

    /// Mutable access to the arena.
    pub fn core_mut(&mut self) -> &mut Core {
        self.core
    }

    /// The node's dimension relative to its parent's children area.
    pub fn dimension(&self) -> Rect {
        self.core.dimension(self.id).unwrap_or_else(|_| Rect::zero())
    }

    /// Set the node's dimension, firing moved and resized events.
    pub fn set_dimension(&mut self, r: Rect) -> Result<()> {
        self.core.set_dimension(self.id, r)
    }

    /// The node's absolute position.
    pub fn absolute_position(&self) -> Point {
        self.core
            .absolute_position(self.id)
            .unwrap_or_else(|_| Point::zero())
    }

    /// The node's palette.
    pub fn palette(&self) -> Palette {
        self.core.palette(self.id).unwrap_or_default()
    }

    /// The node's effective font.
    pub fn font(&self) -> Rc<dyn Font> {
        self.core.font(self.id)
    }

    /// The node's children.
    pub fn children(&self) -> Vec<NodeId> {
        self.core.children(self.id).to_vec()
    }

    /// Does the node hold focus in its focus handler?
    pub fn is_focused(&self) -> bool {
        self.core.is_focused(self.id)
    }

    /// Request focus for the node. Returns `true` if the node holds focus
    /// afterwards.
    pub fn request_focus(&mut self) -> Result<bool> {
        self.core.request_focus(self.id)
    }

    /// Fire an action event from the node.
    pub fn distribute_action_event(&mut self) -> Result<()> {
        self.core.distribute_action_event(self.id)
    }
}

/// Read-only context handed to draw hooks.
pub struct DrawContext<'a> {
    /// The arena.
    core: &'a Core,
    /// Node being drawn.
    id: NodeId,
}

impl<'a> DrawContext<'a> {
    /// Construct a draw context for a node.
    pub(crate) fn new(core: &'a Core, id: NodeId) -> Self {
        Self { core, id }
    }

    /// The node being drawn.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Shared access to the arena.
    pub fn core(&self) -> &Core {
        self.core
    }

    /// The node's dimension relative to its parent's children area.
    pub fn dimension(&self) -> Rect {
        self.core.dimension(self.id).unwrap_or_else(|_| Rect::zero())
    }

    /// The node's frame size.
    pub fn frame_size(&self) -> u32 {
        self.core.frame_size(self.id).unwrap_or(0)
    }

    /// The node's palette.
    pub fn palette(&self) -> Palette {
        self.core.palette(self.id).unwrap_or_default()
    }

    /// The node's effective font.
    pub fn font(&self) -> Rc<dyn Font> {
        self.core.font(self.id)
    }

    /// Does the node hold focus in its focus handler?
    pub fn is_focused(&self) -> bool {
        self.core.is_focused(self.id)
    }
}
