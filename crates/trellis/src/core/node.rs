use std::rc::Rc;

use crate::{
    FocusHandlerId, NodeId,
    font::Font,
    geom::Rect,
    listener::Listeners,
    style::Palette,
    widget::Widget,
};

/// Core node data stored in the arena.
pub struct Node {
    /// Widget behavior and state. Empty while one of the widget's hooks runs.
    pub(crate) widget: Option<Box<dyn Widget>>,
    /// Short type name of the widget, for diagnostics.
    pub(crate) type_name: &'static str,

    /// Parent in the arena tree.
    pub(crate) parent: Option<NodeId>,
    /// Children in the arena tree, in draw order.
    pub(crate) children: Vec<NodeId>,

    /// Position and size relative to the parent's children area.
    pub(crate) dimension: Rect,
    /// Children area reported by the widget for the current dimension.
    pub(crate) children_area: Option<Rect>,
    /// Frame thickness, drawn outside the dimension.
    pub(crate) frame_size: u32,
    /// Widget colors.
    pub(crate) palette: Palette,

    /// Accepts input when set and visible.
    pub(crate) enabled: bool,
    /// Own visibility flag; ancestors must be visible too.
    pub(crate) visible: bool,
    /// May receive focus.
    pub(crate) focusable: bool,
    /// May receive focus through tab navigation.
    pub(crate) tab_in: bool,
    /// May lose focus through tab navigation.
    pub(crate) tab_out: bool,

    /// Id carried by action events from this widget.
    pub(crate) action_event_id: String,
    /// Optional lookup id.
    pub(crate) id: Option<String>,
    /// Font override.
    pub(crate) font: Option<Rc<dyn Font>>,

    /// Registered listeners.
    pub(crate) listeners: Listeners,
    /// Focus handler that manages this node.
    pub(crate) focus_handler: Option<FocusHandlerId>,
    /// Independent focus handler for this node's descendants.
    pub(crate) internal_focus_handler: Option<FocusHandlerId>,
}

impl Node {
    /// Construct a detached node with the given defaults.
    pub(crate) fn new(widget: Box<dyn Widget>, palette: Palette, frame_size: u32) -> Self {
        let type_name = widget.name();
        let children_area = widget.children_area(Rect::zero());
        Self {
            widget: Some(widget),
            type_name,
            parent: None,
            children: Vec::new(),
            dimension: Rect::zero(),
            children_area,
            frame_size,
            palette,
            enabled: true,
            visible: true,
            focusable: false,
            tab_in: true,
            tab_out: true,
            action_event_id: String::new(),
            id: None,
            font: None,
            listeners: Listeners::default(),
            focus_handler: None,
            internal_focus_handler: None,
        }
    }

    /// Return the widget's type name.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Return the node's parent, if any.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Return the node's children.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Return the dimension relative to the parent's children area.
    pub fn dimension(&self) -> Rect {
        self.dimension
    }

    /// Return the children area relative to the node, if it shows children.
    pub fn children_area(&self) -> Option<Rect> {
        self.children_area
    }

    /// Return the frame size.
    pub fn frame_size(&self) -> u32 {
        self.frame_size
    }

    /// Return the palette.
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Return the node's own visibility flag, ignoring ancestors.
    pub fn visible_flag(&self) -> bool {
        self.visible
    }

    /// Return the node's own enabled flag, ignoring visibility.
    pub fn enabled_flag(&self) -> bool {
        self.enabled
    }

    /// Return the focusable flag, ignoring visibility and enabled state.
    pub fn focusable_flag(&self) -> bool {
        self.focusable
    }

    /// Return true if tab navigation may move focus into this node.
    pub fn tab_in_enabled(&self) -> bool {
        self.tab_in
    }

    /// Return true if tab navigation may move focus out of this node.
    pub fn tab_out_enabled(&self) -> bool {
        self.tab_out
    }

    /// Return the action event id.
    pub fn action_event_id(&self) -> &str {
        &self.action_event_id
    }

    /// Return the lookup id.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Return the focus handler managing this node.
    pub fn focus_handler(&self) -> Option<FocusHandlerId> {
        self.focus_handler
    }

    /// Return the internal focus handler, if the node owns one.
    pub fn internal_focus_handler(&self) -> Option<FocusHandlerId> {
        self.internal_focus_handler
    }

    /// Return true if a hook of this node's widget is currently running.
    pub fn is_busy(&self) -> bool {
        self.widget.is_none()
    }
}
