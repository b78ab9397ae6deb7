use std::result::Result as StdResult;

use thiserror::Error;

use crate::NodeId;

/// Result type for trellis operations.
pub type Result<T> = StdResult<T, Error>;

/// Core error type.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// A node id does not refer to a live widget.
    #[error("node not found: {0:?}")]
    NodeNotFound(NodeId),

    /// The child already sits in another parent's child list.
    #[error("node {0:?} already has a parent")]
    AlreadyAttached(NodeId),

    /// Attaching would make a node its own ancestor.
    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    WouldCreateCycle {
        /// Proposed parent.
        parent: NodeId,
        /// Proposed child.
        child: NodeId,
    },

    /// The node is not a direct child of the parent.
    #[error("{child:?} is not a child of {parent:?}")]
    NotAChild {
        /// Expected parent.
        parent: NodeId,
        /// Node that was not found among its children.
        child: NodeId,
    },

    /// Another widget already holds modal focus.
    #[error("modal focus is already held by {0:?}")]
    ModalFocusHeld(NodeId),

    /// Another widget already holds modal mouse input focus.
    #[error("modal mouse input focus is already held by {0:?}")]
    ModalMouseInputFocusHeld(NodeId),

    /// The widget is not managed by any focus handler. Usually the widget has
    /// not been added to a tree that is installed in a `Gui`.
    #[error("no focus handler for {0:?}")]
    NoFocusHandler(NodeId),

    /// A focus handler id is stale.
    #[error("focus handler not found")]
    FocusHandlerNotFound,

    /// The widget stored at a node is not of the requested type.
    #[error("widget at {node:?} is not a {expected}")]
    WrongWidgetType {
        /// Node that was inspected.
        node: NodeId,
        /// Requested type name.
        expected: &'static str,
    },

    /// The widget is currently running a hook and cannot be borrowed again.
    #[error("widget at {0:?} is already in use")]
    ReentrantWidget(NodeId),

    /// A tab index was outside the tab list.
    #[error("tab index {index} out of range ({count} tabs)")]
    TabIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of tabs.
        count: usize,
    },

    /// A tab is not part of the tabbed area.
    #[error("unknown tab: {0:?}")]
    UnknownTab(NodeId),

    /// Configuration could not be parsed.
    #[error("config: {0}")]
    Config(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}
