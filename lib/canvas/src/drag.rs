//! The connection-drag state machine.
//!
//! While the user drags out a new connection, the canvas tracks the source
//! node and the current pointer position. The machine has exactly two
//! states and three transitions: Idle -> Dragging on drag start,
//! Dragging -> Dragging on pointer move, Dragging -> Idle on completion or
//! cancel. This state is transient UI state, not part of the graph.

use crate::geometry::Point;
use crate::node::NodeId;

/// The in-progress connection drag, if any.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ConnectionDrag {
    /// No drag in progress.
    #[default]
    Idle,
    /// Dragging out a connection from `from`, pointer at `pointer`.
    Dragging { from: NodeId, pointer: Point },
}

impl ConnectionDrag {
    /// Returns true while a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Returns the source node of the drag, if one is in progress.
    #[must_use]
    pub const fn source(&self) -> Option<NodeId> {
        match self {
            Self::Dragging { from, .. } => Some(*from),
            Self::Idle => None,
        }
    }

    /// Returns the current pointer position, if a drag is in progress.
    #[must_use]
    pub const fn pointer(&self) -> Option<Point> {
        match self {
            Self::Dragging { pointer, .. } => Some(*pointer),
            Self::Idle => None,
        }
    }
}
