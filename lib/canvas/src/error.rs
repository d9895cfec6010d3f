//! Error types for the canvas crate.
//!
//! The store raises these synchronously to the caller and never logs or
//! swallows them; the UI layer decides how to present them.

use crate::node::NodeId;
use std::fmt;

/// Errors from connection-creation attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionError {
    /// The source and target are the same node.
    SelfLoop { node_id: NodeId },
    /// An identical directed `(from, to)` pair already exists.
    Duplicate { from: NodeId, to: NodeId },
}

impl fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfLoop { node_id } => {
                write!(f, "cannot connect node {node_id} to itself")
            }
            Self::Duplicate { from, to } => {
                write!(f, "connection {from} -> {to} already exists")
            }
        }
    }
}

impl std::error::Error for ConnectionError {}
