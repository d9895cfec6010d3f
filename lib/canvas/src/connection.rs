//! Directed connections between canvas nodes.

use crate::node::NodeId;
use serde::{Deserialize, Serialize};

/// A directed edge from one node to another.
///
/// Connections are identified by their position in the store's ordered
/// connection list, not by an id of their own. The pair is
/// direction-sensitive: `(a, b)` and `(b, a)` are distinct connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// The source node id.
    pub from: NodeId,
    /// The target node id.
    pub to: NodeId,
}

impl Connection {
    /// Creates a connection between two node ids.
    #[must_use]
    pub const fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }

    /// Returns true when either endpoint is the given node.
    #[must_use]
    pub fn touches(&self, id: NodeId) -> bool {
        self.from == id || self.to == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touches_either_endpoint() {
        let conn = Connection::new(NodeId::new(1), NodeId::new(2));
        assert!(conn.touches(NodeId::new(1)));
        assert!(conn.touches(NodeId::new(2)));
        assert!(!conn.touches(NodeId::new(3)));
    }

    #[test]
    fn direction_matters_for_equality() {
        let ab = Connection::new(NodeId::new(1), NodeId::new(2));
        let ba = Connection::new(NodeId::new(2), NodeId::new(1));
        assert_ne!(ab, ba);
    }
}
