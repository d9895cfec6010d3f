//! The canvas state store.
//!
//! [`CanvasStore`] is the single owner of the workflow graph state: the
//! ordered node and connection lists, the current selection, the pan/zoom
//! viewport, the monotonic node-id counter, and the transient
//! connection-drag state. All mutation flows through the named operations
//! here; the containers are never exposed mutably, so each operation is a
//! single synchronous state transition and observers never see a partially
//! applied update (e.g. a connection pointing at a removed node).

use crate::connection::Connection;
use crate::drag::ConnectionDrag;
use crate::error::ConnectionError;
use crate::geometry::{Point, Size, Viewport};
use crate::node::{Node, NodeDraft, NodeId, NodeKind, NodeMetadata};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The canonical in-memory state of one canvas session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasStore {
    nodes: Vec<Node>,
    connections: Vec<Connection>,
    selection: Option<NodeId>,
    /// Next id to hand out. Starts at 1, never decremented or reused.
    next_id: u64,
    viewport: Viewport,
    #[serde(skip)]
    drag: ConnectionDrag,
}

impl CanvasStore {
    /// Creates an empty store with the id counter at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            connections: Vec::new(),
            selection: None,
            next_id: 1,
            viewport: Viewport::default(),
            drag: ConnectionDrag::Idle,
        }
    }

    /// The ordered node list.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The ordered connection list.
    #[must_use]
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// The currently selected node, if any.
    #[must_use]
    pub fn selection(&self) -> Option<NodeId> {
        self.selection
    }

    /// The connection-drag state.
    #[must_use]
    pub fn connection_drag(&self) -> ConnectionDrag {
        self.drag
    }

    /// The pan/zoom viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Looks up a node by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// An id -> node projection over the current node list.
    ///
    /// Recomputed from the list on every call, so it can never hold stale
    /// or missing entries.
    #[must_use]
    pub fn node_map(&self) -> HashMap<NodeId, &Node> {
        self.nodes.iter().map(|n| (n.id, n)).collect()
    }

    /// Creates a node and appends it to the node list.
    ///
    /// Allocates the next id from the counter. `template_id` is merged
    /// into the metadata unless the caller-supplied metadata already set
    /// one (caller fields win on collision). Kind and coordinates are not
    /// validated; creation always succeeds.
    pub fn create_node(
        &mut self,
        kind: NodeKind,
        label: impl Into<String>,
        position: Point,
        template_id: Option<&str>,
        metadata: Option<NodeMetadata>,
    ) -> NodeId {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;

        let mut metadata = metadata.unwrap_or_default();
        if metadata.template_id.is_none() {
            metadata.template_id = template_id.map(str::to_owned);
        }

        let label = label.into();
        tracing::debug!(node_id = %id, ?kind, %label, "node created");
        self.nodes.push(Node {
            id,
            kind,
            label,
            position,
            size: None,
            metadata,
        });
        id
    }

    /// Removes a node and everything that references it.
    ///
    /// Cascades: every connection touching `id` is removed in the same
    /// update, and the selection is cleared if it pointed at `id`. An
    /// absent id still runs the cascade, so no connection endpoint equal
    /// to `id` can survive this call.
    pub fn remove_node(&mut self, id: NodeId) {
        let existed = self.nodes.iter().any(|n| n.id == id);
        self.nodes.retain(|n| n.id != id);
        self.connections.retain(|c| !c.touches(id));
        if self.selection == Some(id) {
            self.selection = None;
        }
        if existed {
            tracing::debug!(node_id = %id, "node removed");
        }
    }

    /// Removes the connection at the given position in the connection
    /// list. Out-of-range indices are a no-op.
    pub fn remove_connection(&mut self, index: usize) {
        if index >= self.connections.len() {
            return;
        }
        let conn = self.connections.remove(index);
        tracing::debug!(from = %conn.from, to = %conn.to, "connection removed");
    }

    /// Attempts to create a directed connection.
    ///
    /// Rejects self-loops and duplicate `(from, to)` pairs; the reverse
    /// direction is a distinct pair and allowed. Endpoints are not checked
    /// against the node list -- a connection may be drawn to a node id
    /// that does not (or no longer does) exist. On success the connection
    /// is appended, preserving existing order.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::SelfLoop`] when `from == to`, and
    /// [`ConnectionError::Duplicate`] when the pair already exists. The
    /// connection list is unchanged on error.
    pub fn try_create_connection(
        &mut self,
        from: NodeId,
        to: NodeId,
    ) -> Result<(), ConnectionError> {
        if from == to {
            return Err(ConnectionError::SelfLoop { node_id: from });
        }
        if self.connections.iter().any(|c| c.from == from && c.to == to) {
            return Err(ConnectionError::Duplicate { from, to });
        }
        self.connections.push(Connection::new(from, to));
        tracing::debug!(%from, %to, "connection created");
        Ok(())
    }

    /// Selects a node. Returns false (leaving the selection unchanged)
    /// when the id does not reference an existing node.
    pub fn select(&mut self, id: NodeId) -> bool {
        if self.node(id).is_none() {
            return false;
        }
        self.selection = Some(id);
        true
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Moves a node to a new position. Returns false if the id is absent.
    pub fn move_node(&mut self, id: NodeId, position: Point) -> bool {
        match self.nodes.iter_mut().find(|n| n.id == id) {
            Some(node) => {
                node.position = position;
                true
            }
            None => false,
        }
    }

    /// Sets a node's explicit size override. Returns false if the id is
    /// absent.
    pub fn set_node_size(&mut self, id: NodeId, size: Size) -> bool {
        match self.nodes.iter_mut().find(|n| n.id == id) {
            Some(node) => {
                node.size = Some(size);
                true
            }
            None => false,
        }
    }

    /// Replaces the pan/zoom viewport.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Starts dragging a connection out of `from`.
    pub fn start_connection_drag(&mut self, from: NodeId, pointer: Point) {
        self.drag = ConnectionDrag::Dragging { from, pointer };
    }

    /// Updates the pointer position of an in-progress drag. No-op when
    /// idle.
    pub fn update_connection_drag(&mut self, pointer: Point) {
        if let ConnectionDrag::Dragging { from, .. } = self.drag {
            self.drag = ConnectionDrag::Dragging { from, pointer };
        }
    }

    /// Ends an in-progress drag by attempting to connect its source to
    /// `to`. The machine returns to idle whether or not the connection is
    /// accepted; completing while idle is an Ok no-op.
    ///
    /// # Errors
    ///
    /// Propagates the [`ConnectionError`] from the connection attempt.
    pub fn complete_connection_drag(&mut self, to: NodeId) -> Result<(), ConnectionError> {
        let ConnectionDrag::Dragging { from, .. } = std::mem::take(&mut self.drag) else {
            return Ok(());
        };
        self.try_create_connection(from, to)
    }

    /// Abandons an in-progress drag without creating a connection.
    pub fn cancel_connection_drag(&mut self) {
        self.drag = ConnectionDrag::Idle;
    }

    /// Replaces the entire graph with a blueprint's instances.
    ///
    /// Nodes are instantiated in draft order with ids reassigned 1..=N,
    /// and `edges` are `(from, to)` pairs over those same 1-based local
    /// indices. The id counter is reset to N + 1. The selection is cleared
    /// and any drag in progress is cancelled, since both may reference
    /// nodes that no longer exist after the replace.
    pub fn replace_graph(&mut self, drafts: Vec<NodeDraft>, edges: Vec<(usize, usize)>) {
        self.nodes = drafts
            .into_iter()
            .enumerate()
            .map(|(i, draft)| Node {
                id: NodeId::new(i as u64 + 1),
                kind: draft.kind,
                label: draft.label,
                position: draft.position,
                size: draft.size,
                metadata: draft.metadata,
            })
            .collect();
        self.connections = edges
            .into_iter()
            .map(|(from, to)| Connection::new(NodeId::new(from as u64), NodeId::new(to as u64)))
            .collect();
        self.next_id = self.nodes.len() as u64 + 1;
        self.selection = None;
        self.drag = ConnectionDrag::Idle;
        tracing::debug!(
            node_count = self.nodes.len(),
            connection_count = self.connections.len(),
            "graph replaced"
        );
    }
}

impl Default for CanvasStore {
    fn default() -> Self {
        Self::new()
    }
}
