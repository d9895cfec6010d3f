//! Node types for the canvas graph.
//!
//! Nodes are the placed elements of a workflow. Each node has:
//! - A session-unique integer ID handed out by the store's counter
//! - A kind (trigger, condition, action, output, or AI agent with a role)
//! - A display label and a canvas position
//! - Structured metadata with an open side-channel for extensions

use crate::geometry::{Point, Size};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt;

/// A unique identifier for a node within the canvas.
///
/// Ids are assigned by the store's monotonic counter, starting at 1 and
/// advancing by exactly 1 per created node. An id is never reused within a
/// session, even after its node is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a node ID from its raw counter value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node_{}", self.0)
    }
}

/// The role of an AI agent node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    /// Quizzes the user on automation-platform workflows.
    Teacher,
    /// Turns the node graph into implementable stack hints.
    Dev,
    /// Expands a business playbook into a full workflow graph.
    Wizard,
}

/// The kind of a canvas node.
///
/// Only AI agent nodes carry a role; the other kinds have none, so the
/// role lives on the `Ai` variant rather than as an always-optional field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKind {
    /// Entry point: webhook, schedule, or form submit.
    Trigger,
    /// Branch based on fields or AI decisions.
    Condition,
    /// Call an API, send email, push to a CRM.
    Action,
    /// Final output, report, or webhook.
    Output,
    /// An AI agent with a specific role.
    Ai { role: AgentRole },
}

impl NodeKind {
    /// Returns the agent role for AI nodes, `None` for every other kind.
    #[must_use]
    pub const fn role(&self) -> Option<AgentRole> {
        match self {
            Self::Ai { role } => Some(*role),
            _ => None,
        }
    }
}

/// Structured node metadata.
///
/// Known fields are explicit; anything else a collaborator wants to attach
/// rides in the flattened `extra` map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeMetadata {
    /// Id of the template this node was instantiated from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Free-form notes shown in the inspector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Open side-channel for extension data.
    #[serde(flatten)]
    pub extra: BTreeMap<String, JsonValue>,
}

impl NodeMetadata {
    /// Returns true when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.template_id.is_none() && self.notes.is_none() && self.extra.is_empty()
    }
}

/// A placed node in the workflow graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier within the session.
    pub id: NodeId,
    /// The node kind, carrying the agent role for AI nodes.
    #[serde(flatten)]
    pub kind: NodeKind,
    /// Human-readable label.
    pub label: String,
    /// Position in canvas space.
    pub position: Point,
    /// Explicit size override; `None` lets the renderer use its default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    /// Structured metadata.
    #[serde(default)]
    pub metadata: NodeMetadata,
}

impl Node {
    /// Returns the agent role for AI nodes.
    #[must_use]
    pub const fn role(&self) -> Option<AgentRole> {
        self.kind.role()
    }
}

/// A node specification without an id: everything the store needs to
/// instantiate a node during a bulk graph replace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDraft {
    #[serde(flatten)]
    pub kind: NodeKind,
    pub label: String,
    pub position: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default)]
    pub metadata: NodeMetadata,
}

impl NodeDraft {
    /// Creates a draft with default size and metadata.
    #[must_use]
    pub fn new(kind: NodeKind, label: impl Into<String>, position: Point) -> Self {
        Self {
            kind,
            label: label.into(),
            position,
            size: None,
            metadata: NodeMetadata::default(),
        }
    }
}
