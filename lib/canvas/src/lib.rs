//! In-memory state core for the flowdeck visual workflow builder.
//!
//! This crate holds everything the canvas needs between user events:
//!
//! - **Node Model**: typed nodes with a tagged kind (trigger, condition,
//!   action, output, AI agent with role) and structured metadata
//! - **Store**: the single-owner [`CanvasStore`] with ordered node and
//!   connection lists, selection, viewport, and a monotonic id counter
//! - **Drag**: the transient connection-drag state machine
//! - **Geometry**: canvas value types and the connection-curve helper
//!
//! Rendering, gesture handling, and AI invocation live outside this crate;
//! they consume read views of the store and call its named mutation
//! operations. The containers themselves are never exposed mutably, so
//! every mutation is a single synchronous state transition.

pub mod connection;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod node;
pub mod store;

pub use connection::Connection;
pub use drag::ConnectionDrag;
pub use error::ConnectionError;
pub use geometry::{Point, Size, Viewport, curve_path};
pub use node::{AgentRole, Node, NodeDraft, NodeId, NodeKind, NodeMetadata};
pub use store::CanvasStore;
