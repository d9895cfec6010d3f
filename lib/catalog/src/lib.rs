//! Node palette and template library for the flowdeck workflow builder.
//!
//! - **Palette**: static descriptors for every placeable node kind,
//!   partitioned into core kinds and AI agent kinds
//! - **Templates**: named blueprints that replace the whole canvas graph
//!   with a prebuilt workflow
//!
//! Both are static data over `flowdeck-canvas` types; the palette feeds
//! the (external) palette UI, and templates instantiate into a
//! [`flowdeck_canvas::CanvasStore`].

pub mod error;
pub mod palette;
pub mod template;

pub use error::TemplateError;
pub use palette::{AGENT_KINDS, CORE_KINDS, NodeDefinition};
pub use template::{Template, apply_template, templates};
