//! The built-in template library.
//!
//! Templates are fixed blueprints: an ordered list of node specs with
//! explicit positions, plus `(from, to)` edges over the blueprint's own
//! 1-based local indices. Applying a template replaces the entire canvas
//! graph with the blueprint's instances. Blueprint edges may form any
//! shape; the two built-ins happen to be linear chains.

use crate::error::TemplateError;
use flowdeck_canvas::{AgentRole, CanvasStore, NodeDraft, NodeKind, NodeMetadata, Point};
use serde::Serialize;

/// A template as listed in the template menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    /// Stable template id.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
}

const TEMPLATES: &[Template] = &[
    Template {
        id: "tanning-salon",
        name: "Corporate Tanning Salon Funnel",
        description: "Lead intake \u{2192} membership upsell \u{2192} reminder + review request.",
    },
    Template {
        id: "ghost-blog",
        name: "Ghost Blog Content Loop",
        description: "Idea intake \u{2192} AI draft \u{2192} review \u{2192} schedule publish.",
    },
];

/// The available templates, in declaration order. Never empty.
#[must_use]
pub fn templates() -> &'static [Template] {
    TEMPLATES
}

/// Replaces the store's graph with the named template's blueprint.
///
/// Node ids are reassigned 1..=N in blueprint order and the store's id
/// counter is reset to N + 1. Each instantiated node is stamped with the
/// template id in its metadata.
///
/// # Errors
///
/// Returns [`TemplateError::UnknownTemplate`] for an unrecognized id; the
/// store is left untouched in that case.
pub fn apply_template(store: &mut CanvasStore, id: &str) -> Result<(), TemplateError> {
    let (drafts, edges) = blueprint(id).ok_or_else(|| TemplateError::UnknownTemplate {
        id: id.to_string(),
    })?;
    store.replace_graph(drafts, edges);
    tracing::info!(template_id = id, "template applied");
    Ok(())
}

/// Builds the blueprint for a template id.
fn blueprint(id: &str) -> Option<(Vec<NodeDraft>, Vec<(usize, usize)>)> {
    match id {
        "tanning-salon" => {
            let drafts = vec![
                draft(
                    NodeKind::Trigger,
                    "New Lead (Form/Webhook)",
                    120.0,
                    160.0,
                    id,
                    None,
                ),
                draft(
                    NodeKind::Ai {
                        role: AgentRole::Wizard,
                    },
                    "Automation Wizard (Upsell Plan)",
                    380.0,
                    160.0,
                    id,
                    Some("Map promo, membership, follow-ups."),
                ),
                draft(
                    NodeKind::Action,
                    "Create/Update CRM Contact",
                    680.0,
                    140.0,
                    id,
                    None,
                ),
                draft(
                    NodeKind::Action,
                    "Send Intro Offer SMS/Email",
                    980.0,
                    120.0,
                    id,
                    None,
                ),
                draft(
                    NodeKind::Output,
                    "Log in Analytics / BI",
                    1280.0,
                    160.0,
                    id,
                    None,
                ),
            ];
            Some((drafts, chain(5)))
        }
        "ghost-blog" => {
            let drafts = vec![
                draft(NodeKind::Trigger, "New Idea / Topic", 120.0, 160.0, id, None),
                draft(
                    NodeKind::Ai {
                        role: AgentRole::Teacher,
                    },
                    "Teacher Agent (SEO Brief)",
                    380.0,
                    160.0,
                    id,
                    Some("Clarify structure + intent."),
                ),
                draft(
                    NodeKind::Ai {
                        role: AgentRole::Dev,
                    },
                    "Developer Agent (Ghost Config)",
                    680.0,
                    150.0,
                    id,
                    None,
                ),
                draft(
                    NodeKind::Action,
                    "Create Draft in Ghost",
                    980.0,
                    150.0,
                    id,
                    None,
                ),
                draft(
                    NodeKind::Output,
                    "Publish / Queue Post",
                    1280.0,
                    150.0,
                    id,
                    None,
                ),
            ];
            Some((drafts, chain(5)))
        }
        _ => None,
    }
}

/// A node draft stamped with its source template id.
fn draft(
    kind: NodeKind,
    label: &str,
    x: f64,
    y: f64,
    template_id: &str,
    notes: Option<&str>,
) -> NodeDraft {
    NodeDraft {
        kind,
        label: label.to_string(),
        position: Point::new(x, y),
        size: None,
        metadata: NodeMetadata {
            template_id: Some(template_id.to_string()),
            notes: notes.map(str::to_owned),
            ..NodeMetadata::default()
        },
    }
}

/// Edges for a linear chain 1 -> 2 -> ... -> n.
fn chain(n: usize) -> Vec<(usize, usize)> {
    (1..n).map(|i| (i, i + 1)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowdeck_canvas::NodeId;

    fn kinds(store: &CanvasStore) -> Vec<NodeKind> {
        store.nodes().iter().map(|n| n.kind).collect()
    }

    fn assert_chain(store: &CanvasStore, len: usize) {
        let expected: Vec<_> = (1..len)
            .map(|i| (NodeId::new(i as u64), NodeId::new(i as u64 + 1)))
            .collect();
        let actual: Vec<_> = store
            .connections()
            .iter()
            .map(|c| (c.from, c.to))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn templates_are_listed_in_declaration_order() {
        let listed = templates();
        assert!(!listed.is_empty());
        assert_eq!(listed[0].id, "tanning-salon");
        assert_eq!(listed[1].id, "ghost-blog");
    }

    #[test]
    fn tanning_salon_instantiates_five_node_chain() {
        let mut store = CanvasStore::new();
        apply_template(&mut store, "tanning-salon").expect("known template");

        assert_eq!(store.nodes().len(), 5);
        let ids: Vec<_> = store.nodes().iter().map(|n| n.id).collect();
        assert_eq!(
            ids,
            (1..=5).map(NodeId::new).collect::<Vec<_>>()
        );
        assert_eq!(
            kinds(&store),
            [
                NodeKind::Trigger,
                NodeKind::Ai {
                    role: AgentRole::Wizard
                },
                NodeKind::Action,
                NodeKind::Action,
                NodeKind::Output,
            ]
        );
        assert_chain(&store, 5);

        // Counter resumes at 6
        let next = store.create_node(
            NodeKind::Action,
            "Extra",
            Point::new(0.0, 0.0),
            None,
            None,
        );
        assert_eq!(next, NodeId::new(6));
    }

    #[test]
    fn ghost_blog_instantiates_five_node_chain() {
        let mut store = CanvasStore::new();
        apply_template(&mut store, "ghost-blog").expect("known template");

        assert_eq!(store.nodes().len(), 5);
        assert_eq!(
            kinds(&store),
            [
                NodeKind::Trigger,
                NodeKind::Ai {
                    role: AgentRole::Teacher
                },
                NodeKind::Ai {
                    role: AgentRole::Dev
                },
                NodeKind::Action,
                NodeKind::Output,
            ]
        );
        assert_chain(&store, 5);

        let next = store.create_node(
            NodeKind::Action,
            "Extra",
            Point::new(0.0, 0.0),
            None,
            None,
        );
        assert_eq!(next, NodeId::new(6));
    }

    #[test]
    fn instantiated_nodes_carry_template_metadata() {
        let mut store = CanvasStore::new();
        apply_template(&mut store, "ghost-blog").expect("known template");

        assert!(
            store
                .nodes()
                .iter()
                .all(|n| n.metadata.template_id.as_deref() == Some("ghost-blog"))
        );
        let brief = store.node(NodeId::new(2)).expect("node 2 exists");
        assert_eq!(
            brief.metadata.notes.as_deref(),
            Some("Clarify structure + intent.")
        );
    }

    #[test]
    fn unknown_template_errors_and_leaves_store_untouched() {
        let mut store = CanvasStore::new();
        store.create_node(
            NodeKind::Trigger,
            "Existing",
            Point::new(10.0, 10.0),
            None,
            None,
        );
        store
            .try_create_connection(NodeId::new(1), NodeId::new(2))
            .expect("connect");

        let result = apply_template(&mut store, "unknown-id");
        assert_eq!(
            result,
            Err(TemplateError::UnknownTemplate {
                id: "unknown-id".to_string()
            })
        );
        assert_eq!(store.nodes().len(), 1);
        assert_eq!(store.connections().len(), 1);

        // Counter untouched: next created node gets id 2
        let next = store.create_node(
            NodeKind::Action,
            "Next",
            Point::new(0.0, 0.0),
            None,
            None,
        );
        assert_eq!(next, NodeId::new(2));
    }

    #[test]
    fn apply_clears_stale_selection_and_drag() {
        let mut store = CanvasStore::new();
        for i in 0..7 {
            store.create_node(
                NodeKind::Action,
                format!("N{i}"),
                Point::new(0.0, 0.0),
                None,
                None,
            );
        }
        assert!(store.select(NodeId::new(7)));
        store.start_connection_drag(NodeId::new(6), Point::new(1.0, 1.0));

        apply_template(&mut store, "tanning-salon").expect("known template");

        assert_eq!(store.selection(), None);
        assert!(!store.connection_drag().is_dragging());
    }

    #[test]
    fn template_positions_match_blueprint() {
        let mut store = CanvasStore::new();
        apply_template(&mut store, "tanning-salon").expect("known template");

        let first = store.node(NodeId::new(1)).expect("node 1 exists");
        assert_eq!(first.position, Point::new(120.0, 160.0));
        assert_eq!(first.label, "New Lead (Form/Webhook)");
        let last = store.node(NodeId::new(5)).expect("node 5 exists");
        assert_eq!(last.position, Point::new(1280.0, 160.0));
    }
}
