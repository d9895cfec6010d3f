//! Static node-kind descriptors for the palette.
//!
//! Purely descriptive data consumed by the palette renderer; there is no
//! runtime mutation. Core kinds cover the plain workflow building blocks,
//! agent kinds are the AI nodes, each carrying its role in the kind.

use flowdeck_canvas::{AgentRole, NodeKind};
use serde::Serialize;

/// A placeable node kind as shown in the palette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeDefinition {
    /// Stable palette id.
    pub id: &'static str,
    /// The kind a node of this definition is created with.
    #[serde(flatten)]
    pub kind: NodeKind,
    /// Display label.
    pub label: &'static str,
    /// One-line description for the palette tooltip.
    pub description: &'static str,
    /// Icon glyph.
    pub icon: &'static str,
    /// Color token understood by the renderer's theme.
    pub color: &'static str,
}

/// The core (non-AI) node kinds, in palette order.
pub const CORE_KINDS: &[NodeDefinition] = &[
    NodeDefinition {
        id: "trigger",
        kind: NodeKind::Trigger,
        label: "Trigger",
        description: "Entry point: webhook / schedule / form submit.",
        icon: "\u{23f1}",
        color: "from-emerald-400 to-emerald-300",
    },
    NodeDefinition {
        id: "condition",
        kind: NodeKind::Condition,
        label: "Condition",
        description: "Branch based on fields or AI decisions.",
        icon: "\u{25c7}",
        color: "from-sky-400 to-sky-300",
    },
    NodeDefinition {
        id: "action",
        kind: NodeKind::Action,
        label: "Action",
        description: "Call API, send email, push to CRM.",
        icon: "\u{2699}",
        color: "from-indigo-400 to-indigo-300",
    },
    NodeDefinition {
        id: "output",
        kind: NodeKind::Output,
        label: "Output",
        description: "Final output / report / webhook.",
        icon: "\u{2b24}",
        color: "from-amber-400 to-amber-300",
    },
];

/// The AI agent node kinds, in palette order.
pub const AGENT_KINDS: &[NodeDefinition] = &[
    NodeDefinition {
        id: "teacher-agent",
        kind: NodeKind::Ai {
            role: AgentRole::Teacher,
        },
        label: "Teacher Agent",
        description: "Quiz you on Zapier / n8n / GoHighLevel / Ghost workflows.",
        icon: "\u{1f393}",
        color: "from-amber-300 to-amber-200",
    },
    NodeDefinition {
        id: "dev-agent",
        kind: NodeKind::Ai {
            role: AgentRole::Dev,
        },
        label: "Developer Agent",
        description: "Turn node graph into implementable stack hints.",
        icon: "\u{1f468}\u{200d}\u{1f4bb}",
        color: "from-sky-300 to-sky-200",
    },
    NodeDefinition {
        id: "wizard-agent",
        kind: NodeKind::Ai {
            role: AgentRole::Wizard,
        },
        label: "Automation Wizard",
        description: "Paste business playbook, get full workflow graph.",
        icon: "\u{1f9d9}\u{200d}\u{2642}\u{fe0f}",
        color: "from-fuchsia-300 to-fuchsia-200",
    },
];

/// All palette entries, core kinds first.
pub fn all() -> impl Iterator<Item = &'static NodeDefinition> {
    CORE_KINDS.iter().chain(AGENT_KINDS.iter())
}

/// Looks up a palette entry by its id.
#[must_use]
pub fn find(id: &str) -> Option<&'static NodeDefinition> {
    all().find(|def| def.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_covers_all_kinds() {
        assert_eq!(CORE_KINDS.len(), 4);
        assert_eq!(AGENT_KINDS.len(), 3);
        assert_eq!(all().count(), 7);
    }

    #[test]
    fn core_kinds_carry_no_role() {
        assert!(CORE_KINDS.iter().all(|def| def.kind.role().is_none()));
    }

    #[test]
    fn agent_kinds_carry_their_role() {
        let roles: Vec<_> = AGENT_KINDS.iter().filter_map(|def| def.kind.role()).collect();
        assert_eq!(roles, [AgentRole::Teacher, AgentRole::Dev, AgentRole::Wizard]);
    }

    #[test]
    fn find_by_id() {
        let wizard = find("wizard-agent").expect("wizard entry exists");
        assert_eq!(wizard.label, "Automation Wizard");
        assert!(find("nonexistent").is_none());
    }
}
