use crate::flow::NodeDescriptor;
use serde_json::Value;
use std::fmt;

/// A human-readable digest of a deployed flow set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowSummary {
    pub node_count: usize,
    pub entries: Vec<SummaryEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryEntry {
    Tab { label: String },
    Node { name: String, node_type: String },
}

impl FlowSummary {
    /// Tabs are listed by label; other nodes only when they carry a `name`.
    pub fn from_flows(flows: &[NodeDescriptor]) -> Self {
        let entries = flows
            .iter()
            .filter_map(|node| {
                if node.get("type").and_then(Value::as_str) == Some("tab") {
                    let label = node.get("label").map_or("Unnamed".to_string(), as_text);
                    Some(SummaryEntry::Tab { label })
                } else {
                    node.get("name").map(|name| SummaryEntry::Node {
                        name: as_text(name),
                        node_type: node.get("type").map_or("unknown".to_string(), as_text),
                    })
                }
            })
            .collect();
        FlowSummary {
            node_count: flows.len(),
            entries,
        }
    }
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl fmt::Display for FlowSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of nodes: {}", self.node_count)?;
        for entry in &self.entries {
            match entry {
                SummaryEntry::Tab { label } => writeln!(f, "Flow tab: {label}")?,
                SummaryEntry::Node { name, node_type } => {
                    writeln!(f, "Node: {name} (Type: {node_type})")?
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{FlowSummary, SummaryEntry};
    use serde_json::json;

    #[test]
    fn tabs_and_named_nodes() {
        let flows = vec![
            json!({"type": "tab", "label": "Main"}),
            json!({"type": "inject", "name": "trigger1"}),
        ];

        let summary = FlowSummary::from_flows(&flows);

        assert_eq!(
            summary.to_string(),
            "Number of nodes: 2\nFlow tab: Main\nNode: trigger1 (Type: inject)\n"
        );
    }

    #[test]
    fn unnamed_nodes_only_count() {
        let flows = vec![
            json!({"id": "a", "type": "debug"}),
            json!({"id": "b", "type": "function", "name": "transform"}),
            json!({"id": "c", "type": "tab"}),
        ];

        let summary = FlowSummary::from_flows(&flows);

        assert_eq!(summary.node_count, 3);
        assert_eq!(
            summary.entries,
            vec![
                SummaryEntry::Node {
                    name: "transform".to_string(),
                    node_type: "function".to_string(),
                },
                SummaryEntry::Tab {
                    label: "Unnamed".to_string(),
                },
            ]
        );
    }

    #[test]
    fn empty_name_is_still_listed() {
        let summary = FlowSummary::from_flows(&[json!({"type": "inject", "name": ""})]);

        assert_eq!(summary.to_string(), "Number of nodes: 1\nNode:  (Type: inject)\n");
    }
}
