//! Flow data as exchanged with the Node-RED admin API.
//!
//! Node descriptors are kept as raw JSON: whatever the flow file holds is
//! what gets posted.
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod summary;

pub use summary::FlowSummary;

/// One node of a flow. Its schema belongs to Node-RED, not to us.
pub type NodeDescriptor = Value;

/// The flows currently deployed on a Node-RED instance.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "RawFlowSet")]
pub struct FlowSet {
    /// Revision token for optimistic concurrency on the next deploy.
    pub rev: Option<String>,
    pub flows: Vec<NodeDescriptor>,
}

impl FlowSet {
    pub fn summary(&self) -> FlowSummary {
        FlowSummary::from_flows(&self.flows)
    }
}

// The v2 API answers `{"rev": ..., "flows": [...]}`; v1 answers a bare array.
// Bare is tried first: a struct variant would also accept a short array.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlowSet {
    Bare(Vec<NodeDescriptor>),
    Versioned {
        #[serde(default)]
        rev: Option<Value>,
        #[serde(default)]
        flows: Vec<NodeDescriptor>,
    },
}

impl From<RawFlowSet> for FlowSet {
    fn from(raw: RawFlowSet) -> Self {
        match raw {
            RawFlowSet::Versioned { rev, flows } => FlowSet {
                rev: match rev {
                    Some(Value::String(rev)) if !rev.is_empty() => Some(rev),
                    _ => None,
                },
                flows,
            },
            RawFlowSet::Bare(flows) => FlowSet { rev: None, flows },
        }
    }
}

/// Body of `POST /flows`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeployPayload {
    pub flows: Vec<NodeDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{DeployPayload, FlowSet};
    use serde_json::json;

    #[test]
    fn versioned_flow_set() {
        let set: FlowSet = serde_json::from_value(json!({
            "rev": "abc",
            "flows": [{"id": "t1", "type": "tab", "label": "Main"}],
        }))
        .unwrap();

        assert_eq!(set.rev.as_deref(), Some("abc"));
        assert_eq!(set.flows.len(), 1);
    }

    #[test]
    fn flows_default_to_empty() {
        let set: FlowSet = serde_json::from_value(json!({"rev": "abc"})).unwrap();

        assert!(set.flows.is_empty());
    }

    #[test]
    fn bare_array_has_no_revision() {
        let set: FlowSet = serde_json::from_value(json!([{"type": "inject"}])).unwrap();

        assert_eq!(set.rev, None);
        assert_eq!(set.flows, vec![json!({"type": "inject"})]);
    }

    #[test]
    fn blank_or_non_string_revision_is_ignored() {
        let blank: FlowSet = serde_json::from_value(json!({"rev": "", "flows": []})).unwrap();
        let number: FlowSet = serde_json::from_value(json!({"rev": 7, "flows": []})).unwrap();

        assert_eq!(blank.rev, None);
        assert_eq!(number.rev, None);
    }

    #[test]
    fn payload_omits_missing_revision() {
        let payload = DeployPayload {
            flows: vec![json!({"type": "inject"})],
            rev: None,
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"flows": [{"type": "inject"}]})
        );
    }
}
