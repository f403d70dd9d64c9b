// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of projgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Response shapes served by `/api/projects`.
//!
//! Both shapes are read-only projections of the graph store. Nothing here outlives a request.

mod shape;

pub use shape::{shape_graph, shape_list, PROJECT_LIST_LIMIT};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Internal graph-store identity of a node (`id(n)` in Cypher).
pub type NodeIdentity = i64;

/// One `Project` node in the graph shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectNode {
    pub id: NodeIdentity,
    /// Opaque grouping identifier. Passed through as stored (string, number, or null).
    pub gid: Value,
    pub name: Option<String>,
}

/// A directed edge between two node identities.
///
/// `target` is `None` for the placeholder entry emitted when a project has no outgoing
/// relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectLink {
    pub source: NodeIdentity,
    pub target: Option<NodeIdentity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectGraph {
    pub nodes: Vec<ProjectNode>,
    pub links: Vec<ProjectLink>,
}

/// One entry of the flat list shape.
///
/// `id` is the node's `id` *property*, not its internal identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: Value,
    pub name: Option<String>,
}

/// Body of `/api/projects`, depending on the deployed variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProjectsPayload {
    Graph(ProjectGraph),
    List(Vec<ProjectSummary>),
}

/// Raw row of the graph query: the project node plus its collected links.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphRecord {
    pub node: ProjectNode,
    pub links: Vec<ProjectLink>,
}

/// Raw row of the list query. `name` is still in its stored (possibly escaped) form.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRecord {
    pub id: Value,
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ProjectGraph, ProjectLink, ProjectNode, ProjectSummary, ProjectsPayload};

    #[test]
    fn graph_payload_serializes_without_wrapper() {
        let payload = ProjectsPayload::Graph(ProjectGraph {
            nodes: vec![ProjectNode { id: 7, gid: json!("P1"), name: Some("Alpha".to_owned()) }],
            links: vec![ProjectLink { source: 7, target: None }],
        });

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "nodes": [{"id": 7, "gid": "P1", "name": "Alpha"}],
                "links": [{"source": 7, "target": null}],
            })
        );
    }

    #[test]
    fn list_payload_keeps_null_names() {
        let payload = ProjectsPayload::List(vec![
            ProjectSummary { id: json!("p-1"), name: None },
            ProjectSummary { id: json!(2), name: Some("Beta".to_owned()) },
        ]);

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, json!([{"id": "p-1", "name": null}, {"id": 2, "name": "Beta"}]));
    }
}
