// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of projgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{DataSourceError, ProjectSource};
use crate::graph::{
    GraphRecord, ListRecord, NodeIdentity, ProjectLink, ProjectNode, PROJECT_LIST_LIMIT,
};

const PROJECT_LABEL: &str = "Project";

#[derive(Debug, Clone)]
struct MemoryNode {
    id: NodeIdentity,
    labels: Vec<String>,
    properties: BTreeMap<String, Value>,
}

impl MemoryNode {
    fn is_project(&self) -> bool {
        self.labels.iter().any(|label| label == PROJECT_LABEL)
    }

    fn string_property(&self, key: &str) -> Option<String> {
        self.properties.get(key).and_then(Value::as_str).map(str::to_owned)
    }

    fn property(&self, key: &str) -> Value {
        self.properties.get(key).cloned().unwrap_or(Value::Null)
    }
}

/// In-memory graph answering the project queries with the same semantics as the Cypher
/// text: placeholder links for unconnected projects and a 25-row list limit.
///
/// Identities are assigned sequentially from 0 in insertion order, and rows come back in
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    nodes: Vec<MemoryNode>,
    relationships: Vec<(NodeIdentity, NodeIdentity)>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node and returns its identity. Non-object `properties` are treated as empty.
    pub fn add_node(&mut self, labels: &[&str], properties: Value) -> NodeIdentity {
        let id = self.nodes.len() as NodeIdentity;
        let properties = match properties {
            Value::Object(map) => map.into_iter().collect(),
            _ => BTreeMap::new(),
        };
        self.nodes.push(MemoryNode {
            id,
            labels: labels.iter().map(|label| (*label).to_owned()).collect(),
            properties,
        });
        id
    }

    pub fn add_project(&mut self, properties: Value) -> NodeIdentity {
        self.add_node(&[PROJECT_LABEL], properties)
    }

    /// Adds a directed relationship. Endpoints are not checked, like a pass-through store.
    pub fn relate(&mut self, from: NodeIdentity, to: NodeIdentity) {
        self.relationships.push((from, to));
    }

    /// Small sample graph served by `--demo`.
    pub fn demo() -> Self {
        let mut source = Self::new();
        let atlas = source.add_project(json!({"id": "prj-atlas", "gid": "G1", "name": "Atlas"}));
        let beacon =
            source.add_project(json!({"id": "prj-beacon", "gid": "G1", "name": "Beacon"}));
        let comet = source.add_project(json!({"id": "prj-comet", "gid": "G2", "name": "Comet"}));
        let drift =
            source.add_project(json!({"id": "prj-drift", "gid": 3, "name": "\\uc548\\ub155 Drift"}));
        source.add_project(json!({"id": "prj-ember", "gid": "G2"}));
        let platform = source.add_node(&["Team"], json!({"name": "Platform"}));

        source.relate(atlas, beacon);
        source.relate(atlas, comet);
        source.relate(beacon, platform);
        source.relate(comet, drift);
        source
    }

    fn projects(&self) -> impl Iterator<Item = &MemoryNode> {
        self.nodes.iter().filter(|node| node.is_project())
    }
}

#[async_trait]
impl ProjectSource for MemorySource {
    async fn project_graph_records(&self) -> Result<Vec<GraphRecord>, DataSourceError> {
        Ok(self
            .projects()
            .map(|node| {
                let mut links = self
                    .relationships
                    .iter()
                    .filter(|(from, _)| *from == node.id)
                    .map(|(_, to)| ProjectLink { source: node.id, target: Some(*to) })
                    .collect::<Vec<_>>();
                if links.is_empty() {
                    links.push(ProjectLink { source: node.id, target: None });
                }
                GraphRecord {
                    node: ProjectNode {
                        id: node.id,
                        gid: node.property("gid"),
                        name: node.string_property("name"),
                    },
                    links,
                }
            })
            .collect())
    }

    async fn project_list_records(&self) -> Result<Vec<ListRecord>, DataSourceError> {
        Ok(self
            .projects()
            .take(PROJECT_LIST_LIMIT)
            .map(|node| ListRecord {
                id: node.property("id"),
                name: node.string_property("name"),
            })
            .collect())
    }
}
