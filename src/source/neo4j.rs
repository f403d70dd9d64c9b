// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of projgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::time::Instant;

use async_trait::async_trait;
use neo4rs::{query, ConfigBuilder, Graph, Node, Row};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::{DataSourceError, ProjectSource, PROJECT_GRAPH_QUERY, PROJECT_LIST_QUERY};
use crate::graph::{GraphRecord, ListRecord, NodeIdentity, ProjectLink, ProjectNode};

/// Connection settings for the Bolt driver.
#[derive(Clone, PartialEq, Eq)]
pub struct Neo4jSettings {
    pub uri: String,
    pub user: String,
    pub password: String,
}

impl fmt::Debug for Neo4jSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Neo4jSettings")
            .field("uri", &self.uri)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Graph store backed by a Neo4j (or other Bolt-compatible) server.
///
/// The driver handle is built once at startup and shared by every request. Building it does
/// not dial the server: the pool opens connections on demand, so an unreachable database
/// shows up as a failed (or timed out) query rather than a failed start. Each query borrows
/// one pooled connection and hands it back when the row stream is dropped.
pub struct Neo4jSource {
    graph: Graph,
}

impl Neo4jSource {
    pub async fn connect(settings: &Neo4jSettings) -> Result<Self, DataSourceError> {
        let config = ConfigBuilder::default()
            .uri(settings.uri.as_str())
            .user(settings.user.as_str())
            .password(settings.password.as_str())
            .build()
            .map_err(|err| DataSourceError::Connect(err.to_string()))?;
        let graph =
            Graph::connect(config).await.map_err(|err| DataSourceError::Connect(err.to_string()))?;
        Ok(Self { graph })
    }

    /// Runs `cypher` and drains the stream. The pooled connection is released when the
    /// stream goes out of scope, on success or error.
    async fn fetch_rows(&self, cypher: &'static str) -> Result<Vec<Row>, DataSourceError> {
        let started = Instant::now();

        let mut stream = self
            .graph
            .execute(query(cypher))
            .await
            .map_err(|err| DataSourceError::Query(err.to_string()))?;
        let mut rows = Vec::new();
        while let Some(row) =
            stream.next().await.map_err(|err| DataSourceError::Query(err.to_string()))?
        {
            rows.push(row);
        }

        debug!(
            rows = rows.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "graph query finished"
        );
        Ok(rows)
    }
}

#[async_trait]
impl ProjectSource for Neo4jSource {
    async fn project_graph_records(&self) -> Result<Vec<GraphRecord>, DataSourceError> {
        let rows = self.fetch_rows(PROJECT_GRAPH_QUERY).await?;
        rows.iter().map(graph_record).collect()
    }

    async fn project_list_records(&self) -> Result<Vec<ListRecord>, DataSourceError> {
        let rows = self.fetch_rows(PROJECT_LIST_QUERY).await?;
        rows.iter().map(list_record).collect()
    }
}

#[derive(Debug, Deserialize)]
struct LinkRow {
    source: NodeIdentity,
    target: Option<NodeIdentity>,
}

fn project_node(row: &Row) -> Result<Node, DataSourceError> {
    row.get::<Node>("n").map_err(|err| DataSourceError::Record(format!("column `n`: {err}")))
}

fn graph_record(row: &Row) -> Result<GraphRecord, DataSourceError> {
    let node = project_node(row)?;
    let links = row
        .get::<Vec<LinkRow>>("links")
        .map_err(|err| DataSourceError::Record(format!("column `links`: {err}")))?;

    Ok(GraphRecord {
        node: ProjectNode {
            id: node.id(),
            gid: property_value(&node, "gid"),
            name: node.get::<String>("name").ok(),
        },
        links: links
            .into_iter()
            .map(|link| ProjectLink { source: link.source, target: link.target })
            .collect(),
    })
}

fn list_record(row: &Row) -> Result<ListRecord, DataSourceError> {
    let node = project_node(row)?;
    Ok(ListRecord { id: property_value(&node, "id"), name: node.get::<String>("name").ok() })
}

/// Reads a scalar property without knowing its stored type. Absent or non-scalar values
/// become `null`.
fn property_value(node: &Node, key: &str) -> Value {
    if let Ok(value) = node.get::<String>(key) {
        return Value::String(value);
    }
    if let Ok(value) = node.get::<i64>(key) {
        return Value::from(value);
    }
    if let Ok(value) = node.get::<f64>(key) {
        return Value::from(value);
    }
    if let Ok(value) = node.get::<bool>(key) {
        return Value::Bool(value);
    }
    Value::Null
}
