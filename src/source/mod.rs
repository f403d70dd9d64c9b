// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of projgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Graph stores that can answer the two project queries.
//!
//! A source only runs the fixed query and hands back raw rows; shaping into the response
//! format happens in [`crate::service`].

pub mod memory;
pub mod neo4j;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::graph::{GraphRecord, ListRecord};

pub use memory::MemorySource;
pub use neo4j::{Neo4jSource, Neo4jSettings};

/// Every `Project` node with each outgoing relationship, one row per project.
///
/// The optional match yields a `{source, target: null}` entry for projects without edges.
pub const PROJECT_GRAPH_QUERY: &str = r#"
MATCH (n:Project)
OPTIONAL MATCH (n)-[r]->(m)
RETURN n, collect({source: id(n), target: id(m)}) AS links
"#;

/// Up to 25 `Project` nodes, in store order.
pub const PROJECT_LIST_QUERY: &str = r#"
MATCH (n:Project)
RETURN n
LIMIT 25
"#;

#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("cannot connect to graph database: {0}")]
    Connect(String),
    #[error("graph query failed: {0}")]
    Query(String),
    #[error("unexpected record shape: {0}")]
    Record(String),
    #[error("graph query did not finish within {0:?}")]
    Timeout(Duration),
}

#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Runs [`PROJECT_GRAPH_QUERY`] and returns every row, fully materialized.
    async fn project_graph_records(&self) -> Result<Vec<GraphRecord>, DataSourceError>;

    /// Runs [`PROJECT_LIST_QUERY`] and returns every row, fully materialized.
    async fn project_list_records(&self) -> Result<Vec<ListRecord>, DataSourceError>;
}
