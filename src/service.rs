// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of projgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Query service: one fixed read query per call, shaped into a response body.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use clap::ValueEnum;
use tracing::debug;

use crate::graph::{shape_graph, shape_list, ProjectGraph, ProjectSummary, ProjectsPayload};
use crate::source::{DataSourceError, ProjectSource};

pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Which shape `/api/projects` serves. Only one is active per deployment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// `{nodes, links}` built from every project and its outgoing edges.
    #[default]
    Graph,
    /// Up to 25 `{id, name}` entries.
    List,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Graph => f.write_str("graph"),
            Self::List => f.write_str("list"),
        }
    }
}

pub struct QueryService {
    source: Arc<dyn ProjectSource>,
    variant: Variant,
    timeout: Duration,
}

impl QueryService {
    pub fn new(source: Arc<dyn ProjectSource>, variant: Variant) -> Self {
        Self { source, variant, timeout: DEFAULT_QUERY_TIMEOUT }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Every project node plus its outgoing links, with placeholder links for projects
    /// that have none.
    pub async fn fetch_project_graph(&self) -> Result<ProjectGraph, DataSourceError> {
        let records = self.bounded(self.source.project_graph_records()).await?;
        let graph = shape_graph(records);
        debug!(nodes = graph.nodes.len(), links = graph.links.len(), "shaped project graph");
        Ok(graph)
    }

    /// Up to 25 projects keyed by their `id` property.
    pub async fn fetch_project_list(&self) -> Result<Vec<ProjectSummary>, DataSourceError> {
        let records = self.bounded(self.source.project_list_records()).await?;
        let list = shape_list(records);
        debug!(projects = list.len(), "shaped project list");
        Ok(list)
    }

    /// Runs the operation selected by the deployed variant.
    pub async fn projects(&self) -> Result<ProjectsPayload, DataSourceError> {
        match self.variant {
            Variant::Graph => self.fetch_project_graph().await.map(ProjectsPayload::Graph),
            Variant::List => self.fetch_project_list().await.map(ProjectsPayload::List),
        }
    }

    async fn bounded<T>(
        &self,
        fut: impl Future<Output = Result<T, DataSourceError>>,
    ) -> Result<T, DataSourceError> {
        tokio::time::timeout(self.timeout, fut)
            .await
            .map_err(|_| DataSourceError::Timeout(self.timeout))?
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use rstest::{fixture, rstest};
    use serde_json::json;

    use super::{QueryService, Variant};
    use crate::graph::{GraphRecord, ListRecord, ProjectsPayload};
    use crate::source::{DataSourceError, MemorySource, ProjectSource};

    struct StalledSource;

    #[async_trait]
    impl ProjectSource for StalledSource {
        async fn project_graph_records(&self) -> Result<Vec<GraphRecord>, DataSourceError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(Vec::new())
        }

        async fn project_list_records(&self) -> Result<Vec<ListRecord>, DataSourceError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(Vec::new())
        }
    }

    #[fixture]
    fn demo_service() -> QueryService {
        QueryService::new(Arc::new(MemorySource::demo()), Variant::Graph)
    }

    #[tokio::test]
    async fn single_unconnected_project_yields_placeholder_link() {
        let mut source = MemorySource::new();
        let id = source.add_project(json!({"gid": "P1", "name": "Alpha"}));
        let service = QueryService::new(Arc::new(source), Variant::Graph);

        let payload = service.projects().await.unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "nodes": [{"id": id, "gid": "P1", "name": "Alpha"}],
                "links": [{"source": id, "target": null}],
            })
        );
    }

    #[rstest]
    #[tokio::test]
    async fn graph_node_ids_are_unique(demo_service: QueryService) {
        let graph = demo_service.fetch_project_graph().await.unwrap();

        let ids = graph.nodes.iter().map(|n| n.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), graph.nodes.len());
    }

    #[rstest]
    #[tokio::test]
    async fn repeated_graph_fetches_agree(demo_service: QueryService) {
        let first = demo_service.fetch_project_graph().await.unwrap();
        let second = demo_service.fetch_project_graph().await.unwrap();

        let nodes = |g: &crate::graph::ProjectGraph| {
            g.nodes.iter().map(|n| serde_json::to_string(n).unwrap()).collect::<HashSet<_>>()
        };
        assert_eq!(nodes(&first), nodes(&second));
        assert_eq!(
            first.links.iter().collect::<HashSet<_>>(),
            second.links.iter().collect::<HashSet<_>>()
        );
    }

    #[tokio::test]
    async fn list_variant_caps_at_25_and_decodes_names() {
        let mut source = MemorySource::new();
        source.add_project(json!({"id": "p-0", "name": "\\uc548\\ub155"}));
        for i in 1..30 {
            source.add_project(json!({"id": format!("p-{i}")}));
        }
        let service = QueryService::new(Arc::new(source), Variant::List);

        let ProjectsPayload::List(list) = service.projects().await.unwrap() else {
            panic!("expected list payload");
        };
        assert_eq!(list.len(), 25);
        assert_eq!(list[0].name.as_deref(), Some("안녕"));
        assert!(list[1..].iter().all(|p| p.name.is_none()));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_source_times_out() {
        let service = QueryService::new(Arc::new(StalledSource), Variant::List)
            .with_timeout(Duration::from_secs(2));

        let err = service.projects().await.unwrap_err();
        assert!(matches!(err, DataSourceError::Timeout(d) if d == Duration::from_secs(2)));
    }

    #[test]
    fn graph_is_the_default_variant() {
        assert_eq!(Variant::default(), Variant::Graph);
        assert_eq!(Variant::List.to_string(), "list");
    }
}
