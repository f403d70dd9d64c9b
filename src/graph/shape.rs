// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of projgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;

use tracing::warn;

use super::{GraphRecord, ListRecord, ProjectGraph, ProjectSummary};
use crate::decode::decode_name;

/// Upper bound on entries returned by the list shape (`LIMIT 25` in the query).
pub const PROJECT_LIST_LIMIT: usize = 25;

/// Folds graph-query rows into `{nodes, links}`.
///
/// Nodes are deduplicated by identity (first occurrence wins). Links are passed through
/// untouched, including placeholder entries with a `null` target and references to nodes
/// outside the result.
pub fn shape_graph(records: impl IntoIterator<Item = GraphRecord>) -> ProjectGraph {
    let mut graph = ProjectGraph::default();
    let mut seen = HashSet::new();

    for record in records {
        if seen.insert(record.node.id) {
            graph.nodes.push(record.node);
        }
        graph.links.extend(record.links);
    }

    graph
}

/// Maps list-query rows into summaries, decoding escaped names.
///
/// A name that fails to decode becomes `None`; the rest of the rows are unaffected.
pub fn shape_list(records: impl IntoIterator<Item = ListRecord>) -> Vec<ProjectSummary> {
    records
        .into_iter()
        .take(PROJECT_LIST_LIMIT)
        .map(|record| {
            let name = record.name.and_then(|raw| match decode_name(&raw) {
                Ok(name) => Some(name),
                Err(err) => {
                    warn!(id = %record.id, error = %err, "project name could not be decoded");
                    None
                }
            });
            ProjectSummary { id: record.id, name }
        })
        .collect()
}
