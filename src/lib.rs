// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of projgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! projgraph: `Project` nodes and their relationships from a graph database, served as JSON
//! for a single force-graph page.
//!
//! Request flow: [`http`] dispatches by path, [`service::QueryService`] runs one fixed query
//! through a [`source::ProjectSource`], and [`graph`] shapes the rows into the response body.

pub mod config;
pub mod decode;
pub mod graph;
pub mod http;
pub mod service;
pub mod source;
pub mod telemetry;
