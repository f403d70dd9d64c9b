// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of projgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! HTTP facade.
//!
//! - `GET /` serves the landing page template.
//! - `GET /api/projects` runs the deployed query and returns it as JSON.
//! - `GET /static/...` serves the page's scripts and styles from the static dir.

mod assets;
mod error;

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::service::QueryService;

pub use assets::Assets;
pub use error::ApiError;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Shared per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    service: Arc<QueryService>,
    assets: Arc<Assets>,
}

impl AppState {
    pub fn new(service: QueryService, assets: Assets) -> Self {
        Self { service: Arc::new(service), assets: Arc::new(assets) }
    }
}

pub fn router(state: AppState) -> Router {
    let statics = ServeDir::new(state.assets.static_dir());
    Router::new()
        .route("/", get(index))
        .route("/api/projects", get(api_projects))
        .nest_service("/static", statics)
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    state.assets.index_page().await.map(Html)
}

async fn api_projects(State(state): State<AppState>) -> Result<Response, ApiError> {
    let payload = state.service.projects().await?;
    let body = serde_json::to_vec(&payload)?;
    Ok(([(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response())
}
