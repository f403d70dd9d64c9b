// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of projgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::source::DataSourceError;

/// Failures surfaced at the HTTP boundary. Each maps to a status code and a
/// `{"error": "..."}` body that never carries driver detail or credentials.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    DataSource(#[from] DataSourceError),
    #[error("template missing at {path:?}: {source}")]
    TemplateMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("response could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::DataSource(_) | Self::TemplateMissing { .. } | Self::Serialize(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to hand to clients.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::DataSource(DataSourceError::Timeout(_)) => "graph database query timed out",
            Self::DataSource(_) => "graph database query failed",
            Self::TemplateMissing { .. } => "page template is missing",
            Self::Serialize(_) => "response could not be serialized",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}
