// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of projgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::{Path, PathBuf};

use super::ApiError;

const INDEX_TEMPLATE: &str = "index.html";

/// On-disk locations of the landing page template and static files.
///
/// Files are read per request, so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct Assets {
    templates_dir: PathBuf,
    static_dir: PathBuf,
}

impl Assets {
    pub fn new(templates_dir: impl Into<PathBuf>, static_dir: impl Into<PathBuf>) -> Self {
        Self { templates_dir: templates_dir.into(), static_dir: static_dir.into() }
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    pub async fn index_page(&self) -> Result<String, ApiError> {
        let path = self.templates_dir.join(INDEX_TEMPLATE);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ApiError::TemplateMissing { path, source })
    }
}
