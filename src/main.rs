// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of projgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! projgraph server entrypoint.
//!
//! Serves the landing page at `/` and project data at `/api/projects`. Database credentials
//! come from flags or `PROJGRAPH_NEO4J_*` environment variables; `--demo` serves a built-in
//! sample graph instead.

use std::error::Error;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};

use projgraph::config::Config;
use projgraph::http::{router, AppState, Assets};
use projgraph::service::QueryService;
use projgraph::source::{DataSourceError, MemorySource, Neo4jSettings, Neo4jSource, ProjectSource};
use projgraph::telemetry::init_tracing;

/// `None` settings means `--demo`.
async fn build_source(
    settings: Option<Neo4jSettings>,
) -> Result<Arc<dyn ProjectSource>, DataSourceError> {
    let Some(settings) = settings else {
        warn!("serving the built-in demo graph; no database will be contacted");
        return Ok(Arc::new(MemorySource::demo()));
    };
    let source = Neo4jSource::connect(&settings).await?;
    info!(uri = %settings.uri, user = %settings.user, "graph database driver ready");
    Ok(Arc::new(source))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "cannot listen for ctrl-c; shutdown only by termination");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

fn main() {
    let config = Config::parse();

    let result = (|| -> Result<(), Box<dyn Error>> {
        init_tracing(config.debug).map_err(|err| err.to_string())?;

        let settings = if config.demo {
            None
        } else {
            match config.neo4j_settings() {
                Ok(settings) => Some(settings),
                Err(err) => {
                    eprintln!("projgraph: {err}");
                    std::process::exit(2);
                }
            }
        };
        let assets = Assets::new(&config.templates, &config.static_dir);

        let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;

        runtime.block_on(async move {
            let source = build_source(settings).await?;
            let service =
                QueryService::new(source, config.variant).with_timeout(config.query_timeout());
            let app = router(AppState::new(service, assets));

            let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
            info!(
                address = %listener.local_addr()?,
                variant = %config.variant,
                "projgraph listening"
            );

            axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
            Ok::<(), Box<dyn Error>>(())
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("projgraph: {err}");
        std::process::exit(1);
    }
}
