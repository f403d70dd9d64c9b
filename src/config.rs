// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of projgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Process configuration from command-line flags with environment fallbacks.
//!
//! Credentials are never compiled in; the password has no default and its env value is
//! kept out of `--help` and `Debug` output.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::service::Variant;
use crate::source::Neo4jSettings;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a database password is required (--password or PROJGRAPH_NEO4J_PASSWORD) unless --demo is set")]
    MissingPassword,
}

#[derive(Clone, PartialEq, Eq, Parser)]
#[command(name = "projgraph", version, about = "Serves Project nodes from a graph database as JSON")]
pub struct Config {
    /// Bolt endpoint of the graph database.
    #[arg(long, env = "PROJGRAPH_NEO4J_URI", default_value = "127.0.0.1:7687")]
    pub uri: String,

    #[arg(long, env = "PROJGRAPH_NEO4J_USER", default_value = "neo4j")]
    pub user: String,

    #[arg(long, env = "PROJGRAPH_NEO4J_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Interface to bind; all interfaces by default.
    #[arg(long, env = "PROJGRAPH_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to bind (0 picks an ephemeral port).
    #[arg(long, env = "PROJGRAPH_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, env = "PROJGRAPH_DEBUG")]
    pub debug: bool,

    /// Response shape served by /api/projects.
    #[arg(long, env = "PROJGRAPH_VARIANT", value_enum, default_value_t = Variant::Graph)]
    pub variant: Variant,

    /// Upper bound on a single graph query, in seconds.
    #[arg(
        long = "query-timeout-secs",
        env = "PROJGRAPH_QUERY_TIMEOUT_SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub query_timeout_secs: u64,

    /// Directory containing index.html.
    #[arg(long, env = "PROJGRAPH_TEMPLATES", default_value = "templates")]
    pub templates: PathBuf,

    /// Directory served under /static/.
    #[arg(long = "static-dir", env = "PROJGRAPH_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// Serve a built-in sample graph instead of connecting to a database.
    #[arg(long)]
    pub demo: bool,
}

impl Config {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }

    /// Database settings for a non-demo run.
    pub fn neo4j_settings(&self) -> Result<Neo4jSettings, ConfigError> {
        let password = self.password.clone().ok_or(ConfigError::MissingPassword)?;
        Ok(Neo4jSettings { uri: self.uri.clone(), user: self.user.clone(), password })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("uri", &self.uri)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("debug", &self.debug)
            .field("variant", &self.variant)
            .field("query_timeout_secs", &self.query_timeout_secs)
            .field("templates", &self.templates)
            .field("static_dir", &self.static_dir)
            .field("demo", &self.demo)
            .finish()
    }
}
