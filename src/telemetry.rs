// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of projgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use tracing_subscriber::{fmt, EnvFilter};

/// Level used when `RUST_LOG` is unset.
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "projgraph=debug,info"
    } else {
        "info"
    }
}

/// Installs the global structured-logging subscriber. `RUST_LOG` takes precedence.
pub fn init_tracing(debug: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    fmt().with_env_filter(filter).with_target(true).with_level(true).try_init()
}

#[cfg(test)]
mod tests {
    use super::default_directive;

    #[test]
    fn debug_toggle_raises_crate_level() {
        assert_eq!(default_directive(false), "info");
        assert_eq!(default_directive(true), "projgraph=debug,info");
    }
}
