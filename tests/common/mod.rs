// Shared scaffolding for the scenario suites.

// Note: Functions appear "unused" because each test binary compiles separately,
// but they ARE used across multiple test files. Suppress false-positive warnings.
#![allow(dead_code)]

use navidrome_e2e::Config;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Installs the fmt subscriber once per test binary. RUST_LOG controls
/// verbosity as usual.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Gate for tests that need a browser but no live server (they bring
/// their own stub). `None` means the test should skip.
///
/// A malformed NAVIDROME_E2E_* value is a hard failure, not a skip:
/// silently skipping would hide the typo.
pub fn browser_config() -> Option<Config> {
    let config = Config::from_env().expect("invalid NAVIDROME_E2E_* configuration");
    if config.browser().is_none() {
        tracing::warn!("skipping: NAVIDROME_E2E_BROWSER is not set");
        return None;
    }
    Some(config)
}

/// Gate for scenarios that drive a live server. `None` means skip.
pub fn live_config() -> Option<Config> {
    let config = browser_config()?;
    if config.base_url().is_none() {
        tracing::warn!("skipping: NAVIDROME_E2E_URL is not set");
        return None;
    }
    Some(config)
}

/// Launches a session against the live server and signs in, or `None`
/// when the live gates are not configured.
pub async fn signed_in() -> navidrome_e2e::Result<Option<navidrome_e2e::App>> {
    let Some(config) = live_config() else {
        return Ok(None);
    };
    let app = navidrome_e2e::App::launch(config).await?;
    app.login().await?;
    Ok(Some(app))
}
