//! Fetch a small text document from an HTTP(S) URL or a local path.

use crate::errors::{AppError, AppResult};
use crate::utils::path::{expand_tilde, is_remote};
use std::fs;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(15);

pub fn fetch_text(source: &str) -> AppResult<String> {
    if is_remote(source) {
        let agent = ureq::AgentBuilder::new().timeout(TIMEOUT).build();
        let response = agent
            .get(source)
            .set(
                "User-Agent",
                concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
            )
            .call()
            .map_err(|e| AppError::Network(format!("{source}: {e}")))?;

        response
            .into_string()
            .map_err(|e| AppError::Network(format!("{source}: {e}")))
    } else {
        let path = expand_tilde(source);
        fs::read_to_string(&path)
            .map_err(|e| AppError::Network(format!("{}: {}", path.display(), e)))
    }
}

/// `<base>/<name>` for URLs, `<base>` joined with `name` for directories.
pub fn join_source(base: &str, name: &str) -> String {
    if is_remote(base) {
        format!("{}/{}", base.trim_end_matches('/'), name)
    } else {
        expand_tilde(base).join(name).to_string_lossy().to_string()
    }
}
