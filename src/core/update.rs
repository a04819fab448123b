use crate::errors::{AppError, AppResult};
use crate::utils::fetch::fetch_text;
use semver::Version;
use serde::Deserialize;

/// Release manifest. GitHub's `releases/latest` payload is accepted as is.
#[derive(Debug, Deserialize)]
struct ReleaseManifest {
    version: Option<String>,
    tag_name: Option<String>,
    url: Option<String>,
    html_url: Option<String>,
    notes: Option<String>,
    body: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateStatus {
    pub current: Version,
    pub latest: Version,
    pub url: Option<String>,
    pub notes: Option<String>,
}

impl UpdateStatus {
    pub fn is_update_available(&self) -> bool {
        self.latest > self.current
    }
}

/// Accepts `1.2.3` as well as `v1.2.3`.
pub fn parse_version(s: &str) -> AppResult<Version> {
    let trimmed = s.trim().trim_start_matches(['v', 'V']);
    Version::parse(trimmed).map_err(|e| AppError::Update(format!("invalid version '{s}': {e}")))
}

pub fn current_version() -> AppResult<Version> {
    parse_version(env!("CARGO_PKG_VERSION"))
}

pub struct UpdateLogic;

impl UpdateLogic {
    pub fn check(source: &str) -> AppResult<UpdateStatus> {
        let text = fetch_text(source)?;
        Self::from_manifest(&text)
    }

    pub fn from_manifest(text: &str) -> AppResult<UpdateStatus> {
        let manifest: ReleaseManifest = serde_json::from_str(text)
            .map_err(|e| AppError::Update(format!("invalid release manifest: {e}")))?;

        let raw = manifest
            .version
            .or(manifest.tag_name)
            .ok_or_else(|| AppError::Update("release manifest has no version".into()))?;

        Ok(UpdateStatus {
            current: current_version()?,
            latest: parse_version(&raw)?,
            url: manifest.url.or(manifest.html_url),
            notes: manifest.notes.or(manifest.body).filter(|n| !n.trim().is_empty()),
        })
    }
}
