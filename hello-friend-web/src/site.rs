use serde::Deserialize;

/// Site metadata compiled in from the static asset bundle.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Optional trusted copyright markup. When present it replaces the
    /// footer's built-in attribution links.
    #[serde(default)]
    pub copyrights: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Hello Friend".to_string(),
            description: String::new(),
            copyrights: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SiteConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse the embedded site metadata asset.
///
/// # Errors
///
/// Returns an error when the embedded JSON does not match [`SiteConfig`].
pub fn load_site_config() -> Result<SiteConfig, SiteConfigError> {
    serde_json::from_str(include_str!("../static/assets/data/site.json"))
        .map_err(SiteConfigError::Json)
}

impl SiteConfig {
    /// Load the embedded config, keeping the defaults when it fails to parse.
    #[must_use]
    pub fn load_from_static() -> Self {
        load_site_config().unwrap_or_else(|e| {
            log::error!("Failed to load site config: {e}");
            Self::default()
        })
    }
}
