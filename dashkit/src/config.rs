use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::DashError;

pub const DEFAULT_DATA_URL: &str = "output.json";
pub const DEFAULT_PAGE_PARAM: &str = "page";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Location of the precomputed summary, relative to the page.
    pub data_url: String,
    /// Query parameter selecting the current view.
    pub page_param: String,
    /// Generate a synthetic document instead of fetching one.
    pub demo: bool,
    pub max_log_entries: usize,
    pub title_prefix: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            page_param: DEFAULT_PAGE_PARAM.to_string(),
            demo: false,
            max_log_entries: 100,
            title_prefix: "Interaction Dashboard".to_string(),
        }
    }
}

/// Layers an optional JSON override document on top of the defaults.
pub fn load_config(overrides: Option<&str>) -> Result<DashboardConfig, DashError> {
    let mut builder = Config::builder();
    if let Some(json) = overrides.filter(|s| !s.trim().is_empty()) {
        builder = builder.add_source(File::from_str(json, FileFormat::Json));
    }

    let config: DashboardConfig = builder.build()?.try_deserialize()?;
    if config.page_param.is_empty() {
        return Err(DashError::Config("page_param must not be empty".to_string()));
    }
    Ok(config)
}

/// Resolves `data_url` against the page location the way a relative fetch would.
pub fn resolve_data_url(base: &str, data_url: &str) -> Result<Url, DashError> {
    Ok(Url::parse(base)?.join(data_url)?)
}
