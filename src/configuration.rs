use std::path::Path;

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_option_number_from_string;

use crate::domain::search_query::SearchQuery;

pub const DEFAULT_ENDPOINT: &str = "https://www.google.com/search";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub search: SearchSettings,
    pub query: SearchQuery,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    pub endpoint: String,
    pub user_agent: String,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub timeout_seconds: Option<u64>,
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| ConfigError::Foreign(Box::new(e)))?;
    get_configuration_from(&base_path.join("configuration"))
}

/// Layers built-in defaults, `<dir>/base.yaml` if present, then `APP_`-prefixed
/// environment variables (`APP_QUERY__TERM=...`).
pub fn get_configuration_from(configuration_directory: &Path) -> Result<Settings, ConfigError> {
    file_layers(configuration_directory)?
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize::<Settings>()
}

fn file_layers(configuration_directory: &Path) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(Config::builder()
        .set_default("search.endpoint", DEFAULT_ENDPOINT)?
        .set_default("search.user_agent", DEFAULT_USER_AGENT)?
        .set_default("query.term", "gmail.com")?
        .set_default("query.location", "agency")?
        .set_default("query.platform", "India")?
        .set_default("query.site", "instagram.com")?
        .add_source(File::from(configuration_directory.join("base.yaml")).required(false)))
}
