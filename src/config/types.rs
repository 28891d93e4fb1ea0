// Configuration type definitions

use serde::Deserialize;

use crate::debouncer::DEFAULT_DEBOUNCE_MS;

pub const DEFAULT_BASE_URL: &str = "http://pathcrafters25.atspace.cc/api";
pub const DEFAULT_ITEMS_PATH: &str = "jobs.php";
pub const DEFAULT_DETAIL_PATH: &str = "job.php";
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;

/// Career API endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Item collection endpoint, relative to `base_url`
    pub items_path: String,
    /// By-name detail endpoint, relative to `base_url`
    pub detail_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            items_path: DEFAULT_ITEMS_PATH.to_string(),
            detail_path: DEFAULT_DETAIL_PATH.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn items_url(&self) -> String {
        join_url(&self.base_url, &self.items_path)
    }

    pub fn detail_url(&self) -> String {
        join_url(&self.base_url, &self.detail_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Search-as-you-type behavior
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u64,
    pub max_suggestions: usize,
    /// Drop suggestion responses that finish after a newer request was sent
    pub discard_stale_responses: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            discard_stale_responses: false,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_join_url_handles_slashes() {
        assert_eq!(join_url("http://a/api/", "/jobs.php"), "http://a/api/jobs.php");
        assert_eq!(join_url("http://a/api", "jobs.php"), "http://a/api/jobs.php");
    }

    #[test]
    fn test_default_urls() {
        let api = ApiConfig::default();
        assert_eq!(api.items_url(), "http://pathcrafters25.atspace.cc/api/jobs.php");
        assert_eq!(api.detail_url(), "http://pathcrafters25.atspace.cc/api/job.php");
    }

    // Any debounce value written in the file is taken verbatim
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_debounce_parsing(debounce_ms in 0u64..10_000) {
            let toml_content = format!("[search]\ndebounce_ms = {}\n", debounce_ms);
            let config: Config = toml::from_str(&toml_content).unwrap();
            prop_assert_eq!(config.search.debounce_ms, debounce_ms);
            prop_assert_eq!(config.search.max_suggestions, DEFAULT_MAX_SUGGESTIONS);
            prop_assert_eq!(config.api, ApiConfig::default());
        }
    }

    // Missing sections and fields fall back to defaults
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_api in prop::bool::ANY,
            include_base_url in prop::bool::ANY,
        ) {
            let toml_content = match (include_api, include_base_url) {
                (false, _) => String::new(),
                (true, false) => "[api]\n".to_string(),
                (true, true) => "[api]\nbase_url = \"http://localhost:8080\"\n".to_string(),
            };

            let config: Config = toml::from_str(&toml_content).unwrap();
            prop_assert_eq!(&config.api.items_path, DEFAULT_ITEMS_PATH);
            prop_assert_eq!(&config.api.detail_path, DEFAULT_DETAIL_PATH);
            if include_api && include_base_url {
                prop_assert_eq!(&config.api.base_url, "http://localhost:8080");
            } else {
                prop_assert_eq!(&config.api.base_url, DEFAULT_BASE_URL);
            }
            prop_assert_eq!(config.search, SearchConfig::default());
        }
    }
}
