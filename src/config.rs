//! Runtime configuration

/// Local development backend
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5986";

/// Environment override for the backend base URL
pub const API_BASE_URL_ENV: &str = "VENDEDORES_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Settings {
    /// Build settings from the `--api-url` value (flag or environment, as
    /// already merged by clap). Blank values fall back to the default.
    pub fn resolve(api_url: Option<String>) -> Self {
        let api_base_url = api_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self { api_base_url }
    }
}
