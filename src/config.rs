//! Backend origin configuration.
//!
//! The origin comes from `DOCCHAT_API_URL`, looked up in the process
//! environment (which a `.env` file feeds on native builds) and then in the
//! bundled `assets/config.env`. The browser has no process environment, so
//! web builds only see the bundled value.

use once_cell::sync::Lazy;
use std::env;

pub const API_URL_VAR: &str = "DOCCHAT_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

static BUNDLED_VALUES: Lazy<Vec<(String, String)>> = Lazy::new(|| parse_env_lines(BUNDLED_CONFIG));

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        let non_blank = |value: &String| !value.trim().is_empty();
        env::var(API_URL_VAR)
            .ok()
            .filter(non_blank)
            .or_else(|| bundled_value(API_URL_VAR).filter(non_blank))
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` (e.g. `/upload`) onto the origin.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// Parse `KEY=VALUE` lines, skipping blanks and `#` comments.
pub fn parse_env_lines(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

fn bundled_value(key: &str) -> Option<String> {
    BUNDLED_VALUES
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slashes() {
        let config = ApiConfig::new("http://example.test:8000//");
        assert_eq!(config.base_url(), "http://example.test:8000");
        assert_eq!(config.endpoint("/upload"), "http://example.test:8000/upload");
        assert_eq!(config.endpoint("ask"), "http://example.test:8000/ask");
    }

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(ApiConfig::default().endpoint("/ask"), "http://localhost:8000/ask");
    }

    #[test]
    fn bundled_config_names_the_backend() {
        assert_eq!(bundled_value(API_URL_VAR).as_deref(), Some(DEFAULT_API_URL));
        assert_eq!(bundled_value("MISSING"), None);
    }

    #[test]
    fn environment_overrides_bundled_origin() {
        let saved = env::var(API_URL_VAR).ok();

        // SAFETY: no other test in this crate reads or writes DOCCHAT_API_URL
        unsafe {
            env::set_var(API_URL_VAR, "http://10.1.2.3:9000/");
        }
        assert_eq!(ApiConfig::from_env().base_url(), "http://10.1.2.3:9000");

        // SAFETY: as above
        unsafe {
            env::set_var(API_URL_VAR, "   ");
        }
        assert_eq!(
            Some(ApiConfig::from_env().base_url().to_string()),
            bundled_value(API_URL_VAR)
        );

        // SAFETY: as above
        unsafe {
            match saved {
                Some(value) => env::set_var(API_URL_VAR, value),
                None => env::remove_var(API_URL_VAR),
            }
        }
    }

    #[test]
    fn parses_env_file() {
        let parsed = parse_env_lines(
            "# backend\n\nDOCCHAT_API_URL = http://10.0.0.2:9000\nnot a pair\n=orphan\n",
        );
        assert_eq!(
            parsed,
            vec![(
                "DOCCHAT_API_URL".to_string(),
                "http://10.0.0.2:9000".to_string()
            )]
        );
    }
}
