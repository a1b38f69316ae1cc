//! Client configuration.
//!
//! A browser bundle has no process environment, so overrides are read when
//! the crate is compiled (`CARROS_API_BASE`, `CARROS_UPLOADS_BASE`).

/// Default path under which the backend serves uploaded images.
const DEFAULT_UPLOADS_BASE: &str = "/static/uploads";

/// Quiet period before a search query is evaluated.
const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 180;

/// How long a toast stays fully visible.
const DEFAULT_TOAST_DURATION_MS: u32 = 3500;

/// Extra delay between fade-out and removal of a toast.
const DEFAULT_TOAST_FADE_MS: u32 = 400;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Prefix joined in front of every `/api/...` path.
    /// Empty means same origin (the dev server proxies `/api`).
    pub api_base: String,
    pub uploads_base: String,
    pub search_debounce_ms: u32,
    pub toast_duration_ms: u32,
    pub toast_fade_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            uploads_base: DEFAULT_UPLOADS_BASE.to_string(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            toast_fade_ms: DEFAULT_TOAST_FADE_MS,
        }
    }
}

impl ClientConfig {
    /// Defaults, overridden by compile-time environment variables.
    pub fn from_build_env() -> Self {
        Self::default().with_overrides(
            option_env!("CARROS_API_BASE"),
            option_env!("CARROS_UPLOADS_BASE"),
        )
    }

    fn with_overrides(mut self, api_base: Option<&str>, uploads_base: Option<&str>) -> Self {
        if let Some(base) = api_base {
            self.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(base) = uploads_base {
            self.uploads_base = base.trim_end_matches('/').to_string();
        }
        self
    }

    /// Absolute-or-relative URL for an API path such as `/api/listarCarros`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint("/api/listarCarros"), "/api/listarCarros");
        assert_eq!(config.search_debounce_ms, 180);
        assert_eq!(config.toast_duration_ms, 3500);
        assert_eq!(config.toast_fade_ms, 400);
    }

    #[test]
    fn test_overrides_strip_trailing_slash() {
        let config = ClientConfig::default()
            .with_overrides(Some("http://localhost:8080/"), Some("/media/"));
        assert_eq!(config.endpoint("/api/getCarro"), "http://localhost:8080/api/getCarro");
        assert_eq!(config.uploads_base, "/media");
    }
}
