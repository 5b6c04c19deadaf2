use serde::Deserialize;

/// The root configuration structure for the terminal.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
}

/// Connection parameters for the research backend.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// Origin of the backend service, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Namespace prefix prepended to every endpoint path. Deployments that
    /// serve the API under a sub-path (e.g. "/api") set it here; the default
    /// is the bare namespace.
    #[serde(default)]
    pub base_path: String,

    /// Request budget in seconds for ordinary calls.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Request budget in seconds for long-running calls (training,
    /// experiment runs, backtests, optimization).
    #[serde(default = "default_long_timeout_secs")]
    pub long_timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            base_path: String::new(),
            timeout_secs: default_timeout_secs(),
            long_timeout_secs: default_long_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_long_timeout_secs() -> u64 {
    180
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_fall_back_to_defaults_when_unconfigured() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.api.base_url, "http://127.0.0.1:5000");
        assert_eq!(settings.api.base_path, "");
        assert_eq!(settings.api.timeout_secs, 30);
        assert_eq!(settings.api.long_timeout_secs, 180);
    }

    #[test]
    fn base_path_is_configurable_per_deployment() {
        let settings: Settings =
            serde_json::from_str(r#"{"api": {"base_path": "/api"}}"#).unwrap();
        assert_eq!(settings.api.base_path, "/api");
        // Unset members still default.
        assert_eq!(settings.api.timeout_secs, 30);
    }
}
