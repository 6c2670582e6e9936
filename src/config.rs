//! Configuration loading
//!
//! TOML config at `{config_dir}/lunchspin/config.toml`; every field has a
//! default, so a missing file or empty section is fine. The API key can also
//! come from the environment, which wins over the file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::LunchspinError;

/// Environment variables that can supply the API key, in priority order
const API_KEY_ENV_VARS: [&str; 2] = ["LUNCHSPIN_API_KEY", "GOOGLE_API_KEY"];

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_location() -> String {
    "Delhi".to_string()
}

fn default_preferences() -> String {
    "spicy, cheap, veg".to_string()
}

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Suggestion provider configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Gemini API key; absent means the provider is not configured
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature sent with every request
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            api_key: None,
            model: default_model(),
            temperature: default_temperature(),
        }
    }
}

/// Startup values for the input form
#[derive(Debug, Clone, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_preferences")]
    pub preferences: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        FormConfig {
            location: default_location(),
            preferences: default_preferences(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub form: FormConfig,
}

impl Config {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lunchspin").join("config.toml"))
    }

    /// Load configuration from `path`, or from the default location
    ///
    /// A missing file yields defaults; a present but invalid file is an
    /// error (silently ignoring a typo'd config is worse than failing).
    pub fn load(path: Option<&Path>) -> Result<Config, LunchspinError> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::default_path(),
        };

        let mut config = match path {
            Some(ref p) if p.exists() => {
                let contents = std::fs::read_to_string(p)?;
                toml::from_str(&contents).map_err(|e| LunchspinError::Config(e.to_string()))?
            }
            _ => Config::default(),
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Let the environment supply the API key
    fn apply_env_overrides(&mut self) {
        for var in API_KEY_ENV_VARS {
            if let Ok(key) = std::env::var(var)
                && !key.trim().is_empty()
            {
                self.provider.api_key = Some(key);
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.provider.api_key.is_none());
        assert_eq!(config.provider.model, "gemini-2.0-flash");
        assert_eq!(config.provider.temperature, 0.7);
        assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
        assert_eq!(config.form.location, "Delhi");
        assert_eq!(config.form.preferences, "spicy, cheap, veg");
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[provider]
api_key = "AIza-key"
model = "gemini-2.5-pro"
temperature = 0.4

[clipboard]
backend = "osc52"

[form]
location = "Mumbai"
preferences = "street food"
"#;
        let config: Config = toml::from_str(toml_content).unwrap();

        assert_eq!(config.provider.api_key.as_deref(), Some("AIza-key"));
        assert_eq!(config.provider.model, "gemini-2.5-pro");
        assert_eq!(config.provider.temperature, 0.4);
        assert_eq!(config.clipboard.backend, ClipboardBackend::Osc52);
        assert_eq!(config.form.location, "Mumbai");
    }

    #[test]
    fn test_partial_sections_use_defaults() {
        let config: Config = toml::from_str("[provider]\napi_key = \"k\"\n").unwrap();

        assert_eq!(config.provider.api_key.as_deref(), Some("k"));
        assert_eq!(config.provider.model, "gemini-2.0-flash");
        assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
    }

    #[test]
    fn test_empty_config_parses() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.provider.api_key.is_none());
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.toml");

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.provider.model, "gemini-2.0-flash");
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[form]\nlocation = \"Pune\"").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.form.location, "Pune");
    }

    #[test]
    fn test_load_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "provider = not valid toml [").unwrap();

        let result = Config::load(Some(&path));
        assert!(matches!(result, Err(LunchspinError::Config(_))));
    }

    #[test]
    fn test_invalid_backend_rejected() {
        let result: Result<Config, _> = toml::from_str("[clipboard]\nbackend = \"teleport\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_env_override_wins_over_file() {
        // Both env var names in one test: env mutation is process-global and
        // parallel tests would race otherwise.
        let mut config = Config {
            provider: ProviderConfig {
                api_key: Some("from-file".to_string()),
                ..ProviderConfig::default()
            },
            ..Config::default()
        };

        unsafe { std::env::set_var("LUNCHSPIN_API_KEY", "from-env") };
        config.apply_env_overrides();
        unsafe { std::env::remove_var("LUNCHSPIN_API_KEY") };
        assert_eq!(config.provider.api_key.as_deref(), Some("from-env"));

        unsafe { std::env::set_var("GOOGLE_API_KEY", "from-google-env") };
        config.apply_env_overrides();
        unsafe { std::env::remove_var("GOOGLE_API_KEY") };
        assert_eq!(config.provider.api_key.as_deref(), Some("from-google-env"));

        // A blank value does not count as configured
        let mut config = Config::default();
        unsafe { std::env::set_var("LUNCHSPIN_API_KEY", "   ") };
        config.apply_env_overrides();
        unsafe { std::env::remove_var("LUNCHSPIN_API_KEY") };
        assert!(config.provider.api_key.is_none());
    }
}
