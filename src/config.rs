//! Configuration types for wikigen runs.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use wikigen_research::ResearchConfig;

use crate::error::{Result, WikiError};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WikiConfig {
    /// Research pipeline settings.
    pub research: ResearchConfig,
    /// Search API settings.
    pub search: SearchSettings,
    /// Generation API settings.
    pub generation: GenerationSettings,
    /// Artifact output settings.
    pub output: OutputSettings,
}

/// Search API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Search API base URL.
    pub base_url: String,
    /// Name of the environment variable holding the search API key.
    pub api_key_env: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            base_url: wikigen_research::backends::exa::DEFAULT_BASE_URL.to_string(),
            api_key_env: "EXA_API_KEY".to_string(),
        }
    }
}

/// Generation API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// OpenAI-compatible base URL, including the version prefix.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// Name of the environment variable holding the generation API key.
    pub api_key_env: String,
    /// Sampling temperature.
    pub temperature: f64,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            temperature: 0.3,
            timeout_seconds: 120,
        }
    }
}

/// Artifact output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Root directory for generated artifacts.
    pub dir: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("output"),
        }
    }
}

impl WikiConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| WikiError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| WikiError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `<config dir>/wikigen/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config).join("wikigen").join("config.toml")
        } else if let Some(dir) = dirs::config_dir() {
            dir.join("wikigen").join("config.toml")
        } else {
            PathBuf::from("/tmp/wikigen-config/config.toml")
        }
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns [`WikiError::Research`] for research settings and
    /// [`WikiError::Config`] for the rest.
    pub fn validate(&self) -> Result<()> {
        self.research.validate()?;
        if self.generation.model.trim().is_empty() {
            return Err(WikiError::Config("generation.model must not be empty".into()));
        }
        if self.generation.timeout_seconds == 0 {
            return Err(WikiError::Config(
                "generation.timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Read an API key from the named environment variable.
///
/// # Errors
///
/// Returns [`WikiError::Config`] naming the variable (never its value) when
/// it is unset or blank.
pub fn api_key_from_env(var: &str) -> Result<String> {
    match std::env::var(var) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(WikiError::Config(format!(
            "environment variable {var} is not set"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = WikiConfig::default();
        assert_eq!(config.research.knowledge_base_limit, 15);
        assert_eq!(config.search.api_key_env, "EXA_API_KEY");
        assert_eq!(config.generation.model, "gpt-4o-mini");
        assert_eq!(config.output.dir, PathBuf::from("output"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn save_and_load_round_trip() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("nested").join("config.toml");

        let mut config = WikiConfig::default();
        config.research.results_per_query = 5;
        config.generation.temperature = 0.9;
        config.output.dir = PathBuf::from("/srv/wiki");

        config.save_to_file(&path).expect("save");
        let loaded = WikiConfig::from_file(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[generation]\nmodel = \"local-model\"\n").expect("write");

        let loaded = WikiConfig::from_file(&path).expect("load");
        assert_eq!(loaded.generation.model, "local-model");
        assert_eq!(loaded.generation.api_key_env, "OPENAI_API_KEY");
        assert_eq!(loaded.research, ResearchConfig::default());
    }

    #[test]
    fn from_file_nonexistent_returns_error() {
        let result = WikiConfig::from_file(std::path::Path::new("/nonexistent/path/config.toml"));
        assert!(matches!(result, Err(WikiError::Io(_))));
    }

    #[test]
    fn from_file_invalid_toml_returns_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").expect("write");
        assert!(matches!(WikiConfig::from_file(&path), Err(WikiError::Config(_))));
    }

    #[test]
    fn validate_rejects_bad_sections() {
        let mut config = WikiConfig::default();
        config.research.knowledge_base_limit = 0;
        assert!(matches!(config.validate(), Err(WikiError::Research(_))));

        let mut config = WikiConfig::default();
        config.generation.model = " ".into();
        assert!(matches!(config.validate(), Err(WikiError::Config(_))));
    }

    #[test]
    fn missing_api_key_names_variable() {
        let err = api_key_from_env("WIKIGEN_TEST_SURELY_UNSET_VAR").unwrap_err();
        assert!(err.to_string().contains("WIKIGEN_TEST_SURELY_UNSET_VAR"));
    }

    #[test]
    fn default_config_path_ends_with_wikigen_config() {
        let path = WikiConfig::default_config_path();
        assert!(path.ends_with("wikigen/config.toml"));
    }
}
