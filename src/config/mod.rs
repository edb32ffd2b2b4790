use crate::models::RunConfig;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use ::config::{Config, Environment, File, FileFormat};
use std::fs;

/// Configuration file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "modlist-html.yaml";

/// Prefix of environment variable overrides, e.g. `MODLIST_PROFILE`.
pub const ENV_PREFIX: &str = "MODLIST";

/// Configuration manager for loading and saving the run configuration.
///
/// Sources are layered, later ones winning:
/// - serde defaults of [`RunConfig`]
/// - the YAML file at `config_path` (optional)
/// - `MODLIST_*` environment variables
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: Utf8PathBuf,
}

impl ConfigManager {
    pub fn new<P: AsRef<Utf8Path>>(config_path: P) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
        }
    }

    /// Load the run configuration from the file and the process environment.
    pub fn load_run_config(&self) -> Result<RunConfig> {
        self.load_with_env(Environment::with_prefix(ENV_PREFIX))
    }

    /// Load the run configuration with an explicit set of environment variables
    /// instead of the process environment.
    pub fn load_run_config_from_env(
        &self,
        vars: ::config::Map<String, String>,
    ) -> Result<RunConfig> {
        self.load_with_env(Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    // Environment values stay strings; serde converts `debug` on demand.
    fn load_with_env(&self, env: Environment) -> Result<RunConfig> {
        let settings = Config::builder()
            .add_source(File::new(self.config_path.as_str(), FileFormat::Yaml).required(false))
            .add_source(env)
            .build()
            .with_context(|| format!("Failed to load run config: {}", self.config_path))?;

        let config: RunConfig = settings
            .try_deserialize()
            .with_context(|| format!("Failed to parse run config: {}", self.config_path))?;

        Ok(config)
    }

    /// Save a run configuration as YAML, creating the parent directory if needed.
    pub fn save_run_config(&self, config: &RunConfig) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(config).context("Failed to serialize run config to YAML")?;

        if let Some(parent) = self.config_path.parent().filter(|p| !p.as_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent))?;
        }

        fs::write(&self.config_path, yaml_string)
            .with_context(|| format!("Failed to write run config: {}", self.config_path))?;

        tracing::info!("Saved run config to {}", self.config_path);
        Ok(())
    }

    pub fn config_path(&self) -> &Utf8Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Game, InstanceLayout};
    use tempfile::TempDir;

    fn create_test_config_manager() -> (ConfigManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config_dir = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        let manager = ConfigManager::new(config_dir.join(DEFAULT_CONFIG_FILE));
        (manager, temp_dir)
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let (manager, _temp_dir) = create_test_config_manager();

        let config = manager.load_run_config_from_env(::config::Map::new()).unwrap();
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn test_load_save_run_config() {
        let (manager, _temp_dir) = create_test_config_manager();

        let config = RunConfig {
            layout: InstanceLayout::Wabbajack,
            game: Game::Fallout4,
            modlist: "Magnum Opus".to_string(),
            ..RunConfig::default()
        };
        manager.save_run_config(&config).unwrap();

        let loaded = manager.load_run_config_from_env(::config::Map::new()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_env_overrides_file() {
        let (manager, _temp_dir) = create_test_config_manager();
        fs::write(manager.config_path(), "profile: From File\nversion: \"1.0\"\n").unwrap();

        let mut vars = ::config::Map::new();
        vars.insert("MODLIST_PROFILE".to_string(), "From Env".to_string());
        vars.insert("MODLIST_DEBUG".to_string(), "true".to_string());

        let config = manager.load_run_config_from_env(vars).unwrap();
        assert_eq!(config.profile, "From Env");
        assert_eq!(config.version, "1.0");
        assert!(config.debug);
    }
}
