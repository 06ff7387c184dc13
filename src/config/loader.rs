use super::types::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use toml::Table;
use tracing::info;

/// Shipped hotbar layout, written out when no hotbar file exists yet
const DEFAULT_HOTBAR: &str = include_str!("../../resources/hotbar.toml");

pub struct ConfigLoader {
    config_dir: PathBuf,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_dir: Self::get_config_dir(),
        }
    }

    /// Loader rooted at an explicit directory
    pub fn with_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    fn get_config_dir() -> PathBuf {
        // Config lives next to the executable so several servers can run
        // side by side with their own files
        let exe_path = std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("."));

        exe_path.parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf()
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn hotbar_path(&self, config: &Config) -> PathBuf {
        self.config_dir.join(&config.hotbar_file)
    }

    pub fn load(&self) -> Result<Config> {
        let config_path = self.config_path();
        if !config_path.exists() {
            info!("Config file not found, creating default config at {:?}", config_path);
            let config = Config::default();
            self.save(&config)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&config_path)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .context("Failed to parse config file")?;

        info!("Loaded configuration from {:?}", config_path);
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        fs::create_dir_all(&self.config_dir)
            .context("Failed to create config directory")?;

        let toml_string = toml::to_string_pretty(config)
            .context("Failed to serialize config")?;

        fs::write(self.config_path(), toml_string)
            .context("Failed to write config file")?;

        info!("Saved configuration to {:?}", self.config_path());
        Ok(())
    }

    /// Read the hotbar item file as a raw table, writing the shipped
    /// default first if it does not exist
    pub fn load_hotbar(&self, config: &Config) -> Result<Table> {
        let hotbar_path = self.hotbar_path(config);
        if !hotbar_path.exists() {
            info!("Hotbar file not found, writing default to {:?}", hotbar_path);
            if let Some(parent) = hotbar_path.parent() {
                fs::create_dir_all(parent)
                    .context("Failed to create hotbar directory")?;
            }
            fs::write(&hotbar_path, DEFAULT_HOTBAR)
                .context("Failed to write default hotbar file")?;
        }

        let contents = fs::read_to_string(&hotbar_path)
            .with_context(|| format!("Failed to read hotbar file {:?}", hotbar_path))?;

        let table: Table = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse hotbar file {:?}", hotbar_path))?;

        Ok(table)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
