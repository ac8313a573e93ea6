use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitePulseConfig {
    /// JSON seed file to load instead of the built-in demo records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_path: Option<PathBuf>,
    /// tracing filter directive, e.g. "sitepulse=debug". RUST_LOG wins if set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_log_filter() -> String {
    "sitepulse=info,sitepulse_state=info".to_string()
}

impl Default for SitePulseConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            log_filter: default_log_filter(),
            output: OutputFormat::default(),
        }
    }
}

impl SitePulseConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("sitepulse")
            .join("config.toml"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = SitePulseConfig::parse("").unwrap();
        assert_eq!(cfg.seed_path, None);
        assert_eq!(cfg.output, OutputFormat::Text);
        assert_eq!(cfg.log_filter, default_log_filter());
    }

    #[test]
    fn reads_all_keys() {
        let cfg = SitePulseConfig::parse(
            r#"
            seed_path = "/tmp/site.json"
            log_filter = "sitepulse_state=trace"
            output = "json"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.seed_path, Some(PathBuf::from("/tmp/site.json")));
        assert_eq!(cfg.log_filter, "sitepulse_state=trace");
        assert_eq!(cfg.output, OutputFormat::Json);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = SitePulseConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg.output, OutputFormat::Text);
        assert_eq!(cfg.seed_path, None);
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitepulse").join("config.toml");
        let cfg = SitePulseConfig {
            seed_path: Some(dir.path().join("site.json")),
            log_filter: "sitepulse_state=debug".to_string(),
            output: OutputFormat::Json,
        };
        cfg.save_to(&path).unwrap();

        let loaded = SitePulseConfig::load_from(&path).unwrap();
        assert_eq!(loaded.seed_path, cfg.seed_path);
        assert_eq!(loaded.log_filter, "sitepulse_state=debug");
        assert_eq!(loaded.output, OutputFormat::Json);
    }

    #[test]
    fn unreadable_config_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "output = 3").unwrap();
        let err = SitePulseConfig::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("config.toml"));
    }

    #[test]
    fn unknown_output_is_rejected() {
        assert!(SitePulseConfig::parse(r#"output = "yaml""#).is_err());
    }

    #[test]
    fn defaults_survive_toml() {
        let raw = toml::to_string_pretty(&SitePulseConfig::default()).unwrap();
        let cfg = SitePulseConfig::parse(&raw).unwrap();
        assert_eq!(cfg.output, OutputFormat::Text);
        assert!(!raw.contains("seed_path"));
    }
}
