use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub metrics: MetricsConfig,
    pub cleanup: CleanupConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// CPU sampling window in milliseconds. The collector clamps values
    /// below 500 up to its minimum.
    pub cpu_sample_ms: u64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        MetricsConfig { cpu_sample_ms: 500 }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CleanupConfig {
    /// Cleanup roots. Empty means the platform defaults are used.
    pub locations: Vec<PathBuf>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("systidy").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.metrics.cpu_sample_ms, 500);
        assert!(config.cleanup.locations.is_empty());
    }

    #[test]
    fn parse_partial_toml() {
        let toml_str = r#"
[metrics]
cpu_sample_ms = 1000
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.metrics.cpu_sample_ms, 1000);
        // Other sections should be defaults
        assert!(config.cleanup.locations.is_empty());
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r#"
[metrics]
cpu_sample_ms = 750

[cleanup]
locations = ["/tmp", "/var/tmp"]
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.metrics.cpu_sample_ms, 750);
        assert_eq!(
            config.cleanup.locations,
            vec![PathBuf::from("/tmp"), PathBuf::from("/var/tmp")]
        );
    }

    #[test]
    fn missing_file_returns_default() {
        let config = load_config_from_path(Path::new("/nonexistent/path/config.toml"));
        assert_eq!(config.metrics.cpu_sample_ms, 500);
    }

    #[test]
    fn invalid_toml_returns_default() {
        let temp = std::env::temp_dir().join("systidy_test_invalid.toml");
        std::fs::write(&temp, "this is not valid toml {{{{").unwrap();
        let config = load_config_from_path(&temp);
        assert_eq!(config.metrics.cpu_sample_ms, 500);
        let _ = std::fs::remove_file(&temp);
    }
}
