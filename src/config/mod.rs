use serde::Deserialize;
use std::path::PathBuf;

use crate::geometry::UnitSystem;

fn default_units() -> UnitSystem {
    UnitSystem::Cyrillic
}

/// Optional TOML config file. Every field can also be set on the command
/// line; CLI values win.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    /// Base URL of the field persistence API
    #[serde(default)]
    pub url: Option<String>,
    /// Bearer token for the API
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_units")]
    pub units: UnitSystem,
    /// Boundary simplification tolerance in meters
    #[serde(default)]
    pub simplify: Option<f64>,
    /// Where to write normalized boundaries as GeoJSON
    #[serde(default)]
    pub geometry_out: Option<PathBuf>,
    #[serde(default)]
    pub verbose: bool,
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("fieldarea.toml"));
    paths.push(PathBuf::from(".fieldarea.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("fieldarea").join("config.toml"));
        paths.push(config_dir.join("fieldarea.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".fieldarea.toml"));
        paths.push(home.join(".config").join("fieldarea").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            url = "https://fields.example.com"
            token = "abc123"
            units = "ascii"
            simplify = 5.0
            verbose = true
        "#;

        let config: FileConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.url.as_deref(), Some("https://fields.example.com"));
        assert_eq!(config.token.as_deref(), Some("abc123"));
        assert_eq!(config.units, UnitSystem::Ascii);
        assert_eq!(config.simplify, Some(5.0));
        assert!(config.verbose);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.url, None);
        assert_eq!(config.units, UnitSystem::Cyrillic);
        assert_eq!(config.simplify, None);
        assert!(!config.verbose);
    }
}
