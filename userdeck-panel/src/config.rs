use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Persisted panel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server_url: String,
    pub target: String,
    pub known_targets: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:4000".to_string(),
            target: "axum".to_string(),
            known_targets: vec!["axum".to_string(), "demo".to_string()],
        }
    }
}

impl Config {
    /// Location of the config file, if a config directory exists.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir()
            .map(|config_dir| config_dir.join("userdeck").join("config.json"))
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = serde_json::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) -> Result<(), std::io::Error> {
        if let Some(config_path) = Self::path() {
            if let Some(app_dir) = config_path.parent() {
                std::fs::create_dir_all(app_dir)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            std::fs::write(config_path, content)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_the_local_backend() {
        let config = Config::default();
        assert_eq!(config.server_url, "http://localhost:4000");
        assert_eq!(config.target, "axum");
        assert!(config.known_targets.contains(&config.target));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.server_url, config.server_url);
        assert_eq!(back.known_targets, config.known_targets);
    }
}
