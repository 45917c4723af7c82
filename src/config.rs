//! Configuration module

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::model::ArtifactPaths;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: IpAddr,

    /// Server port
    pub port: u16,

    /// Random forest artifact
    pub classifier_path: PathBuf,

    /// Scaler artifact
    pub scaler_path: PathBuf,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup; unset or unparsable keys fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST")
                .and_then(|h| h.parse().ok())
                .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),

            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8501),

            classifier_path: lookup("CLASSIFIER_PATH")
                .unwrap_or_else(|| "artifacts/classifier.json".to_string())
                .into(),

            scaler_path: lookup("SCALER_PATH")
                .unwrap_or_else(|| "artifacts/scaler.json".to_string())
                .into(),

            environment: lookup("ENVIRONMENT")
                .unwrap_or_else(|| "development".to_string()),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths {
            classifier: self.classifier_path.clone(),
            scaler: self.scaler_path.clone(),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.addr(), "0.0.0.0:8501".parse().unwrap());
        assert_eq!(config.classifier_path, PathBuf::from("artifacts/classifier.json"));
        assert_eq!(config.scaler_path, PathBuf::from("artifacts/scaler.json"));
        assert!(!config.is_production());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("CLASSIFIER_PATH", "/models/rf.json"),
            ("ENVIRONMENT", "production"),
        ]
        .into_iter()
        .collect();

        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.addr(), "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.artifact_paths().classifier, PathBuf::from("/models/rf.json"));
        assert_eq!(config.artifact_paths().scaler, PathBuf::from("artifacts/scaler.json"));
        assert!(config.is_production());
    }

    #[test]
    fn test_bad_port_falls_back() {
        let config = Config::from_lookup(|key| (key == "PORT").then(|| "http".to_string()));
        assert_eq!(config.port, 8501);
    }
}
