// src/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_CONFIG_PATH: &str = "RFP_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const DEFAULT_OUTPUT_FILE: &str = "rfp_data.json";

/// One website/endpoint to collect from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Selects the extraction rules for this source (see `collect::extract`).
    pub id: String,
    /// Human-readable label stamped into every record's `source` field.
    pub label: String,
    /// Listing page URL; also the base for resolving relative links.
    pub url: String,
    /// Issuing body override. Absent means the rules' default agency, then
    /// the label.
    #[serde(default)]
    pub agency: Option<String>,
    /// Case-insensitive substring filters applied to live results only.
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_output_file")]
    pub output_file: String,
    pub sources: Vec<SourceConfig>,
}

fn default_output_file() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

impl Config {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("parsing config at {}", path.display()))
    }

    /// Resolve the config path: $RFP_CONFIG_PATH first, then ./config.json.
    /// A missing file is a startup error; there is no built-in default set
    /// of sources.
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            return Self::from_path(&PathBuf::from(p));
        }
        Self::from_path(Path::new(DEFAULT_CONFIG_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config_parses() {
        let raw = r#"{
            "output_file": "out.json",
            "sources": [
                {
                    "id": "indiana-idoa",
                    "label": "Indiana IDOA",
                    "agency": "Indiana Department of Administration",
                    "url": "https://www.in.gov/idoa/procurement/current-business-opportunities/",
                    "keywords": ["technology"]
                }
            ]
        }"#;
        let cfg: Config = serde_json::from_str(raw).unwrap();
        assert_eq!(cfg.output_file, "out.json");
        assert_eq!(cfg.sources.len(), 1);
        assert_eq!(cfg.sources[0].id, "indiana-idoa");
        assert_eq!(cfg.sources[0].keywords, vec!["technology".to_string()]);
    }

    #[test]
    fn optional_fields_default() {
        let raw = r#"{
            "sources": [
                { "id": "x", "label": "X", "url": "https://example.gov/" }
            ]
        }"#;
        let cfg: Config = serde_json::from_str(raw).unwrap();
        assert_eq!(cfg.output_file, DEFAULT_OUTPUT_FILE);
        assert!(cfg.sources[0].agency.is_none());
        assert!(cfg.sources[0].keywords.is_empty());
    }
}
