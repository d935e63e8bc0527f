//! Reference data provider.
//!
//! Loads the Incoterm list and the HS code table on first use and caches them
//! for the lifetime of the owning [`ReferenceData`]. Load failures are logged
//! and replaced by a small built-in table so the server stays usable.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::core::config::ReferenceConfig;

const FALLBACK_INCOTERMS: [&str; 11] = [
    "EXW", "FCA", "FAS", "FOB", "CFR", "CIF", "CPT", "CIP", "DAP", "DPU", "DDP",
];

const FALLBACK_HS_CODES: [(&str, &str); 3] = [
    ("850490", "Parts for static converters"),
    (
        "850422",
        "Transformers exceeding 650 kVA but not exceeding 10,000 kVA",
    ),
    ("853710", "Boards with voltage <= 1,000 V"),
];

/// Errors raised while reading a reference file.
#[derive(Debug, Error)]
pub enum ReferenceLoadError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse '{path}': {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Deserialize)]
struct IncotermFile {
    #[serde(default)]
    incoterms: Vec<serde_yaml::Value>,
}

/// Lazily loaded, read-only Incoterm and HS code tables.
#[derive(Debug, Default)]
pub struct ReferenceData {
    incoterm_path: Option<PathBuf>,
    hs_code_path: Option<PathBuf>,
    incoterms: OnceCell<HashSet<String>>,
    hs_codes: OnceCell<HashMap<String, String>>,
}

impl ReferenceData {
    /// Reference data backed by the configured files.
    pub fn new(config: &ReferenceConfig) -> Self {
        Self {
            incoterm_path: Some(config.incoterm_path.clone()),
            hs_code_path: Some(config.hs_code_path.clone()),
            ..Default::default()
        }
    }

    /// Reference data that never touches the filesystem.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Load both tables now instead of on the first tool call.
    pub fn warm(&self) {
        let incoterms = self.incoterms().len();
        let hs_codes = self.hs_codes().len();
        info!(
            "Reference data ready: {} incoterms, {} HS codes",
            incoterms, hs_codes
        );
    }

    /// The Incoterm reference set.
    pub fn incoterms(&self) -> &HashSet<String> {
        self.incoterms.get_or_init(|| {
            let Some(path) = self.incoterm_path.as_deref() else {
                return fallback_incoterms();
            };
            load_incoterms(path).unwrap_or_else(|e| {
                warn!("incoterm load failed: {}", e);
                fallback_incoterms()
            })
        })
    }

    /// The HS code to description mapping.
    pub fn hs_codes(&self) -> &HashMap<String, String> {
        self.hs_codes.get_or_init(|| {
            let Some(path) = self.hs_code_path.as_deref() else {
                return fallback_hs_codes();
            };
            load_hs_codes(path).unwrap_or_else(|e| {
                warn!("hs code load failed: {}", e);
                fallback_hs_codes()
            })
        })
    }
}

fn read(path: &Path) -> Result<String, ReferenceLoadError> {
    fs::read_to_string(path).map_err(|source| ReferenceLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn load_incoterms(path: &Path) -> Result<HashSet<String>, ReferenceLoadError> {
    let raw = read(path)?;
    let file: IncotermFile =
        serde_yaml::from_str(&raw).map_err(|source| ReferenceLoadError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(file
        .incoterms
        .iter()
        .filter_map(|item| match item {
            serde_yaml::Value::String(s) => Some(s.to_uppercase()),
            serde_yaml::Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect())
}

fn load_hs_codes(path: &Path) -> Result<HashMap<String, String>, ReferenceLoadError> {
    let raw = read(path)?;
    Ok(parse_hs_table(&raw))
}

/// Parse a header-plus-rows `code,description` table.
fn parse_hs_table(raw: &str) -> HashMap<String, String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .skip(1)
        .filter_map(|line| {
            let (code, description) = line.split_once(',')?;
            let (code, description) = (code.trim(), description.trim());
            (!code.is_empty() && !description.is_empty())
                .then(|| (code.to_string(), description.to_string()))
        })
        .collect()
}

fn fallback_incoterms() -> HashSet<String> {
    FALLBACK_INCOTERMS.iter().map(|s| s.to_string()).collect()
}

fn fallback_hs_codes() -> HashMap<String, String> {
    FALLBACK_HS_CODES
        .iter()
        .map(|(code, description)| (code.to_string(), description.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_for(incoterm_path: &Path, hs_code_path: &Path) -> ReferenceConfig {
        ReferenceConfig {
            incoterm_path: incoterm_path.to_path_buf(),
            hs_code_path: hs_code_path.to_path_buf(),
        }
    }

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_builtin_tables() {
        let reference = ReferenceData::builtin();
        assert_eq!(reference.incoterms().len(), 11);
        assert!(reference.incoterms().contains("DPU"));
        assert_eq!(reference.hs_codes().len(), 3);
    }

    #[test]
    fn test_loads_files() {
        let incoterms = write_temp("incoterms:\n  - exw\n  - FOB\n  - ddp\n");
        let hs = write_temp(
            "code,description\n850440,Static converters\n\n850421, Liquid dielectric transformers, <= 650 kVA \n",
        );
        let reference = ReferenceData::new(&config_for(incoterms.path(), hs.path()));

        let set = reference.incoterms();
        assert_eq!(set.len(), 3);
        assert!(set.contains("EXW") && set.contains("DDP"));

        let map = reference.hs_codes();
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.get("850421").map(String::as_str),
            Some("Liquid dielectric transformers, <= 650 kVA")
        );
        assert!(!map.contains_key("code"));
    }

    #[test]
    fn test_missing_files_fall_back() {
        let reference = ReferenceData::new(&config_for(
            Path::new("/nonexistent/incoterm.yaml"),
            Path::new("/nonexistent/hs2022.csv"),
        ));
        assert_eq!(reference.incoterms().len(), 11);
        assert!(reference.hs_codes().contains_key("850490"));
    }

    #[test]
    fn test_malformed_yaml_falls_back() {
        let incoterms = write_temp("incoterms: [unterminated\n");
        let reference = ReferenceData::new(&config_for(
            incoterms.path(),
            Path::new("/nonexistent/hs2022.csv"),
        ));
        assert_eq!(reference.incoterms().len(), 11);
    }

    #[test]
    fn test_parse_hs_table_drops_incomplete_rows() {
        let map = parse_hs_table("code,description\n850490,\n,orphan\nnocomma\n853710,Boards\n");
        assert_eq!(map.len(), 1);
        assert_eq!(map["853710"], "Boards");
    }

    #[test]
    fn test_cached_after_first_load() {
        let reference = ReferenceData::builtin();
        let first = reference.incoterms() as *const _;
        let second = reference.incoterms() as *const _;
        assert_eq!(first, second);
    }
}
