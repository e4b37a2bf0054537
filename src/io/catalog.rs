// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The loaded table of application properties.
//!
//! A [`PropertyCatalog`] is built once at startup from a YAML or JSON file
//! mapping key names to strings, and is read-only afterwards. Loading is
//! all-or-nothing: a file that cannot be read, does not parse, or names a
//! key outside the [`PropertyKey`] vocabulary produces no catalog at all.

use crate::settings::property_type::PropertyKey;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The properties source could not be turned into a catalog.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read properties file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed YAML properties: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("malformed JSON properties: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported properties file extension: {0:?}")]
    UnsupportedFormat(Option<String>),
}

/// A key was looked up that the loaded catalog does not define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("property {0} is not defined in the loaded catalog")]
pub struct MissingKeyError(pub PropertyKey);

/// Supported properties file syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Some(Self::Yaml),
            Some("json") => Some(Self::Json),
            _ => None,
        }
    }
}

/// Immutable mapping from [`PropertyKey`] to its display string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyCatalog {
    entries: BTreeMap<PropertyKey, String>,
}

impl PropertyCatalog {
    /// Load a catalog from a `.yaml`/`.yml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self, CatalogLoadError> {
        let format = CatalogFormat::from_path(path).ok_or_else(|| {
            CatalogLoadError::UnsupportedFormat(
                path.extension().map(|e| e.to_string_lossy().into_owned()),
            )
        })?;

        let text = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::parse(&text, format)?;
        log::info!(
            "Loaded {} properties from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse a catalog from in-memory text.
    pub fn parse(text: &str, format: CatalogFormat) -> Result<Self, CatalogLoadError> {
        match format {
            CatalogFormat::Yaml => Self::from_yaml_str(text),
            CatalogFormat::Json => Self::from_json_str(text),
        }
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, CatalogLoadError> {
        let entries = serde_yaml::from_str(text)?;
        Ok(Self { entries })
    }

    pub fn from_json_str(text: &str) -> Result<Self, CatalogLoadError> {
        let entries = serde_json::from_str(text)?;
        Ok(Self { entries })
    }

    /// Build a catalog directly from key/value pairs.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (PropertyKey, S)>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }

    /// Look up the string for `key`. There is no fallback value.
    pub fn resolve(&self, key: PropertyKey) -> Result<&str, MissingKeyError> {
        self.entries
            .get(&key)
            .map(String::as_str)
            .ok_or(MissingKeyError(key))
    }

    pub fn contains(&self, key: PropertyKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Which of `keys` this catalog cannot resolve, in the order given.
    pub fn missing_keys(&self, keys: &[PropertyKey]) -> Vec<PropertyKey> {
        keys.iter().copied().filter(|k| !self.contains(*k)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_YAML: &str = "\
APP_TITLE: Map Shell
NEW_ICON: New.png
NEW_TOOLTIP: Create a new map
";

    #[test]
    fn test_resolve_loaded_keys() {
        let catalog = PropertyCatalog::from_yaml_str(SAMPLE_YAML).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.resolve(PropertyKey::AppTitle).unwrap(), "Map Shell");
        assert_eq!(catalog.resolve(PropertyKey::NewIcon).unwrap(), "New.png");
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let catalog = PropertyCatalog::from_yaml_str(SAMPLE_YAML).unwrap();
        assert_eq!(
            catalog.resolve(PropertyKey::SaveTooltip),
            Err(MissingKeyError(PropertyKey::SaveTooltip))
        );

        let empty = PropertyCatalog::default();
        for key in PropertyKey::ALL {
            assert_eq!(empty.resolve(*key), Err(MissingKeyError(*key)));
        }
    }

    #[test]
    fn test_unknown_key_rejects_whole_source() {
        let text = "APP_TITLE: Map Shell\nNEW_ICN: New.png\n";
        let result = PropertyCatalog::from_yaml_str(text);
        assert!(matches!(result, Err(CatalogLoadError::Yaml(_))));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let result = PropertyCatalog::from_json_str("{\"APP_TITLE\": \"Map Shell\"");
        assert!(matches!(result, Err(CatalogLoadError::Json(_))));
    }

    #[test]
    fn test_json_source() {
        let catalog =
            PropertyCatalog::from_json_str(r#"{"SAVE_ICON": "Save.png", "EXIT_ICON": "Exit.png"}"#)
                .unwrap();
        assert_eq!(catalog.resolve(PropertyKey::SaveIcon).unwrap(), "Save.png");
        assert_eq!(
            catalog.missing_keys(&[PropertyKey::SaveIcon, PropertyKey::LoadIcon, PropertyKey::ExitIcon]),
            vec![PropertyKey::LoadIcon]
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(SAMPLE_YAML.as_bytes()).unwrap();

        let catalog = PropertyCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.resolve(PropertyKey::NewTooltip).unwrap(), "Create a new map");
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".xml").tempfile().unwrap();
        let result = PropertyCatalog::load(file.path());
        assert!(matches!(result, Err(CatalogLoadError::UnsupportedFormat(Some(ext))) if ext == "xml"));
    }

    #[test]
    fn test_load_reports_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let result = PropertyCatalog::load(&path);
        assert!(matches!(result, Err(CatalogLoadError::Io { .. })));
    }
}
