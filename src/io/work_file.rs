// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Work file serialization.
//!
//! Work files are saved and loaded as JSON; export writes YAML.

use crate::models::workspace::WorkspaceValues;
use anyhow::{Context, Result};
use std::path::Path;

/// Save workspace values as pretty-printed JSON.
pub fn save_json(values: &WorkspaceValues, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(values)?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Load workspace values from JSON.
pub fn load_json(path: &Path) -> Result<WorkspaceValues> {
    let json =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let values = serde_json::from_str(&json)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(values)
}

/// Export workspace values to YAML.
pub fn export_yaml(values: &WorkspaceValues, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(values)?;
    std::fs::write(path, yaml).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
