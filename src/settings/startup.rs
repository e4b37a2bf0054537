// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Startup constants and environment-driven configuration.

use std::path::PathBuf;

/// Properties file loaded when `SAFSHELL_PROPERTIES` is not set.
pub const DEFAULT_PROPERTIES_PATH: &str = "data/app_properties.yaml";

/// Icon directory used when `SAFSHELL_IMAGES` is not set.
pub const DEFAULT_IMAGES_PATH: &str = "images";

pub const PROPERTIES_ENV: &str = "SAFSHELL_PROPERTIES";
pub const IMAGES_ENV: &str = "SAFSHELL_IMAGES";

/// Edge length of toolbar button icons, in points.
pub const ICON_SIZE: f32 = 18.0;

pub const WINDOW_SIZE: [f32; 2] = [1280.0, 720.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [800.0, 600.0];

/// Where the shell finds its external resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub properties_path: PathBuf,
    pub images_dir: PathBuf,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            properties_path: PathBuf::from(DEFAULT_PROPERTIES_PATH),
            images_dir: PathBuf::from(DEFAULT_IMAGES_PATH),
        }
    }
}

impl ShellConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            properties_path: var(PROPERTIES_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.properties_path),
            images_dir: var(IMAGES_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.images_dir),
        }
    }
}
