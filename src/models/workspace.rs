// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Values manipulated by the edit toolbar.
//!
//! This is the shell's working state for the edit controls, saved to and
//! loaded from work files. Applications built on the shell supply their
//! own document model.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BORDER_THICKNESS: f32 = 1.0;
pub const DEFAULT_ZOOM: f32 = 1.0;

pub const BORDER_THICKNESS_RANGE: std::ops::RangeInclusive<f32> = 0.0..=10.0;
pub const ZOOM_RANGE: std::ops::RangeInclusive<f32> = 0.25..=8.0;

/// Complete work-file contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceValues {
    pub name: String,
    /// Unmultiplied sRGBA.
    pub background: [u8; 4],
    /// Unmultiplied sRGBA.
    pub border: [u8; 4],
    pub border_thickness: f32,
    pub zoom: f32,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Default for WorkspaceValues {
    fn default() -> Self {
        Self {
            name: "Untitled".to_string(),
            background: [255, 255, 255, 255],
            border: [0, 0, 0, 255],
            border_thickness: DEFAULT_BORDER_THICKNESS,
            zoom: DEFAULT_ZOOM,
            images: Vec::new(),
        }
    }
}

impl WorkspaceValues {
    /// Swap the background and border colours.
    pub fn reassign_colors(&mut self) {
        std::mem::swap(&mut self.background, &mut self.border);
    }

    /// Attach an image by path.
    pub fn add_image(&mut self, path: String) {
        self.images.push(path);
    }

    /// Detach the most recently added image, if any.
    pub fn remove_last_image(&mut self) -> Option<String> {
        self.images.pop()
    }

    /// Reset zoom and border thickness to their defaults.
    pub fn reset_size(&mut self) {
        self.zoom = DEFAULT_ZOOM;
        self.border_thickness = DEFAULT_BORDER_THICKNESS;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reassign_colors_swaps() {
        let mut values = WorkspaceValues::default();
        values.reassign_colors();
        assert_eq!(values.background, [0, 0, 0, 255]);
        assert_eq!(values.border, [255, 255, 255, 255]);
    }

    #[test]
    fn test_remove_last_image() {
        let mut values = WorkspaceValues::default();
        assert_eq!(values.remove_last_image(), None);
        values.add_image("a.png".to_string());
        values.add_image("b.png".to_string());
        assert_eq!(values.remove_last_image().as_deref(), Some("b.png"));
        assert_eq!(values.images, vec!["a.png".to_string()]);
    }

    #[test]
    fn test_missing_images_field_defaults() {
        let json = r#"{"name":"m","background":[1,2,3,4],"border":[5,6,7,8],"border_thickness":2.0,"zoom":1.5}"#;
        let values: WorkspaceValues = serde_json::from_str(json).unwrap();
        assert!(values.images.is_empty());
        assert_eq!(values.zoom, 1.5);
    }
}
