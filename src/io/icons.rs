// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Icon file decoding.
//!
//! Toolbar icons and the window logo are decoded into RGBA buffers that
//! the binding layer turns into egui textures.

use anyhow::{Context, Result};
use std::path::Path;

/// A decoded RGBA8 image.
pub struct LoadedIcon {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl LoadedIcon {
    /// Convert into window icon data.
    pub fn into_icon_data(self) -> egui::IconData {
        egui::IconData {
            rgba: self.pixels,
            width: self.width,
            height: self.height,
        }
    }

    /// Convert into an image egui can upload as a texture.
    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(
            [self.width as usize, self.height as usize],
            &self.pixels,
        )
    }
}

/// Decode the image file at `path`.
pub fn load_icon(path: &Path) -> Result<LoadedIcon> {
    let img = image::open(path)
        .with_context(|| format!("decoding icon {}", path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    Ok(LoadedIcon {
        width,
        height,
        pixels: img.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_icon_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("New.png");
        image::RgbaImage::from_pixel(2, 3, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let icon = load_icon(&path).unwrap();
        assert_eq!((icon.width, icon.height), (2, 3));
        assert_eq!(icon.pixels.len(), 2 * 3 * 4);
        assert_eq!(&icon.pixels[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_missing_icon_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_icon(&dir.path().join("absent.png")).is_err());
    }
}
