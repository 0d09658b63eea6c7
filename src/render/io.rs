//! Image decoding and PNG output.

use std::path::Path;

use image::{DynamicImage, RgbaImage};

use crate::error::{Result, StrokifyError};

/// Decode an image file in any format the `image` crate understands.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| StrokifyError::Image {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Write a canvas image to a PNG file, creating parent directories.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StrokifyError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    image.save(path).map_err(|e| StrokifyError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
