//! I/O helpers for frames and JSON reports.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned RGB frame.
//! - `save_rgb_image`: write a frame (e.g. a diagnostic overlay) to disk.
//! - `write_json_file`: pretty-print a serializable value to disk.

use super::frame::FrameRgb8;
use image::{ImageBuffer, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to tightly packed 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<FrameRgb8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(FrameRgb8::new(width, height, img.into_raw()))
}

/// Save an RGB frame to disk; the format follows the file extension.
pub fn save_rgb_image(frame: &FrameRgb8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let buffer: RgbImage =
        ImageBuffer::from_raw(frame.w as u32, frame.h as u32, frame.data.clone())
            .ok_or_else(|| "Failed to create RGB image buffer".to_string())?;
    buffer
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
