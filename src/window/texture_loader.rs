use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};
use tracing::{debug, warn};

use crate::error::{SliderError, SliderResult};

// --- Helper: Load and Sort Image Paths ---
pub fn load_sorted_image_paths(dir_path: &Path) -> SliderResult<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir_path)
        .map_err(|e| SliderError::Image(format!("Failed to read directory {:?}: {}", dir_path, e)))?;

    for entry in entries {
        let entry = entry.map_err(|e| SliderError::Image(format!("Failed to read directory entry: {}", e)))?;
        let path = entry.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }
    // slide order is fixed by file name
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| matches!(ext.to_lowercase().as_str(), "png" | "jpg" | "jpeg" | "bmp" | "gif"))
}

// EXIF orientation, 1 when absent or unreadable
fn read_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            warn!("Could not read EXIF data for {:?}: {}", image_path, e);
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> SliderResult<Texture2D> {
    let file_bytes = fs::read(image_path)
        .map_err(|e| SliderError::Image(format!("Failed to read file {:?}: {}", image_path, e)))?;

    // Only JPEG carries reliable EXIF data
    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), &file_bytes)
        .map_err(|e| SliderError::Image(format!("Failed to load image data for {:?}: {}", image_path, e)))?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
    // Flipped orientations are left as they are.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    debug!("Loaded {:?} (orientation {})", image_path, orientation);

    let texture = rl.load_texture_from_image(thread, &image)
        .map_err(|e| SliderError::Image(format!("Failed to create texture for {:?}: {}", image_path, e)))?;

    // Unload the Image data from CPU memory
    drop(image);

    Ok(texture)
}
