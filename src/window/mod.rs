//! Raylib host: loads slides from disk and renders them in a window.

pub mod surface;
pub mod texture_loader;
pub mod tween;

pub use surface::WindowSurface;
pub use texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};
