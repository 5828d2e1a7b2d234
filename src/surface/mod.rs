//! The rendering surface the slider drives.
//!
//! The slider never touches pixels. Everything visual goes through the
//! `Surface` trait: finding containers and slides, toggling marker classes,
//! showing, hiding, moving and fading slides, and measuring images.

pub mod memory;

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::config::Container;
use crate::constants::*;

pub use memory::{MemorySurface, SurfaceOp};

/// Handle to a container element, issued by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ContainerId(pub u32);

/// Handle to a slide element, issued by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideId(pub u32);

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slide #{}", self.0)
    }
}

/// Marker classes toggled on slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Marker {
    Slide,
    Current,
    FadeIn,
    FadeOut,
    SlideLeft,
    SlideRight,
}

impl Marker {
    pub fn class_name(&self) -> &'static str {
        match self {
            Marker::Slide => SLIDE_CLASS,
            Marker::Current => CURRENT_CLASS,
            Marker::FadeIn => FADE_IN_CLASS,
            Marker::FadeOut => FADE_OUT_CLASS,
            Marker::SlideLeft => SLIDE_LEFT_CLASS,
            Marker::SlideRight => SLIDE_RIGHT_CLASS,
        }
    }
}

/// Horizontal position of a slide, as a fraction of the container width.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Offset(pub f32);

impl Offset {
    pub const LEFT: Offset = Offset(-1.0);
    pub const CENTER: Offset = Offset(0.0);
    pub const RIGHT: Offset = Offset(1.0);
}

pub trait Surface {
    /// Every container matching `container`, in document order.
    fn query_container(&self, container: &Container) -> Vec<ContainerId>;
    /// Slides inside `container`, in document order.
    fn query_slides(&self, container: ContainerId) -> Vec<SlideId>;

    fn add_marker(&mut self, slide: SlideId, marker: Marker);
    fn remove_marker(&mut self, slide: SlideId, marker: Marker);
    fn has_marker(&self, slide: SlideId, marker: Marker) -> bool;

    fn show(&mut self, slide: SlideId);
    fn hide(&mut self, slide: SlideId);

    /// Moves `slide` immediately.
    fn set_offset(&mut self, slide: SlideId, offset: Offset);
    /// Moves `slide` to `offset` over `duration`.
    fn animate_offset(&mut self, slide: SlideId, offset: Offset, duration: Duration);

    /// Shows `slide` and raises its opacity to 1 over `duration`.
    fn fade_in(&mut self, slide: SlideId, duration: Duration);
    /// Lowers the opacity of `slide` to 0 over `duration`, then hides it.
    fn fade_out(&mut self, slide: SlideId, duration: Duration);

    /// Rendered height of the slide's image, if it has been loaded.
    fn image_height(&self, slide: SlideId) -> Option<f32>;
    fn set_container_height(&mut self, container: ContainerId, height: f32);
}
