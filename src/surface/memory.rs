//! A surface that keeps everything in memory.
//!
//! Animations complete instantly: `animate_offset` and the fades record the
//! requested duration in the operation log and jump straight to the end
//! state. Headless hosts and tests use it to inspect what the slider did.

use std::time::Duration;

use crate::config::Container;
use crate::state::SlideStyle;
use crate::surface::{ContainerId, Marker, Offset, SlideId, Surface};

/// One call made against the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    AddMarker(SlideId, Marker),
    RemoveMarker(SlideId, Marker),
    Show(SlideId),
    Hide(SlideId),
    SetOffset(SlideId, Offset),
    AnimateOffset(SlideId, Offset, Duration),
    FadeIn(SlideId, Duration),
    FadeOut(SlideId, Duration),
    SetContainerHeight(ContainerId, f32),
}

#[derive(Debug)]
struct MemoryContainer {
    selector: String,
    slides: Vec<SlideId>,
    height: Option<f32>,
}

#[derive(Debug)]
struct MemorySlide {
    style: SlideStyle,
    offset: Option<Offset>,
    opacity: f32,
    image_height: Option<f32>,
}

#[derive(Debug, Default)]
pub struct MemorySurface {
    containers: Vec<MemoryContainer>,
    slides: Vec<MemorySlide>,
    ops: Vec<SurfaceOp>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a container answering to `selector` holding `count` slides whose
    /// images are not loaded yet.
    pub fn add_container(&mut self, selector: &str, count: usize) -> ContainerId {
        self.add_container_with_images(selector, &vec![None; count])
    }

    /// Adds a container whose slides have the given image heights.
    pub fn add_container_with_images(&mut self, selector: &str, image_heights: &[Option<f32>]) -> ContainerId {
        let id = ContainerId(self.containers.len() as u32);
        let mut slides = Vec::with_capacity(image_heights.len());
        for height in image_heights {
            slides.push(SlideId(self.slides.len() as u32));
            self.slides.push(MemorySlide {
                style: SlideStyle::new(),
                offset: None,
                opacity: 1.0,
                image_height: *height,
            });
        }
        self.containers.push(MemoryContainer {
            selector: selector.to_string(),
            slides,
            height: None,
        });
        id
    }

    pub fn set_image_height(&mut self, slide: SlideId, height: f32) {
        if let Some(s) = self.slide_mut(slide) {
            s.image_height = Some(height);
        }
    }

    pub fn style(&self, slide: SlideId) -> Option<&SlideStyle> {
        self.slide(slide).map(|s| &s.style)
    }

    pub fn is_visible(&self, slide: SlideId) -> bool {
        self.slide(slide).is_some_and(|s| s.style.visible)
    }

    /// Last offset applied to `slide`, `None` if it was never positioned.
    pub fn offset(&self, slide: SlideId) -> Option<Offset> {
        self.slide(slide).and_then(|s| s.offset)
    }

    pub fn opacity(&self, slide: SlideId) -> f32 {
        self.slide(slide).map_or(0.0, |s| s.opacity)
    }

    pub fn container_height(&self, container: ContainerId) -> Option<f32> {
        self.containers.get(container.0 as usize).and_then(|c| c.height)
    }

    /// Slides carrying `marker`.
    pub fn marked(&self, marker: Marker) -> Vec<SlideId> {
        self.slides
            .iter()
            .enumerate()
            .filter(|(_, s)| s.style.has(marker))
            .map(|(i, _)| SlideId(i as u32))
            .collect()
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    fn slide(&self, slide: SlideId) -> Option<&MemorySlide> {
        self.slides.get(slide.0 as usize)
    }

    fn slide_mut(&mut self, slide: SlideId) -> Option<&mut MemorySlide> {
        self.slides.get_mut(slide.0 as usize)
    }
}

impl Surface for MemorySurface {
    fn query_container(&self, container: &Container) -> Vec<ContainerId> {
        match container {
            Container::Selector(selector) => self
                .containers
                .iter()
                .enumerate()
                .filter(|(_, c)| &c.selector == selector)
                .map(|(i, _)| ContainerId(i as u32))
                .collect(),
            Container::Handle(id) if (id.0 as usize) < self.containers.len() => vec![*id],
            Container::Handle(_) => Vec::new(),
        }
    }

    fn query_slides(&self, container: ContainerId) -> Vec<SlideId> {
        self.containers
            .get(container.0 as usize)
            .map(|c| c.slides.clone())
            .unwrap_or_default()
    }

    fn add_marker(&mut self, slide: SlideId, marker: Marker) {
        self.ops.push(SurfaceOp::AddMarker(slide, marker));
        if let Some(s) = self.slide_mut(slide) {
            s.style.add(marker);
        }
    }

    fn remove_marker(&mut self, slide: SlideId, marker: Marker) {
        self.ops.push(SurfaceOp::RemoveMarker(slide, marker));
        if let Some(s) = self.slide_mut(slide) {
            s.style.remove(marker);
        }
    }

    fn has_marker(&self, slide: SlideId, marker: Marker) -> bool {
        self.slide(slide).is_some_and(|s| s.style.has(marker))
    }

    fn show(&mut self, slide: SlideId) {
        self.ops.push(SurfaceOp::Show(slide));
        if let Some(s) = self.slide_mut(slide) {
            s.style.visible = true;
        }
    }

    fn hide(&mut self, slide: SlideId) {
        self.ops.push(SurfaceOp::Hide(slide));
        if let Some(s) = self.slide_mut(slide) {
            s.style.visible = false;
        }
    }

    fn set_offset(&mut self, slide: SlideId, offset: Offset) {
        self.ops.push(SurfaceOp::SetOffset(slide, offset));
        if let Some(s) = self.slide_mut(slide) {
            s.offset = Some(offset);
        }
    }

    fn animate_offset(&mut self, slide: SlideId, offset: Offset, duration: Duration) {
        self.ops.push(SurfaceOp::AnimateOffset(slide, offset, duration));
        if let Some(s) = self.slide_mut(slide) {
            s.offset = Some(offset);
        }
    }

    fn fade_in(&mut self, slide: SlideId, duration: Duration) {
        self.ops.push(SurfaceOp::FadeIn(slide, duration));
        if let Some(s) = self.slide_mut(slide) {
            s.style.visible = true;
            s.opacity = 1.0;
        }
    }

    fn fade_out(&mut self, slide: SlideId, duration: Duration) {
        self.ops.push(SurfaceOp::FadeOut(slide, duration));
        if let Some(s) = self.slide_mut(slide) {
            s.opacity = 0.0;
            s.style.visible = false;
        }
    }

    fn image_height(&self, slide: SlideId) -> Option<f32> {
        self.slide(slide).and_then(|s| s.image_height)
    }

    fn set_container_height(&mut self, container: ContainerId, height: f32) {
        self.ops.push(SurfaceOp::SetContainerHeight(container, height));
        if let Some(c) = self.containers.get_mut(container.0 as usize) {
            c.height = Some(height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_matches_every_container_with_that_name() {
        let mut surface = MemorySurface::new();
        let a = surface.add_container(".js-slider", 2);
        let _ = surface.add_container("#other", 1);
        let b = surface.add_container(".js-slider", 1);

        assert_eq!(surface.query_container(&Container::from(".js-slider")), vec![a, b]);
        assert!(surface.query_container(&Container::from(".missing")).is_empty());
    }

    #[test]
    fn test_handle_lookup() {
        let mut surface = MemorySurface::new();
        let id = surface.add_container(".js-slider", 1);
        assert_eq!(surface.query_container(&Container::Handle(id)), vec![id]);
        assert!(surface.query_container(&Container::Handle(ContainerId(7))).is_empty());
    }

    #[test]
    fn test_slides_are_in_document_order() {
        let mut surface = MemorySurface::new();
        let id = surface.add_container(".js-slider", 3);
        assert_eq!(surface.query_slides(id), vec![SlideId(0), SlideId(1), SlideId(2)]);
        assert!(surface.has_marker(SlideId(1), Marker::Slide));
    }

    #[test]
    fn test_fades_record_duration_and_visibility() {
        let mut surface = MemorySurface::new();
        surface.add_container(".js-slider", 1);
        let slide = SlideId(0);
        let duration = Duration::from_millis(250);

        surface.fade_out(slide, duration);
        assert!(!surface.is_visible(slide));
        assert_eq!(surface.opacity(slide), 0.0);

        surface.fade_in(slide, duration);
        assert!(surface.is_visible(slide));
        assert_eq!(surface.opacity(slide), 1.0);

        assert_eq!(surface.ops(), &[SurfaceOp::FadeOut(slide, duration), SurfaceOp::FadeIn(slide, duration)]);
    }

    #[test]
    fn test_unknown_slide_is_ignored() {
        let mut surface = MemorySurface::new();
        surface.add_marker(SlideId(9), Marker::Current);
        assert!(!surface.has_marker(SlideId(9), Marker::Current));
        assert_eq!(surface.image_height(SlideId(9)), None);
    }
}
