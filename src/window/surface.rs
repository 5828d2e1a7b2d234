use std::time::Duration;

use raylib::prelude::*;
use tracing::debug;

use crate::config::Container;
use crate::state::SlideStyle;
use crate::styling::StyleSheet;
use crate::surface::{ContainerId, Marker, Offset, SlideId, Surface};
use crate::window::tween::Animated;

const CONTAINER: ContainerId = ContainerId(0);

struct WindowSlide {
    texture: Texture2D,
    style: SlideStyle,
    offset: Animated,
    opacity: Animated,
    hide_after_fade: bool,
}

/// Raylib-backed surface: one container filling the window width, slides
/// scaled to that width and clipped to the container.
pub struct WindowSurface {
    selector: String,
    slides: Vec<WindowSlide>,
    sheet: StyleSheet,
    // Some when marker changes should animate instead of snapping
    marker_transition: Option<f32>,
    viewport: (f32, f32),
    height: f32,
}

enum Property {
    Offset,
    Opacity,
}

impl WindowSurface {
    pub fn new(
        selector: &str,
        textures: Vec<Texture2D>,
        sheet: StyleSheet,
        marker_transition: Option<Duration>,
        viewport: (f32, f32),
    ) -> Self {
        let slides = textures
            .into_iter()
            .map(|texture| WindowSlide {
                texture,
                style: SlideStyle::new(),
                offset: Animated::new(sheet.base_offset.0),
                opacity: Animated::new(sheet.base_opacity),
                hide_after_fade: false,
            })
            .collect();

        Self {
            selector: selector.to_string(),
            slides,
            sheet,
            marker_transition: marker_transition.map(|d| d.as_secs_f32()),
            viewport,
            // until the first image is measured the container fills the window
            height: viewport.1,
        }
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
    }

    /// Container rectangle, centred vertically in the window.
    pub fn container_rect(&self) -> Rectangle {
        let (width, window_height) = self.viewport;
        let y = ((window_height - self.height) * 0.5).max(0.0);
        Rectangle::new(0.0, y, width, self.height)
    }

    pub fn update(&mut self, dt: f32) {
        for slide in self.slides.iter_mut() {
            slide.offset.update(dt);
            if slide.opacity.update(dt) && slide.hide_after_fade {
                slide.style.visible = false;
                slide.hide_after_fade = false;
            }
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let rect = self.container_rect();
        let mut s = d.begin_scissor_mode(rect.x as i32, rect.y as i32, rect.width as i32, rect.height as i32);

        for slide in self.slides.iter() {
            let opacity = slide.opacity.value().clamp(0.0, 1.0);
            if !slide.style.visible || opacity <= 0.0 {
                continue;
            }

            let tex_width = slide.texture.width() as f32;
            let tex_height = slide.texture.height() as f32;
            let scaled_height = tex_height * rect.width / tex_width;

            s.draw_texture_pro(
                &slide.texture,
                Rectangle::new(0.0, 0.0, tex_width, tex_height),
                Rectangle::new(rect.x + slide.offset.value() * rect.width, rect.y, rect.width, scaled_height),
                Vector2::new(0.0, 0.0),
                0.0,
                Color::new(255, 255, 255, (opacity * 255.0) as u8),
            );
        }
    }

    fn slide_mut(&mut self, slide: SlideId) -> Option<&mut WindowSlide> {
        self.slides.get_mut(slide.0 as usize)
    }

    // Re-applies the style sheet to the property a marker change touched
    fn restyle(&mut self, slide: SlideId, property: Property) {
        let sheet = self.sheet;
        let marker_transition = self.marker_transition;
        let Some(s) = self.slide_mut(slide) else {
            return;
        };

        let targets = sheet.resolve(&s.style);
        // hidden slides never transition
        let duration = if s.style.visible { marker_transition.unwrap_or(0.0) } else { 0.0 };
        match property {
            Property::Offset => {
                if let Some(offset) = targets.offset {
                    s.offset.transition_to(offset.0, duration);
                }
            }
            Property::Opacity => {
                if let Some(opacity) = targets.opacity {
                    s.hide_after_fade = false;
                    s.opacity.transition_to(opacity, duration);
                }
            }
        }
    }
}

fn affected_property(marker: Marker) -> Option<Property> {
    match marker {
        Marker::Slide => None,
        Marker::Current | Marker::SlideLeft | Marker::SlideRight => Some(Property::Offset),
        Marker::FadeIn | Marker::FadeOut => Some(Property::Opacity),
    }
}

impl Surface for WindowSurface {
    fn query_container(&self, container: &Container) -> Vec<ContainerId> {
        match container {
            Container::Selector(selector) if *selector == self.selector => vec![CONTAINER],
            Container::Handle(id) if *id == CONTAINER => vec![CONTAINER],
            _ => Vec::new(),
        }
    }

    fn query_slides(&self, container: ContainerId) -> Vec<SlideId> {
        if container != CONTAINER {
            return Vec::new();
        }
        (0..self.slides.len()).map(|i| SlideId(i as u32)).collect()
    }

    fn add_marker(&mut self, slide: SlideId, marker: Marker) {
        let changed = self.slide_mut(slide).is_some_and(|s| s.style.add(marker));
        if let (true, Some(property)) = (changed, affected_property(marker)) {
            self.restyle(slide, property);
        }
    }

    fn remove_marker(&mut self, slide: SlideId, marker: Marker) {
        let changed = self.slide_mut(slide).is_some_and(|s| s.style.remove(marker));
        if let (true, Some(property)) = (changed, affected_property(marker)) {
            self.restyle(slide, property);
        }
    }

    fn has_marker(&self, slide: SlideId, marker: Marker) -> bool {
        self.slides.get(slide.0 as usize).is_some_and(|s| s.style.has(marker))
    }

    fn show(&mut self, slide: SlideId) {
        if let Some(s) = self.slide_mut(slide) {
            s.style.visible = true;
        }
    }

    fn hide(&mut self, slide: SlideId) {
        if let Some(s) = self.slide_mut(slide) {
            s.style.visible = false;
        }
    }

    fn set_offset(&mut self, slide: SlideId, offset: Offset) {
        if let Some(s) = self.slide_mut(slide) {
            s.offset.set(offset.0);
        }
    }

    fn animate_offset(&mut self, slide: SlideId, offset: Offset, duration: Duration) {
        if let Some(s) = self.slide_mut(slide) {
            s.offset.animate_to(offset.0, duration.as_secs_f32());
        }
    }

    fn fade_in(&mut self, slide: SlideId, duration: Duration) {
        if let Some(s) = self.slide_mut(slide) {
            if !s.style.visible {
                s.opacity.set(0.0);
            }
            s.style.visible = true;
            s.hide_after_fade = false;
            s.opacity.transition_to(1.0, duration.as_secs_f32());
        }
    }

    fn fade_out(&mut self, slide: SlideId, duration: Duration) {
        if let Some(s) = self.slide_mut(slide) {
            s.opacity.transition_to(0.0, duration.as_secs_f32());
            if s.opacity.is_animating() {
                s.hide_after_fade = true;
            } else {
                s.style.visible = false;
            }
        }
    }

    fn image_height(&self, slide: SlideId) -> Option<f32> {
        let s = self.slides.get(slide.0 as usize)?;
        let tex_width = s.texture.width() as f32;
        if tex_width <= 0.0 {
            return None;
        }
        Some(s.texture.height() as f32 * self.viewport.0 / tex_width)
    }

    fn set_container_height(&mut self, container: ContainerId, height: f32) {
        if container == CONTAINER {
            debug!("Container height {} -> {}", self.height, height);
            self.height = height;
        }
    }
}
