use crate::effects::Effects;
use crate::surface::{Marker, SlideId, Surface};

/// Declarative effects: only marker classes change, the styling layer turns
/// them into transitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerEffects;

impl Effects for MarkerEffects {
    fn fade_out(&self, surface: &mut dyn Surface, slide: SlideId) {
        surface.add_marker(slide, Marker::FadeOut);
        surface.remove_marker(slide, Marker::FadeIn);
    }

    fn fade_in(&self, surface: &mut dyn Surface, slide: SlideId) {
        surface.remove_marker(slide, Marker::FadeOut);
        surface.add_marker(slide, Marker::FadeIn);
    }

    fn park_right(&self, surface: &mut dyn Surface, slide: SlideId) {
        surface.hide(slide);
        surface.remove_marker(slide, Marker::SlideLeft);
        surface.add_marker(slide, Marker::SlideRight);
    }

    fn slide_out_left(&self, surface: &mut dyn Surface, slide: SlideId) {
        surface.add_marker(slide, Marker::SlideLeft);
    }

    fn slide_in(&self, surface: &mut dyn Surface, slide: SlideId) {
        surface.show(slide);
        surface.remove_marker(slide, Marker::SlideRight);
        // left over from when this slide last slid out
        surface.remove_marker(slide, Marker::SlideLeft);
    }
}
