use std::time::Duration;

use crate::effects::Effects;
use crate::surface::{Offset, SlideId, Surface};

/// Imperative effects: opacity and offset are animated through the surface
/// over `trans_time`.
#[derive(Debug, Clone, Copy)]
pub struct TimedEffects {
    trans_time: Duration,
}

impl TimedEffects {
    pub fn new(trans_time: Duration) -> Self {
        Self { trans_time }
    }
}

impl Effects for TimedEffects {
    fn fade_out(&self, surface: &mut dyn Surface, slide: SlideId) {
        surface.fade_out(slide, self.trans_time);
    }

    fn fade_in(&self, surface: &mut dyn Surface, slide: SlideId) {
        surface.fade_in(slide, self.trans_time);
    }

    fn park_right(&self, surface: &mut dyn Surface, slide: SlideId) {
        surface.hide(slide);
        surface.set_offset(slide, Offset::RIGHT);
    }

    fn slide_out_left(&self, surface: &mut dyn Surface, slide: SlideId) {
        surface.animate_offset(slide, Offset::LEFT, self.trans_time);
    }

    fn slide_in(&self, surface: &mut dyn Surface, slide: SlideId) {
        surface.show(slide);
        surface.animate_offset(slide, Offset::CENTER, self.trans_time);
    }
}
