//! Effect executors: the visual half of a transition.
//!
//! The transition engine asks for effects ("fade this out", "slide that in")
//! without knowing how they are rendered. `MarkerEffects` expresses them as
//! marker classes for a styling layer that animates on its own;
//! `TimedEffects` drives the animation itself over the configured duration.
//! One of them is chosen when the slider is built and kept for its lifetime.

pub mod marker;
pub mod timed;

use std::fmt;
use std::time::Duration;

use crate::surface::{SlideId, Surface};

pub use marker::MarkerEffects;
pub use timed::TimedEffects;

pub trait Effects: fmt::Debug {
    fn fade_out(&self, surface: &mut dyn Surface, slide: SlideId);
    fn fade_in(&self, surface: &mut dyn Surface, slide: SlideId);
    /// Hides `slide` and parks it off-screen right, ready to come back in.
    fn park_right(&self, surface: &mut dyn Surface, slide: SlideId);
    fn slide_out_left(&self, surface: &mut dyn Surface, slide: SlideId);
    /// Shows `slide` and brings it to the visible position.
    fn slide_in(&self, surface: &mut dyn Surface, slide: SlideId);
}

/// Picks the executor matching the host's capability.
pub fn select(transitions: bool, trans_time: Duration) -> Box<dyn Effects> {
    if transitions {
        Box::new(MarkerEffects)
    } else {
        Box::new(TimedEffects::new(trans_time))
    }
}
