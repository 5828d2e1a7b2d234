//! Marker classes as the styling layer reads them.
//!
//! A surface with declarative transitions keeps an offset and an opacity
//! per slide and lets the markers decide where those should end up. The
//! base values are what a slide looks like before any marker applies.

use crate::config::TransitionType;
use crate::state::SlideStyle;
use crate::surface::{Marker, Offset};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSheet {
    pub base_offset: Offset,
    pub base_opacity: f32,
}

/// Values the markers ask for; `None` leaves the property alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleTargets {
    pub offset: Option<Offset>,
    pub opacity: Option<f32>,
}

impl StyleSheet {
    pub fn for_transition(kind: TransitionType) -> Self {
        match kind {
            // waiting slides sit off-screen right
            TransitionType::Rotate => Self { base_offset: Offset::RIGHT, base_opacity: 1.0 },
            // waiting slides are stacked and transparent
            TransitionType::Dissolve => Self { base_offset: Offset::CENTER, base_opacity: 0.0 },
        }
    }

    pub fn resolve(&self, style: &SlideStyle) -> StyleTargets {
        let offset = if style.has(Marker::SlideLeft) {
            Some(Offset::LEFT)
        } else if style.has(Marker::SlideRight) {
            Some(Offset::RIGHT)
        } else if style.has(Marker::Current) {
            Some(Offset::CENTER)
        } else {
            None
        };

        let opacity = if style.has(Marker::FadeOut) {
            Some(0.0)
        } else if style.has(Marker::FadeIn) {
            Some(1.0)
        } else {
            None
        };

        StyleTargets { offset, opacity }
    }
}
