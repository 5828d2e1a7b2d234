use crate::config::TransitionType;
use crate::effects::Effects;
use crate::slide::Positions;
use crate::surface::{Marker, Offset, SlideId, Surface};

/// Applies one cycle's visual changes. `positions` must have been captured
/// before calling; nothing here reads back from the surface.
pub fn transition(kind: TransitionType, positions: &Positions, effects: &dyn Effects, surface: &mut dyn Surface) {
    let Positions { previous, current, next } = *positions;

    match kind {
        TransitionType::Dissolve => {
            effects.fade_out(surface, current);
            surface.remove_marker(current, Marker::Current);

            effects.fade_in(surface, next);
            surface.add_marker(next, Marker::Current);
        }
        TransitionType::Rotate => {
            effects.park_right(surface, previous);

            effects.slide_out_left(surface, current);
            surface.remove_marker(current, Marker::Current);

            effects.slide_in(surface, next);
            surface.add_marker(next, Marker::Current);
        }
    }
}

/// Puts the first slide in its resting state before the first cycle.
pub fn prepare(kind: TransitionType, first: SlideId, surface: &mut dyn Surface) {
    match kind {
        TransitionType::Dissolve => surface.add_marker(first, Marker::FadeIn),
        TransitionType::Rotate => surface.set_offset(first, Offset::CENTER),
    }
}
