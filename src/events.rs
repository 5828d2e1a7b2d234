use crate::surface::SlideId;

/// Host events the slider reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The viewport changed size
    Resize,
    /// A slide's image finished loading
    ImageLoaded(SlideId),
    PointerEnter,
    PointerLeave,
    TouchEnd,
}

/// Emitted once per cycle after the new slide became current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentChanged {
    pub previous: SlideId,
    pub current: SlideId,
    pub index: usize,
}
