//! Image carousel controller.
//!
//! A `Slider` cycles through the slides of a container on a timer, using
//! either a rotate or a dissolve transition, and pauses on hover or touch.
//! Rendering is delegated to a `Surface`; `MemorySurface` keeps everything
//! in memory and `window::WindowSurface` draws with raylib.

pub mod config;
pub mod constants;
pub mod effects;
pub mod engine;
pub mod error;
pub mod events;
pub mod slide;
pub mod slider;
pub mod state;
pub mod styling;
pub mod surface;
pub mod timer;

#[cfg(feature = "window")]
pub mod window;

pub use config::{Capabilities, Container, InputMode, SliderConfig, SliderOptions, TransitionType};
pub use error::{SliderError, SliderResult};
pub use events::{CurrentChanged, HostEvent};
pub use slide::{Cursor, Positions, SlideSet};
pub use slider::Slider;
pub use surface::{ContainerId, Marker, MemorySurface, Offset, SlideId, Surface, SurfaceOp};
