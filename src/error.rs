use thiserror::Error;

/// Everything that can stop a slider from coming up.
///
/// Once a `Slider` exists nothing it does returns an error: degenerate slide
/// counts, double starts and pausing a paused slider are all tolerated.
#[derive(Error, Debug)]
pub enum SliderError {
    #[error("Container not found: {0}")]
    ContainerNotFound(String),
    #[error("Container has no slides: {0}")]
    NoSlides(String),
    #[error("Delay must be greater than zero")]
    InvalidDelay,
    #[error("Invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
    #[cfg(feature = "window")]
    #[error("Image error: {0}")]
    Image(String),
}

pub type SliderResult<T> = Result<T, SliderError>;
