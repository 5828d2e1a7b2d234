pub const RENDER_WIDTH: i32 = 1920;           // Width of the host window before halving
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the host window before halving
pub const FPS: u32 = 60;                      // Frames per second

// Option defaults, overridden by whatever the caller passes to `Slider::init`
pub const DEFAULT_CONTAINER: &str = ".js-slider";
pub const DEFAULT_DELAY_MS: u64 = 3000;       // Delay between two cycles (milliseconds)
pub const DEFAULT_PAUSE: bool = true;         // Pause on hover / touch
pub const DEFAULT_TRANS_TIME_MS: u64 = 500;   // Duration of one transition (milliseconds)

// Marker classes shared with the styling layer
pub const SLIDE_CLASS: &str = "js-slide";
pub const CURRENT_CLASS: &str = "js-current";
pub const FADE_IN_CLASS: &str = "srs-fadein";
pub const FADE_OUT_CLASS: &str = "srs-fadeout";
pub const SLIDE_LEFT_CLASS: &str = "srs-slideleft";
pub const SLIDE_RIGHT_CLASS: &str = "srs-slideright";
