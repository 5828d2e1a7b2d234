use std::path::PathBuf;
use std::process;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use srslider::constants::*;
use srslider::styling::StyleSheet;
use srslider::window::{load_sorted_image_paths, load_texture_with_exif_rotation, WindowSurface};
use srslider::{Capabilities, Container, HostEvent, InputMode, Slider, SliderConfig, SliderOptions, TransitionType};

#[derive(Parser)]
#[command(name = "srslider")]
#[command(about = "Plays the images of a directory as a sliding carousel")]
struct Args {
    /// Directory holding the slide images (sorted by file name)
    directory: PathBuf,

    /// Options object as JSON, e.g. '{"delay": 2000, "type": "dissolve"}'
    #[arg(long)]
    options: Option<String>,

    /// Container selector the slider looks for
    #[arg(long)]
    container: Option<String>,

    /// Delay between slides (milliseconds)
    #[arg(long)]
    delay: Option<u64>,

    /// Pause while hovered / on touch
    #[arg(long)]
    pause: Option<bool>,

    /// Transition duration (milliseconds)
    #[arg(long)]
    trans_time: Option<u64>,

    /// Transition type: rotate or dissolve
    #[arg(long = "type", value_parser = ["rotate", "dissolve"])]
    transition: Option<String>,

    /// Input used to pause: hover or touch
    #[arg(long)]
    input: Option<InputMode>,

    /// Let marker classes drive the transitions
    #[arg(long)]
    css_transitions: bool,

    /// Report touch input as available
    #[arg(long)]
    touch: bool,

    #[arg(long, default_value_t = RENDER_WIDTH / 2)]
    width: i32,

    #[arg(long, default_value_t = RENDER_HEIGHT / 2)]
    height: i32,
}

impl Args {
    fn slider_options(&self) -> Result<SliderOptions> {
        let base = match &self.options {
            Some(json) => SliderOptions::from_json(json)?,
            None => SliderOptions::default(),
        };
        let flags = SliderOptions {
            container: self.container.as_deref().map(Container::from),
            delay: self.delay,
            pause: self.pause,
            trans_time: self.trans_time,
            transition: self.transition.as_deref().map(TransitionType::from_name),
            input: self.input,
        };
        Ok(base.overlay(flags))
    }
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("srslider=info")))
        .init();

    let args = Args::parse();
    let options = args.slider_options()?;
    let config = SliderConfig::resolve(options.clone())?;
    let capabilities = Capabilities { transitions: args.css_transitions, touch: args.touch };
    info!("Input path: {:?}, transition: {}", args.directory, config.transition.name());

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Slider")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let mut textures = Vec::new();
    for path in load_sorted_image_paths(&args.directory)? {
        match load_texture_with_exif_rotation(&mut rl, &thread, &path) {
            Ok(texture) => textures.push(texture),
            Err(e) => warn!("Skipping {:?}: {}", path, e),
        }
    }

    // The window answers to the default selector, like a page's markup would
    let surface = WindowSurface::new(
        DEFAULT_CONTAINER,
        textures,
        StyleSheet::for_transition(config.transition),
        capabilities.transitions.then_some(config.trans_time),
        (rl.get_screen_width() as f32, rl.get_screen_height() as f32),
    );

    let mut slider = match Slider::init(surface, options, Some(&capabilities)) {
        Ok(slider) => slider,
        Err(e) => {
            error!("Slider did not start: {}", e);
            process::exit(1);
        }
    };
    slider.subscribe(|changed| debug!("Now showing slide {} ({})", changed.index, changed.current));

    // Textures are loaded up front, so every image is ready now
    for slide in slider.slides().as_slice().to_vec() {
        slider.handle_event(HostEvent::ImageLoaded(slide));
    }

    let mut hovering = false;
    let mut touching = false;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        if rl.is_window_resized() {
            slider
                .surface_mut()
                .set_viewport(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
            slider.handle_event(HostEvent::Resize);
        }

        let rect = slider.surface().container_rect();
        let mouse = rl.get_mouse_position();
        let inside = mouse.x >= rect.x
            && mouse.x <= rect.x + rect.width
            && mouse.y >= rect.y
            && mouse.y <= rect.y + rect.height;
        if inside != hovering {
            hovering = inside;
            slider.handle_event(if inside { HostEvent::PointerEnter } else { HostEvent::PointerLeave });
        }

        let touch_now = rl.get_touch_point_count() > 0;
        if touching && !touch_now {
            slider.handle_event(HostEvent::TouchEnd);
        }
        touching = touch_now;

        slider.tick(Duration::from_secs_f32(dt));
        slider.surface_mut().update(dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        slider.surface().draw(&mut d);
    }

    Ok(())
}
