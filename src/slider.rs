//! The slider controller.
//!
//! `Slider` owns the configuration, the discovered slides, the cursor and
//! the timer. The cursor is the only authority on which slide is current:
//! the `Current` marker on the surface follows it, and listeners hear about
//! every change through `subscribe`.

use std::fmt;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::{Capabilities, InputMode, SliderConfig, SliderOptions};
use crate::effects::{self, Effects};
use crate::engine;
use crate::error::{SliderError, SliderResult};
use crate::events::{CurrentChanged, HostEvent};
use crate::slide::{Cursor, Positions, SlideSet};
use crate::surface::{ContainerId, Marker, SlideId, Surface};
use crate::timer::Interval;

type Listener = Box<dyn FnMut(&CurrentChanged)>;

pub struct Slider<S: Surface> {
    config: SliderConfig,
    surface: S,
    containers: Vec<ContainerId>,
    slides: SlideSet,
    cursor: Cursor,
    positions: Option<Positions>,
    transitions: bool,
    input: InputMode,
    effects: Box<dyn Effects>,
    interval: Option<Interval>,
    listeners: Vec<Listener>,
}

impl<S: Surface> fmt::Debug for Slider<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("config", &self.config)
            .field("slides", &self.slides)
            .field("cursor", &self.cursor)
            .field("transitions", &self.transitions)
            .field("input", &self.input)
            .field("sliding", &self.is_sliding())
            .finish_non_exhaustive()
    }
}

impl<S: Surface> Slider<S> {
    /// Sets up a slider on `surface` and starts it.
    ///
    /// Fails without touching the surface when the container matches
    /// nothing or holds no slides; no timer exists in that case.
    pub fn init(surface: S, options: SliderOptions, probe: Option<&Capabilities>) -> SliderResult<Self> {
        let config = SliderConfig::resolve(options)?;

        let containers = surface.query_container(&config.container);
        if containers.is_empty() {
            return Err(SliderError::ContainerNotFound(config.container.to_string()));
        }
        let found = containers.iter().map(|c| surface.query_slides(*c).len()).sum::<usize>();
        if found == 0 {
            return Err(SliderError::NoSlides(config.container.to_string()));
        }

        let transitions = probe.is_some_and(|caps| caps.transitions);
        let input = config.input_mode(probe);
        let effects = effects::select(transitions, config.trans_time);
        debug!(
            "Slider on {} ({} containers): transitions={}, input={:?}, effects={:?}",
            config.container,
            containers.len(),
            transitions,
            input,
            effects
        );

        let mut slider = Self {
            config,
            surface,
            containers,
            slides: SlideSet::default(),
            cursor: Cursor::new(0),
            positions: None,
            transitions,
            input,
            effects,
            interval: None,
            listeners: Vec::new(),
        };

        slider.capture_elements();
        let first = slider.set_current();
        engine::prepare(slider.config.transition, first, &mut slider.surface);
        slider.start_slider();

        Ok(slider)
    }

    /// Discovers the slides and makes the first one current.
    pub fn capture_elements(&mut self) {
        let slides = self
            .containers
            .iter()
            .flat_map(|c| self.surface.query_slides(*c))
            .collect::<Vec<_>>();

        for slide in &slides {
            self.surface.remove_marker(*slide, Marker::Current);
        }

        self.slides = SlideSet::new(slides);
        self.cursor = Cursor::new(self.slides.len());
        self.positions = None;

        if let Some(first) = self.slides.get(0) {
            self.surface.add_marker(first, Marker::Current);
        }
        debug!("Captured {} slides", self.slides.len());
    }

    /// The slide at the cursor.
    pub fn set_current(&self) -> SlideId {
        // init guarantees at least one slide
        self.slides.get(self.cursor.index()).unwrap_or(SlideId(0))
    }

    /// Advances the cursor and captures the slides taking part in this cycle.
    pub fn set_positions(&mut self) -> Positions {
        let step = self.cursor.advance();
        let positions = Positions::resolve(&self.slides, step).unwrap_or_else(|| {
            let current = self.slides.get(step.current).unwrap_or(SlideId(0));
            Positions { previous: current, current, next: current }
        });
        self.positions = Some(positions);
        positions
    }

    /// Runs one transition cycle.
    pub fn animate(&mut self) -> CurrentChanged {
        let positions = self.set_positions();
        debug!(
            "Cycle to {} ({}): previous={}, current={}, next={}",
            self.cursor.index(),
            self.config.transition.name(),
            positions.previous,
            positions.current,
            positions.next
        );

        engine::transition(self.config.transition, &positions, self.effects.as_ref(), &mut self.surface);

        let changed = CurrentChanged {
            previous: positions.current,
            current: positions.next,
            index: self.cursor.index(),
        };
        for listener in self.listeners.iter_mut() {
            listener(&changed);
        }
        changed
    }

    /// Arms the repeating timer. Does nothing if it is already running.
    pub fn start_slider(&mut self) {
        if self.interval.is_some() {
            debug!("Slider already running");
            return;
        }
        self.interval = Some(Interval::new(self.config.delay));
        info!("Slider started, cycling every {:?}", self.config.delay);
    }

    /// Cancels the timer. Animations already started still finish.
    pub fn pause_slider(&mut self) {
        if self.interval.take().is_some() {
            info!("Slider paused at slide {}", self.cursor.index());
        }
    }

    pub fn toggle_slider(&mut self) {
        if self.is_sliding() {
            self.pause_slider();
        } else {
            self.start_slider();
        }
    }

    /// Advances the timer by `dt`, running a cycle for every elapsed delay.
    /// Returns the number of cycles run.
    pub fn tick(&mut self, dt: Duration) -> usize {
        let fired = match self.interval.as_mut() {
            Some(interval) => interval.tick(dt),
            None => return 0,
        };
        for _ in 0..fired {
            self.animate();
        }
        fired
    }

    /// Sizes the containers to the current slide's image.
    pub fn scale_slider(&mut self) {
        let current = self.set_current();
        match self.surface.image_height(current) {
            Some(height) => {
                for container in &self.containers {
                    self.surface.set_container_height(*container, height);
                }
            }
            None => debug!("Not scaling, {} has no image yet", current),
        }
    }

    pub fn handle_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::Resize | HostEvent::ImageLoaded(_) => self.scale_slider(),
            HostEvent::PointerEnter | HostEvent::PointerLeave => {
                if self.config.pause && self.input == InputMode::Hover {
                    self.toggle_slider();
                }
            }
            HostEvent::TouchEnd => {
                if self.config.pause && self.input == InputMode::Touch {
                    self.toggle_slider();
                }
            }
        }
    }

    /// Registers a listener called after every cycle.
    pub fn subscribe(&mut self, listener: impl FnMut(&CurrentChanged) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn is_sliding(&self) -> bool {
        self.interval.is_some()
    }

    pub fn current_index(&self) -> usize {
        self.cursor.index()
    }

    pub fn slides(&self) -> &SlideSet {
        &self.slides
    }

    /// Snapshot of the last cycle, `None` before the first one.
    pub fn positions(&self) -> Option<Positions> {
        self.positions
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn transitions(&self) -> bool {
        self.transitions
    }

    pub fn input_mode(&self) -> InputMode {
        self.input
    }

    pub fn containers(&self) -> &[ContainerId] {
        &self.containers
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::config::TransitionType;
    use crate::surface::MemorySurface;

    fn slider(count: usize) -> Slider<MemorySurface> {
        let mut surface = MemorySurface::new();
        surface.add_container(".js-slider", count);
        Slider::init(surface, SliderOptions::default(), None).unwrap()
    }

    #[test]
    fn test_init_starts_sliding() {
        let slider = slider(3);
        assert!(slider.is_sliding());
        assert_eq!(slider.current_index(), 0);
        assert_eq!(slider.slides().len(), 3);
        assert!(!slider.transitions());
        assert_eq!(slider.input_mode(), InputMode::Hover);
    }

    #[test]
    fn test_set_positions_wraps_previous() {
        let mut slider = slider(4);
        let positions = slider.set_positions();
        assert_eq!(positions.previous, SlideId(3));
        assert_eq!(positions.current, SlideId(0));
        assert_eq!(positions.next, SlideId(1));
        assert_eq!(slider.current_index(), 1);
    }

    #[test]
    fn test_set_positions_wraps_next() {
        let mut slider = slider(3);
        slider.animate();
        slider.animate();
        assert_eq!(slider.current_index(), 2);

        let positions = slider.set_positions();
        assert_eq!(slider.current_index(), 0);
        assert_eq!(positions.next, SlideId(0));
    }

    #[test]
    fn test_set_current_is_idempotent() {
        let mut slider = slider(3);
        slider.animate();
        assert_eq!(slider.set_current(), slider.set_current());
        assert_eq!(slider.set_current(), SlideId(1));
    }

    #[test]
    fn test_capture_elements_again_reselects_first() {
        let mut slider = slider(3);
        slider.animate();
        slider.capture_elements();
        assert_eq!(slider.current_index(), 0);
        assert_eq!(slider.surface().marked(Marker::Current), vec![SlideId(0)]);
    }

    #[test]
    fn test_tick_runs_one_cycle_per_delay() {
        let mut slider = slider(3);
        assert_eq!(slider.tick(Duration::from_millis(2999)), 0);
        assert_eq!(slider.tick(Duration::from_millis(1)), 1);
        assert_eq!(slider.current_index(), 1);
    }

    #[test]
    fn test_tick_while_paused_does_nothing() {
        let mut slider = slider(3);
        slider.pause_slider();
        assert_eq!(slider.tick(Duration::from_secs(60)), 0);
        assert_eq!(slider.current_index(), 0);
    }

    #[test]
    fn test_listeners_hear_every_cycle() {
        let mut slider = slider(2);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        slider.subscribe(move |changed| sink.borrow_mut().push(*changed));

        slider.animate();
        slider.animate();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], CurrentChanged { previous: SlideId(0), current: SlideId(1), index: 1 });
        assert_eq!(seen[1], CurrentChanged { previous: SlideId(1), current: SlideId(0), index: 0 });
    }

    #[test]
    fn test_transitions_probe_selects_marker_effects() {
        let mut surface = MemorySurface::new();
        surface.add_container(".js-slider", 3);
        let caps = Capabilities { transitions: true, touch: false };
        let options = SliderOptions { transition: Some(TransitionType::Dissolve), ..Default::default() };
        let mut slider = Slider::init(surface, options, Some(&caps)).unwrap();
        assert!(slider.transitions());

        slider.surface_mut().clear_ops();
        slider.animate();
        assert!(slider.surface().ops().iter().all(|op| !matches!(
            op,
            crate::surface::SurfaceOp::FadeIn(..) | crate::surface::SurfaceOp::FadeOut(..)
        )));
    }
}
