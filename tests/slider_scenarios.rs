use std::time::Duration;

use rand::Rng;
use srslider::{
    Capabilities, Container, HostEvent, InputMode, Marker, MemorySurface, Offset, SlideId, Slider, SliderError,
    SliderOptions, Surface, SurfaceOp, TransitionType,
};
use srslider::styling::StyleSheet;

fn surface(count: usize) -> MemorySurface {
    let mut surface = MemorySurface::new();
    surface.add_container(".js-slider", count);
    surface
}

fn options(kind: TransitionType) -> SliderOptions {
    SliderOptions {
        delay: Some(3000),
        trans_time: Some(500),
        transition: Some(kind),
        ..Default::default()
    }
}

#[test]
fn rotate_three_slides_with_timed_effects() {
    let mut slider = Slider::init(surface(3), options(TransitionType::Rotate), None).unwrap();

    let s = slider.surface();
    assert_eq!(s.marked(Marker::Current), vec![SlideId(0)]);
    assert_eq!(s.offset(SlideId(0)), Some(Offset::CENTER));

    slider.tick(Duration::from_millis(3000));
    let s = slider.surface();
    assert_eq!(s.marked(Marker::Current), vec![SlideId(1)]);
    assert_eq!(s.offset(SlideId(0)), Some(Offset::LEFT));
    assert_eq!(s.offset(SlideId(1)), Some(Offset::CENTER));
    assert_eq!(s.offset(SlideId(2)), Some(Offset::RIGHT));
    assert!(!s.is_visible(SlideId(2)));
    assert!(s.ops().contains(&SurfaceOp::AnimateOffset(SlideId(0), Offset::LEFT, Duration::from_millis(500))));

    slider.tick(Duration::from_millis(3000));
    assert_eq!(slider.surface().marked(Marker::Current), vec![SlideId(2)]);
    assert_eq!(slider.current_index(), 2);
}

#[test]
fn dissolve_two_slides_with_marker_effects() {
    let caps = Capabilities { transitions: true, touch: false };
    let mut slider = Slider::init(surface(2), options(TransitionType::Dissolve), Some(&caps)).unwrap();
    assert!(slider.surface().has_marker(SlideId(0), Marker::FadeIn));

    for expected in [1, 0, 1, 0] {
        slider.animate();
        assert_eq!(slider.current_index(), expected);

        let shown = SlideId(expected as u32);
        let faded = SlideId(1 - expected as u32);
        let s = slider.surface();
        assert_eq!(s.marked(Marker::Current), vec![shown]);
        assert_eq!(s.marked(Marker::FadeIn), vec![shown]);
        assert_eq!(s.marked(Marker::FadeOut), vec![faded]);
    }
}

#[test]
fn index_cycles_modulo_slide_count() {
    let mut rng = rand::rng();
    for _ in 0..20 {
        let len = rng.random_range(1..8);
        let cycles = rng.random_range(0..40);
        let kind = if rng.random_bool(0.5) { TransitionType::Rotate } else { TransitionType::Dissolve };
        let caps = Capabilities { transitions: rng.random_bool(0.5), touch: false };

        let mut slider = Slider::init(surface(len), options(kind), Some(&caps)).unwrap();
        for _ in 0..cycles {
            slider.animate();
        }

        assert_eq!(slider.current_index(), cycles % len, "len={} cycles={}", len, cycles);
        assert_eq!(slider.surface().marked(Marker::Current), vec![SlideId((cycles % len) as u32)]);
    }
}

#[test]
fn degenerate_slide_counts_keep_exactly_one_current() {
    for len in [1, 2] {
        for kind in [TransitionType::Rotate, TransitionType::Dissolve] {
            let mut slider = Slider::init(surface(len), options(kind), None).unwrap();
            for _ in 0..5 {
                slider.animate();
                assert_eq!(slider.surface().marked(Marker::Current).len(), 1);
                assert!(slider.surface().is_visible(slider.set_current()));
            }
        }
    }
}

#[test]
fn missing_container_aborts_init() {
    let result = Slider::init(surface(3), SliderOptions {
        container: Some(Container::from("#nowhere")),
        ..Default::default()
    }, None);
    assert!(matches!(result, Err(SliderError::ContainerNotFound(_))));
}

#[test]
fn empty_container_aborts_init() {
    let result = Slider::init(surface(0), SliderOptions::default(), None);
    assert!(matches!(result, Err(SliderError::NoSlides(_))));
}

#[test]
fn pause_then_start_leaves_one_timer() {
    let mut slider = Slider::init(surface(3), options(TransitionType::Rotate), None).unwrap();
    slider.start_slider();
    slider.pause_slider();
    assert!(!slider.is_sliding());
    slider.pause_slider();
    slider.start_slider();
    slider.start_slider();
    assert!(slider.is_sliding());

    // a second timer would run two cycles here
    assert_eq!(slider.tick(Duration::from_millis(3000)), 1);
    assert_eq!(slider.current_index(), 1);
}

#[test]
fn pause_does_not_cancel_running_animation() {
    let mut slider = Slider::init(surface(3), options(TransitionType::Rotate), None).unwrap();
    slider.tick(Duration::from_millis(3000));
    slider.pause_slider();
    // the memory surface finished the slide-in already; pausing leaves it alone
    assert_eq!(slider.surface().offset(SlideId(1)), Some(Offset::CENTER));
    assert_eq!(slider.tick(Duration::from_millis(9000)), 0);
}

#[test]
fn hover_toggles_only_when_pause_enabled() {
    let mut slider = Slider::init(surface(3), SliderOptions::default(), None).unwrap();
    slider.handle_event(HostEvent::PointerEnter);
    assert!(!slider.is_sliding());
    slider.handle_event(HostEvent::PointerLeave);
    assert!(slider.is_sliding());
    slider.handle_event(HostEvent::TouchEnd);
    assert!(slider.is_sliding());

    let no_pause = SliderOptions { pause: Some(false), ..Default::default() };
    let mut slider = Slider::init(surface(3), no_pause, None).unwrap();
    slider.handle_event(HostEvent::PointerEnter);
    assert!(slider.is_sliding());
}

#[test]
fn touch_probe_switches_to_touch_input() {
    let caps = Capabilities { transitions: false, touch: true };
    let mut slider = Slider::init(surface(3), SliderOptions::default(), Some(&caps)).unwrap();
    assert_eq!(slider.input_mode(), InputMode::Touch);

    slider.handle_event(HostEvent::PointerEnter);
    assert!(slider.is_sliding());
    slider.handle_event(HostEvent::TouchEnd);
    assert!(!slider.is_sliding());
}

#[test]
fn scaling_follows_current_image() {
    let mut surface = MemorySurface::new();
    let container = surface.add_container_with_images(".js-slider", &[Some(400.0), Some(300.0), None]);
    let mut slider = Slider::init(surface, SliderOptions::default(), None).unwrap();

    slider.handle_event(HostEvent::ImageLoaded(SlideId(0)));
    assert_eq!(slider.surface().container_height(container), Some(400.0));

    slider.animate();
    slider.handle_event(HostEvent::Resize);
    assert_eq!(slider.surface().container_height(container), Some(300.0));

    // slide 2 has no image yet, so the height stays
    slider.animate();
    slider.handle_event(HostEvent::Resize);
    assert_eq!(slider.surface().container_height(container), Some(300.0));

    slider.surface_mut().set_image_height(SlideId(2), 250.0);
    slider.handle_event(HostEvent::ImageLoaded(SlideId(2)));
    assert_eq!(slider.surface().container_height(container), Some(250.0));
}

#[test]
fn slides_from_every_matching_container() {
    let mut surface = MemorySurface::new();
    let first = surface.add_container(".js-slider", 2);
    let second = surface.add_container(".js-slider", 1);
    surface.set_image_height(SlideId(0), 120.0);

    let mut slider = Slider::init(surface, SliderOptions::default(), None).unwrap();
    assert_eq!(slider.slides().len(), 3);
    assert_eq!(slider.containers(), &[first, second]);

    slider.scale_slider();
    assert_eq!(slider.surface().container_height(first), Some(120.0));
    assert_eq!(slider.surface().container_height(second), Some(120.0));
}

#[test]
fn rotate_with_marker_effects_parks_outgoing_slide_right() {
    let caps = Capabilities { transitions: true, touch: false };
    let mut slider = Slider::init(surface(3), options(TransitionType::Rotate), Some(&caps)).unwrap();
    let sheet = StyleSheet::for_transition(TransitionType::Rotate);

    for cycle in 1..=6usize {
        slider.animate();
        let current = cycle % 3;
        let slid_out = (cycle + 2) % 3;
        let parked = (cycle + 1) % 3;

        let s = slider.surface();
        let offset_of = |index: usize| s.style(SlideId(index as u32)).and_then(|style| sheet.resolve(style).offset);
        assert_eq!(offset_of(current), Some(Offset::CENTER), "cycle {}", cycle);
        assert_eq!(offset_of(slid_out), Some(Offset::LEFT), "cycle {}", cycle);
        assert_eq!(offset_of(parked), Some(Offset::RIGHT), "cycle {}", cycle);
        assert!(!s.is_visible(SlideId(parked as u32)));
    }
}
