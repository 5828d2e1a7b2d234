use raylib::prelude::*;

/// A single animatable property eased with a raylib tween.
pub struct Animated {
    value: f32,
    target: f32,
    tween: Option<ease::Tween>,
    timer: f32,
    duration: f32,
}

impl Animated {
    pub fn new(value: f32) -> Self {
        Self { value, target: value, tween: None, timer: 0.0, duration: 0.0 }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Jumps straight to `value`, dropping any running animation.
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.tween = None;
    }

    /// Starts a new animation from the present value.
    pub fn animate_to(&mut self, target: f32, duration: f32) {
        if duration <= 0.0 {
            self.set(target);
            return;
        }
        self.target = target;
        self.tween = Some(ease::Tween::new(ease::cubic_out, self.value, target, duration));
        self.timer = 0.0;
        self.duration = duration;
    }

    /// Like `animate_to`, but keeps a running animation that already heads
    /// for `target`.
    pub fn transition_to(&mut self, target: f32, duration: f32) {
        if (self.target - target).abs() <= f32::EPSILON {
            return;
        }
        self.animate_to(target, duration);
    }

    /// Returns true on the frame the animation completes.
    pub fn update(&mut self, dt: f32) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };

        self.value = tween.apply(dt);
        self.timer += dt;
        if self.timer >= self.duration {
            self.set(self.target);
            return true;
        }
        false
    }
}
