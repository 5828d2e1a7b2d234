//! Slider options and the effective configuration resolved from them.
//!
//! `SliderOptions` mirrors the options object a page would hand to the
//! slider: every key is optional and unknown keys are ignored. Resolving it
//! merges it over the built-in defaults and yields a `SliderConfig` that
//! stays fixed for the lifetime of the slider.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Deserializer};

use crate::constants::*;
use crate::error::{SliderError, SliderResult};
use crate::surface::ContainerId;

/// Where the slider lives: a selector resolved by the surface, or a handle
/// the host already holds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Container {
    Selector(String),
    Handle(ContainerId),
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Selector(selector) => write!(f, "{}", selector),
            Container::Handle(id) => write!(f, "container #{}", id.0),
        }
    }
}

impl From<&str> for Container {
    fn from(selector: &str) -> Self {
        Container::Selector(selector.to_string())
    }
}

/// Visual style used to move from one slide to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionType {
    /// Horizontal slide-replace
    #[default]
    Rotate,
    /// Cross-fade
    Dissolve,
}

impl TransitionType {
    /// Maps a transition name to its type. Unknown names fall back to
    /// `Rotate`, the same way an unmatched type plays the default branch.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "dissolve" => TransitionType::Dissolve,
            "rotate" => TransitionType::Rotate,
            other => {
                tracing::warn!("Unknown transition type '{}', using rotate", other);
                TransitionType::Rotate
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TransitionType::Rotate => "rotate",
            TransitionType::Dissolve => "dissolve",
        }
    }
}

impl<'de> Deserialize<'de> for TransitionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(TransitionType::from_name(&name))
    }
}

/// Interaction that pauses and resumes the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Pointer entering or leaving the container toggles the slider
    Hover,
    /// Lifting a touch toggles the slider
    Touch,
}

impl FromStr for InputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hover" => Ok(InputMode::Hover),
            "touch" => Ok(InputMode::Touch),
            other => Err(format!("unknown input mode '{}'", other)),
        }
    }
}

/// What the host environment can do. Handed in by the host; a missing probe
/// means no declarative transitions and hover input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub transitions: bool,
    pub touch: bool,
}

/// Partial options; anything left `None` takes its default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderOptions {
    pub container: Option<Container>,
    /// Milliseconds between cycles
    pub delay: Option<u64>,
    pub pause: Option<bool>,
    /// Milliseconds per transition
    pub trans_time: Option<u64>,
    #[serde(rename = "type")]
    pub transition: Option<TransitionType>,
    pub input: Option<InputMode>,
}

impl SliderOptions {
    pub fn from_json(json: &str) -> SliderResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Layers `other` on top of `self`; fields set in `other` win.
    pub fn overlay(self, other: SliderOptions) -> SliderOptions {
        SliderOptions {
            container: other.container.or(self.container),
            delay: other.delay.or(self.delay),
            pause: other.pause.or(self.pause),
            trans_time: other.trans_time.or(self.trans_time),
            transition: other.transition.or(self.transition),
            input: other.input.or(self.input),
        }
    }
}

/// Effective configuration, immutable once the slider is running.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderConfig {
    pub container: Container,
    pub delay: Duration,
    pub pause: bool,
    pub trans_time: Duration,
    pub transition: TransitionType,
    pub input: Option<InputMode>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            container: Container::from(DEFAULT_CONTAINER),
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            pause: DEFAULT_PAUSE,
            trans_time: Duration::from_millis(DEFAULT_TRANS_TIME_MS),
            transition: TransitionType::default(),
            input: None,
        }
    }
}

impl SliderConfig {
    /// Merges `options` over the defaults.
    pub fn resolve(options: SliderOptions) -> SliderResult<Self> {
        let defaults = SliderConfig::default();
        let delay = options.delay.map(Duration::from_millis).unwrap_or(defaults.delay);
        if delay.is_zero() {
            return Err(SliderError::InvalidDelay);
        }

        Ok(Self {
            container: options.container.unwrap_or(defaults.container),
            delay,
            pause: options.pause.unwrap_or(defaults.pause),
            trans_time: options.trans_time.map(Duration::from_millis).unwrap_or(defaults.trans_time),
            transition: options.transition.unwrap_or(defaults.transition),
            input: options.input,
        })
    }

    /// Input modality: explicit option first, then the probe, then hover.
    pub fn input_mode(&self, probe: Option<&Capabilities>) -> InputMode {
        match (self.input, probe) {
            (Some(mode), _) => mode,
            (None, Some(caps)) if caps.touch => InputMode::Touch,
            _ => InputMode::Hover,
        }
    }
}
