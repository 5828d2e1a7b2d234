use crate::surface::SlideId;

/// Ordered slides discovered in the container. The order never changes,
/// only the cursor into it moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideSet {
    slides: Vec<SlideId>,
}

impl SlideSet {
    pub fn new(slides: Vec<SlideId>) -> Self {
        Self { slides }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<SlideId> {
        self.slides.get(index).copied()
    }

    pub fn as_slice(&self) -> &[SlideId] {
        &self.slides
    }
}

/// Position of the current slide within a set of `len` slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: usize,
}

/// Indices taking part in one cycle, captured before anything moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub previous: usize,
    pub current: usize,
    pub next: usize,
}

impl Cursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Moves to the following slide, wrapping after the last one.
    pub fn advance(&mut self) -> Step {
        if self.len == 0 {
            return Step { previous: 0, current: 0, next: 0 };
        }

        let current = self.index;
        let previous = if current == 0 { self.len - 1 } else { current - 1 };

        if self.index < self.len - 1 {
            self.index += 1;
        } else {
            self.index = 0;
        }

        Step { previous, current, next: self.index }
    }
}

/// Slide handles for one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Positions {
    pub previous: SlideId,
    pub current: SlideId,
    pub next: SlideId,
}

impl Positions {
    pub fn resolve(slides: &SlideSet, step: Step) -> Option<Self> {
        Some(Self {
            previous: slides.get(step.previous)?,
            current: slides.get(step.current)?,
            next: slides.get(step.next)?,
        })
    }
}
