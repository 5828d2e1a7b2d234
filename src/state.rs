use std::collections::BTreeSet;

use crate::surface::Marker;

/// Presentational state a surface keeps for one slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideStyle {
    pub markers: BTreeSet<Marker>,
    pub visible: bool,
}

impl SlideStyle {
    pub fn new() -> Self {
        Self {
            markers: BTreeSet::from([Marker::Slide]),
            visible: true,
        }
    }

    pub fn has(&self, marker: Marker) -> bool {
        self.markers.contains(&marker)
    }

    /// Returns true when the marker set actually changed.
    pub fn add(&mut self, marker: Marker) -> bool {
        self.markers.insert(marker)
    }

    pub fn remove(&mut self, marker: Marker) -> bool {
        self.markers.remove(&marker)
    }

    /// Class attribute as the styling layer would see it.
    pub fn class_list(&self) -> String {
        self.markers.iter().map(Marker::class_name).collect::<Vec<_>>().join(" ")
    }
}

impl Default for SlideStyle {
    fn default() -> Self {
        Self::new()
    }
}
