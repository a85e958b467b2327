//! Pointer gestures over the location map.
//!
//! DESIGN
//! ======
//! A press starts a gesture on either the marker or the map surface. Moving
//! past `CLICK_SLOP` turns it into a drag: a map drag pans the viewport live,
//! a marker drag only moves the marker preview. Release resolves the gesture:
//!
//! - marker dragged: the drop point becomes the new location
//! - map pressed without dragging: the clicked point becomes the new location
//! - anything else: no location change
//!
//! Offsets are in pixels relative to the map's top-left corner.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use reports::Coordinate;
use reports::geo::{DEFAULT_ZOOM, MapViewport};

/// Rendered map size in CSS pixels.
pub const MAP_WIDTH: f64 = 640.0;
pub const MAP_HEIGHT: f64 = 256.0;

/// Pointer travel below which a press still counts as a click.
pub const CLICK_SLOP: f64 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragTarget {
    Marker,
    Map,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Gesture {
    target: DragTarget,
    start: (f64, f64),
    last: (f64, f64),
    dragging: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapState {
    viewport: MapViewport,
    gesture: Option<Gesture>,
}

impl MapState {
    #[must_use]
    pub fn new(center: Coordinate) -> Self {
        Self { viewport: MapViewport::new(center, DEFAULT_ZOOM, MAP_WIDTH, MAP_HEIGHT), gesture: None }
    }

    #[must_use]
    pub fn viewport(&self) -> &MapViewport {
        &self.viewport
    }

    /// Whether a press is in progress.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.gesture.is_some()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some_and(|g| g.dragging)
    }

    pub fn press(&mut self, target: DragTarget, at: (f64, f64)) {
        self.gesture = Some(Gesture { target, start: at, last: at, dragging: false });
    }

    pub fn drag(&mut self, at: (f64, f64)) {
        let Some(gesture) = self.gesture.as_mut() else {
            return;
        };
        if !gesture.dragging && distance(gesture.start, at) > CLICK_SLOP {
            gesture.dragging = true;
        }
        if gesture.dragging && gesture.target == DragTarget::Map {
            self.viewport.pan_by(at.0 - gesture.last.0, at.1 - gesture.last.1);
        }
        gesture.last = at;
    }

    /// Finish the gesture, returning the newly chosen location if any.
    pub fn release(&mut self, at: (f64, f64)) -> Option<Coordinate> {
        let gesture = self.gesture.take()?;
        match (gesture.target, gesture.dragging) {
            (DragTarget::Marker, true) | (DragTarget::Map, false) => Some(self.viewport.to_coordinate(at.0, at.1)),
            _ => None,
        }
    }

    /// Drop the gesture without a location change (pointer left the map).
    pub fn abort(&mut self) {
        self.gesture = None;
    }

    /// Where to draw the marker: under the pointer mid-drag, else at `marker`.
    #[must_use]
    pub fn marker_offset(&self, marker: Coordinate) -> (f64, f64) {
        match self.gesture {
            Some(Gesture { target: DragTarget::Marker, dragging: true, last, .. }) => last,
            _ => self.viewport.to_screen(marker),
        }
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}
