//! Location picker: one coordinate, seeded from the device, moved by the map.
//!
//! The initial fix is a single read with a timeout; there is no continuous
//! tracking. Any failure falls back to [`Coordinate::DEFAULT`] without
//! surfacing an error. Map clicks and marker drags replace the coordinate
//! with no bounds validation. Mutators return the new coordinate so the owner
//! can forward it.

#[cfg(test)]
#[path = "location_test.rs"]
mod tests;

use std::future::Future;
use std::time::Duration;

use crate::model::Coordinate;

/// Upper bound on the initial position read.
pub const GEOLOCATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Hints passed to the platform position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub high_accuracy: bool,
    pub timeout: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self { high_accuracy: true, timeout: GEOLOCATION_TIMEOUT }
    }
}

/// Why a position could not be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeolocationError {
    #[error("geolocation is not supported")]
    Unsupported,
    #[error("geolocation permission denied")]
    PermissionDenied,
    #[error("position unavailable")]
    PositionUnavailable,
    #[error("position request timed out")]
    Timeout,
}

/// One-shot device position lookup.
pub trait Geolocator {
    fn current_position(&self, options: PositionOptions)
    -> impl Future<Output = Result<Coordinate, GeolocationError>>;
}

/// Where the current coordinate came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LocationSource {
    /// Initial read still in flight.
    #[default]
    Pending,
    Device,
    /// Device read failed or was unavailable.
    Fallback,
    /// Set by a map click or marker drag.
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationPicker {
    coordinate: Coordinate,
    source: LocationSource,
}

impl LocationPicker {
    #[must_use]
    pub fn new() -> Self {
        Self { coordinate: Coordinate::DEFAULT, source: LocationSource::Pending }
    }

    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    #[must_use]
    pub fn source(&self) -> LocationSource {
        self.source
    }

    #[must_use]
    pub fn is_locating(&self) -> bool {
        self.source == LocationSource::Pending
    }

    /// Status line shown above the map.
    #[must_use]
    pub fn label(&self) -> String {
        match self.source {
            LocationSource::Pending => "Fetching location…".to_owned(),
            LocationSource::Fallback => format!("{} (default)", self.coordinate.label()),
            LocationSource::Device | LocationSource::Manual => self.coordinate.label(),
        }
    }

    /// Apply the result of the initial device read.
    pub fn resolve(&mut self, result: Result<Coordinate, GeolocationError>) -> Coordinate {
        match result {
            Ok(coordinate) => {
                self.coordinate = coordinate;
                self.source = LocationSource::Device;
            }
            Err(_) => {
                self.coordinate = Coordinate::DEFAULT;
                self.source = LocationSource::Fallback;
            }
        }
        self.coordinate
    }

    /// Replace the coordinate from a map click or marker drag.
    pub fn set(&mut self, coordinate: Coordinate) -> Coordinate {
        self.coordinate = coordinate;
        self.source = LocationSource::Manual;
        coordinate
    }
}

impl Default for LocationPicker {
    fn default() -> Self {
        Self::new()
    }
}
