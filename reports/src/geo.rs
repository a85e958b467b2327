//! Web-Mercator projection and slippy-map tile math.
//!
//! World pixel space at zoom `z` is a square of `256 * 2^z` pixels with the
//! origin at the north-west corner. [`MapViewport`] places a fixed-size view
//! over that space, centred on a coordinate, and answers the two questions the
//! map widget asks: which tiles to draw where, and which coordinate sits under
//! a given screen offset.

#[cfg(test)]
#[path = "geo_test.rs"]
mod tests;

use std::f64::consts::PI;

use crate::model::Coordinate;

pub const TILE_SIZE: f64 = 256.0;
pub const DEFAULT_ZOOM: u8 = 16;
pub const MIN_ZOOM: u8 = 2;
pub const MAX_ZOOM: u8 = 19;

/// Public OpenStreetMap tile service.
pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_SUBDOMAINS: [&str; 3] = ["a", "b", "c"];
pub const ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Latitude limit of the square Mercator world.
const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// A point in world pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

/// Edge length of the world in pixels at `zoom`.
#[must_use]
pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * 2f64.powi(i32::from(zoom))
}

/// Project a coordinate into world pixels. Latitude is clamped to the
/// Mercator limit.
#[must_use]
pub fn project(coordinate: Coordinate, zoom: u8) -> WorldPoint {
    let size = world_size(zoom);
    let lat = coordinate.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let sin = lat.to_radians().sin();
    WorldPoint {
        x: (coordinate.lng + 180.0) / 360.0 * size,
        y: (0.5 - ((1.0 + sin) / (1.0 - sin)).ln() / (4.0 * PI)) * size,
    }
}

/// Inverse of [`project`]. Longitudes are not wrapped.
#[must_use]
pub fn unproject(point: WorldPoint, zoom: u8) -> Coordinate {
    let size = world_size(zoom);
    let n = PI - 2.0 * PI * point.y / size;
    Coordinate { lat: n.sinh().atan().to_degrees(), lng: point.x / size * 360.0 - 180.0 }
}

/// URL for tile `(x, y)` at `zoom`. `x` wraps around the antimeridian.
#[must_use]
pub fn tile_url(x: i64, y: i64, zoom: u8) -> String {
    let count = 1i64 << zoom;
    let wrapped_x = x.rem_euclid(count);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let subdomain = TILE_SUBDOMAINS[(x + y).unsigned_abs() as usize % TILE_SUBDOMAINS.len()];
    TILE_URL_TEMPLATE
        .replace("{s}", subdomain)
        .replace("{z}", &zoom.to_string())
        .replace("{x}", &wrapped_x.to_string())
        .replace("{y}", &y.to_string())
}

/// A tile positioned relative to the viewport's top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTile {
    pub x: i64,
    pub y: i64,
    pub left: f64,
    pub top: f64,
    pub url: String,
}

/// A fixed-size window onto the map, centred on a coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    pub center: Coordinate,
    pub zoom: u8,
    pub width: f64,
    pub height: f64,
}

impl MapViewport {
    #[must_use]
    pub fn new(center: Coordinate, zoom: u8, width: f64, height: f64) -> Self {
        Self { center, zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM), width, height }
    }

    /// World position of the viewport's top-left corner.
    #[must_use]
    pub fn origin(&self) -> WorldPoint {
        let c = project(self.center, self.zoom);
        WorldPoint { x: c.x - self.width / 2.0, y: c.y - self.height / 2.0 }
    }

    /// Screen offset of `coordinate` within the viewport.
    #[must_use]
    pub fn to_screen(&self, coordinate: Coordinate) -> (f64, f64) {
        let origin = self.origin();
        let p = project(coordinate, self.zoom);
        (p.x - origin.x, p.y - origin.y)
    }

    /// Coordinate under the screen offset `(x, y)`.
    #[must_use]
    pub fn to_coordinate(&self, x: f64, y: f64) -> Coordinate {
        let origin = self.origin();
        unproject(WorldPoint { x: origin.x + x, y: origin.y + y }, self.zoom)
    }

    /// Move the view by a screen-space drag delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.center = self.to_coordinate(self.width / 2.0 - dx, self.height / 2.0 - dy);
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(1).max(MIN_ZOOM);
    }

    /// Tiles covering the viewport, row-major from the top-left.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn visible_tiles(&self) -> Vec<PlacedTile> {
        let origin = self.origin();
        let count = 1i64 << self.zoom;
        let first_x = (origin.x / TILE_SIZE).floor() as i64;
        let first_y = (origin.y / TILE_SIZE).floor() as i64;
        let end_x = ((origin.x + self.width) / TILE_SIZE).ceil() as i64;
        let end_y = ((origin.y + self.height) / TILE_SIZE).ceil() as i64;

        let mut tiles = Vec::new();
        for y in first_y.max(0)..end_y.min(count) {
            for x in first_x..end_x {
                #[allow(clippy::cast_precision_loss)]
                let (left, top) = (x as f64 * TILE_SIZE - origin.x, y as f64 * TILE_SIZE - origin.y);
                tiles.push(PlacedTile { x, y, left, top, url: tile_url(x, y, self.zoom) });
            }
        }
        tiles
    }
}
