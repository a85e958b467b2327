use std::cell::RefCell;

use super::*;

struct FixedGeolocator {
    answer: Result<Coordinate, GeolocationError>,
    seen: RefCell<Vec<PositionOptions>>,
}

impl FixedGeolocator {
    fn new(answer: Result<Coordinate, GeolocationError>) -> Self {
        Self { answer, seen: RefCell::new(Vec::new()) }
    }
}

impl Geolocator for FixedGeolocator {
    async fn current_position(&self, options: PositionOptions) -> Result<Coordinate, GeolocationError> {
        self.seen.borrow_mut().push(options);
        self.answer.clone()
    }
}

/// One device read, as the report page performs it on mount.
async fn locate(picker: &mut LocationPicker, geo: &FixedGeolocator) -> Coordinate {
    picker.resolve(geo.current_position(PositionOptions::default()).await)
}

#[test]
fn new_picker_is_locating_at_default() {
    let picker = LocationPicker::new();
    assert!(picker.is_locating());
    assert_eq!(picker.coordinate(), Coordinate::DEFAULT);
    assert_eq!(picker.label(), "Fetching location…");
}

#[tokio::test]
async fn device_fix_is_adopted() {
    let fix = Coordinate::new(19.076, 72.8777);
    let geo = FixedGeolocator::new(Ok(fix));
    let mut picker = LocationPicker::new();

    assert_eq!(locate(&mut picker, &geo).await, fix);

    assert_eq!(picker.coordinate(), fix);
    assert_eq!(picker.source(), LocationSource::Device);
    assert_eq!(picker.label(), "19.07600, 72.87770");
}

#[tokio::test]
async fn locate_asks_for_high_accuracy_with_timeout() {
    let geo = FixedGeolocator::new(Ok(Coordinate::new(0.0, 0.0)));
    let mut picker = LocationPicker::new();
    locate(&mut picker, &geo).await;

    let seen = geo.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].high_accuracy);
    assert_eq!(seen[0].timeout, Duration::from_secs(10));
}

#[tokio::test]
async fn every_failure_falls_back_to_default() {
    for err in [
        GeolocationError::Unsupported,
        GeolocationError::PermissionDenied,
        GeolocationError::PositionUnavailable,
        GeolocationError::Timeout,
    ] {
        let geo = FixedGeolocator::new(Err(err));
        let mut picker = LocationPicker::new();
        locate(&mut picker, &geo).await;

        assert_eq!(picker.coordinate(), Coordinate::new(28.6139, 77.209));
        assert_eq!(picker.source(), LocationSource::Fallback);
        assert!(!picker.is_locating());
        assert_eq!(picker.label(), "28.61390, 77.20900 (default)");
    }
}

#[test]
fn set_replaces_without_validation() {
    let mut picker = LocationPicker::new();
    picker.resolve(Ok(Coordinate::new(1.0, 2.0)));

    let out_of_range = Coordinate::new(123.0, -400.0);
    assert_eq!(picker.set(out_of_range), out_of_range);
    assert_eq!(picker.coordinate(), out_of_range);
    assert_eq!(picker.source(), LocationSource::Manual);
}

#[test]
fn manual_move_after_fallback_drops_default_suffix() {
    let mut picker = LocationPicker::new();
    picker.resolve(Err(GeolocationError::Timeout));
    picker.set(Coordinate::new(28.7, 77.1));
    assert_eq!(picker.label(), "28.70000, 77.10000");
}
