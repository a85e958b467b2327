use super::*;

const CENTER: (f64, f64) = (MAP_WIDTH / 2.0, MAP_HEIGHT / 2.0);

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn marker_starts_at_viewport_center() {
    let state = MapState::new(Coordinate::DEFAULT);
    let (x, y) = state.marker_offset(Coordinate::DEFAULT);
    assert!(close(x, CENTER.0));
    assert!(close(y, CENTER.1));
}

#[test]
fn click_on_map_picks_clicked_point() {
    let mut state = MapState::new(Coordinate::DEFAULT);
    state.press(DragTarget::Map, (420.0, 128.0));
    let picked = state.release((420.0, 128.0)).unwrap();

    assert!(picked.lng > Coordinate::DEFAULT.lng);
    assert!(close(picked.lat, Coordinate::DEFAULT.lat));
    assert_eq!(state.viewport().center, Coordinate::DEFAULT);
}

#[test]
fn jitter_below_slop_is_still_a_click() {
    let mut state = MapState::new(Coordinate::DEFAULT);
    state.press(DragTarget::Map, (100.0, 100.0));
    state.drag((102.0, 101.0));
    assert!(!state.is_dragging());
    assert!(state.release((102.0, 101.0)).is_some());
}

#[test]
fn dragging_the_map_pans_without_picking() {
    let mut state = MapState::new(Coordinate::DEFAULT);
    state.press(DragTarget::Map, (100.0, 100.0));
    state.drag((160.0, 100.0));
    assert!(state.is_dragging());

    assert_eq!(state.release((160.0, 100.0)), None);
    assert!(state.viewport().center.lng < Coordinate::DEFAULT.lng);
}

#[test]
fn dragging_the_marker_reports_drop_point() {
    let mut state = MapState::new(Coordinate::DEFAULT);
    state.press(DragTarget::Marker, CENTER);
    state.drag((CENTER.0, CENTER.1 - 40.0));

    assert_eq!(state.marker_offset(Coordinate::DEFAULT), (CENTER.0, CENTER.1 - 40.0));
    let dropped = state.release((CENTER.0, CENTER.1 - 40.0)).unwrap();

    assert!(dropped.lat > Coordinate::DEFAULT.lat);
    assert_eq!(state.viewport().center, Coordinate::DEFAULT);
}

#[test]
fn tapping_the_marker_changes_nothing() {
    let mut state = MapState::new(Coordinate::DEFAULT);
    state.press(DragTarget::Marker, CENTER);
    assert_eq!(state.release(CENTER), None);
}

#[test]
fn release_without_press_is_ignored() {
    let mut state = MapState::new(Coordinate::DEFAULT);
    assert_eq!(state.release(CENTER), None);
}

#[test]
fn abort_discards_marker_drag() {
    let mut state = MapState::new(Coordinate::DEFAULT);
    state.press(DragTarget::Marker, CENTER);
    state.drag((10.0, 10.0));
    state.abort();
    assert!(!state.is_pressed());
    assert!(!state.is_dragging());
    assert_eq!(state.release((10.0, 10.0)), None);
}

#[test]
fn zoom_changes_viewport_zoom() {
    let mut state = MapState::new(Coordinate::DEFAULT);
    let zoom = state.viewport().zoom;
    state.zoom_out();
    assert_eq!(state.viewport().zoom, zoom - 1);
    state.zoom_in();
    assert_eq!(state.viewport().zoom, zoom);
}
