use super::*;

const STYLESHEET: &str = include_str!("../../../style/main.css");

fn css_rule(selector: &str) -> &'static str {
    let start = STYLESHEET.find(&format!("{selector} {{")).expect("rule present");
    let body = &STYLESHEET[start..];
    &body[..body.find('}').expect("rule closed")]
}

#[test]
fn wheel_up_zooms_in_and_down_zooms_out() {
    let mut map = MapState::new(Coordinate::DEFAULT);
    let start = map.viewport().zoom;

    wheel_zoom(&mut map, -120.0);
    assert_eq!(map.viewport().zoom, start + 1);

    wheel_zoom(&mut map, 120.0);
    wheel_zoom(&mut map, 120.0);
    assert_eq!(map.viewport().zoom, start - 1);
}

#[test]
fn map_surface_does_not_scroll_the_page() {
    let rule = css_rule(".location-map__surface");
    assert!(rule.contains("touch-action: none"));
    assert!(rule.contains("overscroll-behavior: contain"));
}
