//! Draggable-marker map for confirming a report location.
//!
//! DESIGN
//! ======
//! OpenStreetMap raster tiles are positioned absolutely inside a fixed-size
//! surface using `reports::geo` projection math. Pointer handling lives in
//! `state::map`; this component only converts DOM events into surface
//! offsets and forwards picked coordinates through `on_change`.
//!
//! The view is centred on the position it mounts with. Later position changes
//! move the marker, not the view.
//!
//! Wheel zoom listens on the surface itself rather than through the delegated
//! window listener, which browsers treat as passive. The stylesheet also
//! stops scroll chaining out of the surface.

#[cfg(test)]
#[path = "location_map_test.rs"]
mod location_map_test;

use leptos::prelude::*;
use reports::Coordinate;
use reports::geo::ATTRIBUTION;

use crate::state::map::{DragTarget, MAP_HEIGHT, MAP_WIDTH, MapState};

#[component]
pub fn LocationMap(#[prop(into)] position: Signal<Coordinate>, on_change: Callback<Coordinate>) -> impl IntoView {
    let map = RwSignal::new(MapState::new(position.get_untracked()));
    let surface = NodeRef::<leptos::html::Div>::new();

    let on_surface_down = move |ev: leptos::ev::PointerEvent| {
        if let Some(at) = surface_offset(surface, &ev) {
            map.update(|m| m.press(DragTarget::Map, at));
        }
    };
    let on_marker_down = move |ev: leptos::ev::PointerEvent| {
        ev.stop_propagation();
        ev.prevent_default();
        if let Some(at) = surface_offset(surface, &ev) {
            map.update(|m| m.press(DragTarget::Marker, at));
        }
    };
    let on_move = move |ev: leptos::ev::PointerEvent| {
        if !map.with_untracked(MapState::is_pressed) {
            return;
        }
        if let Some(at) = surface_offset(surface, &ev) {
            map.update(|m| m.drag(at));
        }
    };
    let on_up = move |ev: leptos::ev::PointerEvent| {
        let Some(at) = surface_offset(surface, &ev) else {
            map.update(MapState::abort);
            return;
        };
        if let Some(picked) = map.try_update(|m| m.release(at)).flatten() {
            on_change.run(picked);
        }
    };
    let on_wheel = move |ev: leptos::ev::WheelEvent| {
        ev.prevent_default();
        map.update(|m| wheel_zoom(m, ev.delta_y()));
    };

    let tiles = move || {
        map.with(|m| m.viewport().visible_tiles())
            .into_iter()
            .map(|tile| {
                let style = format!("left:{}px;top:{}px", tile.left, tile.top);
                view! { <img class="location-map__tile" src=tile.url style=style alt="" draggable="false"/> }
            })
            .collect::<Vec<_>>()
    };
    let marker_style = move || {
        let (x, y) = map.with(|m| m.marker_offset(position.get()));
        format!("left:{x}px;top:{y}px")
    };

    view! {
        <div class="location-map">
            <div
                class="location-map__surface"
                class:location-map__surface--dragging=move || map.with(MapState::is_dragging)
                style=format!("width:{MAP_WIDTH}px;height:{MAP_HEIGHT}px")
                node_ref=surface
                on:pointerdown=on_surface_down
                on:pointermove=on_move
                on:pointerup=on_up
                on:pointerleave=move |_| map.update(MapState::abort)
                on:wheel=on_wheel
            >
                {tiles}
                <div
                    class="location-map__marker"
                    style=marker_style
                    role="button"
                    aria-label="Report location"
                    on:pointerdown=on_marker_down
                ></div>
            </div>
            <div class="location-map__controls">
                <button class="button button--outline" aria-label="Zoom in" on:click=move |_| map.update(MapState::zoom_in)>
                    "+"
                </button>
                <button class="button button--outline" aria-label="Zoom out" on:click=move |_| map.update(MapState::zoom_out)>
                    "−"
                </button>
            </div>
            <p class="location-map__attribution">{ATTRIBUTION}</p>
        </div>
    }
}

/// Scrolling up zooms in, anything else zooms out.
fn wheel_zoom(map: &mut MapState, delta_y: f64) {
    if delta_y < 0.0 {
        map.zoom_in();
    } else {
        map.zoom_out();
    }
}

/// Pointer position relative to the surface's top-left corner.
fn surface_offset(surface: NodeRef<leptos::html::Div>, ev: &leptos::ev::PointerEvent) -> Option<(f64, f64)> {
    #[cfg(feature = "hydrate")]
    {
        let rect = surface.get_untracked()?.get_bounding_client_rect();
        Some((f64::from(ev.client_x()) - rect.left(), f64::from(ev.client_y()) - rect.top()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (surface, ev);
        None
    }
}
