//! `navigator.geolocation` as a one-shot future.
//!
//! DESIGN
//! ======
//! `getCurrentPosition` answers through one of two callbacks. Both closures
//! share the sending half of a `futures` oneshot channel; whichever fires
//! first sends, and the other becomes a no-op. The closures live until the
//! future resolves.

#[cfg(feature = "hydrate")]
pub use browser::BrowserGeolocator;

#[cfg(not(feature = "hydrate"))]
pub use unavailable::UnavailableGeolocator;

/// Geolocator used by the report page in this build.
#[cfg(feature = "hydrate")]
pub type DeviceGeolocator = BrowserGeolocator;

/// Geolocator used by the report page in this build.
#[cfg(not(feature = "hydrate"))]
pub type DeviceGeolocator = UnavailableGeolocator;

/// Map a W3C `GeolocationPositionError.code` to a domain error.
pub fn error_from_code(code: u16) -> reports::GeolocationError {
    use reports::GeolocationError;
    match code {
        1 => GeolocationError::PermissionDenied,
        3 => GeolocationError::Timeout,
        _ => GeolocationError::PositionUnavailable,
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use reports::{Coordinate, GeolocationError, Geolocator, PositionOptions};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{GeolocationPosition, GeolocationPositionError};

    type Reply = Result<Coordinate, GeolocationError>;

    #[derive(Default, Clone, Copy)]
    pub struct BrowserGeolocator;

    impl Geolocator for BrowserGeolocator {
        async fn current_position(&self, options: PositionOptions) -> Reply {
            let geolocation = web_sys::window()
                .ok_or(GeolocationError::Unsupported)?
                .navigator()
                .geolocation()
                .map_err(|_| GeolocationError::Unsupported)?;

            let (tx, rx) = oneshot::channel::<Reply>();
            let tx = Rc::new(RefCell::new(Some(tx)));

            let ok_tx = tx.clone();
            let on_success = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
                let reply = value
                    .dyn_into::<GeolocationPosition>()
                    .map(|p| {
                        let coords = p.coords();
                        Coordinate::new(coords.latitude(), coords.longitude())
                    })
                    .map_err(|_| GeolocationError::PositionUnavailable);
                if let Some(tx) = ok_tx.borrow_mut().take() {
                    let _ = tx.send(reply);
                }
            });
            let err_tx = tx;
            let on_error = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
                let code = value.dyn_into::<GeolocationPositionError>().map_or(2, |e| e.code());
                if let Some(tx) = err_tx.borrow_mut().take() {
                    let _ = tx.send(Err(super::error_from_code(code)));
                }
            });

            let js_options = web_sys::PositionOptions::new();
            js_options.set_enable_high_accuracy(options.high_accuracy);
            js_options.set_timeout(u32::try_from(options.timeout.as_millis()).unwrap_or(u32::MAX));

            geolocation
                .get_current_position_with_error_callback_and_options(
                    on_success.as_ref().unchecked_ref(),
                    Some(on_error.as_ref().unchecked_ref()),
                    &js_options,
                )
                .map_err(|_| GeolocationError::Unsupported)?;

            let reply = rx.await.unwrap_or(Err(GeolocationError::PositionUnavailable));
            drop((on_success, on_error));
            reply
        }
    }
}

#[cfg(not(feature = "hydrate"))]
mod unavailable {
    use reports::{Coordinate, GeolocationError, Geolocator, PositionOptions};

    /// Geolocator for builds without a browser.
    #[derive(Default, Clone, Copy)]
    pub struct UnavailableGeolocator;

    impl Geolocator for UnavailableGeolocator {
        async fn current_position(&self, _options: PositionOptions) -> Result<Coordinate, GeolocationError> {
            Err(GeolocationError::Unsupported)
        }
    }
}

#[cfg(test)]
#[path = "geolocation_test.rs"]
mod geolocation_test;
