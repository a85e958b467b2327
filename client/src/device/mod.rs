//! Browser device adapters.
//!
//! SYSTEM CONTEXT
//! ==============
//! `reports` defines the `Camera`, `VideoStream`, and `Geolocator` seams. This
//! module implements them against `navigator.mediaDevices` and
//! `navigator.geolocation` for the `hydrate` build. Server builds get
//! unavailable stand-ins so components compile unchanged and render their
//! initial state.

pub mod camera;
pub mod geolocation;

/// Seed for the client-side verifier's random source.
pub fn random_seed() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        seed
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
