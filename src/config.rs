//! Server configuration parsed from environment variables.
//!
//! ERROR HANDLING
//! ==============
//! Unset variables take their defaults. A variable that is set but does not
//! parse is an error: the server should not silently listen somewhere other
//! than where it was told to.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use leptos::config::{LeptosOptions, get_configuration};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Overrides the Leptos site root (compiled WASM, JS, CSS).
    pub site_root: Option<PathBuf>,
}

impl Config {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `SITE_ROOT`: default from `[package.metadata.leptos]`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a set variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: parse_var(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR)?,
            port: parse_var(&lookup, "PORT", DEFAULT_PORT)?,
            site_root: lookup("SITE_ROOT").filter(|v| !v.trim().is_empty()).map(PathBuf::from),
        })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    /// Leptos options with this config's address and site root applied.
    ///
    /// Under `cargo leptos` the options come from `LEPTOS_*` variables;
    /// otherwise they are read from this package's `Cargo.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Leptos`] if neither source yields valid options.
    pub fn leptos_options(&self) -> Result<LeptosOptions, ConfigError> {
        let manifest = std::env::var("LEPTOS_OUTPUT_NAME")
            .is_err()
            .then_some(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"));
        let conf = get_configuration(manifest).map_err(|e| ConfigError::Leptos(e.to_string()))?;

        let mut options = conf.leptos_options;
        options.site_addr = self.socket_addr();
        if let Some(root) = &self.site_root {
            options.site_root = root.to_string_lossy().into_owned().into();
        }
        Ok(options)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}
