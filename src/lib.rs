//! Wi-Fi and Spotify credentials for the firmware, baked in at compile time.
//!
//! Copy `secrets.example.toml` to `secrets.toml`, fill in every value and
//! build. `build.rs` turns the file into [`CONFIG`]. Set `SECRETS_PATH` to
//! read another file instead. Without either, the build falls back to the
//! empty template and [`Config::validate`] reports what is missing.
//!
//! ```no_run
//! use spotify_secrets::CONFIG;
//!
//! if let Err(e) = CONFIG.validate() {
//!     log::error!("secrets not configured: {}", e);
//! }
//! CONFIG.log_summary();
//! ```
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod constants;
pub mod key;
pub mod provisioning;
pub mod redact;

#[cfg(test)]
mod secrets_file;

pub use config::{Config, Error, CONFIG};
pub use key::{Key, UnknownKey};
pub use redact::Redacted;
