use core::fmt;

use crate::key::{Key, UnknownKey};
use crate::redact::Redacted;

pub struct Config {
    // Wi-Fi SSID to connect to
    pub ssid: &'static str,

    // Wi-Fi pre-shared key (password)
    pub password: &'static str,

    // Spotify application client ID (public)
    pub client_id: &'static str,

    // Spotify application client secret
    pub client_secret: &'static str,

    // OAuth refresh token obtained through the authorization-code flow
    pub refresh_token: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    Missing(Key),
    UnknownKey,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Missing(key) => write!(f, "{} is not set (check secrets.toml)", key),
            Error::UnknownKey => f.write_str("unknown secret name"),
        }
    }
}

impl From<UnknownKey> for Error {
    fn from(_: UnknownKey) -> Self {
        Error::UnknownKey
    }
}

impl Config {
    pub const fn get(&self, key: Key) -> &'static str {
        match key {
            Key::Ssid => self.ssid,
            Key::Password => self.password,
            Key::ClientId => self.client_id,
            Key::ClientSecret => self.client_secret,
            Key::RefreshToken => self.refresh_token,
        }
    }

    /// Look a value up by name, accepting `CLIENT_ID` as well as `client_id`.
    pub fn lookup(&self, name: &str) -> Result<&'static str, Error> {
        let key: Key = name.parse()?;
        Ok(self.get(key))
    }

    // Whitespace-only values count as missing
    pub fn is_set(&self, key: Key) -> bool {
        !self.get(key).trim().is_empty()
    }

    pub fn missing(&self) -> impl Iterator<Item = Key> + '_ {
        Key::ALL.into_iter().filter(move |key| !self.is_set(*key))
    }

    pub fn is_configured(&self) -> bool {
        self.missing().next().is_none()
    }

    /// Returns the first key (in [`Key::ALL`] order) that is still empty.
    pub fn validate(&self) -> Result<(), Error> {
        match self.missing().next() {
            Some(key) => Err(Error::Missing(key)),
            None => Ok(()),
        }
    }

    pub fn log_summary(&self) {
        for key in Key::ALL {
            let value = self.get(key);
            if !self.is_set(key) {
                log::warn!("{} is not set", key);
            } else if key.is_secret() {
                log::info!("{}: {}", key, Redacted(value));
            } else {
                log::info!("{}: {:?}", key, value);
            }
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("ssid", &self.ssid)
            .field("password", &Redacted(self.password))
            .field("client_id", &self.client_id)
            .field("client_secret", &Redacted(self.client_secret))
            .field("refresh_token", &Redacted(self.refresh_token))
            .finish()
    }
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));
