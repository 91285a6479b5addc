use core::fmt;
use core::str::FromStr;

/// One of the five values the firmware needs before it can reach Spotify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Wi-Fi network name
    Ssid,
    /// Wi-Fi password
    Password,
    /// Spotify application client ID
    ClientId,
    /// Spotify application client secret
    ClientSecret,
    /// Long-lived OAuth refresh token
    RefreshToken,
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownKey;

impl Key {
    pub const ALL: [Key; 5] = [
        Key::Ssid,
        Key::Password,
        Key::ClientId,
        Key::ClientSecret,
        Key::RefreshToken,
    ];

    /// Canonical name, e.g. `CLIENT_ID`.
    pub const fn name(self) -> &'static str {
        match self {
            Key::Ssid => "SSID",
            Key::Password => "PASSWORD",
            Key::ClientId => "CLIENT_ID",
            Key::ClientSecret => "CLIENT_SECRET",
            Key::RefreshToken => "REFRESH_TOKEN",
        }
    }

    /// Name used in `secrets.toml`, e.g. `client_id`.
    pub const fn toml_name(self) -> &'static str {
        match self {
            Key::Ssid => "ssid",
            Key::Password => "password",
            Key::ClientId => "client_id",
            Key::ClientSecret => "client_secret",
            Key::RefreshToken => "refresh_token",
        }
    }

    /// Values that must never show up in logs.
    pub const fn is_secret(self) -> bool {
        matches!(self, Key::Password | Key::ClientSecret | Key::RefreshToken)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Key {
    type Err = UnknownKey;

    // Both spellings share the same letters, so a case-insensitive match on
    // the canonical name covers the toml name too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Key::ALL
            .into_iter()
            .find(|key| key.name().eq_ignore_ascii_case(s))
            .ok_or(UnknownKey)
    }
}
