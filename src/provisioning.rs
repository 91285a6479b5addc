//! Helpers for the one-off manual authorization that produces `refresh_token`.
//!
//! 1. Register an app at [`SPOTIFY_DASHBOARD_URL`](crate::constants::SPOTIFY_DASHBOARD_URL)
//!    with [`SPOTIFY_REDIRECT_URI`] as callback, and copy its client ID and
//!    secret into `secrets.toml`.
//! 2. Open [`authorize_url`] in a browser and accept. The browser lands on a
//!    `http://localhost/?code=...` page that fails to load; [`code_from_redirect`]
//!    pulls the (decoded) code out of that URL.
//! 3. POST [`token_request_body`] to [`SPOTIFY_TOKEN_URL`](crate::constants::SPOTIFY_TOKEN_URL)
//!    with a [`TOKEN_CONTENT_TYPE`](crate::constants::TOKEN_CONTENT_TYPE)
//!    content type (curl, Postman, ...) and copy `refresh_token` from the JSON
//!    response.
//!
//! Nothing here talks to the network.

use core::fmt::{self, Write};
use heapless::{String, Vec};

use crate::constants::{
    AUTHORIZE_URL_MAX, CODE_MAX, SPOTIFY_AUTHORIZE_URL, SPOTIFY_REDIRECT_URI, SPOTIFY_SCOPES,
    TOKEN_BODY_MAX,
};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    EmptyClientId,
    EmptyClientSecret,
    EmptyCode,
    InvalidEscape,
    BufferOverflow,
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Error::BufferOverflow
    }
}

// Writes `s` percent-encoded, keeping only RFC 3986 unreserved characters.
struct Encoded<'a>(&'a str);

impl fmt::Display for Encoded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                    f.write_char(byte as char)?
                }
                _ => write!(f, "%{:02X}", byte)?,
            }
        }
        Ok(())
    }
}

/// Renders the URL to open in a browser to grant the firmware access.
pub fn authorize_url(client_id: &str) -> Result<String<AUTHORIZE_URL_MAX>, Error> {
    let client_id = client_id.trim();
    if client_id.is_empty() {
        return Err(Error::EmptyClientId);
    }

    let mut url = String::new();
    write!(
        url,
        "{}?client_id={}&response_type=code&redirect_uri={}&scope=",
        SPOTIFY_AUTHORIZE_URL,
        Encoded(client_id),
        Encoded(SPOTIFY_REDIRECT_URI),
    )?;
    for (i, scope) in SPOTIFY_SCOPES.iter().enumerate() {
        if i > 0 {
            url.write_str("%20")?;
        }
        write!(url, "{}", Encoded(scope))?;
    }

    Ok(url)
}

/// Extracts and percent-decodes the `code` query parameter from the URL the
/// browser was redirected to, ready to hand to [`token_request_body`].
pub fn code_from_redirect(url: &str) -> Result<String<CODE_MAX>, Error> {
    let (_, query) = url.trim().split_once('?').ok_or(Error::EmptyCode)?;
    let query = query.split('#').next().unwrap_or(query);

    let raw = query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == "code")
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
        .ok_or(Error::EmptyCode)?;

    decode(raw)
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

// `+` is left as is, only `%XX` escapes are decoded.
fn decode(s: &str) -> Result<String<CODE_MAX>, Error> {
    let mut out: Vec<u8, CODE_MAX> = Vec::new();
    let mut bytes = s.bytes();

    while let Some(byte) = bytes.next() {
        let byte = if byte == b'%' {
            let hi = bytes.next().and_then(hex_value).ok_or(Error::InvalidEscape)?;
            let lo = bytes.next().and_then(hex_value).ok_or(Error::InvalidEscape)?;
            hi << 4 | lo
        } else {
            byte
        };
        out.push(byte).map_err(|_| Error::BufferOverflow)?;
    }

    String::from_utf8(out).map_err(|_| Error::InvalidEscape)
}

/// Renders the form body that exchanges an authorization code for tokens.
pub fn token_request_body(
    code: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<String<TOKEN_BODY_MAX>, Error> {
    let (code, client_id, client_secret) = (code.trim(), client_id.trim(), client_secret.trim());
    if code.is_empty() {
        return Err(Error::EmptyCode);
    }
    if client_id.is_empty() {
        return Err(Error::EmptyClientId);
    }
    if client_secret.is_empty() {
        return Err(Error::EmptyClientSecret);
    }

    let mut body = String::new();
    write!(
        body,
        "grant_type=authorization_code&code={}&redirect_uri={}&client_id={}&client_secret={}",
        Encoded(code),
        Encoded(SPOTIFY_REDIRECT_URI),
        Encoded(client_id),
        Encoded(client_secret),
    )?;

    Ok(body)
}
