/// Where the Spotify application (client ID / secret) is registered
pub const SPOTIFY_DASHBOARD_URL: &str = "https://developer.spotify.com/dashboard";
/// Authorization endpoint visited in the browser to grant consent
pub const SPOTIFY_AUTHORIZE_URL: &str = "https://accounts.spotify.com/authorize";
/// Token endpoint the authorization code is exchanged at
pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
/// Callback URI, must match the one configured in the dashboard
pub const SPOTIFY_REDIRECT_URI: &str = "http://localhost";
/// Scopes needed to read and control playback
pub const SPOTIFY_SCOPES: [&str; 2] = ["user-read-playback-state", "user-modify-playback-state"];

/// Content type of the token request body
pub const TOKEN_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Maximum size of the rendered authorization URL
pub const AUTHORIZE_URL_MAX: usize = 512;
/// Maximum size of a decoded authorization code
pub const CODE_MAX: usize = 512;
/// Maximum size of the rendered token request body
pub const TOKEN_BODY_MAX: usize = 1024;
