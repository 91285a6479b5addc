// Parsing of `secrets.toml`. Compiled into `build.rs` through `#[path]` and
// into the library only for its tests, so it sticks to std + serde + toml.

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const SECRETS_FILE: &str = "secrets.toml";
pub const TEMPLATE_FILE: &str = "secrets.example.toml";

/// Which file the secrets are read from.
#[derive(Debug, PartialEq, Eq)]
pub enum Source {
    /// `SECRETS_PATH` was set
    Env(PathBuf),
    /// `secrets.toml` next to the manifest
    Secrets,
    /// Nothing configured, build with the empty template
    Template,
}

impl Source {
    pub fn select(env_path: Option<String>, secrets_exists: bool) -> Self {
        match env_path {
            Some(path) if !path.trim().is_empty() => Source::Env(PathBuf::from(path)),
            _ if secrets_exists => Source::Secrets,
            _ => Source::Template,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Source::Env(path) => path,
            Source::Secrets => Path::new(SECRETS_FILE),
            Source::Template => Path::new(TEMPLATE_FILE),
        }
    }

    // Only files that exist: a missing one keeps the crate dirty forever.
    pub fn watched(&self) -> Vec<&Path> {
        match self {
            Source::Env(path) => vec![path.as_path()],
            Source::Secrets => vec![Path::new(SECRETS_FILE)],
            Source::Template => vec![Path::new(TEMPLATE_FILE)],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSecrets {
    #[serde(default)]
    pub ssid: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default)]
    pub refresh_token: String,
}

impl RawSecrets {
    pub fn parse(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("ssid", &self.ssid),
            ("password", &self.password),
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("refresh_token", &self.refresh_token),
        ]
    }

    /// Names of the values that are empty or whitespace only.
    pub fn empty_keys(&self) -> Vec<&'static str> {
        self.entries()
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn require_complete(&self) -> Result<(), String> {
        let empty = self.empty_keys();
        if empty.is_empty() {
            Ok(())
        } else {
            Err(format!("empty secrets: {}", empty.join(", ")))
        }
    }

    /// Rust source for the generated `CONFIG` constant.
    pub fn to_rust(&self) -> String {
        format!(
            r#"
        pub const CONFIG: Config = Config {{
            ssid: {ssid:?},
            password: {password:?},
            client_id: {client_id:?},
            client_secret: {client_secret:?},
            refresh_token: {refresh_token:?},
        }};
    "#,
            ssid = self.ssid,
            password = self.password,
            client_id = self.client_id,
            client_secret = self.client_secret,
            refresh_token = self.refresh_token,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILLED: &str = r#"
        ssid = "home-2g"
        password = "correct horse"
        client_id = "abc123"
        client_secret = "s3cr3t"
        refresh_token = "AQD-refresh"
    "#;

    #[test]
    fn test_select_env_path_wins() {
        let source = Source::select(Some("/etc/fw/secrets.toml".into()), true);
        assert_eq!(source, Source::Env(PathBuf::from("/etc/fw/secrets.toml")));
        assert_eq!(source.path(), Path::new("/etc/fw/secrets.toml"));
    }

    #[test]
    fn test_select_blank_env_path_is_ignored() {
        assert_eq!(Source::select(Some("  ".into()), true), Source::Secrets);
    }

    #[test]
    fn test_select_secrets_file() {
        let source = Source::select(None, true);
        assert_eq!(source, Source::Secrets);
        assert_eq!(source.path(), Path::new(SECRETS_FILE));
    }

    #[test]
    fn test_select_falls_back_to_template() {
        let source = Source::select(None, false);
        assert_eq!(source, Source::Template);
        assert_eq!(source.path(), Path::new(TEMPLATE_FILE));
    }

    #[test]
    fn test_template_source_does_not_watch_missing_secrets_file() {
        let watched = Source::Template.watched();
        assert_eq!(watched, vec![Path::new(TEMPLATE_FILE)]);
        assert!(!watched.contains(&Path::new(SECRETS_FILE)));
    }

    #[test]
    fn test_parse_filled() {
        let raw = RawSecrets::parse(FILLED).unwrap();
        assert_eq!(raw.ssid, "home-2g");
        assert_eq!(raw.refresh_token, "AQD-refresh");
        assert!(raw.empty_keys().is_empty());
        assert_eq!(raw.require_complete(), Ok(()));
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        let err = RawSecrets::parse("ssid = \"x\"\nwifi_psk = \"y\"\n").unwrap_err();
        assert!(err.to_string().contains("wifi_psk"));
    }

    #[test]
    fn test_missing_key_defaults_to_empty() {
        let raw = RawSecrets::parse("ssid = \"home\"\npassword = \"pw\"\n").unwrap();
        assert_eq!(raw.client_id, "");
        assert_eq!(raw.empty_keys(), vec!["client_id", "client_secret", "refresh_token"]);
    }

    #[test]
    fn test_blank_value_is_reported() {
        let raw = RawSecrets::parse(&FILLED.replace("\"s3cr3t\"", "\"  \\t \"")).unwrap();
        assert_eq!(raw.empty_keys(), vec!["client_secret"]);
        assert_eq!(
            raw.require_complete(),
            Err("empty secrets: client_secret".to_string())
        );
    }

    #[test]
    fn test_template_is_incomplete() {
        let raw = RawSecrets::parse(include_str!("../secrets.example.toml")).unwrap();
        assert_eq!(raw.empty_keys().len(), 5);
        assert_eq!(
            raw.require_complete(),
            Err("empty secrets: ssid, password, client_id, client_secret, refresh_token".to_string())
        );
    }

    #[test]
    fn test_to_rust_escapes_values() {
        let raw = RawSecrets::parse(&FILLED.replace("correct horse", "say \\\"hi\\\"\\\\")).unwrap();
        assert_eq!(raw.password, "say \"hi\"\\");

        let code = raw.to_rust();
        assert!(code.contains(r#"password: "say \"hi\"\\","#));
        assert!(code.contains(r#"ssid: "home-2g","#));
    }
}
