use anyhow::Context;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CLIENT_ID_VAR: &str = "SPOTIPY_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "SPOTIPY_CLIENT_SECRET";

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub spotify: SpotifyConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Loads the config TOML, or falls back to the built-in defaults when no
    /// file exists at `path`. The credentials never live in this file.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        toml::from_str(&contents).with_context(|| "Failed to parse config TOML")
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SpotifyConfig {
    pub token_url: String,
    pub new_releases_url: String,
    /// Page size for the new-releases request.
    pub limit: u32,
}

impl Default for SpotifyConfig {
    fn default() -> Self {
        Self {
            token_url: "https://accounts.spotify.com/api/token".to_string(),
            new_releases_url: "https://api.spotify.com/v1/browse/new-releases".to_string(),
            limit: 5,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/daily_spotify_releases.csv"),
        }
    }
}

/// Application credentials for the client-credentials flow, valid for one run.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let client_id = std::env::var(CLIENT_ID_VAR)
            .with_context(|| format!("{CLIENT_ID_VAR} is not set"))?;
        let client_secret = std::env::var(CLIENT_SECRET_VAR)
            .with_context(|| format!("{CLIENT_SECRET_VAR} is not set"))?;
        Ok(Self::new(client_id, client_secret))
    }

    /// `Basic` header value for the token request: base64 of `id:secret`.
    pub fn basic_auth_header(&self) -> String {
        let raw = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", STANDARD.encode(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_toml() -> anyhow::Result<()> {
        let toml_str = r#"
[spotify]
token_url = "http://localhost:9000/api/token"
new_releases_url = "http://localhost:9000/v1/browse/new-releases"
limit = 3

[output]
path = "/tmp/releases.csv"
"#;

        let cfg: Config = toml::from_str(toml_str)?;

        assert_eq!(cfg.spotify.token_url, "http://localhost:9000/api/token");
        assert_eq!(
            cfg.spotify.new_releases_url,
            "http://localhost:9000/v1/browse/new-releases"
        );
        assert_eq!(cfg.spotify.limit, 3);
        assert_eq!(cfg.output.path, PathBuf::from("/tmp/releases.csv"));

        Ok(())
    }

    #[test]
    fn test_empty_config_uses_defaults() -> anyhow::Result<()> {
        let cfg: Config = toml::from_str("")?;

        assert_eq!(cfg.spotify.token_url, "https://accounts.spotify.com/api/token");
        assert_eq!(cfg.spotify.limit, 5);
        assert_eq!(
            cfg.output.path,
            PathBuf::from("data/daily_spotify_releases.csv")
        );

        Ok(())
    }

    #[test]
    fn test_missing_config_file_falls_back_to_defaults() -> anyhow::Result<()> {
        let cfg = Config::load_or_default(Path::new("/nonexistent/config.toml"))?;

        assert_eq!(cfg.spotify.limit, 5);

        Ok(())
    }

    #[test]
    fn test_basic_auth_header() {
        let creds = Credentials::new("id", "secret");

        // base64("id:secret")
        assert_eq!(creds.basic_auth_header(), "Basic aWQ6c2VjcmV0");
    }
}
