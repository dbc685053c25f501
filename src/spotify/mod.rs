//! Minimal Spotify Web API client: client-credentials token exchange and the
//! public new-releases listing. One blocking call per operation, no retries.

use attohttpc::header::AUTHORIZATION;
use serde::Deserialize;

use crate::config::{Credentials, SpotifyConfig};
use crate::domain::release::Release;

pub mod error;

use error::SpotifyError;

/// Short-lived bearer token. Used once within the run it was issued in;
/// expiry is never checked.
#[derive(Debug, Clone)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub struct SpotifyClient {
    token_url: String,
    new_releases_url: String,
}

impl SpotifyClient {
    pub fn new(cfg: &SpotifyConfig) -> Self {
        Self {
            token_url: cfg.token_url.clone(),
            new_releases_url: cfg.new_releases_url.clone(),
        }
    }

    /// Exchanges application credentials for an access token
    /// (OAuth2 client-credentials grant).
    pub fn request_token(&self, creds: &Credentials) -> Result<Token, SpotifyError> {
        #[derive(Deserialize)]
        struct TokenResponse {
            access_token: String,
        }

        let response = attohttpc::post(&self.token_url)
            .header(AUTHORIZATION, creds.basic_auth_header())
            .form(&[("grant_type", "client_credentials")])?
            .send()?;

        let body: TokenResponse = serde_json::from_str(&Self::success_text(response)?)?;
        Ok(Token(body.access_token))
    }

    /// Fetches the first page of new releases and projects each item down to
    /// (first artist, album name, release date).
    ///
    /// An item with no artists fails the whole call; a listing with no items
    /// is an empty result, not an error.
    pub fn new_releases(&self, token: &Token, limit: u32) -> Result<Vec<Release>, SpotifyError> {
        #[derive(Deserialize)]
        struct ArtistItem {
            name: String,
        }

        #[derive(Deserialize)]
        struct AlbumItem {
            name: String,
            release_date: String,
            artists: Vec<ArtistItem>,
        }

        #[derive(Deserialize)]
        struct Albums {
            items: Vec<AlbumItem>,
        }

        #[derive(Deserialize)]
        struct NewReleasesResponse {
            albums: Albums,
        }

        let response = attohttpc::get(&self.new_releases_url)
            .header(AUTHORIZATION, format!("Bearer {}", token.as_str()))
            .param("limit", limit)
            .send()?;

        let body: NewReleasesResponse = serde_json::from_str(&Self::success_text(response)?)?;

        body.albums
            .items
            .into_iter()
            .map(|item| {
                let artist = item
                    .artists
                    .into_iter()
                    .next()
                    .ok_or_else(|| SpotifyError::NoArtists {
                        album: item.name.clone(),
                    })?;
                Ok(Release {
                    artist_name: artist.name,
                    album_name: item.name,
                    release_date: item.release_date,
                })
            })
            .collect()
    }

    fn success_text(response: attohttpc::Response) -> Result<String, SpotifyError> {
        let status = response.status();
        let text = response.text()?;
        if !status.is_success() {
            return Err(SpotifyError::Status { status, body: text });
        }
        Ok(text)
    }
}
