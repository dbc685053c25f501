use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("HTTP {status}: {body}")]
    Status {
        status: attohttpc::StatusCode,
        body: String,
    },

    #[error("transport error: {0}")]
    Transport(#[from] attohttpc::Error),

    #[error("unexpected response shape: {0}")]
    Shape(#[from] serde_json::Error),

    #[error("release \"{album}\" has no artists")]
    NoArtists { album: String },
}
