//! The single daily pass: token, releases, stamp, write.

use chrono::{Local, NaiveDate};
use thiserror::Error;

use crate::config::{Config, Credentials};
use crate::domain::release::ReleaseRecord;
use crate::snapshot::{self, WriteOutcome, error::SnapshotError};
use crate::spotify::{SpotifyClient, error::SpotifyError};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("token request failed: {0}")]
    Auth(#[source] SpotifyError),

    #[error("new-releases fetch failed: {0}")]
    Fetch(#[source] SpotifyError),

    #[error("snapshot write failed: {0}")]
    Snapshot(#[from] SnapshotError),
}

#[derive(Debug)]
pub struct RunOutcome {
    pub snapshot_date: NaiveDate,
    pub written: WriteOutcome,
}

/// Runs one pass stamped with today's local date.
pub fn run(cfg: &Config, creds: &Credentials) -> Result<RunOutcome, PipelineError> {
    run_on(cfg, creds, Local::now().date_naive())
}

/// Runs one pass stamped with the given snapshot date. Strictly linear:
/// a failure at any step aborts the rest, and nothing is written before
/// the fetch has succeeded.
pub fn run_on(
    cfg: &Config,
    creds: &Credentials,
    snapshot_date: NaiveDate,
) -> Result<RunOutcome, PipelineError> {
    let client = SpotifyClient::new(&cfg.spotify);

    let token = client.request_token(creds).map_err(PipelineError::Auth)?;
    log::info!("obtained access token");

    let releases = client
        .new_releases(&token, cfg.spotify.limit)
        .map_err(PipelineError::Fetch)?;
    log::info!("fetched {} new releases", releases.len());

    let records: Vec<ReleaseRecord> = releases
        .into_iter()
        .map(|release| release.stamped(snapshot_date))
        .collect();

    let written = snapshot::append_records(&cfg.output.path, &records)?;
    Ok(RunOutcome {
        snapshot_date,
        written,
    })
}
