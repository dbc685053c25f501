use chrono::NaiveDate;
use serde::Serialize;

/// One album release as projected from the new-releases response.
///
/// `release_date` is kept as the API-supplied string; Spotify reports
/// varying precision (year, year-month or full date) and we never
/// interpret it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub artist_name: String,
    pub album_name: String,
    pub release_date: String,
}

impl Release {
    /// Attaches the run date, producing the row that lands in the snapshot
    /// file. Field order here is the CSV column order.
    pub fn stamped(self, snapshot_date: NaiveDate) -> ReleaseRecord {
        ReleaseRecord {
            artist_name: self.artist_name,
            album_name: self.album_name,
            release_date: self.release_date,
            snapshot_date: snapshot_date.format("%Y-%m-%d").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseRecord {
    pub artist_name: String,
    pub album_name: String,
    pub release_date: String,
    pub snapshot_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamped_attaches_iso_date() {
        let release = Release {
            artist_name: "Artist X".to_string(),
            album_name: "Album A".to_string(),
            release_date: "2024-01-01".to_string(),
        };

        let record = release.stamped(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());

        assert_eq!(record.artist_name, "Artist X");
        assert_eq!(record.album_name, "Album A");
        assert_eq!(record.release_date, "2024-01-01");
        assert_eq!(record.snapshot_date, "2024-06-01");
    }
}
