use std::path::PathBuf;
use std::time::Duration;

/// Read-only snapshot of one queue entry's displayable fields.
///
/// Shared between containers as `Arc<Track>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    pub path: PathBuf,
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub track_number: Option<u32>,
    pub duration: Option<Duration>,
}

impl Track {
    /// Whole seconds of playing time, 0 when unknown.
    pub fn duration_secs(&self) -> u64 {
        self.duration.map(|d| d.as_secs()).unwrap_or(0)
    }
}
