use crate::format::text::{Align, align, format_duration};
use crate::library::Track;

const NUMBER_WIDTH: usize = 3;
const DURATION_WIDTH: usize = 5;
const ALBUM_WIDTH: usize = 14;
const ARTIST_WIDTH: usize = 14;
const SEPARATOR: &str = "   ";

/// Width left for the title once the fixed columns and separators are placed.
pub fn title_width(width: usize) -> usize {
    width.saturating_sub(
        NUMBER_WIDTH + DURATION_WIDTH + ALBUM_WIDTH + ARTIST_WIDTH + 4 * SEPARATOR.len(),
    )
}

/// One queue row: number, title, duration, album, artist.
pub fn format_row(track: &Track, width: usize) -> String {
    let number = track.track_number.map(|n| n.to_string()).unwrap_or_default();
    let duration = track
        .duration
        .map(|d| format_duration(d.as_secs()))
        .unwrap_or_default();

    [
        align(&number, Align::Right, NUMBER_WIDTH),
        align(&track.title, Align::Left, title_width(width)),
        align(&duration, Align::Right, DURATION_WIDTH),
        align(track.album.as_deref().unwrap_or(""), Align::Left, ALBUM_WIDTH),
        align(track.artist.as_deref().unwrap_or(""), Align::Left, ARTIST_WIDTH),
    ]
    .join(SEPARATOR)
}
