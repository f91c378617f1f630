//! Discrete position bars used for the volume and time-progress indicators.

/// A fixed-width bar with a single thumb cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slider {
    pub thumb: char,
    pub track: char,
}

impl Default for Slider {
    fn default() -> Self {
        Self {
            thumb: '■',
            track: '─',
        }
    }
}

impl Slider {
    pub fn new(thumb: char, track: char) -> Self {
        Self { thumb, track }
    }

    /// Cell index of the thumb for `fraction` on a bar `width` cells wide.
    ///
    /// `fraction` is clamped to `[0, 1]` (NaN counts as 0). Returns `None` when
    /// there is no room for a bar.
    pub fn thumb_index(fraction: f64, width: usize) -> Option<usize> {
        if width == 0 {
            return None;
        }
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let index = (fraction * width as f64).floor() as usize;
        Some(index.min(width - 1))
    }

    /// Render the bar as exactly `width` characters.
    pub fn render(&self, fraction: f64, width: usize) -> String {
        let Some(thumb_at) = Self::thumb_index(fraction, width) else {
            return String::new();
        };
        (0..width)
            .map(|i| if i == thumb_at { self.thumb } else { self.track })
            .collect()
    }
}

/// Progress through a track, 0 when the total is zero or unknown.
pub fn progress_fraction(elapsed_secs: u64, total_secs: u64) -> f64 {
    if total_secs == 0 {
        return 0.0;
    }
    elapsed_secs as f64 / total_secs as f64
}
