/// Timestamp grammar for seek targets embedded in free text.
/// Recognizes `[H:]M:S.frac` anywhere in a string; the fractional part must be
/// present (it tells a media position apart from a wall-clock `HH:MM`) but
/// is dropped from the result.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static TIMESTAMP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:([0-9]+):)?([0-9]+):([0-9]+)\.[0-9]+").expect("valid timestamp regex")
});

/// A playback position parsed out of selected text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Timestamp {
    /// Present only when the text carried a leading `H:` group
    pub hours: Option<u64>,
    pub minutes: u64,
    pub seconds: u64,
}

impl Timestamp {
    pub fn new(hours: Option<u64>, minutes: u64, seconds: u64) -> Self {
        Self { hours, minutes, seconds }
    }

    /// Find the first `[H:]M:S.frac` substring in `text`.
    ///
    /// An hours group too large for a u64 is treated as absent, since the
    /// `M:S.frac` tail still matches on its own. A match whose minutes or
    /// seconds do not fit is skipped in favour of the next one.
    pub fn find(text: &str) -> Option<Self> {
        TIMESTAMP_PATTERN.captures_iter(text).find_map(|caps| {
            let minutes = caps[2].parse().ok()?;
            let seconds = caps[3].parse().ok()?;
            let hours = caps.get(1).and_then(|h| h.as_str().parse().ok());
            Some(Self { hours, minutes, seconds })
        })
    }

    /// Whether `text` holds a usable timestamp.
    pub fn matches(text: &str) -> bool {
        Self::find(text).is_some()
    }

    /// Encode as VLC's relative-duration seek value, e.g. `1H:2M:3S` or `2M:3S`.
    pub fn seek_value(&self) -> String {
        match self.hours {
            Some(h) => format!("{}H:{}M:{}S", h, self.minutes, self.seconds),
            None => format!("{}M:{}S", self.minutes, self.seconds),
        }
    }
}

/// Shorthand for [`Timestamp::find`].
pub fn extract(text: &str) -> Option<Timestamp> {
    Timestamp::find(text)
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hours {
            Some(h) => write!(f, "{}:{:02}:{:02}", h, self.minutes, self.seconds),
            None => write!(f, "{}:{:02}", self.minutes, self.seconds),
        }
    }
}
