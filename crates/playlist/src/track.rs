//! Track — leaf record describing a single playlist entry.

use core::fmt;

use heapless::String;
use serde::{Deserialize, Serialize};

/// A single playlist entry.
///
/// Text fields are bounded so a `Track` fits inside a fixed-capacity
/// collection without allocation. At ~200 bytes per value, large groups of
/// tracks belong in static or heap storage rather than on the stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Track {
    /// Display title (up to 128 UTF-8 bytes)
    pub title: String<128>,
    /// Artist name (up to 64 UTF-8 bytes); may be empty
    pub artist: String<64>,
    /// Duration in whole seconds
    pub duration_secs: u32,
}

impl Track {
    /// Create a `Track` from raw text fields.
    ///
    /// Text longer than a field's bound is truncated at the last character
    /// that fits; `duration_secs` is stored as given.
    pub fn new(title: &str, artist: &str, duration_secs: u32) -> Self {
        Track {
            title: bounded(title),
            artist: bounded(artist),
            duration_secs,
        }
    }
}

impl Default for Track {
    fn default() -> Self {
        Track::new("", "", 0)
    }
}

impl fmt::Display for Track {
    /// `"Artist - Title (m:ss)"`; the artist segment is omitted when empty.
    #[allow(clippy::arithmetic_side_effects)] // Safety: / 60 and % 60 — nonzero constant divisor, no overflow
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mins = self.duration_secs / 60;
        let secs = self.duration_secs % 60;
        if self.artist.is_empty() {
            write!(f, "{} ({}:{:02})", self.title, mins, secs)
        } else {
            write!(f, "{} - {} ({}:{:02})", self.artist, self.title, mins, secs)
        }
    }
}

/// Copy `s` into a bounded string, dropping whatever does not fit.
fn bounded<const C: usize>(s: &str) -> String<C> {
    let mut out = String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
