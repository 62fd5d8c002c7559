//! Decoded pattern data structures

use std::fmt;

use serde::Serialize;

use crate::STEPS_PER_TRACK;

/// Steps per display group (one beat of sixteenth notes)
const STEPS_PER_GROUP: usize = 4;

/// A fully decoded drum pattern
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pattern {
    /// Hardware version and tempo
    pub header: Header,
    /// Tracks in file order (which is also playback order)
    pub tracks: Vec<Track>,
}

impl Pattern {
    /// Find the first track with the given id
    pub fn track(&self, id: u8) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Track names in file order
    pub fn track_names(&self) -> Vec<&str> {
        self.tracks.iter().map(|t| t.name.as_str()).collect()
    }
}

/// Pattern header
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    /// Hardware version string, trailing NUL padding removed
    pub version: String,
    /// Tempo in beats per minute
    pub tempo: f32,
}

/// A single instrument track: one measure of sixteenth-note steps
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    /// Track id (0-255)
    pub id: u8,
    /// Track name (0-255 bytes)
    pub name: String,
    /// Step flags, index 0 first
    pub steps: [bool; STEPS_PER_TRACK],
}

impl Track {
    /// Number of steps that trigger
    pub fn active_steps(&self) -> usize {
        self.steps.iter().filter(|&&on| on).count()
    }

    /// Whether the step at `index` triggers (false when out of range)
    pub fn is_active(&self, index: usize) -> bool {
        self.steps.get(index).copied().unwrap_or(false)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved with HW Version: {}", self.header.version)?;
        writeln!(f, "Tempo: {}", self.header.tempo)?;
        for track in &self.tracks {
            write!(f, "{}", track)?;
        }
        Ok(())
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}\t", self.id, self.name)?;
        for group in self.steps.chunks(STEPS_PER_GROUP) {
            f.write_str("|")?;
            for &on in group {
                f.write_str(if on { "x" } else { "-" })?;
            }
        }
        writeln!(f, "|")
    }
}
