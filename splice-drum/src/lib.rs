//! Splice-Drum: decoder for `.splice` drum machine pattern files
//!
//! A `.splice` file stores one measure of a step-sequencer drum pattern: the
//! hardware version that saved it, the tempo, and a list of tracks with
//! sixteen on/off steps each.
//!
//! # Format Overview
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0      | 6    | `SPLICE` tag |
//! | 6      | 7    | reserved |
//! | 13     | 1    | payload length (bytes after offset 14) |
//! | 14     | 32   | hardware version, NUL padded |
//! | 46     | 4    | tempo, little-endian `f32` |
//! | 50     | ...  | track records until the payload length is used up |
//!
//! Each track record is `id (1) + reserved (3) + name length (1) + name +
//! steps (16)`. A step byte of zero is off; anything else is on.
//!
//! # Usage
//!
//! ```ignore
//! use splice_drum::decode_file;
//!
//! let pattern = decode_file("pattern_1.splice")?;
//! print!("{}", pattern);
//! // Saved with HW Version: 0.808-alpha
//! // Tempo: 120
//! // (0) kick	|x---|x---|x---|x---|
//! ```

mod decoder;
mod error;
mod pattern;

pub use decoder::{decode, decode_bytes, decode_file};
pub use error::{DrumError, Result};
pub use pattern::{Header, Pattern, Track};

// =============================================================================
// Constants
// =============================================================================

/// File marker at offset 0
pub const SPLICE_MAGIC: &[u8; 6] = b"SPLICE";

/// Marker plus reserved/length field
pub const PROLOGUE_SIZE: usize = 14;

/// Version text plus tempo
pub const HEADER_SIZE: usize = 36;

/// Raw size of the version text field
pub const VERSION_SIZE: usize = 32;

/// Steps in one track (sixteenth notes of a 4/4 measure)
pub const STEPS_PER_TRACK: usize = 16;

/// Size of a track record excluding its name
pub const TRACK_FIXED_SIZE: usize = 1 + 3 + 1 + STEPS_PER_TRACK;
