//! Pattern decoding functions

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, trace};

use super::io::{read_array, read_f32_le, read_string, read_u8, read_vec};
use crate::error::{DrumError, Result};
use crate::pattern::{Header, Pattern, Track};
use crate::{
    HEADER_SIZE, PROLOGUE_SIZE, SPLICE_MAGIC, STEPS_PER_TRACK, TRACK_FIXED_SIZE, VERSION_SIZE,
};

/// Decode a `.splice` pattern from a byte source
///
/// Reads the prologue, the header and then track records until the declared
/// payload length is used up. Bytes past the declared length are never read,
/// so `reader` may sit on a larger buffer or file.
///
/// # Arguments
/// * `reader` - Any byte source positioned at the start of the pattern
///
/// # Returns
/// * `Ok(Pattern)` - Fully decoded pattern
/// * `Err(DrumError)` - First failure encountered
///
/// # Example
/// ```ignore
/// let file = std::fs::File::open("pattern_1.splice")?;
/// let pattern = decode(file)?;
/// print!("{}", pattern);
/// ```
pub fn decode<R: Read>(mut reader: R) -> Result<Pattern> {
    let declared = read_prologue(&mut reader)?;

    // Nothing past the declared payload belongs to this pattern
    let mut payload = reader.take(u64::from(declared));

    let header = read_header(&mut payload)?;
    let tracks = read_tracks(&mut payload, usize::from(declared) - HEADER_SIZE)?;

    debug!(
        version = %header.version,
        tempo = header.tempo,
        tracks = tracks.len(),
        "decoded pattern"
    );

    Ok(Pattern { header, tracks })
}

/// Decode a pattern held in memory
pub fn decode_bytes(data: &[u8]) -> Result<Pattern> {
    decode(data)
}

/// Open and decode the pattern file at `path`
///
/// The file is closed before returning, on success and on every error.
pub fn decode_file(path: impl AsRef<Path>) -> Result<Pattern> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening pattern file");
    let file = File::open(path).map_err(DrumError::Io)?;
    decode(BufReader::new(file))
}

/// Read the 14-byte prologue and return the declared payload length
///
/// Only the low byte of the 8-byte length field is significant.
pub(crate) fn read_prologue<R: Read>(reader: &mut R) -> Result<u8> {
    let prologue = read_array::<PROLOGUE_SIZE, R>(reader, DrumError::MissingMarker)?;

    if &prologue[..SPLICE_MAGIC.len()] != SPLICE_MAGIC {
        return Err(DrumError::MissingMarker);
    }

    let declared = prologue[PROLOGUE_SIZE - 1];
    if usize::from(declared) < HEADER_SIZE {
        return Err(DrumError::InvalidHeaderLength(declared));
    }

    trace!(declared, "read prologue");
    Ok(declared)
}

/// Read the 36-byte version/tempo header
pub(crate) fn read_header<R: Read>(reader: &mut R) -> Result<Header> {
    let raw = read_array::<HEADER_SIZE, R>(reader, DrumError::TruncatedHeader)?;
    let (version_bytes, mut tempo_bytes) = raw.split_at(VERSION_SIZE);

    let version = read_string(version_bytes);
    let tempo = read_f32_le(&mut tempo_bytes, DrumError::TruncatedHeader)?;

    trace!(%version, tempo, "read header");
    Ok(Header { version, tempo })
}

/// Read track records until exactly `remaining` bytes have been consumed
pub(crate) fn read_tracks<R: Read>(reader: &mut R, remaining: usize) -> Result<Vec<Track>> {
    let mut tracks = Vec::new();
    let mut consumed = 0;

    while consumed < remaining {
        let (track, size) = read_track(reader, tracks.len())?;
        consumed += size;
        tracks.push(track);
    }

    Ok(tracks)
}

/// Read one track record, returning it with the number of bytes it occupied
pub(crate) fn read_track<R: Read>(reader: &mut R, index: usize) -> Result<(Track, usize)> {
    let eof = || DrumError::TruncatedTrack { index };

    let id = read_u8(reader, eof())?;

    // Reserved, content not checked
    read_array::<3, R>(reader, eof())?;

    let name_len = read_u8(reader, eof())?;
    let name_bytes = read_vec(reader, usize::from(name_len), eof())?;
    let name = String::from_utf8_lossy(&name_bytes).into_owned();

    let raw_steps = read_array::<STEPS_PER_TRACK, R>(reader, eof())?;
    let steps = raw_steps.map(|b| b != 0);

    trace!(index, id, %name, "read track");
    Ok((
        Track { id, name, steps },
        TRACK_FIXED_SIZE + usize::from(name_len),
    ))
}
