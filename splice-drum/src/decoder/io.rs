//! I/O helper functions for reading fixed-size binary fields

use std::io::Read;

use crate::error::{DrumError, Result};

/// Read exactly `N` bytes, mapping a short read to `eof`
pub(crate) fn read_array<const N: usize, R: Read>(
    reader: &mut R,
    eof: DrumError,
) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    reader
        .read_exact(&mut buf)
        .map_err(|e| DrumError::short_read_or(e, eof))?;
    Ok(buf)
}

/// Read a single byte
pub(crate) fn read_u8<R: Read>(reader: &mut R, eof: DrumError) -> Result<u8> {
    let [b] = read_array::<1, R>(reader, eof)?;
    Ok(b)
}

/// Read `len` bytes into a new buffer
pub(crate) fn read_vec<R: Read>(reader: &mut R, len: usize, eof: DrumError) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; len];
    reader
        .read_exact(&mut buf)
        .map_err(|e| DrumError::short_read_or(e, eof))?;
    Ok(buf)
}

/// Read a little-endian f32
pub(crate) fn read_f32_le<R: Read>(reader: &mut R, eof: DrumError) -> Result<f32> {
    read_array::<4, R>(reader, eof).map(f32::from_le_bytes)
}

/// Decode bytes as text, dropping trailing NUL padding
pub(crate) fn read_string(bytes: &[u8]) -> String {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}
