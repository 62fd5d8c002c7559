//! Pattern file decoder
//!
//! - `read` - Decoding the prologue, header and track records
//! - `io` - Fixed-size field readers shared by the decoding steps
//! - `tests` - Decoder test suite

mod io;
mod read;


pub use read::{decode, decode_bytes, decode_file};
