//! The binary stream contract.
//!
//! Sinks are any [`std::io::Write`], sources any [`std::io::Read`]. All
//! integers are little-endian. Objects are padded with zeros to the
//! [`StreamConfig`] alignment unit so consecutive objects stay aligned.

use std::io::{self, Read, Write};

use crate::config::StreamConfig;

/// An object with a fixed binary stream form.
pub trait Streamable {
    /// Exact number of bytes [`write_to`](Streamable::write_to) emits.
    fn stream_size(&self) -> usize;

    /// Write the stream form to `sink`.
    fn write_to(&self, sink: &mut dyn Write) -> io::Result<()>;

    /// Replace `self` with an object read from `source`.
    fn read_from(&mut self, source: &mut dyn Read) -> io::Result<()>;
}

/// Write a little-endian `u32`.
pub fn write_u32_le(sink: &mut dyn Write, v: u32) -> io::Result<()> {
    sink.write_all(&v.to_le_bytes())
}

/// Write zero bytes until `written` reaches the alignment unit.
///
/// Returns the number of padding bytes emitted. A config that fails
/// [`StreamConfig::validate`] is an `InvalidInput` error and nothing is
/// written.
pub fn write_padding(sink: &mut dyn Write, written: usize, config: &StreamConfig) -> io::Result<usize> {
    const ZEROS: [u8; 64] = [0; 64];
    config
        .validate()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let mut pad = config.padded_len(written) - written;
    let total = pad;
    while pad > 0 {
        let chunk = pad.min(ZEROS.len());
        sink.write_all(&ZEROS[..chunk])?;
        pad -= chunk;
    }
    Ok(total)
}
