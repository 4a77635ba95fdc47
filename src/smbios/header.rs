//! Structure header field extraction.
//!
//! Headers are read field-at-a-time from fixed byte offsets rather than by
//! overlaying a packed struct on the buffer, so the parser is safe on
//! alignment-strict targets and independent of host endianness.

use byteorder::{ByteOrder, LittleEndian};

use super::types::models::StructureHeader;

/// Width of the fixed structure header in bytes.
pub const HEADER_LEN: usize = 4;

/// Reads the four-byte structure header at the start of `buf`.
///
/// Returns `None` when fewer than [`HEADER_LEN`] bytes are available, which
/// callers treat as a clean end of data.
pub fn parse(buf: &[u8]) -> Option<StructureHeader> {
    if buf.len() < HEADER_LEN {
        return None;
    }
    Some(StructureHeader {
        structure_type: buf[0],
        formatted_length: buf[1],
        handle: LittleEndian::read_u16(&buf[2..4]),
    })
}
