//! Iterators for sequential access to the structures of a table buffer.
//!
//! This module provides a layered iterator design over a borrowed table
//! buffer with progressive enrichment:
//!
//! 1. [`Structures`] - Base iterator yielding bounds-checked [`RawStructure`]
//!    slices
//! 2. [`Entries`] - Fully decoded [`TableEntry`] values with category names
//!    and content fingerprints
//!
//! Both iterators are lazy, finite, and single-pass: decoding the same
//! buffer again requires constructing a fresh iterator.
//!
//! # Example
//! ```
//! use smbios_reader::structures;
//!
//! let table = [127u8, 4, 0, 0, 0, 0];
//! for entry in structures(&table).decoded() {
//!     println!("#{} type={} size={}", entry.number, entry.structure_type, entry.size);
//! }
//! ```

use log::{trace, warn};

use super::descriptions;
use super::fingerprint::fingerprint;
use super::header::{self, HEADER_LEN};
use super::types::models::{RawStructure, TableEntry};

/// Returns an iterator over the raw structures of `table`.
///
/// Chain with [`Structures::decoded`] to get fully decoded entries.
pub fn structures(table: &[u8]) -> Structures<'_> {
    Structures { table, cursor: 0 }
}

/// Iterator over the raw structure slices of a table buffer.
///
/// Each step reads the four-byte header at the cursor, validates the
/// declared formatted length against the remaining buffer, then scans the
/// trailing string region for its double-zero terminator. Yielded slices
/// tile the buffer: consecutive structures are contiguous, and every slice
/// stays within bounds.
///
/// # Termination
///
/// Iteration ends cleanly when fewer than one header width of bytes remains.
/// It also ends, discarding the rest of the buffer, when a header declares a
/// formatted length that runs past the buffer end or that is smaller than
/// the header itself; structures yielded before that point are kept.
///
/// A trailing residue shorter than one header width is never attributed to
/// any structure and is absent from the output entirely. This lost-tail
/// behavior is deliberate and kept stable, since downstream size and
/// fingerprint consumers depend on the boundary.
///
/// Created by [`structures()`].
pub struct Structures<'a> {
    table: &'a [u8],
    cursor: usize,
}

impl<'a> Structures<'a> {
    /// Transforms this iterator into one yielding decoded [`TableEntry`]
    /// values, numbered from 0 in table order.
    pub fn decoded(self) -> Entries<'a> {
        Entries {
            raw: self,
            number: 0,
        }
    }
}

impl<'a> Iterator for Structures<'a> {
    type Item = RawStructure<'a>;

    fn next(&mut self) -> Option<RawStructure<'a>> {
        let offset = self.cursor;
        let remaining = &self.table[offset..];

        // Fewer than 4 bytes left: clean end of data.
        let header = header::parse(remaining)?;

        let formatted_len = header.formatted_length as usize;
        if formatted_len < HEADER_LEN || formatted_len > remaining.len() {
            // The declared length cannot hold the header, or runs past the
            // buffer end. Stop here and discard everything from this offset
            // on; structures already yielded stay valid.
            warn!(
                "malformed structure header at offset {}: declared length {} with {} bytes remaining",
                offset,
                formatted_len,
                remaining.len()
            );
            self.cursor = self.table.len();
            return None;
        }

        // The formatted region may be followed by unformatted, double-zero
        // delimited trailing data, usually strings. A terminator is consumed
        // whenever it fully fits; otherwise the scan gives up once fewer
        // than one header width of bytes remains, leaving that residue
        // unconsumed.
        let mut end = formatted_len;
        loop {
            if end + 2 <= remaining.len() && remaining[end] == 0 && remaining[end + 1] == 0 {
                end += 2;
                break;
            }
            if end + HEADER_LEN > remaining.len() {
                break;
            }
            end += 1;
        }

        trace!(
            "structure at offset {}: type={}, handle={:#06x}, formatted={}, total={}",
            offset,
            header.structure_type,
            header.handle,
            formatted_len,
            end
        );

        self.cursor = offset + end;
        Some(RawStructure {
            offset,
            header,
            bytes: &remaining[..end],
        })
    }
}

/// Iterator over fully decoded table entries.
///
/// Extends [`Structures`] by resolving each type code against the category
/// registry and fingerprinting the structure's exact bytes. Decoding cannot
/// fail: the raw layer already guarantees every slice is in bounds.
///
/// Created by [`Structures::decoded()`].
pub struct Entries<'a> {
    raw: Structures<'a>,
    number: usize,
}

impl Iterator for Entries<'_> {
    type Item = TableEntry;

    fn next(&mut self) -> Option<TableEntry> {
        let raw = self.raw.next()?;
        let number = self.number;
        self.number += 1;

        Some(TableEntry {
            number,
            structure_type: raw.header.structure_type,
            description: descriptions::lookup(raw.header.structure_type),
            handle: raw.header.handle,
            header_size: raw.header.formatted_length,
            size: raw.bytes.len(),
            md5: fingerprint(raw.bytes),
        })
    }
}
