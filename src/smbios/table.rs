//! Owning handle over a structure table buffer.

use std::path::Path;

use log::info;

use super::iter::{structures, Entries, Structures};
use super::source;
use super::types::error::Result;
use super::types::models::TableEntry;

/// An SMBIOS structure table held in memory.
///
/// Owns the raw bytes for the duration of decoding and hands out the lazy
/// iterators from [`iter`](super::iter). Decoding is a fresh, independent
/// pass each time; nothing is cached between calls.
#[derive(Debug)]
pub struct SmbiosTable {
    data: Vec<u8>,
}

impl SmbiosTable {
    /// Wraps a table buffer obtained elsewhere.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Reads the table exported by the platform firmware.
    ///
    /// Returns `Ok(None)` when the platform exposes no table; that is a
    /// normal outcome and the caller should treat it as an empty result set.
    pub fn from_platform() -> Result<Option<Self>> {
        Ok(source::read_platform_table()?.map(Self::new))
    }

    /// Reads the table from a dump file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(source::read_table_file(path.as_ref())?))
    }

    /// The raw table bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Table length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the table holds no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the base iterator over raw structure slices.
    ///
    /// Chain with [`Structures::decoded`] for fully decoded entries.
    pub fn structures(&self) -> Structures<'_> {
        structures(&self.data)
    }

    /// Returns an iterator over fully decoded entries, numbered from 0.
    pub fn entries(&self) -> Entries<'_> {
        self.structures().decoded()
    }

    /// Decodes the whole table into an ordered entry sequence.
    ///
    /// Truncated or malformed input never fails; it simply produces fewer
    /// entries, possibly none.
    pub fn decode(&self) -> Vec<TableEntry> {
        let entries: Vec<TableEntry> = self.entries().collect();
        info!(
            "decoded {} structures from {} byte table",
            entries.len(),
            self.data.len()
        );
        entries
    }
}
