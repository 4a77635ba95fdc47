//! Data structures representing SMBIOS table components.

use serde::Serialize;

/// Fixed four-byte prefix of every structure in the table.
///
/// Layout (little-endian `handle` regardless of host endianness):
/// - Byte 0: structure type code
/// - Byte 1: declared length of the formatted region, header included
/// - Bytes 2-3: handle assigned to this structure instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureHeader {
    pub structure_type: u8,
    pub formatted_length: u8,
    pub handle: u16,
}

/// One raw structure carved out of the table buffer: the header, the
/// formatted region it declares, and the trailing string region up to and
/// including its double-zero terminator.
#[derive(Debug, Clone, Copy)]
pub struct RawStructure<'a> {
    /// Byte offset of this structure within the table buffer.
    pub offset: usize,
    pub header: StructureHeader,
    /// The structure's exact bytes; consecutive structures tile the buffer
    /// with no gaps or overlap.
    pub bytes: &'a [u8],
}

impl RawStructure<'_> {
    /// Total number of bytes this structure occupies in the table.
    pub fn total_size(&self) -> usize {
        self.bytes.len()
    }
}

/// A fully decoded table entry.
///
/// The serialized field names (`number`, `type`, `description`, `handle`,
/// `header_size`, `size`, `md5`) are a compatibility contract for downstream
/// row consumers and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableEntry {
    /// 0-based position of this structure in the table, gap-free.
    pub number: usize,
    #[serde(rename = "type")]
    pub structure_type: u8,
    /// Human-readable category name, absent for reserved/vendor codes the
    /// registry does not know.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    pub handle: u16,
    /// Declared length of the formatted region (the header's length byte).
    pub header_size: u8,
    /// Bytes actually consumed: formatted region plus trailing string region.
    pub size: usize,
    /// Content fingerprint over exactly `size` bytes, 32 lowercase hex
    /// characters. The field keeps its historical `md5` name as part of the
    /// row schema; see [`fingerprint`](crate::smbios::fingerprint::fingerprint)
    /// for the digest actually used.
    pub md5: String,
}
