//! # smbios-reader
//!
//! A reader for raw SMBIOS/DMI structure tables.
//!
//! Walks the platform-supplied binary table in a single bounds-checked pass
//! and decodes each structure into a typed entry carrying its type code,
//! category name, handle, sizes, and a content fingerprint. Truncated or
//! malformed tables never fail decoding; they just yield fewer entries.
pub mod smbios;

// Re-export the main types for convenience
pub use smbios::{
    structures, Entries, RawStructure, Result, SmbiosError, SmbiosTable, StructureHeader,
    Structures, TableEntry,
};
