//! Core SMBIOS structure-table decoding module.
//!
//! # Module Organization
//!
//! - [`types`]: Data models and the crate error type
//! - [`header`]: Bounds-checked extraction of the four-byte structure header
//! - [`iter`]: Lazy walk over a table buffer, raw and decoded layers
//! - [`descriptions`]: Static registry of structure type category names
//! - [`fingerprint`]: Content digest used for change detection
//! - [`source`]: Acquisition of the raw table from the platform or a dump
//! - [`table`]: Owning [`SmbiosTable`] handle tying the layers together
//!
//! # Architecture
//!
//! ```text
//! Table buffer:
//! ┌──────────┬───────────────────┬───────────────────┐
//! │ header   │ formatted region  │ string region \0\0│  × N structures
//! └──────────┴───────────────────┴───────────────────┘
//!      │
//!      ▼ structures()              raw slices, bounds enforced
//!      ▼ .decoded()                category names + fingerprints
//!   ordered TableEntry sequence
//! ```

pub mod descriptions;
pub mod fingerprint;
pub mod header;
pub mod iter;
pub mod source;
pub mod table;
pub mod types;

pub use iter::{structures, Entries, Structures};
pub use table::SmbiosTable;
pub use types::error::{Result, SmbiosError};
pub use types::models::{RawStructure, StructureHeader, TableEntry};
