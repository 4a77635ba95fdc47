//! Custom error types for the smbios-reader crate.
//!
//! Decoding itself never fails: a truncated or garbage table simply yields
//! fewer (or zero) entries. Errors only arise while acquiring the raw table
//! bytes from the platform or from a dump file.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum SmbiosError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience `Result` type alias using the crate's `SmbiosError` type.
pub type Result<T> = std::result::Result<T, SmbiosError>;
