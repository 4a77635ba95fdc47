//! Acquisition of the raw structure table from the platform.
//!
//! On Linux the firmware exports the structure table through sysfs. A host
//! without that export (no DMI support, or an older kernel) is a normal
//! situation: acquisition reports "no table" and the overall decode yields
//! an empty result set rather than an error.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, info};

use super::types::error::Result;

/// Where the kernel exposes the raw DMI structure table.
pub const SYSFS_DMI_TABLE: &str = "/sys/firmware/dmi/tables/DMI";

/// Reads the structure table exported by the platform firmware.
///
/// Returns `Ok(None)` when the export is absent or empty; genuine I/O
/// failures (including insufficient permissions to read the export)
/// propagate as errors.
pub fn read_platform_table() -> Result<Option<Vec<u8>>> {
    read_table_if_present(Path::new(SYSFS_DMI_TABLE))
}

/// Reads a table from `path`, treating a missing or empty file as "no
/// table".
pub fn read_table_if_present(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(data) if data.is_empty() => {
            debug!("table at {} is empty", path.display());
            Ok(None)
        }
        Ok(data) => {
            info!("read {} byte table from {}", data.len(), path.display());
            Ok(Some(data))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("no table at {}", path.display());
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Reads a structure table from a dump file.
///
/// Unlike [`read_platform_table`], a missing file is an error here: the
/// caller named the path explicitly. A zero-length dump is still a valid,
/// empty table.
pub fn read_table_file(path: &Path) -> Result<Vec<u8>> {
    let data = fs::read(path)?;
    info!("read {} byte table from {}", data.len(), path.display());
    Ok(data)
}
