use smbios_reader::SmbiosTable;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut json = false;
    let mut dump_path: Option<&str> = None;
    for arg in &args[1..] {
        match arg.as_str() {
            "--json" => json = true,
            "--help" | "-h" => {
                println!("Usage: {} [TABLE_DUMP] [--json]", args[0]);
                println!();
                println!("Decodes an SMBIOS structure table. With no TABLE_DUMP argument,");
                println!("reads the table exported by the platform firmware.");
                return;
            }
            path if dump_path.is_none() && !path.starts_with('-') => dump_path = Some(path),
            other => {
                eprintln!("ERROR: Unrecognized argument: {}", other);
                std::process::exit(1);
            }
        }
    }

    let table = match dump_path {
        Some(path) => match SmbiosTable::from_file(path) {
            Ok(table) => table,
            Err(e) => {
                eprintln!("ERROR: Failed to read table dump {}", path);
                eprintln!("  {}", e);
                std::process::exit(1);
            }
        },
        None => match SmbiosTable::from_platform() {
            Ok(Some(table)) => table,
            Ok(None) => {
                // A platform without a table is a normal, empty outcome.
                if json {
                    println!("[]");
                } else {
                    println!("No SMBIOS table available on this platform.");
                }
                return;
            }
            Err(e) => {
                eprintln!("ERROR: Failed to read the platform SMBIOS table");
                eprintln!("  {}", e);
                std::process::exit(1);
            }
        },
    };

    let entries = table.decode();

    if json {
        match serde_json::to_string_pretty(&entries) {
            Ok(rows) => println!("{}", rows),
            Err(e) => {
                eprintln!("ERROR: Failed to serialize entries: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("SMBIOS structure table: {} bytes, {} structures", table.len(), entries.len());
    println!("{}", "=".repeat(72));
    for entry in &entries {
        println!(
            "{:>4}. type={:<3} handle={:#06x} header={:>3} size={:>5} md5={} {}",
            entry.number,
            entry.structure_type,
            entry.handle,
            entry.header_size,
            entry.size,
            entry.md5,
            entry.description.unwrap_or(""),
        );
    }
}
