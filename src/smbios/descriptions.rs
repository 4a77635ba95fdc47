//! Category names for the standardized structure type codes.

/// Type code to category name, sorted by code for binary search.
///
/// Covers the standardized types 0 through 41 plus the reserved high codes
/// (126 "Inactive", 127 "End-of-Table") and the common vendor-extension
/// range 130-132. All other codes are unnamed.
const DESCRIPTIONS: &[(u8, &str)] = &[
    (0, "BIOS Information"),
    (1, "System Information"),
    (2, "Base Board or Module Information"),
    (3, "System Enclosure or Chassis"),
    (4, "Processor Information"),
    (5, "Memory Controller Information"),
    (6, "Memory Module Information"),
    (7, "Cache Information"),
    (8, "Port Connector Information"),
    (9, "System Slots"),
    (10, "On Board Devices Information"),
    (11, "OEM Strings"),
    (12, "System Configuration Options"),
    (13, "BIOS Language Information"),
    (14, "Group Associations"),
    (15, "System Event Log"),
    (16, "Physical Memory Array"),
    (17, "Memory Device"),
    (18, "32-bit Memory Error Information"),
    (19, "Memory Array Mapped Address"),
    (20, "Memory Device Mapped Address"),
    (21, "Built-in Pointing Device"),
    (22, "Portable Battery"),
    (23, "System Reset"),
    (24, "Hardware Security"),
    (25, "System Power Controls"),
    (26, "Voltage Probe"),
    (27, "Cooling Device"),
    (28, "Temperature Probe"),
    (29, "Electrical Current Probe"),
    (30, "Out-of-Band Remote Access"),
    (31, "Boot Integrity Services"),
    (32, "System Boot Information"),
    (33, "64-bit Memory Error Information"),
    (34, "Management Device"),
    (35, "Management Device Component"),
    (36, "Management Device Threshold Data"),
    (37, "Memory Channel"),
    (38, "IPMI Device Information"),
    (39, "System Power Supply"),
    (40, "Additional Information"),
    (41, "Onboard Devices Extended Info"),
    (126, "Inactive"),
    (127, "End-of-Table"),
    (130, "Memory SPD Data"),
    (131, "OEM Processor Type"),
    (132, "OEM Processor Bus Speed"),
];

/// Looks up the category name for a structure type code.
///
/// Unknown codes return `None`; that is an expected outcome for reserved and
/// vendor-specific types, not an error.
pub fn lookup(type_code: u8) -> Option<&'static str> {
    DESCRIPTIONS
        .binary_search_by_key(&type_code, |&(code, _)| code)
        .ok()
        .map(|index| DESCRIPTIONS[index].1)
}
