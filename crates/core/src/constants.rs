//! Constants used throughout the clinic core crate.

/// Medicines preloaded into every catalogue unless the configuration overrides them.
///
/// Each entry is a name and a price in whole currency units. Order is the display
/// order, so position 1 is `Paracetamol`.
pub const DEFAULT_MEDICINES: [(&str, u32); 4] = [
    ("Paracetamol", 10),
    ("Antibiotic", 50),
    ("Cough Syrup", 25),
    ("Pain Killer", 40),
];

/// Separator printed between multi-line records in listings.
pub const RECORD_SEPARATOR: &str = "-----------------------------";
