// Global constants used throughout the product code.

/// Number of nucleotides in one codon.
pub const CODON_LEN: usize = 3;

/// File name of the bundled codon table.
pub const DEFAULT_TABLE_FILE: &str = "codon.json";

/// Directory holding the bundled codon table (the crate's own sources).
pub const TABLE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src");
