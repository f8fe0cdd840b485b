use std::path::{Path, PathBuf};

use crate::constants::{CODON_LEN, DEFAULT_TABLE_FILE, TABLE_DIR};

/// Returns the location of the bundled codon table: `DEFAULT_TABLE_FILE`
/// inside `TABLE_DIR`.
pub fn default_table_path() -> PathBuf {
    Path::new(TABLE_DIR).join(DEFAULT_TABLE_FILE)
}

/// Normalizes a raw nucleotide sequence to upper case.
///
/// No alphabet check is made: characters other than A/C/G/T pass through
/// unchanged and will simply never match a table entry.
pub fn normalize(seq: &str) -> String {
    seq.to_uppercase()
}

/// Splits `seq` into consecutive, non-overlapping codons.
///
/// Windows are `CODON_LEN` characters wide and taken from the start of the
/// sequence. When the length is not a multiple of `CODON_LEN`, the last item
/// is the 1 or 2 character remainder.
///
/// # Arguments
///
/// * `seq` – Sequence to split, normally already normalized.
///
/// # Returns
///
/// * A [`Codons`] iterator borrowing `seq`; empty input yields nothing.
///
/// # Example
///
/// ```
/// let v: Vec<&str> = codon_tally::codons("CTAGGACC").collect();
/// assert_eq!(v, ["CTA", "GGA", "CC"]);
/// ```
pub fn codons(seq: &str) -> Codons<'_> {
    Codons { rest: seq }
}

/// Iterator over the codons of a sequence, see [`codons`].
#[derive(Debug, Clone)]
pub struct Codons<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Codons<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        // Split on a char boundary so non-ASCII input cannot panic
        let end = self
            .rest
            .char_indices()
            .nth(CODON_LEN)
            .map_or(self.rest.len(), |(i, _)| i);
        let (codon, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(codon)
    }
}

/// Expresses `count` as a percentage of `total`.
///
/// # Arguments
///
/// * `count` – Occurrences of one category.
/// * `total` – Number of classified codons.
///
/// # Returns
///
/// * `Some(count / total * 100)`, or `None` when `total` is zero.
#[inline]
pub fn percentage(count: usize, total: usize) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(count as f64 / total as f64 * 100.0)
}
