use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::{
    CodonError, Result,
    constants::CODON_LEN,
    notice::{NoticeSink, TracingSink},
    table::CodonTable,
    util::{codons, default_table_path, normalize, percentage},
};

/// Counts amino-acid categories over the codons of one DNA sequence.
///
/// The sequence is upper-cased on construction and owned by the tabulator.
/// Diagnostics go to the injected [`NoticeSink`]; the ranked report goes to
/// stdout (see [`run`](Self::run)) or any writer.
#[derive(Debug, Clone)]
pub struct CodonTabulator<S = TracingSink> {
    sequence:   String,
    table_path: PathBuf,
    sink:       S,
}

impl CodonTabulator {
    /// Creates a tabulator over `seq`, using the bundled table and a
    /// `tracing`-backed notice sink.
    pub fn new(seq: &str) -> Self {
        Self {
            sequence:   normalize(seq),
            table_path: default_table_path(),
            sink:       TracingSink,
        }
    }
}

impl<S: NoticeSink> CodonTabulator<S> {
    /// Replaces the notice sink.
    pub fn with_sink<T: NoticeSink>(self, sink: T) -> CodonTabulator<T> {
        CodonTabulator {
            sequence:   self.sequence,
            table_path: self.table_path,
            sink,
        }
    }

    /// Overrides where [`load_table`](Self::load_table) reads the table from.
    pub fn set_table_path(&mut self, path: impl Into<PathBuf>) {
        self.table_path = path.into();
    }

    /// The notice sink, e.g. to inspect what a collecting sink gathered.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The normalized sequence.
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Reads the configured codon table.
    ///
    /// # Returns
    ///
    /// * `Ok(CodonTable)` – A validated, non-empty table.
    /// * `Err(CodonError::ResourceNotFound)` – The file does not exist.
    /// * `Err(CodonError::ResourceReadError)` – Any other I/O failure.
    pub fn load_table(&self) -> Result<CodonTable> {
        CodonTable::load(&self.table_path)
    }

    /// Classifies every codon of the sequence against `table`.
    ///
    /// A trailing codon shorter than `CODON_LEN` raises a notice and is then
    /// offered to the table like any other; it only counts if the table
    /// happens to list a code that short.
    pub fn tabulate(&self, table: &CodonTable) -> Tally {
        let mut tally = Tally::default();

        for codon in codons(&self.sequence) {
            if codon.chars().count() < CODON_LEN {
                self.sink.notice(&format!(
                    "Ignoring bases: {codon} with less than {CODON_LEN} nucleotides"
                ));
            }
            if let Some(category) = table.classify(codon) {
                tally.record(category);
            }
        }
        tally
    }

    /// Tabulates against `table` and writes the ranked report to `out`.
    ///
    /// # Returns
    ///
    /// * `Ok(Tally)` – The counts behind the written report.
    /// * `Err(CodonError::ReportWrite)` – Writing to `out` failed.
    pub fn run_with<W: Write>(&self, table: &CodonTable, out: W) -> Result<Tally> {
        let tally = self.tabulate(table);
        tally
            .ranked()
            .write_to(out)
            .map_err(|err| CodonError::ReportWrite(err.to_string()))?;
        Ok(tally)
    }

    /// Loads the table, tabulates, and prints the ranked report to stdout.
    pub fn run(&self) -> Result<()> {
        let table = self.load_table()?;
        let stdout = io::stdout();
        self.run_with(&table, stdout.lock())?;
        Ok(())
    }
}

/// Per-category counts from one classification pass.
///
/// Categories appear in order of their first match. `total` is the number
/// of classified codons and always equals the sum of all counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: Vec<(String, usize)>,
    total:  usize,
}

impl Tally {
    fn record(&mut self, category: &str) {
        match self.counts.iter_mut().find(|(name, _)| name == category) {
            Some((_, n)) => *n += 1,
            None => self.counts.push((category.to_string(), 1)),
        }
        self.total += 1;
    }

    /// Count for `category`, or `None` if it never matched.
    pub fn count(&self, category: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(name, _)| name == category)
            .map(|&(_, n)| n)
    }

    /// Number of codons that matched some category.
    pub fn total(&self) -> usize {
        self.total
    }

    /// `(category, count)` pairs in first-match order.
    pub fn counts(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(name, n)| (name.as_str(), *n))
    }

    /// Ranks categories by count, descending.
    ///
    /// The sort is stable, so equal counts keep their first-match order.
    pub fn ranked(&self) -> Report {
        let mut entries: Vec<ReportEntry> = self
            .counts
            .iter()
            .map(|(name, count)| ReportEntry {
                category: name.clone(),
                count:    *count,
                percent:  percentage(*count, self.total).unwrap_or(0.0),
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Report { entries }
    }
}

/// One line of the ranked report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    pub category: String,
    pub count:    usize,
    pub percent:  f64,
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({:.1} %)", self.category, self.count, self.percent)
    }
}

/// Ranked, percentage-annotated category counts.
///
/// An empty tally gives an empty report, so nothing is ever divided by a
/// zero total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    /// Entries in rank order.
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// `true` when nothing was classified.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes one line per entry to `out` and flushes it.
    ///
    /// # Arguments
    ///
    /// * `out` – Destination, e.g. a locked stdout or a `Vec<u8>`.
    ///
    /// # Returns
    ///
    /// * `Err(io::Error)` – The first write or flush failure of `out`.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{self}")?;
        out.flush()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CodonTable {
        CodonTable::from_categories([
            ("Leu", vec!["CTA", "CTG"]),
            ("Gly", vec!["GGA"]),
            ("Pro", vec!["CCG"]),
        ])
        .unwrap()
    }

    #[test]
    fn normalizes_on_construction() {
        assert_eq!(CodonTabulator::new("ctaGga").sequence(), "CTAGGA");
    }

    #[test]
    fn first_match_order_is_kept() {
        let tally = CodonTabulator::new("CCGCTAGGACTG").tabulate(&table());
        assert_eq!(
            tally.counts().collect::<Vec<_>>(),
            [("Pro", 1), ("Leu", 2), ("Gly", 1)]
        );
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn ranked_ties_keep_first_match_order() {
        let report = CodonTabulator::new("GGACCGCTA").tabulate(&table()).ranked();
        let names: Vec<&str> = report.entries().iter().map(|e| e.category.as_str()).collect();
        assert_eq!(names, ["Gly", "Pro", "Leu"]);
    }

    #[test]
    fn empty_report_for_empty_sequence() {
        let tally = CodonTabulator::new("").tabulate(&table());
        assert_eq!(tally.total(), 0);
        assert!(tally.ranked().is_empty());
        assert_eq!(tally.ranked().to_string(), "");
    }

    #[test]
    fn entry_format() {
        let e = ReportEntry {
            category: "Leu".into(),
            count:    2,
            percent:  200.0 / 3.0,
        };
        assert_eq!(e.to_string(), "Leu - 2 (66.7 %)");
    }
}
