//! Regression tests that pin the exact ranked report produced with the
//! bundled standard genetic code. If `src/codon.json` or the ranking rules
//! are changed on purpose, update these snapshots alongside.

use codon_tally::{CodonTable, CodonTabulator, Result};

// ==== Fixed inputs ====
// All 64 codons once each, in AAA, AAC, AAG, ..., TTT order.
const ALL_CODONS: &str = "AAAAACAAGAATACAACCACGACTAGAAGCAGGAGTATAATCATGATT\
                          CAACACCAGCATCCACCCCCGCCTCGACGCCGGCGTCTACTCCTGCTT\
                          GAAGACGAGGATGCAGCCGCGGCTGGAGGCGGGGGTGTAGTCGTGGTT\
                          TAATACTAGTATTCATCCTCGTCTTGATGCTGGTGTTTATTCTTGTTT";

const SAMPLE: &str = "CTAGGACCG";

// ==== Snapshot of expected reports ====
//
// Equal counts keep the order in which each category was first matched
// while scanning ALL_CODONS, not the order of the table file.
const ALL_CODONS_REPORT: &str = "\
Arg - 6 (9.4 %)
Ser - 6 (9.4 %)
Leu - 6 (9.4 %)
Thr - 4 (6.2 %)
Pro - 4 (6.2 %)
Ala - 4 (6.2 %)
Gly - 4 (6.2 %)
Val - 4 (6.2 %)
Ile - 3 (4.7 %)
Stop - 3 (4.7 %)
Lys - 2 (3.1 %)
Asn - 2 (3.1 %)
Gln - 2 (3.1 %)
His - 2 (3.1 %)
Glu - 2 (3.1 %)
Asp - 2 (3.1 %)
Tyr - 2 (3.1 %)
Cys - 2 (3.1 %)
Phe - 2 (3.1 %)
Met - 1 (1.6 %)
Trp - 1 (1.6 %)
";

const SAMPLE_REPORT: &str = "\
Leu - 1 (33.3 %)
Gly - 1 (33.3 %)
Pro - 1 (33.3 %)
";

/// Runs `seq` against the bundled table and returns the report text.
fn report(seq: &str) -> Result<String> {
    let table = CodonTable::load_default()?;
    let mut out = Vec::new();
    CodonTabulator::new(seq)
        .with_sink(|_: &str| {})
        .run_with(&table, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

/// Every codon of the standard code classifies, and the full report matches
/// the snapshot line for line.
#[test]
fn regression_all_codons() -> Result<()> {
    assert_eq!(ALL_CODONS.len(), 64 * 3);
    let tally = CodonTabulator::new(ALL_CODONS).tabulate(&CodonTable::load_default()?);
    assert_eq!(tally.total(), 64);
    assert_eq!(report(ALL_CODONS)?, ALL_CODONS_REPORT);
    Ok(())
}

/// Lower-case input gives the same snapshot.
#[test]
fn regression_all_codons_lowercase() -> Result<()> {
    assert_eq!(report(&ALL_CODONS.to_lowercase())?, ALL_CODONS_REPORT);
    Ok(())
}

/// The nine-base sample: three categories tied at one codon each.
#[test]
fn regression_sample() -> Result<()> {
    assert_eq!(report(SAMPLE)?, SAMPLE_REPORT);
    Ok(())
}

/// A trailing remainder changes nothing in the report.
#[test]
fn regression_sample_with_remainder() -> Result<()> {
    assert_eq!(report(&format!("{SAMPLE}TG"))?, SAMPLE_REPORT);
    Ok(())
}
