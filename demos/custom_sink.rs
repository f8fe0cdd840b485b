use std::sync::Mutex;

use codon_tally::{CodonTable, CodonTabulator, NoticeSink};

/// Collects notices so they can be reported after the table is printed.
#[derive(Default)]
struct Collector {
    notices: Mutex<Vec<String>>,
}

impl NoticeSink for Collector {
    fn notice(&self, message: &str) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(message.to_string());
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seq = "atgGCCattGTAATGgg";

    let table = CodonTable::load_default()?;
    let tab = CodonTabulator::new(seq).with_sink(Collector::default());

    println!("== Ranked report for {} ==", tab.sequence());
    let tally = tab.run_with(&table, std::io::stdout())?;
    println!("classified codons: {}", tally.total());

    println!("\n== Notices ==");
    let notices = tab.sink().notices.lock().map_err(|e| e.to_string())?;
    for notice in notices.iter() {
        println!("{notice}");
    }

    Ok(())
}
