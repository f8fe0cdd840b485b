use codon_tally::CodonTabulator;
use tracing_subscriber::EnvFilter;

fn main() {
    // Notices are INFO events; RUST_LOG overrides the default filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // ---------------------------------------------------- //
    // 1. Input sequence (first argument, or a 9-base sample)
    // ---------------------------------------------------- //
    let seq = std::env::args().nth(1).unwrap_or_else(|| "CTAGGACCG".to_string());

    // ---------------------------------------------------- //
    // 2. Tabulate against the bundled table and print the report
    // ---------------------------------------------------- //
    // A missing or unreadable table is fatal for this host.
    if let Err(err) = CodonTabulator::new(&seq).run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
