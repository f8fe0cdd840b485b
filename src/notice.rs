/// Receiver for informational notices raised while tabulating.
///
/// The tabulator owns its sink for its whole lifetime, so no process-wide
/// logger state is involved. Any `Fn(&str)` closure is a sink.
pub trait NoticeSink {
    fn notice(&self, message: &str);
}

/// Default sink: forwards each notice to `tracing` at INFO level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NoticeSink for TracingSink {
    fn notice(&self, message: &str) {
        tracing::info!(target: "codon_tally", "{message}");
    }
}

impl<F> NoticeSink for F
where
    F: Fn(&str),
{
    fn notice(&self, message: &str) {
        self(message)
    }
}
