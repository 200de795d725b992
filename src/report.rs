/// Destination for the summary lines produced while the workflow runs.
pub trait Reporter {
    fn info(&mut self, line: &str);
}

/// Forwards every line to the process-wide `tracing` subscriber.
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn info(&mut self, line: &str) {
        tracing::info!("{}", line);
    }
}
