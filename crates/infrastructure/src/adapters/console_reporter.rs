//! Console anomaly reporter.

use std::io::{self, Stdout, Write};
use std::sync::Mutex;

use sadprobe_application::ports::AnomalyReporter;
use sadprobe_domain::Anomaly;

/// Writes one `Anomaly detected <test> <key>` line per anomaly.
///
/// Defaults to standard output; tests can hand in any writer.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write + Send = Stdout> {
    out: Mutex<W>,
}

impl ConsoleReporter<Stdout> {
    /// Creates a reporter on standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for ConsoleReporter<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write + Send> ConsoleReporter<W> {
    /// Creates a reporter on the given writer.
    #[must_use]
    pub const fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Consumes the reporter and returns its writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer lock was poisoned.
    pub fn into_inner(self) -> io::Result<W> {
        self.out
            .into_inner()
            .map_err(|e| io::Error::other(e.to_string()))
    }
}

impl<W: Write + Send> AnomalyReporter for ConsoleReporter<W> {
    fn report(&self, anomaly: &Anomaly) -> io::Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|e| io::Error::other(e.to_string()))?;
        writeln!(out, "{anomaly}")?;
        out.flush()
    }
}
