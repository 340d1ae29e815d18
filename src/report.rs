//! Human-readable search report.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use crate::search::{GlobalOutcome, SampleOutcome, SearchObserver};

/// Formats a permutation as space-separated node ids.
pub fn format_permutation(permutation: &[usize]) -> String {
    permutation
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Observer that writes a text report to `W`.
///
/// Per sample it prints a header, optionally every trial, and the sample
/// best. At the end it lists every sample's best and the global best.
/// Write failures are logged and otherwise ignored.
pub struct ConsoleReporter<W: Write + Send> {
    out: Mutex<W>,
    show_trials: bool,
}

impl ConsoleReporter<io::Stdout> {
    /// Reporter on standard output.
    pub fn stdout(show_trials: bool) -> Self {
        Self::new(io::stdout(), show_trials)
    }
}

impl<W: Write + Send> ConsoleReporter<W> {
    /// Reporter on `out`; `show_trials` also prints every trial.
    pub fn new(out: W, show_trials: bool) -> Self {
        Self {
            out: Mutex::new(out),
            show_trials,
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, f: impl FnOnce(&mut W) -> io::Result<()>) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = f(&mut *out).and_then(|_| out.flush()) {
            log::warn!("failed to write report: {e}");
        }
    }
}

fn write_sample_header<W: Write>(out: &mut W, sample: usize) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=============================")?;
    writeln!(out, "Sample {}:", sample + 1)?;
    writeln!(out, "=============================")
}

impl<W: Write + Send> SearchObserver for ConsoleReporter<W> {
    fn on_trial(&self, sample: usize, trial: usize, permutation: &[usize], cutwidth: usize) {
        if !self.show_trials {
            return;
        }
        self.emit(|out| {
            if trial == 0 {
                write_sample_header(out, sample)?;
            }
            writeln!(
                out,
                "Permutation {}: {} | cutwidth: {}",
                trial + 1,
                format_permutation(permutation),
                cutwidth
            )
        });
    }

    fn on_sample(&self, outcome: &SampleOutcome) {
        self.emit(|out| {
            if !self.show_trials {
                write_sample_header(out, outcome.sample)?;
            }
            writeln!(
                out,
                "Best permutation of sample {}: {} | cutwidth: {} (trial {})",
                outcome.sample + 1,
                format_permutation(&outcome.best.permutation),
                outcome.best.cutwidth,
                outcome.best_trial + 1
            )?;
            writeln!(out, "-----------------------------")
        });
    }

    fn on_finish(&self, outcome: &GlobalOutcome) {
        self.emit(|out| {
            writeln!(out)?;
            writeln!(out, "===== Best permutation of each sample =====")?;
            for s in &outcome.samples {
                writeln!(
                    out,
                    "Sample {}: {} | cutwidth: {}",
                    s.sample + 1,
                    format_permutation(&s.best.permutation),
                    s.best.cutwidth
                )?;
            }
            writeln!(out)?;
            writeln!(out, "*****************************")?;
            writeln!(
                out,
                "Global best permutation: {}",
                format_permutation(&outcome.best.permutation)
            )?;
            writeln!(
                out,
                "Minimum cutwidth across samples: {} (sample {}, {} trials)",
                outcome.best.cutwidth,
                outcome.best_sample + 1,
                outcome.total_trials()
            )?;
            writeln!(out, "*****************************")
        });
    }
}
