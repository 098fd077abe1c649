// file: src/utils/logging.rs
// description: Tracing subscriber initialization with optional ANSI coloring

use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Logs go to stderr so stdout only carries the run summary.
pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::new(level);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(verbose)
        .with_line_number(verbose)
        .compact()
        .with_ansi(colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    colored::control::set_override(colored_output);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Warning,
    Failure,
}

impl Outcome {
    /// Failures only escalate to `Failure` when they decide the exit code.
    pub fn from_failures(failed: usize, decisive: bool) -> Self {
        match (failed, decisive) {
            (0, _) => Self::Success,
            (_, true) => Self::Failure,
            (_, false) => Self::Warning,
        }
    }
}

/// Summary line for stdout, prefixed with the outcome marker.
pub fn summary_line(outcome: Outcome, msg: &str) -> String {
    let (marker, text) = match outcome {
        Outcome::Success => ("✓".green().bold(), msg.green()),
        Outcome::Warning => ("⚠".yellow().bold(), msg.yellow()),
        Outcome::Failure => ("✗".red().bold(), msg.red()),
    };
    format!("{marker} {text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line_markers() {
        colored::control::set_override(false);

        assert_eq!(summary_line(Outcome::Success, "done"), "✓ done");
        assert_eq!(summary_line(Outcome::Failure, "boom"), "✗ boom");
        assert_eq!(summary_line(Outcome::Warning, "careful"), "⚠ careful");
    }

    #[test]
    fn test_outcome_from_failures() {
        assert_eq!(Outcome::from_failures(0, true), Outcome::Success);
        assert_eq!(Outcome::from_failures(2, true), Outcome::Failure);
        assert_eq!(Outcome::from_failures(1, false), Outcome::Warning);
    }
}
