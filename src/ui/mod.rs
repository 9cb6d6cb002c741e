//! Status message presentation layer
//!
//! Every user-visible line goes through the [`Reporter`] trait so the pipeline
//! can be driven by the colored console reporter in the binary, or by a
//! recording reporter in tests.

use console::Style;

use crate::error::MkenvError;

/// The four colors status lines are printed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Yellow,
    Red,
    Blue,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Tone::Green => Style::new().green(),
            Tone::Yellow => Style::new().yellow(),
            Tone::Red => Style::new().red(),
            Tone::Blue => Style::new().blue(),
        }
    }
}

/// Wrap `text` in the color code for `tone` followed by a reset code.
///
/// With `enabled == false` the text is returned unchanged.
pub fn paint(text: &str, tone: Tone, enabled: bool) -> String {
    tone.style()
        .force_styling(enabled)
        .apply_to(text)
        .to_string()
}

/// Sink for status lines
pub trait Reporter {
    fn report(&self, tone: Tone, message: &str);

    /// Progress and success lines
    fn success(&self, message: &str) {
        self.report(Tone::Green, message);
    }

    /// Skipped work or recoverable conditions
    fn warn(&self, message: &str) {
        self.report(Tone::Yellow, message);
    }

    /// Neutral information, e.g. retries
    fn note(&self, message: &str) {
        self.report(Tone::Blue, message);
    }

    fn failure(&self, message: &str) {
        self.report(Tone::Red, message);
    }
}

/// Prints colored lines to stdout
///
/// Colors follow `console`'s terminal detection unless forced.
pub struct ConsoleReporter {
    colors: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            colors: console::colors_enabled(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, tone: Tone, message: &str) {
        println!("{}", paint(message, tone, self.colors));
    }
}

/// Print a terminal error.
///
/// Without `debug` only the short red message is shown; with it the full
/// miette report (code, help and source chain) is printed instead.
pub fn report_error(err: MkenvError, debug: bool) {
    if debug {
        eprintln!("{:?}", miette::Report::new(err));
    } else {
        eprintln!(
            "{}",
            paint(&err.to_string(), Tone::Red, console::colors_enabled_stderr())
        );
    }
}
