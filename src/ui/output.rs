//! ui::output
//!
//! Report printing, stderr diagnostics, and set formatting.
//!
//! # Streams
//!
//! Stdout carries the report and nothing else, so a plain run can be
//! diffed against the expected four lines. Trace lines, warnings and
//! errors all go to stderr. `--quiet` silences stdout and warnings but
//! never errors.

use std::fmt::Display;

/// How much the run writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// `--quiet`: errors only
    Quiet,
    /// Report on stdout, warnings on stderr
    Normal,
    /// `--debug`: also trace every pipeline stage on stderr
    Debug,
}

impl Verbosity {
    /// `--quiet` takes precedence over `--debug`.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        match (quiet, debug) {
            (true, _) => Verbosity::Quiet,
            (false, true) => Verbosity::Debug,
            (false, false) => Verbosity::Normal,
        }
    }

    fn shows_report(self) -> bool {
        self != Verbosity::Quiet
    }
}

/// Write report text to stdout unless quiet.
pub fn print(report: impl Display, verbosity: Verbosity) {
    if verbosity.shows_report() {
        println!("{}", report);
    }
}

/// Write a `[debug]` trace line to stderr in debug mode.
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Write an `error:` line to stderr regardless of verbosity.
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Write a `warning:` line to stderr unless quiet.
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity.shows_report() {
        eprintln!("warning: {}", message);
    }
}

/// Render a sequence of strings as a brace-delimited set.
///
/// Each element is wrapped in double quotes and elements are joined with
/// `", "`. Contents are not escaped.
///
/// # Example
///
/// ```
/// use evensum::ui::output::format_set;
///
/// assert_eq!(format_set::<&str>(&[]), "{}");
/// assert_eq!(format_set(&["1", "2"]), r#"{"1", "2"}"#);
/// ```
pub fn format_set<S: AsRef<str>>(items: &[S]) -> String {
    let mut out = String::from("{");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('"');
        out.push_str(item.as_ref());
        out.push('"');
    }
    out.push('}');
    out
}
