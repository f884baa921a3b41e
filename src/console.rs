//! Console reporting for the command-line tools.
//!
//! Library code never prints directly; it reports through a `Reporter` so the
//! binaries decide on colour and verbosity and tests can capture output.

use std::cell::RefCell;

pub const GREEN: &str = "\x1b[92m";
pub const YELLOW: &str = "\x1b[93m";
pub const RED: &str = "\x1b[91m";
pub const CYAN: &str = "\x1b[96m";
pub const BOLD: &str = "\x1b[1m";
pub const RESET: &str = "\x1b[0m";

/// Sink for human-readable progress messages
pub trait Reporter {
    fn ok(&self, message: &str);
    fn warn(&self, message: &str);
    fn err(&self, message: &str);
    fn info(&self, message: &str);

    /// Diagnostic detail, shown only in verbose mode.
    ///
    /// Default implementation drops the message.
    fn verbose(&self, _message: &str) {}
}

/// ANSI-coloured reporter writing progress to stdout and diagnostics to stderr
#[derive(Debug, Clone, Default)]
pub struct ConsoleReporter {
    pub verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for ConsoleReporter {
    fn ok(&self, message: &str) {
        println!("  {}✔{}  {}", GREEN, RESET, message);
    }

    fn warn(&self, message: &str) {
        println!("  {}⚠{}  {}", YELLOW, RESET, message);
    }

    fn err(&self, message: &str) {
        println!("  {}✖{}  {}", RED, RESET, message);
    }

    fn info(&self, message: &str) {
        println!("  {}→{}  {}", CYAN, RESET, message);
    }

    fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[VERBOSE] {}", message);
        }
    }
}

/// Severity of a recorded message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Err,
    Info,
    Verbose,
}

/// Reporter that keeps every message in memory
#[derive(Debug, Default)]
pub struct RecordingReporter {
    messages: RefCell<Vec<(Level, String)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages.borrow().clone()
    }

    /// Messages recorded at `level`
    pub fn at(&self, level: Level) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}

impl Reporter for RecordingReporter {
    fn ok(&self, message: &str) {
        self.push(Level::Ok, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }

    fn err(&self, message: &str) {
        self.push(Level::Err, message);
    }

    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn verbose(&self, message: &str) {
        self.push(Level::Verbose, message);
    }
}
