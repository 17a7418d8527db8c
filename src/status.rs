//! Operator-facing status lines.
//!
//! Status lines are the tool's user interface: one line per device and one
//! per failure. They are separate from diagnostic logging. Coloring is purely
//! cosmetic and can be switched off.

use std::io::IsTerminal;

const RESET: &str = "\x1b[0m";

/// The kinds of status line the tool prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Error,
    Failed,
    OkBlue,
    Header,
    OkGreen,
    Link,
    Warning,
}

impl Status {
    /// ANSI escape sequence that starts this style.
    pub fn code(self) -> &'static str {
        match self {
            Status::Error => "\x1b[95m",
            Status::Failed => "\x1b[41;1m",
            Status::OkBlue => "\x1b[94m",
            Status::Header => "\x1b[46;1m",
            Status::OkGreen => "\x1b[92m",
            Status::Link => "\x1b[32;4m",
            Status::Warning => "\x1b[93m",
        }
    }
}

/// Wrap `message` in the style for `status`, or return it unchanged when
/// color is off.
pub fn paint(status: Status, message: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", status.code(), message, RESET)
    } else {
        message.to_string()
    }
}

/// Prints status lines, deciding per stream whether to color them.
#[derive(Debug, Clone, Copy)]
pub struct StatusPrinter {
    stdout_color: bool,
    stderr_color: bool,
}

impl StatusPrinter {
    /// Create a printer. `no_color` forces plain output; otherwise a stream
    /// is colored only when it is a terminal.
    pub fn new(no_color: bool) -> Self {
        Self {
            stdout_color: !no_color && std::io::stdout().is_terminal(),
            stderr_color: !no_color && std::io::stderr().is_terminal(),
        }
    }

    /// A printer that never emits escape codes.
    #[cfg(test)]
    pub fn plain() -> Self {
        Self::new(true)
    }

    /// Print a status line to stdout.
    pub fn print(&self, status: Status, message: &str) {
        println!("{}", paint(status, message, self.stdout_color));
    }

    /// Print a status line to stderr.
    pub fn eprint(&self, status: Status, message: &str) {
        eprintln!("{}", paint(status, message, self.stderr_color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_wraps_with_code_and_reset() {
        let painted = paint(Status::OkGreen, "[ OK ] edge-a", true);
        assert_eq!(painted, "\x1b[92m[ OK ] edge-a\x1b[0m");
    }

    #[test]
    fn test_paint_without_color_is_identity() {
        assert_eq!(paint(Status::Error, "[FAIL] - boom", false), "[FAIL] - boom");
    }

    #[test]
    fn test_codes_are_distinct() {
        let all = [
            Status::Error,
            Status::Failed,
            Status::OkBlue,
            Status::Header,
            Status::OkGreen,
            Status::Link,
            Status::Warning,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.code(), b.code(), "{:?} and {:?} share a code", a, b);
            }
        }
    }

    #[test]
    fn test_plain_printer_never_colors() {
        let printer = StatusPrinter::plain();
        assert!(!printer.stdout_color);
        assert!(!printer.stderr_color);
    }
}
