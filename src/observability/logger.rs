//! Structured JSON log lines for bookshelf
//!
//! - One log line = one event
//! - Explicit severity levels
//! - Deterministic key ordering (event, severity, then fields sorted)
//! - Synchronous, no buffering

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Rejected requests, recoverable issues
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Log at INFO level
pub fn info(event: &str, fields: &[(&str, &str)]) {
    emit(Severity::Info, event, fields, &mut io::stdout());
}

/// Log at WARN level
pub fn warn(event: &str, fields: &[(&str, &str)]) {
    emit(Severity::Warn, event, fields, &mut io::stdout());
}

/// Log at ERROR level (stderr)
pub fn error(event: &str, fields: &[(&str, &str)]) {
    emit(Severity::Error, event, fields, &mut io::stderr());
}

/// Write one JSON event line to the writer.
///
/// The line is built by hand so key order stays deterministic: `event`
/// first, `severity` second, remaining fields alphabetical.
fn emit<W: Write>(severity: Severity, event: &str, fields: &[(&str, &str)], writer: &mut W) {
    let mut line = String::with_capacity(128);

    line.push_str("{\"event\":\"");
    escape_into(&mut line, event);
    line.push_str("\",\"severity\":\"");
    line.push_str(severity.as_str());
    line.push('"');

    let mut sorted: Vec<_> = fields.iter().collect();
    sorted.sort_by_key(|(k, _)| *k);

    for (key, value) in sorted {
        line.push_str(",\"");
        escape_into(&mut line, key);
        line.push_str("\":\"");
        escape_into(&mut line, value);
        line.push('"');
    }

    line.push_str("}\n");

    let _ = writer.write_all(line.as_bytes());
    let _ = writer.flush();
}

fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut buf = Vec::new();
        emit(severity, event, fields, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_event_and_severity_lead_the_line() {
        let line = capture(Severity::Info, "server_started", &[]);
        assert_eq!(line, "{\"event\":\"server_started\",\"severity\":\"INFO\"}\n");
    }

    #[test]
    fn test_fields_are_sorted() {
        let line = capture(
            Severity::Warn,
            "book_rejected",
            &[("reason", "missing name"), ("op", "add")],
        );
        assert_eq!(
            line,
            "{\"event\":\"book_rejected\",\"severity\":\"WARN\",\"op\":\"add\",\"reason\":\"missing name\"}\n"
        );
    }

    #[test]
    fn test_values_are_escaped() {
        let line = capture(Severity::Error, "boom", &[("detail", "a \"quoted\"\nvalue")]);
        assert!(line.contains("a \\\"quoted\\\"\\nvalue"));
        assert!(serde_json::from_str::<serde_json::Value>(line.trim()).is_ok());
    }
}
