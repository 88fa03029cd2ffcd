//! Terminal rendering of diagnostics with [ariadne](https://docs.rs/ariadne).
//!
//! Diagnostics only carry a line and column, so each one is mapped back to a
//! character offset into the source before a report is built.

use crate::parser::ast::SourceLocation;
use crate::parser::diagnostic::Diagnostic;
use ariadne::{Config, Label, Report, ReportKind, Source};
use std::io::{self, Write};

/// Character offset of `location` in `source`, clamped to the end of input.
///
/// Lines and columns are 1-based and columns count characters, matching the
/// lexer.
pub fn char_offset(source: &str, location: SourceLocation) -> usize {
    let mut line = 1;
    let mut line_start = 0;

    for (index, ch) in source.chars().enumerate() {
        if line == location.line {
            break;
        }
        if ch == '\n' {
            line += 1;
            line_start = index + 1;
        }
    }

    let total = source.chars().count();
    if line < location.line {
        return total;
    }
    (line_start + location.column.saturating_sub(1)).min(total)
}

/// Write one diagnostic as an ariadne report.
pub fn write_diagnostic<W: Write>(
    source: &str,
    filename: &str,
    diagnostic: &Diagnostic,
    color: bool,
    out: W,
) -> io::Result<()> {
    let total = source.chars().count();
    let offset = char_offset(source, diagnostic.location());
    // End-of-input diagnostics point at the last character instead
    let (start, end) = if offset >= total && total > 0 {
        (total - 1, total)
    } else {
        (offset, (offset + 1).min(total))
    };

    Report::build(ReportKind::Error, (), start)
        .with_config(Config::default().with_color(color))
        .with_message(format!(
            "{} error in {} at {}:{}",
            diagnostic.phase, filename, diagnostic.line, diagnostic.column
        ))
        .with_label(Label::new(start..end).with_message(&diagnostic.message))
        .finish()
        .write(Source::from(source), out)
}

/// Render every diagnostic to stderr.
pub fn eprint_diagnostics(
    source: &str,
    filename: &str,
    diagnostics: &[Diagnostic],
) -> io::Result<()> {
    let stderr = io::stderr();
    for diagnostic in diagnostics {
        write_diagnostic(source, filename, diagnostic, true, stderr.lock())?;
    }
    Ok(())
}
