//! Rendering of errors and their causal chains, built purely on the
//! read-only accessors of [`Error`].
//!
//! Two forms are produced through `Display`:
//!
//! * `{}` — a one-line summary: code name, origin, explanation.
//! * `{:#}` — the full report: a block per error (code name, origin,
//!   description, explanation, category) with causes indented beneath
//!   `Caused by:`. Adjacent [`PROPAGATED`](crate::builtin::PROPAGATED)
//!   markers collapse into a single `Trace:` list of origins instead of
//!   one block per hop.
//!
//! ```text
//! Trace:
//!     at src/billing.rs:71 in 'settle(&invoice)'
//!     at src/ledger.rs:30 in 'post(entry)'
//! Error 'ENTRY_MISSING' at src/ledger.rs:112
//! Description:     Ledger entry not found
//! Additional Info: id 0 is reserved
//! Category:        LEDGER_ERRORS
//! ```

use core::fmt;

use smallvec::SmallVec;

use crate::builtin;
use crate::types::error::Error;

/// One line: `CODE_NAME at file:line` plus the explanation if present.
pub(crate) fn write_compact(f: &mut fmt::Formatter<'_>, error: &Error) -> fmt::Result {
    write!(f, "{} at {}", error.code().name(), error.origin())?;
    if !error.explanation().is_empty() {
        write!(f, ": {}", error.explanation())?;
    }
    Ok(())
}

/// The full report, cause chain included. Every line is terminated, so
/// the report composes when embedded in larger output.
pub(crate) fn write_report(f: &mut fmt::Formatter<'_>, error: &Error) -> fmt::Result {
    write_chain(f, error, 0)
}

fn write_chain(f: &mut fmt::Formatter<'_>, mut current: &Error, level: usize) -> fmt::Result {
    // Collapse the leading run of propagation markers into one trace.
    let mut hops: SmallVec<[&Error; 8]> = SmallVec::new();
    while current.code() == builtin::PROPAGATED {
        hops.push(current);
        match current.cause() {
            Some(cause) => current = cause,
            None => {
                // A marker with nothing beneath it: the trace is all there is.
                return write_trace(f, &hops, level);
            }
        }
    }
    if !hops.is_empty() {
        write_trace(f, &hops, level)?;
    }

    write_block(f, current, level)?;

    if let Some(cause) = current.cause() {
        write_indent(f, level)?;
        writeln!(f, "Caused by:")?;
        write_chain(f, cause, level + 1)?;
    }
    Ok(())
}

fn write_trace(f: &mut fmt::Formatter<'_>, hops: &[&Error], level: usize) -> fmt::Result {
    write_indent(f, level)?;
    writeln!(f, "Trace:")?;
    for hop in hops {
        write_indent(f, level)?;
        if hop.explanation().is_empty() {
            writeln!(f, "    at {}", hop.origin())?;
        } else {
            writeln!(f, "    at {} in '{}'", hop.origin(), hop.explanation())?;
        }
    }
    Ok(())
}

fn write_block(f: &mut fmt::Formatter<'_>, error: &Error, level: usize) -> fmt::Result {
    let code = error.code();

    write_indent(f, level)?;
    writeln!(f, "Error '{}' at {}", code.name(), error.origin())?;
    write_indent(f, level)?;
    writeln!(f, "Description:     {}", code.description())?;
    if !error.explanation().is_empty() {
        write_indent(f, level)?;
        writeln!(f, "Additional Info: {}", error.explanation())?;
    }
    write_indent(f, level)?;
    writeln!(f, "Category:        {}", code.category().name())
}

fn write_indent(f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
    for _ in 0..level {
        f.write_str("    ")?;
    }
    Ok(())
}
