//! Error taxonomy for the evaluator and the command dispatcher.
//!
//! Every failure is a value of [`ScriptError`]; nothing is panicked across
//! the command boundary.  During direct execution the REPL reports the error
//! and keeps going.  During a replay the per-line error is wrapped in
//! [`ScriptError::FatalReplay`], which halts the replay and the process.

use thiserror::Error;

/// Everything that can go wrong while parsing or executing a line.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// Malformed command arguments: missing value, bad quoting, wrong count.
    #[error("invalid syntax: {0}")]
    Syntax(String),

    /// A `(variable)` reference to a name that was never defined.
    #[error("variable '{0}' is not defined")]
    UndefinedVariable(String),

    /// `((input))` referenced before any `show input` capture.
    #[error("no input has been captured yet; use 'show input' first")]
    UnboundInput,

    /// An operand token that matches no recognized form.
    #[error("invalid operand '{0}': expected a quoted string, ((input)), or (variable)")]
    InvalidOperand(String),

    /// A command word that is not in the command table.
    #[error("unknown command '{0}'; type 'help' for the command list")]
    UnknownCommand(String),

    /// File or terminal I/O failure.  Always non-fatal when raised by
    /// `save` / `open`, which report it in place.
    #[error("{0}")]
    Io(String),

    /// An error raised while replaying stored lines.  The replay stops at the
    /// offending line and the process exits non-zero.
    #[error("error while executing '{line}': {source}")]
    FatalReplay {
        line: String,
        source: Box<ScriptError>,
    },
}

// ── Tests ─────────────────────────────────────────────────────────────────────
