//! Interactive loop — prompt, line intake, and diagnostic reporting.
//!
//! The prompt marker tracks the mode: `>` while buffering, `>>` in immediate
//! mode.  `exit` (or end of input) leaves the loop.  Every error other than a
//! fatal replay error is reported and the session continues; a fatal replay
//! error ends the process with a non-zero code.

use crate::console::Console;
use crate::script::{Interpreter, Mode, ScriptError};

/// Run the interactive session.  Returns the process exit code.
pub fn run<C: Console>(interp: &mut Interpreter<C>) -> i32 {
    interp
        .console
        .print("Welcome to ZCLI! Type 'help' for commands.", None);
    loop {
        let prompt = match interp.mode() {
            Mode::Buffering => "ZCLI > ",
            Mode::Immediate => "ZCLI >> ",
        };
        let line = match interp.console.read_line(prompt) {
            Ok(Some(line)) => line,
            Ok(None) => {
                interp.console.print("Exiting ZCLI. Goodbye!", None);
                return 0;
            }
            Err(e) => {
                interp
                    .console
                    .print(&format!("Error reading input: {e}"), None);
                return 1;
            }
        };
        if line.trim().eq_ignore_ascii_case("exit") {
            interp.console.print("Exiting ZCLI. Goodbye!", None);
            return 0;
        }
        match interp.submit(&line) {
            Ok(()) => {}
            Err(e @ ScriptError::FatalReplay { .. }) => {
                interp.console.print(&format!("Error: {e}"), None);
                interp.console.print("Program execution halted.", None);
                return 1;
            }
            Err(e) => interp.console.print(&format!("Error: {e}"), None),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
