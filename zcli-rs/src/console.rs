//! Terminal collaborators — colored line output and blocking line input.
//!
//! The interpreter core talks to the terminal only through [`Console`]:
//! "print this text in this color" and "read one raw line after this prompt".
//! It never builds escape sequences itself.  [`StdConsole`] maps colors to
//! crossterm styling on real stdio; [`ScriptedConsole`] records everything
//! in memory for the test suites and for embedders.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crossterm::style::{Color, Stylize};

/// The terminal seam used by the interpreter.
pub trait Console {
    /// Print one line, wrapped in `color` when given (reset afterwards).
    fn print(&mut self, text: &str, color: Option<Color>);

    /// Blocking read of one raw line (no trimming), shown after `prompt`.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

// ── StdConsole ────────────────────────────────────────────────────────────────

/// Real stdin/stdout console.
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn print(&mut self, text: &str, color: Option<Color>) {
        match color {
            Some(c) => println!("{}", text.with(c)),
            None => println!("{text}"),
        }
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut buf = String::new();
        if io::stdin().lock().read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }
}

// ── ScriptedConsole ───────────────────────────────────────────────────────────

/// In-memory console: queued input lines, recorded output.
///
/// Backs the test suites; also usable for driving the interpreter without a
/// terminal.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    /// Lines handed out by `read_line`, front first.  An empty queue behaves
    /// like end of input.
    pub inputs: VecDeque<String>,
    /// Every printed line with the color it was printed in.
    pub printed: Vec<(String, Option<Color>)>,
    /// Every prompt passed to `read_line`, in order.
    pub prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue input lines for subsequent `read_line` calls.
    pub fn queue_input<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in lines {
            self.inputs.push_back(line.into());
        }
    }

    /// The printed lines, without color information.
    pub fn texts(&self) -> Vec<&str> {
        self.printed.iter().map(|(t, _)| t.as_str()).collect()
    }

    /// The most recently printed line, if any.
    pub fn last(&self) -> Option<&str> {
        self.printed.last().map(|(t, _)| t.as_str())
    }
}

impl Console for ScriptedConsole {
    fn print(&mut self, text: &str, color: Option<Color>) {
        self.printed.push((text.to_owned(), color));
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_owned());
        Ok(self.inputs.pop_front())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
