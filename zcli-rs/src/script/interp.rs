//! Interpreter session — the command dispatcher and all session state.
//!
//! One [`Interpreter`] owns the variable store, the last-input slot, the
//! program buffer, the session history, and the mode, and applies every
//! command effect through its [`Console`].  Nothing is ambient or static;
//! callers pass the session to every operation.
//!
//! Execution comes in two flavors:
//!
//! - **direct** ([`Interpreter::submit`]): a line the user typed.  In
//!   buffering mode non-control lines are stored; otherwise the line runs
//!   immediately and any error is reported by the caller and the session
//!   continues.
//! - **replay** ([`Interpreter::run_lines`]): stored lines from the buffer or
//!   a file.  Meta-commands are suppressed with a warning, unknown commands
//!   are skipped silently, and any other error halts the replay as a
//!   [`ScriptError::FatalReplay`].

use std::fs;
use std::path::Path;

use crossterm::style::Color;

use crate::color::{self, ColorSpec};
use crate::console::Console;
use crate::help;
use crate::script::cmd::Command;
use crate::script::error::ScriptError;
use crate::script::eval::eval_chain;
use crate::script::lexer::split_word;
use crate::var::VarStore;

// ── Mode ──────────────────────────────────────────────────────────────────────

/// Whether lines are stored for later replay or executed on entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Store non-control lines in the program buffer (`comp`, the default).
    #[default]
    Buffering,
    /// Execute every accepted line immediately (`int`).
    Immediate,
}

/// Command words that execute immediately even in buffering mode.
const CONTROL_WORDS: [&str; 6] = ["execute", "help", "save", "open", "int", "comp"];

/// Extension appended by `save` when the given name lacks it.
const PROGRAM_EXT: &str = ".zcli";

// ── Interpreter ───────────────────────────────────────────────────────────────

/// A ZCLI session: state plus the terminal collaborator.
pub struct Interpreter<C: Console> {
    /// Terminal seam; public so callers can drive input and inspect output.
    pub console: C,
    vars: VarStore,
    last_input: Option<String>,
    program: Vec<String>,
    history: Vec<String>,
    mode: Mode,
}

impl<C: Console> Interpreter<C> {
    pub fn new(console: C) -> Self {
        Self {
            console,
            vars: VarStore::new(),
            last_input: None,
            program: Vec::new(),
            history: Vec::new(),
            mode: Mode::default(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current value of a variable.
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(name)
    }

    /// Number of buffered program lines.
    pub fn program_len(&self) -> usize {
        self.program.len()
    }

    /// Lines typed directly this session (replayed lines excluded).
    pub fn history(&self) -> &[String] {
        &self.history
    }

    // ── Line intake ───────────────────────────────────────────────────────

    /// Handle one directly-typed line: record it, then buffer or execute it
    /// depending on the current mode.
    pub fn submit(&mut self, line: &str) -> Result<(), ScriptError> {
        if is_noop(line) {
            return Ok(());
        }
        self.history.push(line.to_owned());
        if self.mode == Mode::Buffering && !is_control(line) {
            self.program.push(line.to_owned());
            return Ok(());
        }
        self.execute_line(line, false)
    }

    /// Execute one line.  `replay` marks execution inside a stored-program
    /// replay, which suppresses meta-commands and unknown-command
    /// diagnostics.
    pub fn execute_line(&mut self, line: &str, replay: bool) -> Result<(), ScriptError> {
        if is_noop(line) {
            return Ok(());
        }

        let (text, color_token) = color::strip_directive(line);
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }
        let color = self.resolve_color(color_token);

        let cmd = match Command::parse(text) {
            Ok(cmd) => cmd,
            // Stray unknown words must not abort a whole program.
            Err(ScriptError::UnknownCommand(_)) if replay => return Ok(()),
            Err(e) => return Err(e),
        };

        if replay && cmd.is_meta() {
            self.console.print(
                &format!(
                    "Warning: '{}' command ignored during program execution.",
                    cmd.word()
                ),
                None,
            );
            return Ok(());
        }

        match cmd {
            Command::Define { name, value } => {
                let resolved = eval_chain(&value, &self.vars, self.last_input.as_deref())?;
                if !replay {
                    self.console.print(
                        &format!("Defined variable '{name}' with value '{resolved}'"),
                        None,
                    );
                }
                self.vars.set(name, resolved);
            }
            Command::Show { arg } => {
                let out = eval_chain(&arg, &self.vars, self.last_input.as_deref())?;
                self.console.print(&out, color);
            }
            Command::ReadInput { prompt } => {
                let read = self
                    .console
                    .read_line(&prompt)
                    .map_err(|e| ScriptError::Io(format!("cannot read input: {e}")))?;
                match read {
                    Some(value) => self.last_input = Some(value),
                    None => {
                        return Err(ScriptError::Io(
                            "end of input while reading 'show input'".to_owned(),
                        ))
                    }
                }
            }
            Command::ShowInput => {
                let out = self.last_input.clone().ok_or(ScriptError::UnboundInput)?;
                self.console.print(&out, color);
            }
            Command::Help => self.console.print(help::TEXT, None),
            Command::Save { file } => self.save_program(&file),
            Command::Open { file } => self.open_program(&file)?,
            Command::Execute => self.execute_program()?,
            Command::SetMode(mode) => {
                self.mode = mode;
                let msg = match mode {
                    Mode::Immediate => {
                        "Switched to immediate mode. Commands execute as soon as they are entered."
                    }
                    Mode::Buffering => {
                        "Switched to buffering mode. Commands are stored for 'execute'."
                    }
                };
                self.console.print(msg, None);
            }
        }
        Ok(())
    }

    // ── Replay ────────────────────────────────────────────────────────────

    /// Replay stored lines through the immediate path.  Any error halts the
    /// replay at the offending line and is escalated to
    /// [`ScriptError::FatalReplay`].
    pub fn run_lines(&mut self, lines: &[String]) -> Result<(), ScriptError> {
        for line in lines {
            if let Err(e) = self.execute_line(line, true) {
                return Err(ScriptError::FatalReplay {
                    line: line.clone(),
                    source: Box::new(e),
                });
            }
        }
        Ok(())
    }

    /// `execute`: replay the program buffer, then return to buffering mode.
    fn execute_program(&mut self) -> Result<(), ScriptError> {
        if self.mode != Mode::Buffering {
            return Err(ScriptError::Syntax(
                "'execute' is only available in buffering mode".to_owned(),
            ));
        }
        if self.program.is_empty() {
            self.console.print(
                "No program lines to execute. Add commands in buffering mode first.",
                None,
            );
            return Ok(());
        }
        self.console.print("--- Executing ZCLI Program ---", None);
        let lines = self.program.clone();
        self.mode = Mode::Immediate;
        let result = self.run_lines(&lines);
        self.mode = Mode::Buffering;
        if result.is_ok() {
            self.console.print("--- Program Execution Complete ---", None);
        }
        result
    }

    /// Run a program file directly (the one-argument CLI path): force
    /// immediate mode, replay the file's lines, restore the mode.
    pub fn run_file(&mut self, path: &str) -> Result<(), ScriptError> {
        if !Path::new(path).exists() {
            return Err(ScriptError::Io(format!("file '{path}' not found")));
        }
        self.console
            .print(&format!("Executing ZCLI file: {path}"), None);
        let original = self.mode;
        self.mode = Mode::Immediate;
        let result = self.open_program(path);
        self.mode = original;
        result?;
        self.console
            .print(&format!("Finished executing {path}."), None);
        Ok(())
    }

    // ── Persistence ───────────────────────────────────────────────────────

    /// `save`: write the program buffer (buffering mode) or the session
    /// history (immediate mode).  I/O failures are reported, not returned.
    fn save_program(&mut self, file: &str) {
        let path = with_ext(file);
        let (lines, what) = match self.mode {
            Mode::Buffering => (&self.program, "Program buffer"),
            Mode::Immediate => (&self.history, "Session history"),
        };
        let mut text = lines.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        match fs::write(&path, text) {
            Ok(()) => self
                .console
                .print(&format!("{what} saved to '{path}'."), None),
            Err(e) => self
                .console
                .print(&format!("Error saving file '{path}': {e}"), None),
        }
    }

    /// `open`: load trimmed non-empty lines from a file.  Buffering mode
    /// appends them to the program buffer; immediate mode replays them at
    /// once.  Missing files are reported, not fatal.
    fn open_program(&mut self, file: &str) -> Result<(), ScriptError> {
        let content = match fs::read_to_string(file) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                self.console
                    .print(&format!("Error: File '{file}' not found."), None);
                return Ok(());
            }
            Err(e) => {
                self.console
                    .print(&format!("Error opening file '{file}': {e}"), None);
                return Ok(());
            }
        };
        let lines: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_owned)
            .collect();
        match self.mode {
            Mode::Buffering => {
                self.program.extend(lines);
                self.console.print(
                    &format!("Program lines from '{file}' loaded into the buffer."),
                    None,
                );
                self.console.print("Type 'execute' to run them.", None);
            }
            Mode::Immediate => {
                self.console
                    .print(&format!("Executing program from '{file}'..."), None);
                self.run_lines(&lines)?;
            }
        }
        Ok(())
    }

    // ── Color ─────────────────────────────────────────────────────────────

    fn resolve_color(&mut self, token: Option<&str>) -> Option<Color> {
        let token = token?;
        match color::resolve(token) {
            ColorSpec::Named(c) => Some(c),
            ColorSpec::Hex(tok) => {
                self.console.print(
                    &format!(
                        "Warning: Hex color '{tok}' is not fully supported in this \
                         terminal. Displaying with default color."
                    ),
                    None,
                );
                None
            }
            ColorSpec::Unknown => None,
        }
    }
}

// ── Free helpers ──────────────────────────────────────────────────────────────

/// Blank and `$`-comment lines are complete no-ops in every mode.
fn is_noop(line: &str) -> bool {
    let t = line.trim();
    t.is_empty() || t.starts_with('$')
}

/// Whether a line's command word executes immediately even in buffering mode.
/// The color directive is stripped first so `save x ((color red))` still
/// counts as a control line.
fn is_control(line: &str) -> bool {
    let (text, _) = color::strip_directive(line);
    let (word, _) = split_word(text);
    CONTROL_WORDS.iter().any(|c| word.eq_ignore_ascii_case(c))
}

/// Append the `.zcli` extension when missing (case-insensitive check).
fn with_ext(file: &str) -> String {
    if file.to_ascii_lowercase().ends_with(PROGRAM_EXT) {
        file.to_owned()
    } else {
        format!("{file}{PROGRAM_EXT}")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
