//! The ZCLI scripting core — operand lexer, expression evaluator, command
//! set, and the interpreter session that dispatches them.
//!
//! - [`lexer`] / [`eval`] — value expressions: `"literal"`, `(variable)`,
//!   `((input))`, and `:`-joined concatenation chains
//! - [`cmd`] — the closed command set and its parse step
//! - [`interp`] — session state (variables, last input, program buffer,
//!   history, mode) and command dispatch
//! - [`error`] — the [`ScriptError`] taxonomy
//!
//! # Quick start
//!
//! ```rust
//! use zcli::console::ScriptedConsole;
//! use zcli::script::Interpreter;
//!
//! let mut interp = Interpreter::new(ScriptedConsole::new());
//! interp.execute_line("define greeting \"hello\"", false).unwrap();
//! interp.execute_line("show (greeting) : \"!\"", false).unwrap();
//! assert_eq!(interp.console.last(), Some("hello!"));
//! ```

pub mod cmd;
pub mod error;
pub mod eval;
pub mod interp;
pub mod lexer;

// Re-exports for convenience.
pub use cmd::Command;
pub use error::ScriptError;
pub use interp::{Interpreter, Mode};
