//! ZCLI — a tiny line-oriented scripting language: string variables, colored
//! output, interactive input, and `.zcli` program files.
//!
//! The crate splits into a scripting core and thin I/O plumbing around it:
//!
//! - [`script::lexer`] / [`script::eval`] — operand tokens and value
//!   expressions (`"literal"`, `(variable)`, `((input))`, `a : b` chains)
//! - [`script::cmd`] / [`script::interp`] — the command set and the session
//!   that dispatches it
//! - [`color`] — trailing `((color …))` directives
//! - [`console`] — the terminal seam (print colored lines, read one line)
//! - [`repl`] / [`cli`] — interactive loop and argv handling
//!
//! See [`script`] for a usage example.

pub mod cli;
pub mod color;
pub mod console;
pub mod help;
pub mod repl;
pub mod script;
pub mod var;
