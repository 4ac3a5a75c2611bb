//! The command set — one closed variant per command, produced by a dedicated
//! parse step and dispatched by exhaustive matching.
//!
//! Command words are case-insensitive.  A line is split into at most three
//! whitespace-separated parts; the final part absorbs the rest of the line
//! verbatim, so value expressions keep their internal spaces, quotes, colons,
//! and parentheses.

use crate::script::error::ScriptError;
use crate::script::interp::Mode;
use crate::script::lexer::split_word;

/// A parsed ZCLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `define <name> <value-expr>`
    Define { name: String, value: String },
    /// `show <value-expr>`
    Show { arg: String },
    /// `show input ["<prompt>"]` — capture one line into the last-input slot.
    ReadInput { prompt: String },
    /// `show ((input))` — print the last captured input.
    ShowInput,
    /// `help`
    Help,
    /// `save <filename>`
    Save { file: String },
    /// `open <filename>`
    Open { file: String },
    /// `execute` — replay the program buffer.
    Execute,
    /// `int` / `comp` — switch the session mode.
    SetMode(Mode),
}

impl Command {
    /// Parse one pre-processed line (blank/comment rejection and color
    /// stripping already done) into a command.
    pub fn parse(line: &str) -> Result<Self, ScriptError> {
        let (word, rest) = split_word(line);
        match word.to_ascii_lowercase().as_str() {
            "define" => {
                let (name, value) = split_word(rest);
                if name.is_empty() {
                    return Err(ScriptError::Syntax(
                        "define needs a variable name and a value".to_owned(),
                    ));
                }
                if value.is_empty() {
                    return Err(ScriptError::Syntax(format!(
                        "define '{name}' is missing a value; \
                         use: define {name} \"value\""
                    )));
                }
                Ok(Self::Define {
                    name: name.to_owned(),
                    value: value.to_owned(),
                })
            }
            "show" => Self::parse_show(rest),
            "help" => Ok(Self::Help),
            "save" => Ok(Self::Save {
                file: filename(rest, "save")?,
            }),
            "open" => Ok(Self::Open {
                file: filename(rest, "open")?,
            }),
            "execute" => Ok(Self::Execute),
            "int" => Ok(Self::SetMode(Mode::Immediate)),
            "comp" => Ok(Self::SetMode(Mode::Buffering)),
            other => Err(ScriptError::UnknownCommand(other.to_owned())),
        }
    }

    /// `show` has two special-cased leading tokens that bypass concatenation:
    /// `input` (capture) and `((input))` (print the slot).  Everything else
    /// is a value expression for the evaluator.
    fn parse_show(rest: &str) -> Result<Self, ScriptError> {
        if rest.is_empty() {
            return Err(ScriptError::Syntax(
                "show needs an argument: a quoted string, (variable), \
                 input, or ((input))"
                    .to_owned(),
            ));
        }
        let (first, after) = split_word(rest);
        if first.eq_ignore_ascii_case("input") {
            let prompt = if after.is_empty() {
                String::new()
            } else if after.len() >= 2 && after.starts_with('"') && after.ends_with('"') {
                after[1..after.len() - 1].to_owned()
            } else {
                return Err(ScriptError::Syntax(
                    "the prompt for 'show input' must be a quoted string".to_owned(),
                ));
            };
            return Ok(Self::ReadInput { prompt });
        }
        if first.eq_ignore_ascii_case("((input))") && after.is_empty() {
            return Ok(Self::ShowInput);
        }
        Ok(Self::Show {
            arg: rest.to_owned(),
        })
    }

    /// Meta-commands are suppressed (warn + no-op) during a replay, so a
    /// stored program can never alter the runtime mode or I/O state.
    pub fn is_meta(&self) -> bool {
        matches!(
            self,
            Self::Help | Self::Save { .. } | Self::Open { .. } | Self::Execute | Self::SetMode(_)
        )
    }

    /// The surface command word, for diagnostics.
    pub fn word(&self) -> &'static str {
        match self {
            Self::Define { .. } => "define",
            Self::Show { .. } | Self::ReadInput { .. } | Self::ShowInput => "show",
            Self::Help => "help",
            Self::Save { .. } => "save",
            Self::Open { .. } => "open",
            Self::Execute => "execute",
            Self::SetMode(Mode::Immediate) => "int",
            Self::SetMode(Mode::Buffering) => "comp",
        }
    }
}

/// A bare filename token for `save` / `open`.
fn filename(rest: &str, cmd: &str) -> Result<String, ScriptError> {
    let (file, _) = split_word(rest);
    if file.is_empty() {
        return Err(ScriptError::Syntax(format!("{cmd} needs a filename")));
    }
    Ok(file.to_owned())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_keeps_value_verbatim() {
        let cmd = Command::parse(r#"define full (first) : " " : (last)"#).unwrap();
        assert_eq!(
            cmd,
            Command::Define {
                name: "full".to_owned(),
                value: r#"(first) : " " : (last)"#.to_owned(),
            }
        );
    }

    #[test]
    fn define_without_value_is_syntax_error() {
        assert!(matches!(
            Command::parse("define x"),
            Err(ScriptError::Syntax(_))
        ));
        assert!(matches!(
            Command::parse("define"),
            Err(ScriptError::Syntax(_))
        ));
    }

    #[test]
    fn command_word_is_case_insensitive() {
        assert_eq!(
            Command::parse("SHOW \"hi\"").unwrap(),
            Command::Show {
                arg: "\"hi\"".to_owned()
            }
        );
        assert_eq!(Command::parse("Execute").unwrap(), Command::Execute);
    }

    #[test]
    fn show_without_argument_is_syntax_error() {
        assert!(matches!(Command::parse("show"), Err(ScriptError::Syntax(_))));
    }

    #[test]
    fn show_input_with_default_prompt() {
        assert_eq!(
            Command::parse("show input").unwrap(),
            Command::ReadInput {
                prompt: String::new()
            }
        );
    }

    #[test]
    fn show_input_with_quoted_prompt() {
        assert_eq!(
            Command::parse(r#"show input "Name? ""#).unwrap(),
            Command::ReadInput {
                prompt: "Name? ".to_owned()
            }
        );
    }

    #[test]
    fn show_input_with_unquoted_prompt_is_syntax_error() {
        assert!(matches!(
            Command::parse("show input Name?"),
            Err(ScriptError::Syntax(_))
        ));
    }

    #[test]
    fn show_last_input() {
        assert_eq!(Command::parse("show ((input))").unwrap(), Command::ShowInput);
        assert_eq!(Command::parse("show ((INPUT))").unwrap(), Command::ShowInput);
    }

    #[test]
    fn mode_switches() {
        assert_eq!(
            Command::parse("int").unwrap(),
            Command::SetMode(Mode::Immediate)
        );
        assert_eq!(
            Command::parse("comp").unwrap(),
            Command::SetMode(Mode::Buffering)
        );
    }

    #[test]
    fn save_and_open_need_filenames() {
        assert_eq!(
            Command::parse("save out").unwrap(),
            Command::Save {
                file: "out".to_owned()
            }
        );
        assert!(matches!(Command::parse("open"), Err(ScriptError::Syntax(_))));
    }

    #[test]
    fn unknown_command_names_the_word() {
        let err = Command::parse("frobnicate now").unwrap_err();
        assert!(matches!(err, ScriptError::UnknownCommand(w) if w == "frobnicate"));
    }

    #[test]
    fn meta_classification() {
        assert!(Command::parse("help").unwrap().is_meta());
        assert!(Command::parse("save x").unwrap().is_meta());
        assert!(Command::parse("int").unwrap().is_meta());
        assert!(!Command::parse("define x \"1\"").unwrap().is_meta());
        assert!(!Command::parse("show \"1\"").unwrap().is_meta());
    }

    #[test]
    fn word_round_trips() {
        assert_eq!(Command::parse("COMP").unwrap().word(), "comp");
        assert_eq!(Command::parse("show input").unwrap().word(), "show");
    }
}
