//! Command-line argument parsing.
//!
//! Usage:
//!   zcli               # interactive REPL
//!   zcli <file>.zcli   # run a program file and exit

/// Parsed command-line arguments.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Program file to run instead of starting the REPL.
    pub script: Option<String>,
}

/// Parse `std::env::args()` and return [`CliArgs`] or an error message.
pub fn parse_args() -> Result<CliArgs, String> {
    let raw: Vec<String> = std::env::args().collect();
    parse_argv(&raw[1..])
}

/// Parse a slice of argument strings (exposed for testing).
pub fn parse_argv(argv: &[String]) -> Result<CliArgs, String> {
    let mut args = CliArgs::default();
    for arg in argv {
        if arg.starts_with('-') {
            return Err(format!("unknown option: {arg}"));
        }
        if args.script.is_some() {
            return Err("too many arguments; expected at most one program file".to_owned());
        }
        args.script = Some(arg.clone());
    }
    Ok(args)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|&s| s.to_owned()).collect()
    }

    #[test]
    fn empty_args_start_the_repl() {
        let a = parse_argv(&argv(&[])).unwrap();
        assert!(a.script.is_none());
    }

    #[test]
    fn one_positional_is_the_script() {
        let a = parse_argv(&argv(&["prog.zcli"])).unwrap();
        assert_eq!(a.script.as_deref(), Some("prog.zcli"));
    }

    #[test]
    fn too_many_positionals() {
        assert!(parse_argv(&argv(&["a.zcli", "b.zcli"])).is_err());
    }

    #[test]
    fn unknown_flag() {
        assert!(parse_argv(&argv(&["-x"])).is_err());
    }
}
