//! Expression Evaluator — resolves operand tokens against the variable store
//! and the last-input slot, and joins `:`-chains.
//!
//! Resolution is fail-fast: the first segment that does not resolve aborts
//! the whole expression, so a failed `define` or `show` never produces
//! partial output or a partial store write.

use crate::script::error::ScriptError;
use crate::script::lexer::{lex, Token};
use crate::var::VarStore;

/// Resolve one operand token.
pub fn resolve(
    token: &Token<'_>,
    vars: &VarStore,
    last_input: Option<&str>,
) -> Result<String, ScriptError> {
    match token {
        Token::Literal(s) => Ok((*s).to_owned()),
        Token::InputRef => last_input
            .map(str::to_owned)
            .ok_or(ScriptError::UnboundInput),
        Token::VarRef(name) => vars
            .get(name)
            .map(str::to_owned)
            .ok_or_else(|| ScriptError::UndefinedVariable((*name).to_owned())),
        Token::Invalid(s) => Err(ScriptError::InvalidOperand((*s).to_owned())),
    }
}

/// Resolve a full value expression: every chain segment in order, joined with
/// no separator.
pub fn eval_chain(
    raw: &str,
    vars: &VarStore,
    last_input: Option<&str>,
) -> Result<String, ScriptError> {
    let mut out = String::new();
    for token in lex(raw) {
        out.push_str(&resolve(&token, vars, last_input)?);
    }
    Ok(out)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> VarStore {
        let mut v = VarStore::new();
        v.set("first", "Jane");
        v.set("last", "Doe");
        v
    }

    #[test]
    fn literal_resolves_to_exact_contents() {
        let v = VarStore::new();
        assert_eq!(eval_chain(r#""hello""#, &v, None).unwrap(), "hello");
        assert_eq!(eval_chain(r#""a\nb""#, &v, None).unwrap(), r"a\nb"); // no escapes
    }

    #[test]
    fn variable_reference_resolves() {
        assert_eq!(eval_chain("(first)", &vars(), None).unwrap(), "Jane");
        assert_eq!(eval_chain("((first))", &vars(), None).unwrap(), "Jane");
    }

    #[test]
    fn undefined_variable_fails() {
        let err = eval_chain("(missing)", &vars(), None).unwrap_err();
        assert!(matches!(err, ScriptError::UndefinedVariable(n) if n == "missing"));
    }

    #[test]
    fn input_placeholder_reads_slot() {
        assert_eq!(eval_chain("((input))", &vars(), Some("Bob")).unwrap(), "Bob");
    }

    #[test]
    fn input_placeholder_before_capture_fails() {
        let err = eval_chain("((input))", &vars(), None).unwrap_err();
        assert!(matches!(err, ScriptError::UnboundInput));
    }

    #[test]
    fn chain_joins_without_separator() {
        let got = eval_chain(r#"(first) : " " : (last)"#, &vars(), None).unwrap();
        assert_eq!(got, "Jane Doe");
    }

    #[test]
    fn chain_with_input_placeholder() {
        let got = eval_chain(r#""Hi " : ((input)) : "!""#, &vars(), Some("Bob")).unwrap();
        assert_eq!(got, "Hi Bob!");
    }

    #[test]
    fn empty_chain_segments_are_ignored() {
        let got = eval_chain(r#""a" :: "b""#, &vars(), None).unwrap();
        assert_eq!(got, "ab");
    }

    #[test]
    fn fails_fast_on_first_bad_segment() {
        let err = eval_chain(r#""ok" : nope : (missing)"#, &vars(), None).unwrap_err();
        assert!(matches!(err, ScriptError::InvalidOperand(t) if t == "nope"));
    }

    #[test]
    fn invalid_operand_names_the_token() {
        let err = eval_chain("42", &vars(), None).unwrap_err();
        assert!(matches!(err, ScriptError::InvalidOperand(t) if t == "42"));
    }
}
