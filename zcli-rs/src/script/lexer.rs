//! Operand lexer — quote-, paren-, and colon-aware tokenization of command
//! argument text.
//!
//! A value expression is a `:`-joined chain of operands.  The colon is not
//! escapable and cannot occur inside a literal, so chain splitting happens
//! before operand classification.  Each surviving segment is classified into
//! exactly one [`Token`]; nothing here touches the variable store — the
//! evaluator resolves tokens against session state.

/// One classified operand segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// `"..."` — the contents between the quotes, verbatim (no escapes).
    Literal(&'a str),
    /// `(name)`, or the tolerated `((name))` alias — the inner variable name.
    VarRef(&'a str),
    /// The `((input))` placeholder (case-insensitive).
    InputRef,
    /// Anything else, reported verbatim.
    Invalid(&'a str),
}

/// Split a raw argument string into trimmed, non-empty chain segments.
///
/// `a : b`, `a:b`, and `a :: b` all yield the segments `a`, `b`.
pub fn split_chain(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(':').map(str::trim).filter(|s| !s.is_empty())
}

/// Lex a raw argument string into operand tokens.
pub fn lex(raw: &str) -> Vec<Token<'_>> {
    split_chain(raw).map(classify).collect()
}

/// Classify one trimmed segment.  Quoted literals win over everything, then
/// the input placeholder, then parenthesized variable references.
fn classify(seg: &str) -> Token<'_> {
    if let Some(inner) = quoted(seg) {
        return Token::Literal(inner);
    }
    if seg.eq_ignore_ascii_case("((input))") {
        return Token::InputRef;
    }
    if let Some(name) = parenthesized(seg) {
        return Token::VarRef(name);
    }
    Token::Invalid(seg)
}

/// The contents of `seg` if it is wrapped in a pair of double quotes.
fn quoted(seg: &str) -> Option<&str> {
    if seg.len() >= 2 && seg.starts_with('"') && seg.ends_with('"') {
        Some(&seg[1..seg.len() - 1])
    } else {
        None
    }
}

/// The variable name inside one paren layer, or two (the compatibility alias).
fn parenthesized(seg: &str) -> Option<&str> {
    let inner = strip_parens(seg)?;
    Some(strip_parens(inner).unwrap_or(inner))
}

fn strip_parens(s: &str) -> Option<&str> {
    if s.len() >= 2 && s.starts_with('(') && s.ends_with(')') {
        Some(&s[1..s.len() - 1])
    } else {
        None
    }
}

// ── Command splitting ─────────────────────────────────────────────────────────

/// Split off the first whitespace-delimited word of `line`.
///
/// Returns the word and the rest with surrounding whitespace trimmed; the
/// rest is otherwise verbatim, so an operand can keep its internal spaces,
/// quotes, colons, and parentheses.
pub fn split_word(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.find(char::is_whitespace) {
        Some(i) => (&line[..i], line[i..].trim_start()),
        None => (line, ""),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
