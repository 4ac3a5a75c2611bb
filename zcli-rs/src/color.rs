//! Color directives — trailing `((color <name-or-hex>))` parsing and palette
//! resolution.
//!
//! A directive selects the display color for one line's printed output only;
//! it is stripped from the line before command recognition.  Named colors map
//! onto the standard ANSI palette.  A 3- or 6-digit hex token is recognized
//! syntactically but a 16-color terminal cannot honor it, so it resolves to
//! "no color" with a warning; any other token yields no color silently.

use std::sync::LazyLock;

use crossterm::style::Color;
use regex::Regex;

/// Trailing `((color <token>))` directive, keyword case-insensitive, trailing
/// whitespace tolerated, anchored at line end.
static COLOR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*\(\(color\s+([a-zA-Z0-9#]+)\)\)\s*$").unwrap());

/// A `#` followed by 3 or 6 hex digits.
static HEX_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#([0-9a-f]{3}){1,2}$").unwrap());

/// What a color directive token resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSpec {
    /// One of the named palette entries.
    Named(Color),
    /// Syntactically valid hex code; not representable on this backend.
    Hex(String),
    /// Unrecognized token — no color applied, silently.
    Unknown,
}

/// Split a trailing color directive off `line`.
///
/// Returns the line without the directive and, if a directive was present,
/// the raw color token.
pub fn strip_directive(line: &str) -> (&str, Option<&str>) {
    match COLOR_TAG.captures(line) {
        Some(caps) => {
            let whole = caps.get(0).unwrap();
            let token = caps.get(1).unwrap().as_str();
            (&line[..whole.start()], Some(token))
        }
        None => (line, None),
    }
}

/// Resolve a color token to a [`ColorSpec`].
pub fn resolve(token: &str) -> ColorSpec {
    if let Some(c) = named(token) {
        return ColorSpec::Named(c);
    }
    if HEX_TOKEN.is_match(token) {
        return ColorSpec::Hex(token.to_owned());
    }
    ColorSpec::Unknown
}

/// The fixed named palette.  Orange, indigo, violet, and purple are
/// approximated with the nearest standard ANSI color.
fn named(token: &str) -> Option<Color> {
    Some(match token.to_ascii_lowercase().as_str() {
        "red" => Color::Red,
        "orange" | "yellow" => Color::Yellow,
        "green" => Color::Green,
        "blue" | "indigo" => Color::Blue,
        "violet" | "purple" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        _ => return None,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_directive() {
        let (rest, tok) = strip_directive("show \"hi\" ((color red))");
        assert_eq!(rest, "show \"hi\"");
        assert_eq!(tok, Some("red"));
    }

    #[test]
    fn keyword_is_case_insensitive() {
        let (rest, tok) = strip_directive("show (x) ((COLOR Blue))  ");
        assert_eq!(rest, "show (x)");
        assert_eq!(tok, Some("Blue"));
    }

    #[test]
    fn no_directive_leaves_line_alone() {
        let (rest, tok) = strip_directive("show \"hi\"");
        assert_eq!(rest, "show \"hi\"");
        assert_eq!(tok, None);
    }

    #[test]
    fn directive_must_be_at_line_end() {
        let (rest, tok) = strip_directive("((color red)) show \"hi\"");
        assert_eq!(tok, None);
        assert_eq!(rest, "((color red)) show \"hi\"");
    }

    #[test]
    fn named_colors_resolve() {
        assert_eq!(resolve("red"), ColorSpec::Named(Color::Red));
        assert_eq!(resolve("RED"), ColorSpec::Named(Color::Red));
        assert_eq!(resolve("orange"), ColorSpec::Named(Color::Yellow));
        assert_eq!(resolve("indigo"), ColorSpec::Named(Color::Blue));
        assert_eq!(resolve("violet"), ColorSpec::Named(Color::Magenta));
        assert_eq!(resolve("purple"), ColorSpec::Named(Color::Magenta));
        assert_eq!(resolve("black"), ColorSpec::Named(Color::Black));
    }

    #[test]
    fn hex_is_recognized_but_not_colored() {
        assert_eq!(resolve("#f00"), ColorSpec::Hex("#f00".to_owned()));
        assert_eq!(resolve("#FF00FF"), ColorSpec::Hex("#FF00FF".to_owned()));
    }

    #[test]
    fn bad_hex_lengths_are_unknown() {
        assert_eq!(resolve("#ff"), ColorSpec::Unknown);
        assert_eq!(resolve("#ffff"), ColorSpec::Unknown);
    }

    #[test]
    fn unknown_names_are_unknown() {
        assert_eq!(resolve("sparkle"), ColorSpec::Unknown);
    }
}
