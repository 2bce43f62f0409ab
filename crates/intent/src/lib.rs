//! Plain-English search intents for grep.
//!
//! Turns phrases like "email addresses" or "TODO comments" into extended regex patterns that
//! `grep -E` understands. Resolution never fails:
//!
//! 1. exact match of the lowercased, trimmed phrase against the intent table;
//! 2. the first table key (in declaration order) contained in the phrase;
//! 3. otherwise the phrase itself, escaped so it matches literally.
//!
//! Consumed by `grep-mcp` (the `grep_search_intent` tool).

mod table;

use std::fmt;

/// How a phrase was turned into a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    /// The normalized phrase equals this table key.
    Exact(&'static str),
    /// The normalized phrase contains this table key.
    Substring(&'static str),
    /// No key applied; the pattern is the escaped input.
    Literal,
}

impl fmt::Display for MatchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(key) => write!(f, "exact:{key}"),
            Self::Substring(key) => write!(f, "substring:{key}"),
            Self::Literal => f.write_str("literal"),
        }
    }
}

/// The outcome of resolving an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Extended regex to hand to `grep -E`.
    pub pattern: String,
    /// Which rule produced `pattern`.
    pub source: MatchSource,
}

/// Resolve a free-text intent into a regex pattern, reporting which rule applied.
pub fn resolve(intent: &str) -> Resolution {
    let normalized = intent.trim().to_lowercase();

    if let Some((key, pattern)) = table::INTENTS.iter().find(|(key, _)| *key == normalized) {
        return Resolution {
            pattern: (*pattern).to_string(),
            source: MatchSource::Exact(*key),
        };
    }

    if let Some((key, pattern)) = table::INTENTS
        .iter()
        .find(|(key, _)| normalized.contains(key))
    {
        return Resolution {
            pattern: (*pattern).to_string(),
            source: MatchSource::Substring(*key),
        };
    }

    Resolution {
        pattern: escape_literal(intent),
        source: MatchSource::Literal,
    }
}

/// Resolve a free-text intent into a regex pattern.
pub fn interpret(intent: &str) -> String {
    resolve(intent).pattern
}

/// Characters with special meaning in an extended regex.
const METACHARS: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// Backslash-escape regex metacharacters so `input` matches itself literally.
///
/// Only ERE metacharacters are escaped; GNU grep warns about a backslash before anything else.
pub fn escape_literal(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        if METACHARS.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// All known intent phrases, in resolution order.
pub fn known_intents() -> impl Iterator<Item = &'static str> {
    table::INTENTS.iter().map(|(key, _)| *key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMAIL: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

    #[test]
    fn exact_match_is_case_insensitive_and_trimmed() {
        let res = resolve("  Email Address ");
        assert_eq!(res.pattern, EMAIL);
        assert_eq!(res.source, MatchSource::Exact("email address"));
    }

    #[test]
    fn substring_match_uses_declaration_order() {
        let res = resolve("need an email now");
        assert_eq!(res.pattern, EMAIL);
        assert_eq!(res.source, MatchSource::Substring("email"));

        // "ip" is declared before "phone", so "zip phone" resolves through "ip".
        let res = resolve("zip phone");
        assert_eq!(res.source, MatchSource::Substring("ip"));
    }

    #[test]
    fn literal_fallback_keeps_input_case() {
        let res = resolve("Some.Literal*String");
        assert_eq!(res.pattern, r"Some\.Literal\*String");
        assert_eq!(res.source, MatchSource::Literal);
    }

    #[test]
    fn escape_covers_every_metachar() {
        assert_eq!(
            escape_literal(r".*+?^${}()|[]\"),
            r"\.\*\+\?\^\$\{\}\(\)\|\[\]\\"
        );
        assert_eq!(escape_literal("a-b #c"), "a-b #c");
    }

    #[test]
    fn display_names_the_rule() {
        assert_eq!(MatchSource::Exact("todo").to_string(), "exact:todo");
        assert_eq!(MatchSource::Substring("ip").to_string(), "substring:ip");
        assert_eq!(MatchSource::Literal.to_string(), "literal");
    }
}
