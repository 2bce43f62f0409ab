// Patterns are POSIX extended regexes as GNU `grep -E` reads them: no `\d`, no `(?:`, and
// `\s` is not special inside brackets.
const EMAIL: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";
const URL: &str = r"https?://[^[:space:]]+";
const IP_ADDRESS: &str = r"\b([0-9]{1,3}\.){3}[0-9]{1,3}\b";
const PHONE: &str = r"\b[0-9]{3}[-.]?[0-9]{3}[-.]?[0-9]{4}\b";
const DATE: &str = r"\b[0-9]{1,2}[/-][0-9]{1,2}[/-][0-9]{2,4}\b";
const NUMBER: &str = r"\b[0-9]+\b";
const FUNCTION: &str = r"\bfunction\s+\w+\s*\(";
const CLASS: &str = r"\bclass\s+\w+";
const IMPORT: &str = r"^\s*import\b";
const EXPORT: &str = r"^\s*export\b";
const TODO: &str = r"\b(TODO|FIXME|HACK|XXX)\b";
const COMMENT: &str = r"^\s*(/\*|//|#)";
const ERROR: &str = r"\b(error|Error|ERROR)\b";
const WARNING: &str = r"\b(warning|Warning|WARNING)\b";

/// Known intents, keyed by lowercase phrase.
///
/// Order matters: substring resolution walks this slice front to back and stops at the first key
/// contained in the phrase. Keep new entries grouped with their category.
pub(crate) const INTENTS: &[(&str, &str)] = &[
    ("email", EMAIL),
    ("email address", EMAIL),
    ("emails", EMAIL),
    ("url", URL),
    ("urls", URL),
    ("website", URL),
    ("link", URL),
    ("links", URL),
    ("ip address", IP_ADDRESS),
    ("ip addresses", IP_ADDRESS),
    ("ip", IP_ADDRESS),
    ("phone number", PHONE),
    ("phone numbers", PHONE),
    ("phone", PHONE),
    ("date", DATE),
    ("dates", DATE),
    ("number", NUMBER),
    ("numbers", NUMBER),
    ("integer", NUMBER),
    ("integers", NUMBER),
    ("function", FUNCTION),
    ("functions", FUNCTION),
    ("class", CLASS),
    ("classes", CLASS),
    ("import", IMPORT),
    ("imports", IMPORT),
    ("export", EXPORT),
    ("exports", EXPORT),
    ("todo", TODO),
    ("todos", TODO),
    ("comment", COMMENT),
    ("comments", COMMENT),
    ("error", ERROR),
    ("errors", ERROR),
    ("warning", WARNING),
    ("warnings", WARNING),
];

#[cfg(test)]
mod tests {
    use super::INTENTS;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique_and_normalized() {
        let mut seen = HashSet::new();
        for (key, pattern) in INTENTS {
            assert!(seen.insert(*key), "duplicate intent key {key:?}");
            assert_eq!(*key, key.trim().to_lowercase(), "key {key:?} is not normalized");
            assert!(!pattern.is_empty());
        }
    }
}
