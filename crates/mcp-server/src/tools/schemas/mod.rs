pub mod advanced;
pub mod count;
pub mod files_with_matches;
pub mod regex;
pub mod search_intent;

pub(crate) const DEFAULT_CONTEXT_LINES: u64 = 2;
