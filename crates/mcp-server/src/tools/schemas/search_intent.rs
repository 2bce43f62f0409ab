use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GrepSearchIntentRequest {
    /// Plain English description of what to search for
    #[schemars(
        description = "Plain English description of what to search for (e.g. 'email addresses', 'phone numbers', 'TODO comments'). Unknown phrases are searched literally."
    )]
    pub intent: String,

    /// File or directory to search
    #[schemars(description = "File or directory path to search in")]
    pub target: String,

    /// Case-sensitive matching (default: false)
    #[schemars(description = "Whether the search should be case sensitive (default: false)")]
    pub case_sensitive: Option<bool>,

    /// Stop after this many matching lines per file
    #[schemars(description = "Maximum number of results to return")]
    pub max_results: Option<f64>,

    /// Show surrounding lines (default: false)
    #[schemars(description = "Show surrounding lines for context (default: false)")]
    pub show_context: Option<bool>,

    /// Context lines before/after each match when `show_context` is set (default: 2)
    #[schemars(
        description = "Number of context lines to show before/after matches (default: 2)"
    )]
    pub context_lines: Option<f64>,
}
