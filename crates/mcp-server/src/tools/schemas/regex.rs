use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GrepRegexRequest {
    /// Extended regular expression (grep -E)
    #[schemars(description = "Regular expression pattern to search for (POSIX extended syntax)")]
    pub pattern: String,

    #[schemars(description = "File or directory path to search in")]
    pub target: String,

    #[schemars(description = "Whether the search should be case sensitive (default: false)")]
    pub case_sensitive: Option<bool>,

    #[schemars(description = "Match whole words only (default: false)")]
    pub whole_words: Option<bool>,

    #[schemars(description = "Show lines that don't match the pattern (default: false)")]
    pub invert_match: Option<bool>,

    #[schemars(description = "Maximum number of results to return")]
    pub max_results: Option<f64>,

    #[schemars(description = "Show surrounding lines for context (default: false)")]
    pub show_context: Option<bool>,

    #[schemars(
        description = "Number of context lines to show before/after matches (default: 2)"
    )]
    pub context_lines: Option<f64>,

    /// Extensions without the dot; ignored for single-file targets
    #[schemars(
        description = "Only search files with these extensions (e.g., ['js', 'ts']); directories only"
    )]
    pub file_extensions: Option<Vec<String>>,
}
