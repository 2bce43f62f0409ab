use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GrepFilesWithMatchesRequest {
    #[schemars(description = "Regular expression pattern or plain text to search for")]
    pub pattern: String,

    /// Must be a directory
    #[schemars(description = "Directory path to search in")]
    pub target: String,

    #[schemars(description = "Whether the search should be case sensitive (default: false)")]
    pub case_sensitive: Option<bool>,

    #[schemars(description = "Match whole words only (default: false)")]
    pub whole_words: Option<bool>,

    #[schemars(description = "Only search files with these extensions")]
    pub file_extensions: Option<Vec<String>>,

    /// File-name globs passed to `--exclude`
    #[schemars(description = "Exclude files matching these patterns (e.g., ['*.min.js'])")]
    pub exclude_patterns: Option<Vec<String>>,
}
