use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GrepCountRequest {
    #[schemars(description = "Regular expression pattern or plain text to count")]
    pub pattern: String,

    #[schemars(description = "File or directory path to search in")]
    pub target: String,

    #[schemars(description = "Whether the search should be case sensitive (default: false)")]
    pub case_sensitive: Option<bool>,

    #[schemars(description = "Match whole words only (default: false)")]
    pub whole_words: Option<bool>,

    /// Prefix each count with its file name (directories only)
    #[schemars(description = "Show count per file when searching directories (default: false)")]
    pub by_file: Option<bool>,

    #[schemars(description = "Only search files with these extensions")]
    pub file_extensions: Option<Vec<String>>,
}
