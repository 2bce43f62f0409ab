use super::{router, GrepService};
use crate::config::GrepConfig;
use rmcp::model::{Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool_handler, ServerHandler};
use std::sync::Arc;

impl GrepService {
    pub fn new() -> Self {
        Self::with_config(GrepConfig::from_env())
    }

    pub fn with_config(config: GrepConfig) -> Self {
        Self {
            config: Arc::new(config),
            tool_router: router::build_tool_router(),
        }
    }
}

impl Default for GrepService {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for GrepService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some("grep-mcp runs grep for you. Use 'grep_search_intent' to describe what to find in plain English (emails, URLs, TODOs, ...), 'grep_regex' for an explicit extended regex, 'grep_count' to count matches, 'grep_files_with_matches' to list matching files in a directory, and 'grep_advanced' to pass raw grep arguments.".into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}
