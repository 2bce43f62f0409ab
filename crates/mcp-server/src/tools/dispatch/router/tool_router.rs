use super::super::*;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::{tool, tool_router};

pub(super) fn build_tool_router() -> ToolRouter<GrepService> {
    GrepService::tool_router()
}

#[tool_router]
impl GrepService {
    /// Search by plain-English intent.
    #[tool(
        description = "Search for patterns using plain English descriptions (e.g., 'email addresses', 'phone numbers', 'TODO comments')"
    )]
    pub async fn grep_search_intent(
        &self,
        Parameters(request): Parameters<GrepSearchIntentRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::search_intent::grep_search_intent(self, request).await
    }

    /// Search with an explicit extended regex.
    #[tool(description = "Search using a direct regex pattern")]
    pub async fn grep_regex(
        &self,
        Parameters(request): Parameters<GrepRegexRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::regex::grep_regex(self, request).await
    }

    /// Count matching lines.
    #[tool(description = "Count the number of matches for a pattern")]
    pub async fn grep_count(
        &self,
        Parameters(request): Parameters<GrepCountRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::count::grep_count(self, request).await
    }

    /// List files containing a match.
    #[tool(description = "List only the names of files that contain the pattern")]
    pub async fn grep_files_with_matches(
        &self,
        Parameters(request): Parameters<GrepFilesWithMatchesRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::files_with_matches::grep_files_with_matches(self, request).await
    }

    /// Raw grep arguments, filtered through the passthrough denylist.
    #[tool(description = "Execute grep with custom arguments (advanced usage)")]
    pub async fn grep_advanced(
        &self,
        Parameters(request): Parameters<GrepAdvancedRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::advanced::grep_advanced(self, request).await
    }
}
