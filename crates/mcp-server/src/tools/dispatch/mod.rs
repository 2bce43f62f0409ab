//! MCP tool dispatch for grep-mcp
//!
//! Exposes grep to AI agents via MCP protocol.

use super::schemas::advanced::GrepAdvancedRequest;
use super::schemas::count::GrepCountRequest;
use super::schemas::files_with_matches::GrepFilesWithMatchesRequest;
use super::schemas::regex::GrepRegexRequest;
use super::schemas::search_intent::GrepSearchIntentRequest;
use super::schemas::DEFAULT_CONTEXT_LINES;
use crate::config::GrepConfig;
use crate::invoker::{run_grep, GrepOutput};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;
use std::sync::Arc;

mod router;
mod service;

/// grep MCP Service
#[derive(Clone)]
pub struct GrepService {
    /// Immutable settings shared by all requests
    config: Arc<GrepConfig>,
    /// Tool router
    tool_router: ToolRouter<Self>,
}

impl GrepService {
    pub fn config(&self) -> &GrepConfig {
        &self.config
    }

    pub(in crate::tools::dispatch) async fn run(&self, args: &[String]) -> GrepOutput {
        run_grep(&self.config.grep_bin, args).await
    }
}

/// Context lines to request: only when `show_context` is set, defaulting to two.
pub(in crate::tools::dispatch) fn requested_context(
    show_context: Option<bool>,
    context_lines: Option<f64>,
) -> Option<u64> {
    if !show_context.unwrap_or(false) {
        return None;
    }
    match context_lines {
        Some(lines) => positive_count(Some(lines)),
        None => Some(DEFAULT_CONTEXT_LINES),
    }
}

/// Whole positive part of a caller-supplied count. Zero, negative and non-finite values mean
/// "not set".
pub(in crate::tools::dispatch) fn positive_count(value: Option<f64>) -> Option<u64> {
    value
        .filter(|n| n.is_finite() && *n >= 1.0)
        .map(|n| n.trunc() as u64)
}
