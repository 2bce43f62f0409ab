// Per-tool dispatch functions used by the MCP tool router.

pub(super) mod advanced;
pub(super) mod count;
pub(super) mod error;
pub(super) mod files_with_matches;
pub(super) mod regex;
pub(super) mod render;
pub(super) mod search_intent;

mod tool_router;

pub(super) fn build_tool_router() -> rmcp::handler::server::tool::ToolRouter<super::GrepService> {
    tool_router::build_tool_router()
}
