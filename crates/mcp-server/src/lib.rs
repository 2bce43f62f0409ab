//! grep MCP Server
//!
//! Exposes grep to AI agents via MCP protocol.
//!
//! ## Tools
//!
//! - `grep_search_intent` - Search by plain English intent ("email addresses", "TODO comments")
//! - `grep_regex` - Search with an explicit extended regex
//! - `grep_count` - Count matching lines
//! - `grep_files_with_matches` - List files in a directory that contain a match
//! - `grep_advanced` - Pass raw grep arguments (unsafe flags are refused)
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "grep": {
//!       "command": "grep-mcp"
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

pub mod config;
pub mod invoker;
mod tools;

#[cfg(test)]
mod test_support;

pub use config::GrepConfig;
pub use tools::GrepService;

pub async fn main_entry() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let service = GrepService::new();
    log::info!(
        "Starting grep MCP server (grep binary: {})",
        service.config().grep_bin.to_string_lossy()
    );

    let server = service.serve(stdio()).await?;

    // Wait for shutdown
    server.waiting().await?;

    log::info!("grep MCP server stopped");
    Ok(())
}
