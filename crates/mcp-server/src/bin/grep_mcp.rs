use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    grep_mcp::main_entry().await
}
