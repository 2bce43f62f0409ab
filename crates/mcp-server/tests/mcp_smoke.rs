use anyhow::{Context, Result};
use std::collections::HashSet;
use std::time::Duration;

mod support;

#[tokio::test]
async fn mcp_exposes_all_grep_tools() -> Result<()> {
    let service = support::start_server().await?;

    let tools = tokio::time::timeout(
        Duration::from_secs(10),
        service.list_tools(Default::default()),
    )
    .await
    .context("timeout listing tools")??;
    let tool_names: HashSet<&str> = tools.tools.iter().map(|t| t.name.as_ref()).collect();
    for expected in [
        "grep_search_intent",
        "grep_regex",
        "grep_count",
        "grep_files_with_matches",
        "grep_advanced",
    ] {
        assert!(
            tool_names.contains(expected),
            "missing tool '{expected}' (available: {tool_names:?})"
        );
    }
    assert_eq!(tool_names.len(), 5, "unexpected tools: {tool_names:?}");

    let intent = tools
        .tools
        .iter()
        .find(|t| t.name == "grep_search_intent")
        .context("grep_search_intent listed")?;
    let schema = serde_json::to_string(intent.input_schema.as_ref())?;
    for field in ["intent", "target", "case_sensitive", "context_lines"] {
        assert!(schema.contains(field), "schema missing {field}: {schema}");
    }

    service.cancel().await.context("shutdown")?;
    Ok(())
}

#[tokio::test]
async fn rejected_requests_do_not_kill_the_server() -> Result<()> {
    let service = support::start_server().await?;
    let tmp = tempfile::tempdir().context("tempdir")?;
    let missing = tmp.path().join("missing");

    let first = support::call(
        &service,
        "grep_regex",
        serde_json::json!({ "pattern": "x", "target": missing.to_string_lossy() }),
    )
    .await?;
    assert_eq!(first.is_error, Some(true));
    assert_eq!(
        support::tool_text(&first)?,
        format!("Error: Path does not exist: {}", missing.to_string_lossy())
    );

    let second = support::call(
        &service,
        "grep_advanced",
        serde_json::json!({ "args": ["--binary-files=text", "x", "."] }),
    )
    .await?;
    assert_eq!(second.is_error, Some(true));

    std::fs::write(tmp.path().join("a.txt"), "still alive\n").context("write a.txt")?;
    let third = support::call(
        &service,
        "grep_count",
        serde_json::json!({
            "pattern": "alive",
            "target": tmp.path().join("a.txt").to_string_lossy(),
        }),
    )
    .await?;
    assert_ne!(third.is_error, Some(true));
    assert_eq!(
        support::tool_text(&third)?,
        "Pattern: alive\nExit Code: 0\n\nMatch Counts:\n1\n"
    );

    service.cancel().await.context("shutdown")?;
    Ok(())
}
