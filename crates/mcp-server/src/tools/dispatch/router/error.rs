use super::super::{CallToolResult, Content};
use crate::invoker::InvokerError;

/// Turn a pre-spawn rejection into a tool-level error result.
pub(in crate::tools::dispatch) fn invoker_error(tool: &str, err: &InvokerError) -> CallToolResult {
    match err {
        InvokerError::UnsafeFlag(arg) => log::warn!("{tool}: rejected unsafe flag {arg:?}"),
        other => log::warn!("{tool}: {other}"),
    }
    CallToolResult::error(vec![Content::text(format!("Error: {err}"))])
}
