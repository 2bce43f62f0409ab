use super::super::{CallToolResult, GrepCountRequest, GrepService, McpError};
use super::error::invoker_error;
use super::render::{render_output, text_result};
use crate::invoker::{validate_target, GrepInvocation, OutputMode};

pub(in crate::tools::dispatch) async fn grep_count(
    service: &GrepService,
    request: GrepCountRequest,
) -> Result<CallToolResult, McpError> {
    let target = match validate_target(&request.target).await {
        Ok(t) => t,
        Err(e) => return Ok(invoker_error("grep_count", &e)),
    };
    log::debug!("grep_count: {:?} in {}", request.pattern, target.path);

    let file_extensions = request.file_extensions.unwrap_or_default();
    let mode = OutputMode::Count {
        by_file: request.by_file.unwrap_or(false),
    };
    let invocation = GrepInvocation {
        case_sensitive: request.case_sensitive.unwrap_or(false),
        whole_words: request.whole_words.unwrap_or(false),
        file_extensions: &file_extensions,
        ..GrepInvocation::new(&request.pattern, &target, mode)
    };
    let output = service.run(&invocation.args()).await;

    let header = format!("Pattern: {}\n", request.pattern);
    Ok(text_result(render_output(&header, "Match Counts", &output)))
}
