use super::super::{
    positive_count, requested_context, CallToolResult, GrepRegexRequest, GrepService, McpError,
};
use super::error::invoker_error;
use super::render::{render_output, text_result};
use crate::invoker::{validate_target, GrepInvocation, OutputMode};

pub(in crate::tools::dispatch) async fn grep_regex(
    service: &GrepService,
    request: GrepRegexRequest,
) -> Result<CallToolResult, McpError> {
    let target = match validate_target(&request.target).await {
        Ok(t) => t,
        Err(e) => return Ok(invoker_error("grep_regex", &e)),
    };
    log::debug!("grep_regex: {:?} in {}", request.pattern, target.path);

    let file_extensions = request.file_extensions.unwrap_or_default();
    let invocation = GrepInvocation {
        case_sensitive: request.case_sensitive.unwrap_or(false),
        whole_words: request.whole_words.unwrap_or(false),
        invert_match: request.invert_match.unwrap_or(false),
        context_lines: requested_context(request.show_context, request.context_lines),
        max_results: positive_count(request.max_results),
        file_extensions: &file_extensions,
        ..GrepInvocation::new(&request.pattern, &target, OutputMode::Lines)
    };
    let output = service.run(&invocation.args()).await;

    let header = format!("Pattern: {}\n", request.pattern);
    Ok(text_result(render_output(&header, "Results", &output)))
}
