use super::super::{
    positive_count, requested_context, CallToolResult, GrepSearchIntentRequest, GrepService,
    McpError,
};
use super::error::invoker_error;
use super::render::{render_output, text_result};
use crate::invoker::{validate_target, GrepInvocation, OutputMode};

pub(in crate::tools::dispatch) async fn grep_search_intent(
    service: &GrepService,
    request: GrepSearchIntentRequest,
) -> Result<CallToolResult, McpError> {
    let target = match validate_target(&request.target).await {
        Ok(t) => t,
        Err(e) => return Ok(invoker_error("grep_search_intent", &e)),
    };

    let resolution = grep_intent::resolve(&request.intent);
    log::debug!(
        "grep_search_intent: {:?} -> {} ({})",
        request.intent,
        resolution.pattern,
        resolution.source
    );

    let invocation = GrepInvocation {
        case_sensitive: request.case_sensitive.unwrap_or(false),
        context_lines: requested_context(request.show_context, request.context_lines),
        max_results: positive_count(request.max_results),
        ..GrepInvocation::new(&resolution.pattern, &target, OutputMode::Lines)
    };
    let output = service.run(&invocation.args()).await;

    let header = format!(
        "Search Intent: \"{}\"\nPattern Used: {}\n",
        request.intent, resolution.pattern
    );
    Ok(text_result(render_output(&header, "Results", &output)))
}
