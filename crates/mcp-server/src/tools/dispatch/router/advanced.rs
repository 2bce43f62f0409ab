use super::super::{CallToolResult, GrepAdvancedRequest, GrepService, McpError};
use super::error::invoker_error;
use super::render::{render_output, text_result};
use crate::invoker::check_passthrough_args;

pub(in crate::tools::dispatch) async fn grep_advanced(
    service: &GrepService,
    request: GrepAdvancedRequest,
) -> Result<CallToolResult, McpError> {
    if let Err(e) = check_passthrough_args(&request.args) {
        return Ok(invoker_error("grep_advanced", &e));
    }
    log::debug!("grep_advanced: {:?}", request.args);

    let output = service.run(&request.args).await;
    Ok(text_result(render_output("", "Results", &output)))
}
