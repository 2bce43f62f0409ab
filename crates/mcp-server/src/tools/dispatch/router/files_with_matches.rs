use super::super::{CallToolResult, GrepFilesWithMatchesRequest, GrepService, McpError};
use super::error::invoker_error;
use super::render::{render_output, text_result};
use crate::invoker::{validate_directory, GrepInvocation, OutputMode};

pub(in crate::tools::dispatch) async fn grep_files_with_matches(
    service: &GrepService,
    request: GrepFilesWithMatchesRequest,
) -> Result<CallToolResult, McpError> {
    let target = match validate_directory(&request.target).await {
        Ok(t) => t,
        Err(e) => return Ok(invoker_error("grep_files_with_matches", &e)),
    };
    log::debug!(
        "grep_files_with_matches: {:?} in {}",
        request.pattern,
        target.path
    );

    let file_extensions = request.file_extensions.unwrap_or_default();
    let exclude_patterns = request.exclude_patterns.unwrap_or_default();
    let invocation = GrepInvocation {
        case_sensitive: request.case_sensitive.unwrap_or(false),
        whole_words: request.whole_words.unwrap_or(false),
        file_extensions: &file_extensions,
        exclude_patterns: &exclude_patterns,
        ..GrepInvocation::new(&request.pattern, &target, OutputMode::FilesWithMatches)
    };
    let output = service.run(&invocation.args()).await;

    let header = format!("Pattern: {}\n", request.pattern);
    Ok(text_result(render_output(
        &header,
        "Files containing matches",
        &output,
    )))
}
