use super::super::{CallToolResult, Content, GrepOutput};

/// Render grep's output under `header`, with stdout labelled `section`.
///
/// stderr is appended only when grep printed something there.
pub(in crate::tools::dispatch) fn render_output(
    header: &str,
    section: &str,
    output: &GrepOutput,
) -> String {
    let mut text = format!(
        "{header}Exit Code: {}\n\n{section}:\n{}",
        output.exit_code, output.stdout
    );
    if !output.stderr.is_empty() {
        text.push_str("\n\nErrors:\n");
        text.push_str(&output.stderr);
    }
    text
}

pub(in crate::tools::dispatch) fn text_result(text: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}
