use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GrepAdvancedRequest {
    /// Raw grep argv, checked against the passthrough denylist before running
    #[schemars(description = "Array of grep arguments (excluding 'grep' itself)")]
    pub args: Vec<String>,
}
