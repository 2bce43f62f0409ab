use super::error::{InvokerError, Result};

/// Flag prefixes refused in passthrough mode.
///
/// Matching is by prefix, so `-fpatterns.txt` and `--file=x` are caught, and so is
/// `--files-with-matches` (use the dedicated tool for that).
const DENIED_FLAG_PREFIXES: &[&str] = &[
    "--devices=",
    "--binary-files=",
    "-f",
    "--file",
    "-D",
    "--devices",
];

/// Return the first denied argument, if any.
pub fn find_unsafe_arg(args: &[String]) -> Option<&str> {
    args.iter()
        .map(String::as_str)
        .find(|arg| DENIED_FLAG_PREFIXES.iter().any(|p| arg.starts_with(p)))
}

/// Reject passthrough argument lists that contain a denied flag.
pub fn check_passthrough_args(args: &[String]) -> Result<()> {
    match find_unsafe_arg(args) {
        Some(arg) => Err(InvokerError::UnsafeFlag(arg.to_string())),
        None => Ok(()),
    }
}
