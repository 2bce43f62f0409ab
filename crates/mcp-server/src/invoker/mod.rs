//! Building and running grep processes.
//!
//! Everything here is per-call: validate the target, assemble argv, spawn grep once, hand back
//! its raw output. Nothing is retried or cached.

mod args;
mod error;
mod process;
mod safety;
mod target;

pub use args::{GrepInvocation, OutputMode};
pub use error::{InvokerError, Result};
pub use process::{run_grep, GrepOutput};
pub use safety::{check_passthrough_args, find_unsafe_arg};
pub use target::{validate_directory, validate_target, Target, TargetKind};
