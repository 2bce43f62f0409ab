use std::ffi::OsStr;
use std::process::Stdio;

use tokio::process::Command;

/// Raw result of one grep process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrepOutput {
    pub stdout: String,
    pub stderr: String,
    /// Process exit code; `1` when the spawn itself failed, `-1` when killed by a signal.
    pub exit_code: i32,
}

/// Spawn `program` with `args`, wait for it, and capture everything it printed.
///
/// Never fails: a spawn error is folded into `stderr` with exit code 1. There is no timeout.
pub async fn run_grep(program: &OsStr, args: &[String]) -> GrepOutput {
    log::debug!("spawning {} {:?}", program.to_string_lossy(), args);

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await;

    match output {
        Ok(out) => GrepOutput {
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
            exit_code: out.status.code().unwrap_or(-1),
        },
        Err(err) => {
            log::warn!("failed to spawn {}: {err}", program.to_string_lossy());
            GrepOutput {
                stdout: String::new(),
                stderr: err.to_string(),
                exit_code: 1,
            }
        }
    }
}
