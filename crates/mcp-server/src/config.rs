use std::env;
use std::ffi::OsString;

/// Env override for the grep executable.
pub const GREP_BIN_ENV: &str = "GREP_MCP_GREP_BIN";

const DEFAULT_GREP_BIN: &str = "grep";

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrepConfig {
    pub grep_bin: OsString,
}

impl Default for GrepConfig {
    fn default() -> Self {
        Self {
            grep_bin: OsString::from(DEFAULT_GREP_BIN),
        }
    }
}

impl GrepConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(bin) = env_override(GREP_BIN_ENV) {
            config.grep_bin = bin;
        }
        config
    }
}

fn env_override(key: &str) -> Option<OsString> {
    let value = env::var_os(key)?;
    if value.to_string_lossy().trim().is_empty() {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ENV_MUTEX;

    #[test]
    fn grep_bin_defaults_and_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        env::remove_var(GREP_BIN_ENV);
        assert_eq!(GrepConfig::from_env().grep_bin, OsString::from("grep"));

        env::set_var(GREP_BIN_ENV, "   ");
        assert_eq!(GrepConfig::from_env().grep_bin, OsString::from("grep"));

        env::set_var(GREP_BIN_ENV, "/usr/local/bin/ggrep");
        assert_eq!(
            GrepConfig::from_env().grep_bin,
            OsString::from("/usr/local/bin/ggrep")
        );

        env::remove_var(GREP_BIN_ENV);
    }
}
