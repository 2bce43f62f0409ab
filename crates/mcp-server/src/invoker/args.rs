use super::target::Target;

/// What grep should print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Matching lines with line numbers (`-n`).
    #[default]
    Lines,
    /// Match counts (`-c`); `by_file` forces filename prefixes for recursive searches.
    Count { by_file: bool },
    /// Names of matching files only (`-l`).
    FilesWithMatches,
}

/// A fully described grep search, minus the process plumbing.
#[derive(Debug, Clone)]
pub struct GrepInvocation<'a> {
    pub pattern: &'a str,
    pub target: &'a Target,
    pub mode: OutputMode,
    pub case_sensitive: bool,
    pub whole_words: bool,
    pub invert_match: bool,
    /// Symmetric context lines (`-C<n>`); ignored when zero.
    pub context_lines: Option<u64>,
    /// Per-file match limit (`-m <n>`); ignored when zero.
    pub max_results: Option<u64>,
    /// Extensions without the leading dot; only applied to directory targets.
    pub file_extensions: &'a [String],
    pub exclude_patterns: &'a [String],
}

impl<'a> GrepInvocation<'a> {
    pub fn new(pattern: &'a str, target: &'a Target, mode: OutputMode) -> Self {
        Self {
            pattern,
            target,
            mode,
            case_sensitive: false,
            whole_words: false,
            invert_match: false,
            context_lines: None,
            max_results: None,
            file_extensions: &[],
            exclude_patterns: &[],
        }
    }

    /// Assemble grep's argv (without the program name). Deterministic for a given invocation.
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::new();

        match self.mode {
            OutputMode::Count { .. } => args.push("-c".to_string()),
            OutputMode::FilesWithMatches => args.push("-l".to_string()),
            OutputMode::Lines => {}
        }

        args.push("-E".to_string());
        args.push("-e".to_string());
        args.push(self.pattern.to_string());

        if !self.case_sensitive {
            args.push("-i".to_string());
        }
        if self.whole_words {
            args.push("-w".to_string());
        }
        if self.invert_match {
            args.push("-v".to_string());
        }

        if self.target.is_dir() {
            args.push("-r".to_string());
            if self.mode == (OutputMode::Count { by_file: true }) {
                args.push("-H".to_string());
            }
        }

        if self.mode == OutputMode::Lines {
            args.push("-n".to_string());
        }

        if let Some(lines) = self.context_lines.filter(|n| *n > 0) {
            args.push(format!("-C{lines}"));
        }
        if let Some(max) = self.max_results.filter(|n| *n > 0) {
            args.push("-m".to_string());
            args.push(max.to_string());
        }

        if self.target.is_dir() {
            for ext in self.file_extensions {
                args.push("--include".to_string());
                args.push(format!("*.{ext}"));
            }
        }
        for pattern in self.exclude_patterns {
            args.push("--exclude".to_string());
            args.push(pattern.clone());
        }

        args.push("--".to_string());
        args.push(self.target.path.clone());
        args
    }
}
