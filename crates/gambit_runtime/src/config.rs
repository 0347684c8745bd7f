//! Runtime configuration for the REPL and CLI.

/// Configuration shared by the REPL and the CLI binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Primary REPL prompt.
    pub prompt: String,
    /// Maximum line-editor history entries.
    pub history_limit: usize,
    /// Pretty-print JSON output.
    pub pretty_json: bool,
    /// Show the welcome banner.
    pub show_banner: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            prompt: "gambit> ".to_string(),
            history_limit: 1000,
            pretty_json: true,
            show_banner: true,
        }
    }
}

impl RuntimeConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Emits compact JSON instead of pretty-printed.
    #[must_use]
    pub const fn compact_json(mut self) -> Self {
        self.pretty_json = false;
        self
    }
}
