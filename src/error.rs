//! Error types for reencode_to_size.

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while probing or encoding.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required external tool could not be started.
    #[error("tool not found: {tool}")]
    ToolNotFound { tool: String },

    /// An external tool failed to run or exited unsuccessfully.
    #[error("tool execution failed: {tool}: {message}")]
    ToolFailed { tool: String, message: String },

    /// Failed to parse tool output.
    #[error("failed to parse {tool} output: {message}")]
    Parse { tool: String, message: String },

    /// An encode pass exited non-zero (strict mode only).
    #[error("encode pass {pass} failed with exit code {code:?}")]
    PassFailed { pass: u8, code: Option<i32> },

    /// ffprobe reported a duration no bitrate can be derived from.
    #[error("unusable duration: {0} seconds")]
    InvalidDuration(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    pub fn tool_failed(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ToolFailed {
            tool: tool.into(),
            message: message.into(),
        }
    }

    pub fn parse(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            tool: tool.into(),
            message: message.into(),
        }
    }
}
