use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Raised deliberately by the tool layer; never re-wrapped.
    #[error("Invalid input for tool '{tool}': {message}")]
    InvalidInput { tool: String, message: String },

    #[error("{message}")]
    Invocation { tool: String, message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Helper for creating configuration errors
    ///
    /// # Example
    /// ```
    /// use scrapeless_core::Error;
    /// let err = Error::config_error("base_url must not be empty");
    /// ```
    pub fn config_error(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Helper for creating general errors with a message
    ///
    /// # Example
    /// ```
    /// use scrapeless_core::Error;
    /// let err = Error::message("Something went wrong");
    /// ```
    pub fn message(msg: impl Into<String>) -> Self {
        Error::Other(anyhow::anyhow!("{}", msg.into()))
    }

    /// Helper for creating tool-level input errors
    pub fn invalid_input(tool: impl Into<String>, msg: impl Into<String>) -> Self {
        Error::InvalidInput {
            tool: tool.into(),
            message: msg.into(),
        }
    }

    /// Whether this error was already classified by the tool layer.
    pub fn is_tool_error(&self) -> bool {
        matches!(self, Error::InvalidInput { .. } | Error::Invocation { .. })
    }
}
