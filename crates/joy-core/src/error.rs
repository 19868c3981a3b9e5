pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("missing arguments for {shape}: {}", missing.join(", "))]
    MissingArguments {
        shape: &'static str,
        missing: Vec<&'static str>,
    },

    #[error("repeat count must be at least 1 (got {n})")]
    InvalidRepeatCount { n: i64 },

    #[error("cycle count must be at least 1 (got {n})")]
    InvalidCycleCount { n: i64 },
}

impl Error {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
