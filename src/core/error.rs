use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Connection info unavailable: {0}")]
    ConnectionUnavailable(String),

    #[error("Invalid alias: {0}")]
    InvalidAlias(String),

    #[error("Pipeline exited with code {exit_code}")]
    PipelineFailed { exit_code: i32 },

    #[error("Environment error: {0}")]
    Environment(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::ConnectionUnavailable(_) => "CONNECTION_UNAVAILABLE",
            Error::InvalidAlias(_) => "INVALID_ALIAS",
            Error::PipelineFailed { .. } => "PIPELINE_FAILED",
            Error::Environment(_) => "ENVIRONMENT_ERROR",
            Error::Io(_) => "IO_ERROR",
            Error::Json(_) => "JSON_ERROR",
            Error::Other(_) => "ERROR",
        }
    }

    /// Process exit code for the CLI. A failed pipeline surfaces the
    /// pipeline's own exit code; everything else is a plain failure.
    ///
    /// A signal-terminated pipeline has no exit code and the runner records
    /// it as -1; that must still exit non-zero, so non-positive codes map
    /// to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::PipelineFailed { exit_code } if *exit_code > 0 => *exit_code,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_failure_surfaces_its_own_exit_code() {
        assert_eq!(Error::PipelineFailed { exit_code: 7 }.exit_code(), 7);
    }

    #[test]
    fn signal_terminated_pipeline_still_exits_nonzero() {
        assert_eq!(Error::PipelineFailed { exit_code: -1 }.exit_code(), 1);
        assert_eq!(Error::PipelineFailed { exit_code: 0 }.exit_code(), 1);
    }
}
