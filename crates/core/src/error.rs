use thiserror::Error;

/// Top-level error type used across the whole workspace.
#[derive(Debug, Error)]
pub enum IndicatorError {
    #[error("config error: {0}")]
    Config(String),

    /// `where` was supplied but matched nothing in the host document.
    #[error("configuration error: target '{selector}' matched no element")]
    TargetNotFound { selector: String },

    #[error("unsupported selector: {0}")]
    UnsupportedSelector(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = IndicatorError> = std::result::Result<T, E>;
