use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Metric '{0}' cannot be represented as a JSON number")]
    Conversion(String),

    #[error("Revenue overflowed the decimal range while computing {0}")]
    Overflow(String),

    #[error("Failed to serialize analysis result: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Serialized analysis result is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Failed to write analysis result to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
