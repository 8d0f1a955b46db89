use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read input file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error at line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid date at line {line}: {source}")]
    InvalidDate {
        line: u64,
        #[source]
        source: core_types::CoreError,
    },

    #[error("Input is missing required column(s): {}", .0.join(", "))]
    MissingColumn(Vec<String>),

    #[error("Number in column '{column}' at line {line} is outside the supported range: '{value}'")]
    OutOfRange {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("Invalid number in column '{column}' at line {line}: '{value}'")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },
}
