//! # Sales Data Handler
//!
//! Turns a sales CSV into an immutable `Dataset`. This is the only crate that
//! touches the input file; everything downstream works on `core_types` values.
//!
//! A missing file is reported as `DataError::InputNotFound` so the caller can
//! tell it apart from malformed content, which is always fatal.

pub mod error;
pub mod loader;

pub use error::DataError;
pub use loader::{load_dataset, load_from_reader};
