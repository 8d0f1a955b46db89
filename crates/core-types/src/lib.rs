pub mod dates;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use dates::parse_calendar_date;
pub use error::CoreError;
pub use structs::{Dataset, SaleRecord};
