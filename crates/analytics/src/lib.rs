//! # Sales Revenue Analytics
//!
//! Computes the revenue summary of a sales `Dataset`: row count, distinct
//! regions, the top products by revenue and the trailing 7-day average of
//! daily revenue for every region.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** this crate never reads input. It depends only on
//!   `core-types` and receives an already-loaded `Dataset`.
//! - **Stateless calculation:** `RevenueAnalyzer` holds no state between
//!   runs. Identical input always produces byte-identical JSON.
//!
//! ## Public API
//!
//! - `RevenueAnalyzer`: the calculator.
//! - `AnalysisResult` / `TopProduct`: the serializable output.
//! - `rolling`: the calendar-complete rolling-mean helpers.
//! - `AnalyticsError`: the errors this crate can return.

pub mod engine;
pub mod error;
pub mod report;
pub mod rolling;

pub use engine::{ROLLING_WINDOW_DAYS, RevenueAnalyzer, TOP_N_PRODUCTS};
pub use error::AnalyticsError;
pub use report::{AnalysisResult, TopProduct};
