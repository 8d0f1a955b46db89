use crate::error::AnalyticsError;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One entry of the top-products ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub product: String,
    pub revenue: f64,
}

/// The final output of the `RevenueAnalyzer`.
///
/// Field order here is the key order of the JSON document, and regions are
/// kept in a `BTreeMap`, so serializing the same result always yields the
/// same bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub row_count: usize,
    pub regions_count: usize,
    pub top_n_products_by_revenue: Vec<TopProduct>,
    /// `None` (JSON `null`) for a region without any daily revenue.
    pub rolling_7d_revenue_by_region: BTreeMap<String, Option<f64>>,
}

impl AnalysisResult {
    /// Serializes the result as 4-space indented JSON with a trailing newline.
    pub fn to_json_string(&self) -> Result<String, AnalyticsError> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut serializer)?;
        buf.push(b'\n');

        Ok(String::from_utf8(buf)?)
    }

    /// Writes the JSON document to `path`, creating parent directories as needed.
    pub fn write_json(&self, path: &Path) -> Result<(), AnalyticsError> {
        let json = self.to_json_string()?;
        let io_err = |source: std::io::Error| AnalyticsError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, json).map_err(io_err)?;

        tracing::info!(path = %path.display(), "Analysis result written.");
        Ok(())
    }
}
