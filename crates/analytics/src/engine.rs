use crate::error::AnalyticsError;
use crate::report::{AnalysisResult, TopProduct};
use crate::rolling;
use core_types::Dataset;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::collections::{BTreeMap, HashSet};

/// Number of products reported in `top_n_products_by_revenue`.
pub const TOP_N_PRODUCTS: usize = 3;

/// Length of the trailing revenue window, in calendar days.
pub const ROLLING_WINDOW_DAYS: usize = 7;

/// A stateless calculator for deriving revenue metrics from a sales dataset.
#[derive(Debug, Default)]
pub struct RevenueAnalyzer {}

impl RevenueAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating the revenue summary.
    ///
    /// # Arguments
    ///
    /// * `dataset` - Every record loaded from the input, in file order.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `AnalysisResult` or an `AnalyticsError`.
    pub fn analyze(&self, dataset: &Dataset) -> Result<AnalysisResult, AnalyticsError> {
        // Counted from the raw rows, before any per-region gap filling.
        let row_count = dataset.len();
        if dataset.is_empty() {
            tracing::warn!("Dataset is empty; every metric will be empty or zero.");
        }

        let result = AnalysisResult {
            row_count,
            regions_count: self.count_regions(dataset),
            top_n_products_by_revenue: self.top_products(dataset)?,
            rolling_7d_revenue_by_region: self.rolling_revenue_by_region(dataset)?,
        };

        tracing::info!(
            rows = result.row_count,
            regions = result.regions_count,
            products = result.top_n_products_by_revenue.len(),
            "Revenue analysis complete."
        );
        Ok(result)
    }

    fn count_regions(&self, dataset: &Dataset) -> usize {
        dataset
            .iter()
            .map(|r| r.region.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Sums revenue per product and keeps the highest earners.
    ///
    /// Groups are visited in product-name order and the sort is stable, so
    /// products with equal revenue keep that order.
    fn top_products(&self, dataset: &Dataset) -> Result<Vec<TopProduct>, AnalyticsError> {
        let mut totals: BTreeMap<&str, Decimal> = BTreeMap::new();
        for record in dataset {
            let revenue = rolling::record_revenue(record)?;
            let total = totals.entry(record.product.as_str()).or_insert(Decimal::ZERO);
            *total = total.checked_add(revenue).ok_or_else(|| {
                AnalyticsError::Overflow(format!("total revenue of {}", record.product))
            })?;
        }

        let mut ranked: Vec<(&str, Decimal)> = totals.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked
            .into_iter()
            .take(TOP_N_PRODUCTS)
            .map(|(product, revenue)| {
                Ok(TopProduct {
                    product: product.to_string(),
                    revenue: to_json_number(revenue, product)?,
                })
            })
            .collect()
    }

    /// The trailing 7-day mean of daily revenue at each region's latest date,
    /// over a calendar-complete series.
    fn rolling_revenue_by_region(
        &self,
        dataset: &Dataset,
    ) -> Result<BTreeMap<String, Option<f64>>, AnalyticsError> {
        let daily = rolling::daily_revenue_by_region(dataset)?;

        let mut by_region = BTreeMap::new();
        for (region, series) in daily {
            let latest = rolling::latest_trailing_mean(&series, ROLLING_WINDOW_DAYS)?;
            tracing::debug!(
                region = %region,
                days_with_sales = series.len(),
                rolling_mean = ?latest,
                "Computed trailing revenue mean."
            );

            let value = latest
                .map(|mean| to_json_number(mean, &region))
                .transpose()?;
            by_region.insert(region, value);
        }

        Ok(by_region)
    }
}

fn to_json_number(value: Decimal, metric: &str) -> Result<f64, AnalyticsError> {
    value
        .normalize()
        .to_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AnalyticsError::Conversion(metric.to_string()))
}
