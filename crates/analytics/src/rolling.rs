use crate::error::AnalyticsError;
use chrono::NaiveDate;
use core_types::{Dataset, SaleRecord};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Revenue per calendar day for a single region, ordered by date.
pub type DailySeries = BTreeMap<NaiveDate, Decimal>;

/// Sums revenue per `(region, date)`.
///
/// Only dates that appear in the data get an entry; gap filling happens in
/// [`reindex_daily`].
pub fn daily_revenue_by_region(
    dataset: &Dataset,
) -> Result<BTreeMap<String, DailySeries>, AnalyticsError> {
    let mut daily: BTreeMap<String, DailySeries> = BTreeMap::new();
    for record in dataset {
        let revenue = record_revenue(record)?;
        let total = daily
            .entry(record.region.clone())
            .or_default()
            .entry(record.date)
            .or_insert(Decimal::ZERO);
        *total = total.checked_add(revenue).ok_or_else(|| {
            AnalyticsError::Overflow(format!("daily revenue of {} on {}", record.region, record.date))
        })?;
    }
    Ok(daily)
}

/// `units * price` for one record, as an error instead of a panic when the
/// product leaves the decimal range.
pub fn record_revenue(record: &SaleRecord) -> Result<Decimal, AnalyticsError> {
    record.revenue().ok_or_else(|| {
        AnalyticsError::Overflow(format!(
            "revenue of {} x {} for {}",
            record.units, record.price, record.product
        ))
    })
}

/// Expands a sparse series to every calendar day between its first and last
/// date. Days with no sales carry zero revenue.
pub fn reindex_daily(series: &DailySeries) -> Vec<(NaiveDate, Decimal)> {
    let (Some((&first, _)), Some((&last, _))) = (series.first_key_value(), series.last_key_value())
    else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|day| *day <= last)
        .map(|day| (day, series.get(&day).copied().unwrap_or(Decimal::ZERO)))
        .collect()
}

/// Trailing mean over `window` consecutive values, ending at each position.
///
/// The first `window - 1` positions average over however many values exist
/// so far (a minimum of one period).
pub fn trailing_mean(values: &[Decimal], window: usize) -> Result<Vec<Decimal>, AnalyticsError> {
    if window == 0 {
        return Ok(Vec::new());
    }

    let mut means = Vec::with_capacity(values.len());
    let mut sum = Decimal::ZERO;
    let overflow = || AnalyticsError::Overflow("trailing revenue window".to_string());
    for (i, value) in values.iter().enumerate() {
        sum = sum.checked_add(*value).ok_or_else(overflow)?;
        if i >= window {
            sum = sum.checked_sub(values[i - window]).ok_or_else(overflow)?;
        }
        let periods = (i + 1).min(window);
        means.push(sum / Decimal::from(periods));
    }
    Ok(means)
}

/// The trailing `window_days` mean at the last date of the series, computed
/// over the gap-filled daily series. `None` when the series is empty.
pub fn latest_trailing_mean(
    series: &DailySeries,
    window_days: usize,
) -> Result<Option<Decimal>, AnalyticsError> {
    let values: Vec<Decimal> = reindex_daily(series).into_iter().map(|(_, v)| v).collect();
    Ok(trailing_mean(&values, window_days)?.last().copied())
}
