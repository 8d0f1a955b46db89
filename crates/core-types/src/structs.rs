use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single row of the sales ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub date: NaiveDate,
    pub region: String,
    pub product: String,
    /// Number of units sold. Expected to be a non-negative count.
    pub units: Decimal,
    /// Price of a single unit.
    pub price: Decimal,
}

impl SaleRecord {
    /// The revenue attributed to this row: `units * price`, with no rounding.
    ///
    /// `None` when the product does not fit in a `Decimal`.
    pub fn revenue(&self) -> Option<Decimal> {
        self.units.checked_mul(self.price)
    }
}

/// The full set of records read from one input file.
///
/// A `Dataset` is built once by the loader and never mutated afterwards;
/// every aggregate is computed from a shared borrow of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<SaleRecord>,
}

impl Dataset {
    pub fn new(records: Vec<SaleRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SaleRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<SaleRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = SaleRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a SaleRecord;
    type IntoIter = std::slice::Iter<'a, SaleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(units: Decimal, price: Decimal) -> SaleRecord {
        SaleRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            region: "North".to_string(),
            product: "Widget".to_string(),
            units,
            price,
        }
    }

    #[test]
    fn revenue_is_units_times_price_without_rounding() {
        assert_eq!(record(dec!(3), dec!(19.99)).revenue(), Some(dec!(59.97)));
        assert_eq!(record(dec!(7), dec!(0.001)).revenue(), Some(dec!(0.007)));
        assert_eq!(record(dec!(0), dec!(250)).revenue(), Some(Decimal::ZERO));
    }

    #[test]
    fn revenue_beyond_decimal_range_is_none() {
        let huge = record(dec!(100000000000000000000), dec!(10000000000));
        assert_eq!(huge.revenue(), None);
    }

    #[test]
    fn dataset_preserves_load_order() {
        let dataset: Dataset = vec![record(dec!(1), dec!(1)), record(dec!(2), dec!(2))]
            .into_iter()
            .collect();

        assert_eq!(dataset.len(), 2);
        assert!(!dataset.is_empty());
        let units: Vec<Decimal> = dataset.iter().map(|r| r.units).collect();
        assert_eq!(units, vec![dec!(1), dec!(2)]);
    }
}
