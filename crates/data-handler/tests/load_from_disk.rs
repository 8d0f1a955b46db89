//! Loads sales files from a temporary directory to exercise the file-system
//! paths of the loader.

use data_handler::{DataError, load_dataset};
use rust_decimal_macros::dec;
use std::fs;
use tempfile::TempDir;

#[test]
fn missing_file_is_reported_as_input_not_found() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("data.csv");

    match load_dataset(&path) {
        Err(DataError::InputNotFound(reported)) => assert_eq!(reported, path),
        other => panic!("expected InputNotFound, got {other:?}"),
    }
}

#[test]
fn directory_in_place_of_file_is_not_treated_as_missing() {
    let temp = TempDir::new().unwrap();
    let err = load_dataset(temp.path()).unwrap_err();
    assert!(!matches!(err, DataError::InputNotFound(_)), "got {err:?}");
}

#[test]
fn loads_every_data_row_from_disk() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("data.csv");
    fs::write(
        &path,
        "date,region,product,units,price\r\n\
         2024-02-01,West,Lamp,2,15.5\r\n\
         2024-02-02,West,Desk,1,120\r\n\
         2024-02-02,East,Lamp,4,15.5\r\n",
    )
    .unwrap();

    let dataset = load_dataset(&path).unwrap();
    assert_eq!(dataset.len(), 3);
    let total: rust_decimal::Decimal = dataset.iter().filter_map(|r| r.revenue()).sum();
    assert_eq!(total, dec!(213));
}
