use analytics::{AnalysisResult, RevenueAnalyzer};
use anyhow::{Context, Result};
use comfy_table::Table;
use data_handler::DataError;
use std::path::Path;

/// The main entry point for the sales revenue analyzer.
///
/// Reads the configured sales CSV, computes the revenue summary and writes it
/// as JSON. A missing input file is reported and ends the run cleanly without
/// output; any other failure aborts with a diagnostic.
fn main() -> Result<()> {
    let config = configuration::load_config().context("Failed to load configuration")?;
    let _log_guard =
        configuration::init_tracing(&config.logging).context("Failed to initialise logging")?;
    tracing::debug!(?config, "Configuration loaded.");

    let dataset = match data_handler::load_dataset(&config.input.path) {
        Ok(dataset) => dataset,
        Err(DataError::InputNotFound(path)) => {
            tracing::error!(path = %path.display(), "Sales input not found; nothing to analyze.");
            let name = file_name(&path);
            println!("Error: {name} not found. Please ensure {name} is in the same directory.");
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to load sales data"),
    };

    let result = RevenueAnalyzer::new()
        .analyze(&dataset)
        .context("Failed to analyze sales data")?;
    result
        .write_json(&config.output.path)
        .context("Failed to write analysis result")?;

    println!(
        "Analysis complete. {} generated.",
        config.output.path.display()
    );
    println!("{}", summary_table(&result));

    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Renders the headline numbers for the terminal.
fn summary_table(result: &AnalysisResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Rows".to_string(), result.row_count.to_string()]);
    table.add_row(vec!["Regions".to_string(), result.regions_count.to_string()]);

    for (rank, top) in result.top_n_products_by_revenue.iter().enumerate() {
        table.add_row(vec![
            format!("Top product #{}", rank + 1),
            format!("{} ({:.2})", top.product, top.revenue),
        ]);
    }

    for (region, value) in &result.rolling_7d_revenue_by_region {
        let value = value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"));
        table.add_row(vec![format!("7d avg revenue: {region}"), value]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::TopProduct;
    use std::collections::BTreeMap;

    #[test]
    fn file_name_strips_directories() {
        assert_eq!(file_name(Path::new("inputs/data.csv")), "data.csv");
        assert_eq!(file_name(Path::new("data.csv")), "data.csv");
    }

    #[test]
    fn summary_lists_every_metric() {
        let result = AnalysisResult {
            row_count: 12,
            regions_count: 2,
            top_n_products_by_revenue: vec![TopProduct {
                product: "Desk".to_string(),
                revenue: 240.0,
            }],
            rolling_7d_revenue_by_region: BTreeMap::from([
                ("North".to_string(), Some(12.5)),
                ("South".to_string(), None),
            ]),
        };

        let rendered = summary_table(&result).to_string();
        assert!(rendered.contains("Rows"));
        assert!(rendered.contains("12"));
        assert!(rendered.contains("Desk (240.00)"));
        assert!(rendered.contains("7d avg revenue: North"));
        assert!(rendered.contains("12.50"));
        assert!(rendered.contains("n/a"));
    }
}
