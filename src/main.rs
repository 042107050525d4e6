use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};

use gas_charts::{
    load_samples, median, print_summary, write_estimates_csv, write_summary_json, CostTable,
    Network, SampleFilter,
};

// Etherscan export file names, as downloaded
const ETH_GAS_EXPORT: &str = "export-AvgGasPrice.csv";
const OP_GAS_EXPORT: &str = "export-AvgGasPrice-op.csv";
const ETH_PRICE_EXPORT: &str = "export-EtherPrice.csv";

const ESTIMATES_OUT: &str = "figure-data.csv";
const SUMMARY_OUT: &str = "figure-summary.json";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // gas-charts [DATA_DIR] [report]
    let data_dir = args
        .iter()
        .skip(1)
        .find(|a| a.as_str() != "report")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let report_only = args.iter().any(|a| a == "report");

    run_pipeline(&data_dir, report_only)
}

fn run_pipeline(data_dir: &Path, report_only: bool) -> Result<()> {
    println!("📉 Gas Cost Figure - CSV exports → medians → USD chart");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let eth_gas_path = data_dir.join(ETH_GAS_EXPORT);
    let op_gas_path = data_dir.join(OP_GAS_EXPORT);
    let eth_price_path = data_dir.join(ETH_PRICE_EXPORT);

    // 1. Extract the 2024/2025 observation window from each export
    println!("\n📂 Loading exports from {} ...", data_dir.display());
    let window = SampleFilter::years(&["2024", "2025"]);

    let eth_gas_samples = load_samples(&eth_gas_path, &window)?;
    println!("✓ Ethereum gas samples: {}", eth_gas_samples.len());

    let op_gas_samples = load_samples(&op_gas_path, &window)?;
    println!("✓ Optimism gas samples: {}", op_gas_samples.len());

    let eth_price_samples = load_samples(&eth_price_path, &window)?;
    println!("✓ Ether price samples: {}", eth_price_samples.len());

    // 2. Medians
    let eth_gas = median(&eth_gas_samples)?;
    let op_gas = median(&op_gas_samples)?;
    let eth_price = median(&eth_price_samples)?;

    // 3. Convert the gas table to USD per network
    let eth_table = CostTable::compute(Network::Ethereum, eth_gas, eth_price);
    let op_table = CostTable::compute(Network::Optimism, op_gas, eth_price);

    // 4. Console summary + provenance checksums
    println!();
    let provenance = vec![
        gas_charts::checksum_file(&eth_gas_path)?,
        gas_charts::checksum_file(&op_gas_path)?,
        gas_charts::checksum_file(&eth_price_path)?,
    ];
    print_summary(&eth_table, &op_table, &provenance);

    // 5. Exports for downstream figure tooling
    println!();
    write_estimates_csv(&data_dir.join(ESTIMATES_OUT), &[&eth_table, &op_table])?;
    write_summary_json(&data_dir.join(SUMMARY_OUT), &eth_table, &op_table, &provenance)?;

    // 6. Interactive chart unless report-only
    if report_only {
        return Ok(());
    }
    run_chart_mode(eth_table, op_table)
}

#[cfg(feature = "tui")]
fn run_chart_mode(eth_table: CostTable, op_table: CostTable) -> Result<()> {
    println!("\nRendering chart... (Press 'q' to quit)");
    let app = gas_charts::chart::ChartApp::new(eth_table, op_table);
    gas_charts::chart::run_chart(&app)?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_chart_mode(_eth_table: CostTable, _op_table: CostTable) -> Result<()> {
    eprintln!("❌ Chart display not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or run: gas-charts report");
    std::process::exit(1);
}
