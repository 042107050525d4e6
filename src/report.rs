// 🧾 Report - console summary, provenance, figure-data exports

use crate::cost::{wei_to_gwei, CostTable, Operation};
use anyhow::{Context, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Provenance - ties a rendered figure back to its input dataset
#[derive(Debug, Clone, Serialize)]
pub struct Provenance {
    pub file: String,
    pub sha256: String,
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Checksum one input CSV for the provenance footer
pub fn checksum_file(path: &Path) -> Result<Provenance> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read {} for checksum", path.display()))?;

    Ok(Provenance {
        file: path.display().to_string(),
        sha256: sha256_hex(&bytes),
    })
}

// ============================================================================
// CONSOLE SUMMARY
// ============================================================================

/// Print the summary statistics the figure is built from
pub fn print_summary(eth: &CostTable, op: &CostTable, provenance: &[Provenance]) {
    println!("✓ Median Ether price: ${:.2}", eth.eth_price_usd);
    println!(
        "✓ Median gas prices (wei). ETH: {:.2}, OP: {:.2}",
        eth.gas_price_wei, op.gas_price_wei
    );
    println!(
        "✓ Median gas prices (gwei). ETH: {}, OP: {}",
        wei_to_gwei(eth.gas_price_wei),
        wei_to_gwei(op.gas_price_wei)
    );

    println!("\nEstimated sign cost per scenario (USD):");
    println!("  ETH: {:?}", eth.column(Operation::Sign));
    println!("  OP:  {:?}", op.column(Operation::Sign));

    if !provenance.is_empty() {
        println!("\nInput datasets:");
        for p in provenance {
            println!("  {}  sha256:{}", p.file, p.sha256);
        }
    }
}

// ============================================================================
// EXPORTS
// ============================================================================

/// Serialize every estimate row as CSV (scenario,network,operation,gas,usd)
pub fn estimates_csv(tables: &[&CostTable]) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    for table in tables {
        for estimate in table.estimates() {
            wtr.serialize(estimate)
                .context("Failed to serialize estimate row")?;
        }
    }

    wtr.into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush estimate CSV: {}", e))
}

/// Write the estimate table for downstream figure tooling
pub fn write_estimates_csv(path: &Path, tables: &[&CostTable]) -> Result<()> {
    let bytes = estimates_csv(tables)?;
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write estimate CSV: {}", path.display()))?;
    println!("✓ Wrote estimate table: {}", path.display());
    Ok(())
}

/// Machine-readable summary (medians + provenance) for reproducibility notes
pub fn write_summary_json(
    path: &Path,
    eth: &CostTable,
    op: &CostTable,
    provenance: &[Provenance],
) -> Result<()> {
    let summary = serde_json::json!({
        "eth_price_usd": eth.eth_price_usd,
        "eth_gas_price_wei": eth.gas_price_wei,
        "op_gas_price_wei": op.gas_price_wei,
        "eth_estimates": eth.rows,
        "op_estimates": op.rows,
        "inputs": provenance,
    });

    let text = serde_json::to_string_pretty(&summary)?;
    std::fs::write(path, text)
        .with_context(|| format!("Failed to write summary JSON: {}", path.display()))?;
    println!("✓ Wrote summary: {}", path.display());
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::{CostTable, Network, WEI_PER_GWEI, SCENARIOS};

    #[test]
    fn test_sha256_hex_known_vector() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_estimates_csv_has_header_and_all_rows() {
        let eth = CostTable::compute(Network::Ethereum, 10.0 * WEI_PER_GWEI, 1637.0);
        let op = CostTable::compute(Network::Optimism, 58466.0, 1637.0);

        let bytes = estimates_csv(&[&eth, &op]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<_> = text.lines().collect();

        // header + 2 networks * 5 scenarios * 3 operations
        assert_eq!(lines.len(), 1 + 2 * SCENARIOS.len() * 3);
        assert_eq!(lines[0], "scenario,network,operation,gas,usd");
        assert!(lines[1].starts_with("III-C,Ethereum,create,775454,"));
    }
}
