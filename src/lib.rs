// Gas Charts - Core Library
// CSV gas-price exports → median statistics → USD cost figure

pub mod cost;
pub mod report;
pub mod sample;
pub mod stats;

#[cfg(feature = "tui")]
pub mod chart;

// Re-export commonly used types
pub use cost::{
    usd_cost, wei_to_gwei, CostEstimate, CostTable, Network, Operation, Scenario, ScenarioCost,
    SCENARIOS, WEI_PER_ETH, WEI_PER_GWEI,
};
pub use report::{
    checksum_file, estimates_csv, print_summary, write_estimates_csv, write_summary_json,
    Provenance,
};
pub use sample::{extract_samples, load_samples, parse_base_units, PriceSample, SampleFilter};
pub use stats::median;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
