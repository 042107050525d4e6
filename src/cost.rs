// 💰 Cost Model - per-operation gas figures → estimated USD
// Fixed gas table measured from the petition contracts, one row per
// protocol scenario (paper section labels), three operations per row

use serde::Serialize;

/// Wei per Ether (1 ether = 10^18 wei)
pub const WEI_PER_ETH: f64 = 1e18;

/// Wei per gwei (1 gwei = 10^9 wei)
pub const WEI_PER_GWEI: f64 = 1e9;

/// Convert a wei amount to gwei for display
pub fn wei_to_gwei(wei: f64) -> f64 {
    wei / WEI_PER_GWEI
}

// ============================================================================
// GAS TABLE
// ============================================================================

/// Operation - the three contract interactions measured per scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operation {
    Create,
    Sign,
    Approve,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Create, Operation::Sign, Operation::Approve];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Sign => "sign",
            Operation::Approve => "approve",
        }
    }
}

/// Network - which chain the gas price median was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Network {
    Ethereum,
    Optimism,
}

impl Network {
    pub fn name(&self) -> &'static str {
        match self {
            Network::Ethereum => "Ethereum",
            Network::Optimism => "Optimism",
        }
    }
}

/// Scenario - one labeled row of the gas table
///
/// A zero gas figure means the operation does not exist in that scenario;
/// its estimate stays at $0.00 and the chart suppresses the label.
#[derive(Debug, Clone, Serialize)]
pub struct Scenario {
    pub label: &'static str,
    pub create: u64,
    pub sign: u64,
    pub approve: u64,
}

impl Scenario {
    pub fn gas(&self, operation: Operation) -> u64 {
        match operation {
            Operation::Create => self.create,
            Operation::Sign => self.sign,
            Operation::Approve => self.approve,
        }
    }
}

/// The measured gas figures behind the paper figure, in section order
pub const SCENARIOS: [Scenario; 5] = [
    Scenario { label: "III-C", create: 775454, sign: 90395, approve: 50002 },
    Scenario { label: "III-D", create: 855820, sign: 525238, approve: 79306 },
    Scenario { label: "III-E", create: 657387, sign: 330368, approve: 129891 },
    Scenario { label: "III-F secp256k1", create: 772340, sign: 2165940, approve: 0 },
    Scenario { label: "III-F alt_bn128", create: 772494, sign: 137234, approve: 0 },
];

// ============================================================================
// USD CONVERSION
// ============================================================================

/// Estimated USD cost of one operation:
/// gas × gas price (wei) × Ether price (USD) × 10⁻¹⁸
pub fn usd_cost(gas: u64, gas_price_wei: f64, eth_price_usd: f64) -> f64 {
    gas as f64 * gas_price_wei * eth_price_usd / WEI_PER_ETH
}

/// ScenarioCost - one scenario converted to USD on one network
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioCost {
    pub label: &'static str,
    pub create_usd: f64,
    pub sign_usd: f64,
    pub approve_usd: f64,
}

impl ScenarioCost {
    pub fn usd(&self, operation: Operation) -> f64 {
        match operation {
            Operation::Create => self.create_usd,
            Operation::Sign => self.sign_usd,
            Operation::Approve => self.approve_usd,
        }
    }
}

/// CostEstimate - flattened row for the CSV / JSON exports
#[derive(Debug, Clone, Serialize)]
pub struct CostEstimate {
    pub scenario: String,
    pub network: String,
    pub operation: String,
    pub gas: u64,
    pub usd: f64,
}

/// CostTable - all scenarios converted for one network's gas price median
#[derive(Debug, Clone, Serialize)]
pub struct CostTable {
    pub network: Network,
    pub gas_price_wei: f64,
    pub eth_price_usd: f64,
    pub rows: Vec<ScenarioCost>,
}

impl CostTable {
    pub fn compute(network: Network, gas_price_wei: f64, eth_price_usd: f64) -> Self {
        let rows = SCENARIOS
            .iter()
            .map(|s| ScenarioCost {
                label: s.label,
                create_usd: usd_cost(s.create, gas_price_wei, eth_price_usd),
                sign_usd: usd_cost(s.sign, gas_price_wei, eth_price_usd),
                approve_usd: usd_cost(s.approve, gas_price_wei, eth_price_usd),
            })
            .collect();

        CostTable {
            network,
            gas_price_wei,
            eth_price_usd,
            rows,
        }
    }

    /// USD estimates for one operation, preserving scenario order
    pub fn column(&self, operation: Operation) -> Vec<f64> {
        self.rows.iter().map(|row| row.usd(operation)).collect()
    }

    /// Flatten into export rows (scenario, network, operation, gas, usd)
    pub fn estimates(&self) -> Vec<CostEstimate> {
        let mut out = Vec::new();
        for (scenario, row) in SCENARIOS.iter().zip(&self.rows) {
            for op in Operation::ALL {
                out.push(CostEstimate {
                    scenario: scenario.label.to_string(),
                    network: self.network.name().to_string(),
                    operation: op.name().to_string(),
                    gas: scenario.gas(op),
                    usd: row.usd(op),
                });
            }
        }
        out
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_cost_formula() {
        // 775454 gas at 10 gwei with Ether at $1637
        let usd = usd_cost(775454, 10.0 * WEI_PER_GWEI, 1637.0);
        let expected = 775454.0 * 10e9 * 1637.0 / 1e18;
        assert!((usd - expected).abs() < 1e-9);
        assert!((usd - 12.694).abs() < 0.01);
    }

    #[test]
    fn test_zero_gas_costs_nothing() {
        assert_eq!(usd_cost(0, 10.0 * WEI_PER_GWEI, 1637.0), 0.0);
    }

    #[test]
    fn test_cost_table_preserves_scenario_order() {
        let table = CostTable::compute(Network::Ethereum, WEI_PER_GWEI, 1000.0);
        let labels: Vec<_> = table.rows.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec!["III-C", "III-D", "III-E", "III-F secp256k1", "III-F alt_bn128"]
        );
        // 1 gwei * $1000 / 1e18 = 1e-6 USD per gas
        assert!((table.rows[0].create_usd - 0.775454).abs() < 1e-9);
    }

    #[test]
    fn test_estimates_flatten_every_cell() {
        let table = CostTable::compute(Network::Optimism, 58466.0, 1637.0);
        let estimates = table.estimates();
        assert_eq!(estimates.len(), SCENARIOS.len() * Operation::ALL.len());
        assert!(estimates.iter().all(|e| e.network == "Optimism"));
    }

    #[test]
    fn test_wei_to_gwei() {
        assert!((wei_to_gwei(10909095097.0) - 10.909095097).abs() < 1e-9);
        assert_eq!(wei_to_gwei(WEI_PER_GWEI), 1.0);
    }
}
