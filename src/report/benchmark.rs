use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delay of the simulated benchmark lookup.
pub const DEFAULT_BENCHMARK_DELAY: Duration = Duration::from_millis(1200);

/// Industry benchmark figures the report compares against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryAverageData {
    pub carbon_footprint: f64,
    /// Already expressed in tCO₂e (28 000 MWh at 0.4 tCO₂e/MWh).
    pub energy_consumption: f64,
    pub supply_chain_emissions: f64,
    pub renewable_energy_mix: f64,
    pub waste_diversion_rate: f64,
    pub water_usage: f64,
}

impl IndustryAverageData {
    pub const REFERENCE: IndustryAverageData = IndustryAverageData {
        carbon_footprint: 12_500.0,
        energy_consumption: 11_200.0,
        supply_chain_emissions: 18_000.0,
        renewable_energy_mix: 35.0,
        waste_diversion_rate: 65.0,
        water_usage: 55_000.0,
    };
}

impl Default for IndustryAverageData {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Resolves to [`IndustryAverageData::REFERENCE`] after `delay`. Never fails.
pub async fn fetch_industry_averages(delay: Duration) -> IndustryAverageData {
    tracing::debug!(?delay, "fetching industry average data");
    tokio::time::sleep(delay).await;
    tracing::debug!("fetched industry average data");
    IndustryAverageData::REFERENCE
}
