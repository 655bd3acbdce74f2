//! The stakeholder report: KPI tiles, benchmark charts, an AI-written executive
//! summary and local exports (print, text file, email draft).

mod benchmark;
mod export;
mod kpi;

pub use benchmark::{DEFAULT_BENCHMARK_DELAY, IndustryAverageData, fetch_industry_averages};
pub use export::EmailDraft;
pub use kpi::{ChangeType, KpiTile};

use chrono::NaiveDate;
use serde::Serialize;
use std::time::Duration;

use crate::charts::{BarChart, PieChart};
use crate::core::format::format_long_date;
use crate::core::{Content, GenerationService, Prompt, RetryConfig, content::text_or_fallback};
use crate::entry::SustainabilityData;

/// Heading shown by the reporting page before any data was submitted.
pub const NO_DATA_TITLE: &str = "No Data to Report";
/// Hint shown under [`NO_DATA_TITLE`].
pub const NO_DATA_MESSAGE: &str =
    "Please go to the \"Data Entry\" page to input your sustainability metrics.";

const SUMMARY_FALLBACK: &str = "Could not generate summary. Review the data to identify key trends and formulate an executive overview.";

/// Scope 2 is estimated from energy use at this emission factor (tCO₂e per MWh).
pub const GRID_EMISSION_FACTOR: f64 = 0.4;

/// The record as embedded in the summary prompt: KPIs then dates, no name.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportMetrics<'a> {
    #[serde(serialize_with = "plain_number")]
    carbon_footprint: f64,
    #[serde(serialize_with = "plain_number")]
    energy_consumption: f64,
    #[serde(serialize_with = "plain_number")]
    renewable_energy_mix: f64,
    #[serde(serialize_with = "plain_number")]
    waste_diversion_rate: f64,
    #[serde(serialize_with = "plain_number")]
    water_usage: f64,
    #[serde(serialize_with = "plain_number")]
    supply_chain_emissions: f64,
    #[serde(serialize_with = "plain_number")]
    employee_engagement: f64,
    #[serde(serialize_with = "plain_number")]
    sustainable_procurement: f64,
    time_frame_start: &'a NaiveDate,
    time_frame_end: &'a NaiveDate,
}

/// Whole values are written without a fraction (`10500`, not `10500.0`).
fn plain_number<S: serde::Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    const MAX_EXACT: f64 = 9_007_199_254_740_991.0;
    if v.fract() == 0.0 && v.abs() <= MAX_EXACT {
        s.serialize_i64(*v as i64)
    } else {
        s.serialize_f64(*v)
    }
}

impl<'a> From<&'a SustainabilityData> for ReportMetrics<'a> {
    fn from(d: &'a SustainabilityData) -> Self {
        Self {
            carbon_footprint: d.carbon_footprint,
            energy_consumption: d.energy_consumption,
            renewable_energy_mix: d.renewable_energy_mix,
            waste_diversion_rate: d.waste_diversion_rate,
            water_usage: d.water_usage,
            supply_chain_emissions: d.supply_chain_emissions,
            employee_engagement: d.employee_engagement,
            sustainable_procurement: d.sustainable_procurement,
            time_frame_start: &d.time_frame_start,
            time_frame_end: &d.time_frame_end,
        }
    }
}

/// Builds the executive-summary prompt for one record.
///
/// # Errors
///
/// Returns [`crate::ImpactError::Json`] if the metrics cannot be serialized.
pub fn summary_prompt(data: &SustainabilityData) -> Result<String, crate::ImpactError> {
    let metrics = serde_json::to_string(&ReportMetrics::from(data))?;
    let name = &data.business_name;
    Ok(format!(
        "The following data represents the latest sustainability report for the organization \"{name}\": {metrics}. Generate a brief executive summary (2-3 paragraphs) specifically for \"{name}\". The summary should highlight key achievements, areas for improvement, and the overall sustainability posture. The tone should be professional and suitable for a stakeholder report."
    ))
}

/// A finished report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub data: SustainabilityData,
    pub summary: Content<String>,
    pub averages: IndustryAverageData,
}

impl Report {
    /// `Acme | Sustainability Report`
    pub fn title(&self) -> String {
        format!("{} | Sustainability Report", self.data.business_name)
    }

    /// `June 3, 2024 - June 10, 2024`
    pub fn reporting_period(&self) -> String {
        format!(
            "{} - {}",
            format_long_date(self.data.time_frame_start),
            format_long_date(self.data.time_frame_end)
        )
    }

    /// The eight headline tiles in display order.
    pub fn kpi_tiles(&self) -> Vec<KpiTile> {
        kpi::kpi_tiles(&self.data)
    }

    /// Carbon footprint by scope against the industry averages.
    pub fn scope_chart(&self) -> BarChart {
        BarChart::new(
            ["Scope 1 (Direct)", "Scope 2 (Indirect)", "Scope 3 (Supply Chain)"],
            vec![
                self.data.carbon_footprint,
                self.data.energy_consumption * GRID_EMISSION_FACTOR,
                self.data.supply_chain_emissions,
            ],
            vec![
                self.averages.carbon_footprint,
                self.averages.energy_consumption,
                self.averages.supply_chain_emissions,
            ],
        )
    }

    /// Energy by source, with the industry renewable share for the caption.
    pub fn energy_mix_chart(&self) -> PieChart {
        PieChart::new(
            ["Grid (Fossil)", "Renewables"],
            vec![
                100.0 - self.data.renewable_energy_mix,
                self.data.renewable_energy_mix,
            ],
            self.averages.renewable_energy_mix,
        )
    }
}

/// A builder that assembles a [`Report`] for one submitted record.
pub struct ReportBuilder<'a> {
    generator: &'a dyn GenerationService,
    data: SustainabilityData,
    benchmark_delay: Duration,
    retry_override: Option<RetryConfig>,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(generator: &'a dyn GenerationService, data: SustainabilityData) -> Self {
        Self {
            generator,
            data,
            benchmark_delay: DEFAULT_BENCHMARK_DELAY,
            retry_override: None,
        }
    }

    /// Overrides the simulated benchmark latency (default 1.2 s).
    #[must_use]
    pub fn benchmark_delay(mut self, delay: Duration) -> Self {
        self.benchmark_delay = delay;
        self
    }

    /// Overrides the default retry policy for the summary request.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Requests the summary and the benchmarks concurrently and assembles the report.
    ///
    /// Never fails: a failed summary request yields the fixed fallback text.
    #[tracing::instrument(skip(self), fields(business = %self.data.business_name))]
    pub async fn build(self) -> Report {
        let summary = async {
            match summary_prompt(&self.data) {
                Ok(text) => {
                    let prompt = Prompt::text(text).with_retry(self.retry_override.clone());
                    text_or_fallback(self.generator, &prompt, "report summary", SUMMARY_FALLBACK)
                        .await
                }
                Err(e) => {
                    tracing::warn!(error = %e, "could not encode report metrics");
                    Content::sample(SUMMARY_FALLBACK.to_string())
                }
            }
        };
        let (summary, averages) =
            tokio::join!(summary, fetch_industry_averages(self.benchmark_delay));

        Report {
            data: self.data,
            summary,
            averages,
        }
    }
}
