//! Page navigation and the per-session state shared between pages.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::GenerationService;
use crate::entry::SustainabilityData;
use crate::report::ReportBuilder;

/// The six top-level pages, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum View {
    #[default]
    #[serde(rename = "Impact Dashboard")]
    ImpactDashboard,
    #[serde(rename = "ESG Playbook")]
    EsgPlaybook,
    Initiatives,
    #[serde(rename = "ESG Assessment")]
    EsgAssessment,
    #[serde(rename = "Data Entry")]
    DataEntry,
    Reporting,
}

impl View {
    pub const ALL: [View; 6] = [
        Self::ImpactDashboard,
        Self::EsgPlaybook,
        Self::Initiatives,
        Self::EsgAssessment,
        Self::DataEntry,
        Self::Reporting,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::ImpactDashboard => "Impact Dashboard",
            Self::EsgPlaybook => "ESG Playbook",
            Self::Initiatives => "Initiatives",
            Self::EsgAssessment => "ESG Assessment",
            Self::DataEntry => "Data Entry",
            Self::Reporting => "Reporting",
        }
    }

    /// Looks a page up by its navigation name; anything unknown lands on the dashboard.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|v| v.name() == name)
            .unwrap_or_default()
    }
}

impl FromStr for View {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Payload for the platform share sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShareData {
    pub title: &'static str,
    pub text: &'static str,
    pub url: &'static str,
}

impl ShareData {
    pub const IMPACTSPHERE: ShareData = ShareData {
        title: "ImpactSphere: ESG Intelligence Platform",
        text: "Check out this ESG intelligence platform!",
        url: "https://myherb.co.il/impactsphere",
    };

    /// What to put on the clipboard when no share sheet is available.
    pub fn clipboard_text(&self) -> &'static str {
        self.url
    }
}

/// One user session: the page on screen and the last submitted record.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    active_view: View,
    sustainability_data: Option<SustainabilityData>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    pub fn sustainability_data(&self) -> Option<&SustainabilityData> {
        self.sustainability_data.as_ref()
    }

    pub fn navigate(&mut self, view: View) {
        tracing::debug!(from = %self.active_view, to = %view, "navigate");
        self.active_view = view;
    }

    /// Stores a submitted record and jumps to the report.
    pub fn submit_data(&mut self, data: SustainabilityData) {
        self.sustainability_data = Some(data);
        self.navigate(View::Reporting);
    }

    /// A report builder for the stored record, or `None` before the first submission.
    pub fn report_builder<'a>(
        &self,
        generator: &'a dyn GenerationService,
    ) -> Option<ReportBuilder<'a>> {
        self.sustainability_data
            .clone()
            .map(|d| ReportBuilder::new(generator, d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record() -> SustainabilityData {
        SustainabilityData {
            business_name: "Acme".into(),
            time_frame_start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            time_frame_end: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            carbon_footprint: 1.0,
            energy_consumption: 2.0,
            renewable_energy_mix: 3.0,
            waste_diversion_rate: 4.0,
            water_usage: 5.0,
            supply_chain_emissions: 6.0,
            employee_engagement: 7.0,
            sustainable_procurement: 8.0,
        }
    }

    #[test]
    fn names_round_trip_and_unknown_falls_back() {
        for v in View::ALL {
            assert_eq!(View::from_name(v.name()), v);
        }
        assert_eq!(View::from_name("Settings"), View::ImpactDashboard);
        assert_eq!("Reporting".parse::<View>(), Ok(View::Reporting));
    }

    #[test]
    fn session_starts_on_dashboard_without_data() {
        let d = Dashboard::new();
        assert_eq!(d.active_view(), View::ImpactDashboard);
        assert!(d.sustainability_data().is_none());
    }

    #[test]
    fn submit_switches_to_reporting() {
        let mut d = Dashboard::new();
        d.navigate(View::DataEntry);
        d.submit_data(record());
        assert_eq!(d.active_view(), View::Reporting);
        assert_eq!(d.sustainability_data().map(|r| r.business_name.as_str()), Some("Acme"));
    }

    #[test]
    fn share_payload() {
        let s = ShareData::IMPACTSPHERE;
        assert_eq!(s.clipboard_text(), "https://myherb.co.il/impactsphere");
        assert_eq!(View::ALL[1].to_string(), "ESG Playbook");
    }
}
