use serde::Serialize;

use crate::core::format::{format_number, format_percent};
use crate::entry::{Kpi, KpiKind, SustainabilityData};

/// Which direction of movement counts as progress for a KPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Increase,
    Decrease,
}

/// One headline figure on the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiTile {
    pub kpi: Kpi,
    pub label: &'static str,
    pub value: String,
    /// Signed quarter-over-quarter change in percent.
    pub change: f64,
    pub change_type: ChangeType,
}

impl KpiTile {
    /// `Some(true)` when the change moves in the desired direction, `None` for no change.
    pub fn is_favorable(&self) -> Option<bool> {
        if self.change == 0.0 {
            return None;
        }
        Some(match self.change_type {
            ChangeType::Increase => self.change > 0.0,
            ChangeType::Decrease => self.change < 0.0,
        })
    }

    /// `↑ 5% vs last quarter`; the arrow shows whether the move is good.
    pub fn change_label(&self) -> String {
        let arrow = match self.is_favorable() {
            Some(true) => "↑ ",
            Some(false) => "↓ ",
            None => "",
        };
        format!("{arrow}{}% vs last quarter", self.change.abs())
    }
}

/// Tile order and the fixed illustrative deltas shown against the previous quarter.
const TILES: [(Kpi, &str, f64, ChangeType); 8] = [
    (Kpi::CarbonFootprint, "Carbon Footprint (tCO₂e)", -5.0, ChangeType::Decrease),
    (Kpi::EnergyConsumption, "Energy Consumption (MWh)", -12.0, ChangeType::Decrease),
    (Kpi::WasteDiversionRate, "Waste Diversion Rate", 8.0, ChangeType::Increase),
    (Kpi::WaterUsage, "Water Usage (m³)", -9.0, ChangeType::Decrease),
    (Kpi::SustainableProcurement, "Sustainable Procurement", 15.0, ChangeType::Increase),
    (Kpi::EmployeeEngagement, "Employee Engagement", 10.0, ChangeType::Increase),
    (Kpi::SupplyChainEmissions, "Supply Chain Emissions", -7.0, ChangeType::Decrease),
    (Kpi::RenewableEnergyMix, "Renewable Energy Mix", 20.0, ChangeType::Increase),
];

pub(crate) fn kpi_tiles(data: &SustainabilityData) -> Vec<KpiTile> {
    TILES
        .iter()
        .map(|&(kpi, label, change, change_type)| {
            let v = data.kpi(kpi);
            let value = match kpi.kind() {
                KpiKind::Percentage => format_percent(v),
                KpiKind::Magnitude => format_number(v),
            };
            KpiTile {
                kpi,
                label,
                value,
                change,
                change_type,
            }
        })
        .collect()
}
