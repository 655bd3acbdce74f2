use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a KPI is a bounded percentage or an unbounded non-negative magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KpiKind {
    /// Must lie in `[0, 100]`.
    Percentage,
    /// Must be `>= 0`.
    Magnitude,
}

/// The eight key performance indicators collected by the data entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Kpi {
    CarbonFootprint,
    EnergyConsumption,
    RenewableEnergyMix,
    WasteDiversionRate,
    WaterUsage,
    SupplyChainEmissions,
    EmployeeEngagement,
    SustainableProcurement,
}

impl Kpi {
    /// Form order.
    pub const ALL: [Kpi; 8] = [
        Self::CarbonFootprint,
        Self::EnergyConsumption,
        Self::RenewableEnergyMix,
        Self::WasteDiversionRate,
        Self::WaterUsage,
        Self::SupplyChainEmissions,
        Self::EmployeeEngagement,
        Self::SustainableProcurement,
    ];

    /// Input label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::CarbonFootprint => "Carbon Footprint",
            Self::EnergyConsumption => "Total Energy Consumption",
            Self::RenewableEnergyMix => "Renewable Energy Mix",
            Self::WasteDiversionRate => "Waste Diversion Rate",
            Self::WaterUsage => "Total Water Usage",
            Self::SupplyChainEmissions => "Supply Chain Emissions",
            Self::EmployeeEngagement => "Employee Engagement Score",
            Self::SustainableProcurement => "Sustainable Procurement Rate",
        }
    }

    pub const fn unit(self) -> &'static str {
        match self {
            Self::CarbonFootprint | Self::SupplyChainEmissions => "tCO₂e",
            Self::EnergyConsumption => "MWh",
            Self::WaterUsage => "m³",
            Self::RenewableEnergyMix
            | Self::WasteDiversionRate
            | Self::EmployeeEngagement
            | Self::SustainableProcurement => "%",
        }
    }

    pub const fn kind(self) -> KpiKind {
        match self {
            Self::RenewableEnergyMix
            | Self::WasteDiversionRate
            | Self::EmployeeEngagement
            | Self::SustainableProcurement => KpiKind::Percentage,
            _ => KpiKind::Magnitude,
        }
    }

    /// The camelCase field name used in serialized records.
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::CarbonFootprint => "carbonFootprint",
            Self::EnergyConsumption => "energyConsumption",
            Self::RenewableEnergyMix => "renewableEnergyMix",
            Self::WasteDiversionRate => "wasteDiversionRate",
            Self::WaterUsage => "waterUsage",
            Self::SupplyChainEmissions => "supplyChainEmissions",
            Self::EmployeeEngagement => "employeeEngagement",
            Self::SustainableProcurement => "sustainableProcurement",
        }
    }
}

impl std::fmt::Display for Kpi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One complete, validated submission of the data entry form.
///
/// Percentages are within `[0, 100]`, magnitudes are non-negative, and the
/// business name is non-empty. Only [`DataEntryForm`](super::DataEntryForm)
/// produces these in normal use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SustainabilityData {
    pub business_name: String,
    pub time_frame_start: NaiveDate,
    pub time_frame_end: NaiveDate,
    pub carbon_footprint: f64,
    pub energy_consumption: f64,
    pub renewable_energy_mix: f64,
    pub waste_diversion_rate: f64,
    pub water_usage: f64,
    pub supply_chain_emissions: f64,
    pub employee_engagement: f64,
    pub sustainable_procurement: f64,
}

impl SustainabilityData {
    /// Reads one KPI value.
    pub fn kpi(&self, kpi: Kpi) -> f64 {
        match kpi {
            Kpi::CarbonFootprint => self.carbon_footprint,
            Kpi::EnergyConsumption => self.energy_consumption,
            Kpi::RenewableEnergyMix => self.renewable_energy_mix,
            Kpi::WasteDiversionRate => self.waste_diversion_rate,
            Kpi::WaterUsage => self.water_usage,
            Kpi::SupplyChainEmissions => self.supply_chain_emissions,
            Kpi::EmployeeEngagement => self.employee_engagement,
            Kpi::SustainableProcurement => self.sustainable_procurement,
        }
    }

    pub(crate) fn set_kpi(&mut self, kpi: Kpi, v: f64) {
        let slot = match kpi {
            Kpi::CarbonFootprint => &mut self.carbon_footprint,
            Kpi::EnergyConsumption => &mut self.energy_consumption,
            Kpi::RenewableEnergyMix => &mut self.renewable_energy_mix,
            Kpi::WasteDiversionRate => &mut self.waste_diversion_rate,
            Kpi::WaterUsage => &mut self.water_usage,
            Kpi::SupplyChainEmissions => &mut self.supply_chain_emissions,
            Kpi::EmployeeEngagement => &mut self.employee_engagement,
            Kpi::SustainableProcurement => &mut self.sustainable_procurement,
        };
        *slot = v;
    }
}
