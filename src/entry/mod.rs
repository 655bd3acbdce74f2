//! The KPI data entry form.
//!
//! Inputs are kept as the raw text the user typed; nothing is interpreted until
//! [`DataEntryForm::submit_at`], which either emits one complete
//! [`SustainabilityData`] record or a list of per-field messages.

mod model;
mod period;

pub use model::{Kpi, KpiKind, SustainabilityData};
pub use period::PeriodUnit;

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use thiserror::Error;

/// A form field that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    BusinessName,
    PeriodQuantity,
    Kpi(Kpi),
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BusinessName => f.write_str("Business Name"),
            Self::PeriodQuantity => f.write_str("Quantity"),
            Self::Kpi(k) => f.write_str(k.label()),
        }
    }
}

/// One field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

/// All validation failures of one submission, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// The message for `field`, if it failed.
    pub fn message_for(&self, field: FormField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// State of the data entry form.
#[derive(Debug, Clone)]
pub struct DataEntryForm {
    business_name: String,
    period_quantity: String,
    period_unit: PeriodUnit,
    kpis: BTreeMap<Kpi, String>,
}

impl Default for DataEntryForm {
    fn default() -> Self {
        Self {
            business_name: String::new(),
            period_quantity: "7".to_string(),
            period_unit: PeriodUnit::Days,
            kpis: Kpi::ALL.into_iter().map(|k| (k, "0".to_string())).collect(),
        }
    }
}

impl DataEntryForm {
    /// A blank form: empty name, every KPI at `0`, period of 7 days.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_business_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.business_name = name.into();
        self
    }

    /// Stores the raw text typed into a KPI input.
    pub fn set_kpi(&mut self, kpi: Kpi, raw: impl Into<String>) -> &mut Self {
        self.kpis.insert(kpi, raw.into());
        self
    }

    pub fn set_period(&mut self, quantity: impl Into<String>, unit: PeriodUnit) -> &mut Self {
        self.period_quantity = quantity.into();
        self.period_unit = unit;
        self
    }

    pub fn business_name(&self) -> &str {
        &self.business_name
    }

    pub fn kpi_input(&self, kpi: Kpi) -> &str {
        self.kpis.get(&kpi).map_or("", String::as_str)
    }

    pub fn period_unit(&self) -> PeriodUnit {
        self.period_unit
    }

    /// Validates and builds a record whose period ends now.
    ///
    /// # Errors
    ///
    /// Returns every failing field; no record is produced in that case.
    pub fn submit(&self) -> Result<SustainabilityData, ValidationErrors> {
        self.submit_at(Utc::now())
    }

    /// Validates and builds a record whose period ends at `now`.
    ///
    /// # Errors
    ///
    /// Returns every failing field; no record is produced in that case.
    #[tracing::instrument(skip(self), fields(unit = self.period_unit.as_str()))]
    pub fn submit_at(&self, now: DateTime<Utc>) -> Result<SustainabilityData, ValidationErrors> {
        let mut errors = Vec::new();

        let name = self.business_name.trim();
        if name.is_empty() {
            errors.push(FieldError {
                field: FormField::BusinessName,
                message: "Business name is required.".into(),
            });
        }

        let quantity = match self.period_quantity.trim().parse::<u32>() {
            Ok(q) if q >= 1 => Some(q),
            _ => {
                errors.push(FieldError {
                    field: FormField::PeriodQuantity,
                    message: "Quantity must be a whole number of at least 1.".into(),
                });
                None
            }
        };

        let start = match quantity {
            Some(q) => {
                let s = self.period_unit.start_before(now, q);
                if s.is_none() {
                    errors.push(FieldError {
                        field: FormField::PeriodQuantity,
                        message: "Reporting period is too long.".into(),
                    });
                }
                s
            }
            None => None,
        };

        let mut values = [0.0_f64; 8];
        for (slot, kpi) in values.iter_mut().zip(Kpi::ALL) {
            match parse_kpi(kpi, self.kpi_input(kpi)) {
                Ok(v) => *slot = v,
                Err(message) => errors.push(FieldError {
                    field: FormField::Kpi(kpi),
                    message,
                }),
            }
        }

        let Some(start) = start.filter(|_| errors.is_empty()) else {
            tracing::debug!(failures = errors.len(), "form submission rejected");
            return Err(ValidationErrors { errors });
        };

        let mut data = SustainabilityData {
            business_name: name.to_string(),
            time_frame_start: start.date_naive(),
            time_frame_end: now.date_naive(),
            carbon_footprint: 0.0,
            energy_consumption: 0.0,
            renewable_energy_mix: 0.0,
            waste_diversion_rate: 0.0,
            water_usage: 0.0,
            supply_chain_emissions: 0.0,
            employee_engagement: 0.0,
            sustainable_procurement: 0.0,
        };
        for (kpi, v) in Kpi::ALL.into_iter().zip(values) {
            data.set_kpi(kpi, v);
        }
        Ok(data)
    }
}

/// Empty input counts as zero, like an untouched number field.
fn parse_kpi(kpi: Kpi, raw: &str) -> Result<f64, String> {
    let raw = raw.trim();
    let v = if raw.is_empty() {
        0.0
    } else {
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("{} must be a number.", kpi.label()))?
    };
    if v < 0.0 {
        return Err(format!("{} cannot be negative.", kpi.label()));
    }
    if kpi.kind() == KpiKind::Percentage && v > 100.0 {
        return Err(format!("{} must be between 0 and 100.", kpi.label()));
    }
    Ok(v)
}
