use serde::{Deserialize, Serialize};

/// One global sustainability indicator for the dashboard snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SustainabilityTrend {
    pub name: String,
    /// Current value with units, e.g. `$1.8T`.
    pub value: String,
    /// Recent percentage change; negative for a decrease.
    pub change: f64,
    pub insight: String,
}

impl SustainabilityTrend {
    /// `▲ 12%` or `▼ 2%`; zero counts as an increase.
    pub fn change_label(&self) -> String {
        let arrow = if self.change >= 0.0 { '▲' } else { '▼' };
        format!("{arrow} {}%", self.change.abs())
    }
}
