use serde::{Deserialize, Serialize};

use crate::core::format::format_number;

/// Legend name of the organization's series.
pub const YOUR_RESULT: &str = "Your Result";
/// Legend name of the benchmark series.
pub const INDUSTRY_AVERAGE: &str = "Industry Average";

/// Grouped bars: one pair (result, average) per label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChart {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub average_values: Vec<f64>,
}

/// One bar group as drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarPoint {
    pub name: String,
    pub your_value: f64,
    pub average_value: f64,
}

impl BarPoint {
    /// Tooltip lines: the label, then both series.
    pub fn tooltip(&self) -> [String; 3] {
        [
            self.name.clone(),
            format!("{YOUR_RESULT}: {}", format_number(self.your_value)),
            format!("{INDUSTRY_AVERAGE}: {}", format_number(self.average_value)),
        ]
    }
}

impl BarChart {
    pub fn new(
        labels: impl IntoIterator<Item = impl Into<String>>,
        values: Vec<f64>,
        average_values: Vec<f64>,
    ) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            values,
            average_values,
        }
    }

    /// Zips labels with both series. Missing values read as zero.
    pub fn points(&self) -> Vec<BarPoint> {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, name)| BarPoint {
                name: name.clone(),
                your_value: self.values.get(i).copied().unwrap_or_default(),
                average_value: self.average_values.get(i).copied().unwrap_or_default(),
            })
            .collect()
    }

    pub fn legend(&self) -> [&'static str; 2] {
        [YOUR_RESULT, INDUSTRY_AVERAGE]
    }

    /// One line per group: `  Scope 1 (Direct): Your Result 10,500 | Industry Average 12,500`.
    pub fn render_text(&self) -> String {
        self.points()
            .iter()
            .map(|p| {
                format!(
                    "  {}: {YOUR_RESULT} {} | {INDUSTRY_AVERAGE} {}\n",
                    p.name,
                    format_number(p.your_value),
                    format_number(p.average_value)
                )
            })
            .collect()
    }
}
