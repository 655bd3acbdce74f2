use serde::Serialize;

use crate::assessment::{AssessmentCategory, AssessmentScores};
use crate::core::format::format_score;

/// Series name of the radar polygon.
pub const SERIES: &str = "Maturity";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarPoint {
    /// Short axis label (first word of the category).
    pub subject: &'static str,
    pub full_subject: AssessmentCategory,
    pub score: f64,
    pub full_mark: f64,
}

impl RadarPoint {
    pub fn tooltip(&self) -> [String; 2] {
        [
            self.full_subject.as_str().to_string(),
            format!("Maturity Score: {} / 100", format_score(self.score)),
        ]
    }
}

/// Maturity scores as a radar chart with a fixed 0..=100 radius.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    pub points: Vec<RadarPoint>,
}

impl From<&AssessmentScores> for RadarChart {
    fn from(scores: &AssessmentScores) -> Self {
        Self {
            points: scores
                .iter()
                .map(|(c, score)| RadarPoint {
                    subject: c.short_name(),
                    full_subject: c,
                    score,
                    full_mark: 100.0,
                })
                .collect(),
        }
    }
}

impl RadarChart {
    pub fn render_text(&self) -> String {
        self.points
            .iter()
            .map(|p| format!(
                    "  {}: {} / {}\n",
                    p.full_subject,
                    format_score(p.score),
                    format_score(p.full_mark)
                ))
            .collect()
    }
}
