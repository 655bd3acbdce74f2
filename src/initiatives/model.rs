use serde::{Deserialize, Serialize};

/// Resource intensity of an initiative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Badge text, e.g. `Medium Intensity`.
    pub fn badge(self) -> String {
        format!("{} Intensity", self.as_str())
    }
}

/// A quarterly ESG initiative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Initiative {
    pub title: String,
    pub description: String,
    pub difficulty: Intensity,
}
