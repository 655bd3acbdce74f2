use serde::{Deserialize, Serialize};

/// The four sections of the ESG playbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EsgPlaybookCategory {
    #[default]
    #[serde(rename = "ESG Value Drivers")]
    ValueDrivers,
    #[serde(rename = "Overcoming Challenges")]
    OvercomingChallenges,
    #[serde(rename = "Data Readiness Framework")]
    DataReadinessFramework,
    #[serde(rename = "Industry Use Cases")]
    IndustryUseCases,
}

impl EsgPlaybookCategory {
    /// Tab order.
    pub const ALL: [EsgPlaybookCategory; 4] = [
        Self::ValueDrivers,
        Self::OvercomingChallenges,
        Self::DataReadinessFramework,
        Self::IndustryUseCases,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValueDrivers => "ESG Value Drivers",
            Self::OvercomingChallenges => "Overcoming Challenges",
            Self::DataReadinessFramework => "Data Readiness Framework",
            Self::IndustryUseCases => "Industry Use Cases",
        }
    }

    pub(crate) const fn prompt(self) -> &'static str {
        match self {
            Self::ValueDrivers => {
                "Based on 'The Leader's Guide to Sustainable Business Transformation', generate 4 detailed articles explaining the key strategic business values driven by ESG data. Cover topics like Cost Savings, Competitive Advantage, Business Resilience, and Risk Management."
            }
            Self::OvercomingChallenges => {
                "Based on the guide, generate 4 articles on the shared challenges in transforming a business with ESG data. Cover Siloed Data, Resourcing Constraints, Scope & Complexity, and Lack of a Common Language."
            }
            Self::DataReadinessFramework => {
                "Based on the guide, generate 4 articles explaining the framework for advancing ESG data readiness. Detail the stages (Data Gathering, Data Insights, Data Action) and key dimensions like Reporting Process, Technology, and People & Culture."
            }
            Self::IndustryUseCases => {
                "Based on the guide, generate 4 articles summarizing ESG use cases and strategic opportunities for different industries. Cover Financial Services, Manufacturing, Retail, and Energy."
            }
        }
    }
}

impl std::fmt::Display for EsgPlaybookCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One playbook article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceItem {
    pub title: String,
    pub description: String,
}
