use serde::{Deserialize, Serialize};

/// The five assessment categories, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AssessmentCategory {
    #[serde(rename = "Reporting process and capability")]
    ReportingProcess,
    #[serde(rename = "Strategy and value")]
    StrategyAndValue,
    #[serde(rename = "People and culture")]
    PeopleAndCulture,
    #[serde(rename = "Technology and data")]
    TechnologyAndData,
    #[serde(rename = "ESG Data Governance")]
    DataGovernance,
}

impl AssessmentCategory {
    pub const ALL: [AssessmentCategory; 5] = [
        Self::ReportingProcess,
        Self::StrategyAndValue,
        Self::PeopleAndCulture,
        Self::TechnologyAndData,
        Self::DataGovernance,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReportingProcess => "Reporting process and capability",
            Self::StrategyAndValue => "Strategy and value",
            Self::PeopleAndCulture => "People and culture",
            Self::TechnologyAndData => "Technology and data",
            Self::DataGovernance => "ESG Data Governance",
        }
    }

    /// Position in [`AssessmentCategory::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The checklist items of this category.
    pub const fn questions(self) -> &'static [&'static str] {
        match self {
            Self::ReportingProcess => &[
                "Map against business and regulatory requirements.",
                "Identify and fill any data gaps where estimates are used.",
                "Prepare an inventory of data sources and systems where ESG data resides.",
                "Create standardized procedures for consistent data capture.",
                "Implement digital controls for data validation.",
                "Automate reporting processes to streamline disclosures.",
            ],
            Self::StrategyAndValue => &[
                "Develop processes to start and update a company materiality matrix.",
                "Evaluate risks and opportunities with partners and champions.",
                "Develop standardized data frameworks for consistent data collection.",
                "Use existing data to integrate ESG insights across business functions.",
                "Examine C-level priorities and ensure C-suite leaders have resources.",
                "Provide insights and opportunities identified by AI in ESG data sets.",
            ],
            Self::PeopleAndCulture => &[
                "Enhance ESG literacy and education for all employees.",
                "Distribute ESG data accountability across all departments.",
                "Embed ESG data contribution responsibility into roles and scorecards.",
                "Review ESG materiality matrices to inform performance metrics.",
                "Drive an ESG data culture by embedding metrics across all financial dashboards.",
            ],
            Self::TechnologyAndData => &[
                "Collaborate with IT to inventory ESG and business data sources.",
                "Work toward digitizing business processes and equipment.",
                "Ensure ESG data is integrated into any digital transformation.",
                "Integrate accounting software and ERPs into ESG data sets.",
                "Create digital controls and processes to govern ESG data.",
                "Utilize AI to identify insights from large, diverse ESG data sets.",
            ],
            Self::DataGovernance => &[
                "Define and document ESG data management policies and procedures.",
                "Establish clear roles and responsibilities for ESG data ownership.",
                "Implement processes for ESG data quality assurance and validation.",
                "Integrate ESG data governance into broader corporate governance frameworks.",
            ],
        }
    }

    /// Short axis label: the first word of the name.
    pub fn short_name(self) -> &'static str {
        self.as_str().split(' ').next().unwrap_or_default()
    }
}

impl std::fmt::Display for AssessmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress on one checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum MaturityLevel {
    #[default]
    NotStarted = 0,
    InProgress = 1,
    Completed = 2,
}

impl MaturityLevel {
    pub const ALL: [MaturityLevel; 3] = [Self::NotStarted, Self::InProgress, Self::Completed];
    pub const MAX_POINTS: u32 = 2;

    pub const fn points(self) -> u32 {
        self as u32
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl TryFrom<u8> for MaturityLevel {
    type Error = u8;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Self::NotStarted),
            1 => Ok(Self::InProgress),
            2 => Ok(Self::Completed),
            other => Err(other),
        }
    }
}

/// Overall stage derived from the mean category score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MaturityStage {
    Foundational,
    Developing,
    Strategic,
    Transformational,
}

impl MaturityStage {
    pub fn from_score(mean: f64) -> Self {
        if mean < 25.0 {
            Self::Foundational
        } else if mean < 50.0 {
            Self::Developing
        } else if mean < 75.0 {
            Self::Strategic
        } else {
            Self::Transformational
        }
    }
}

/// Answers for every question, one vector per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentAnswers {
    by_category: [Vec<MaturityLevel>; 5],
}

impl Default for AssessmentAnswers {
    fn default() -> Self {
        Self {
            by_category: AssessmentCategory::ALL
                .map(|c| vec![MaturityLevel::NotStarted; c.questions().len()]),
        }
    }
}

impl AssessmentAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: AssessmentCategory) -> &[MaturityLevel] {
        &self.by_category[category.index()]
    }

    /// Sets one answer. Returns `false` (and changes nothing) if the index is out of range.
    pub fn set(
        &mut self,
        category: AssessmentCategory,
        question: usize,
        level: MaturityLevel,
    ) -> bool {
        match self.by_category[category.index()].get_mut(question) {
            Some(slot) => {
                *slot = level;
                true
            }
            None => false,
        }
    }

    /// `100 * sum / (2 * question_count)` for one category.
    pub fn category_score(&self, category: AssessmentCategory) -> f64 {
        let answers = self.get(category);
        let max = answers.len() as u32 * MaturityLevel::MAX_POINTS;
        if max == 0 {
            return 0.0;
        }
        let sum: u32 = answers.iter().map(|a| a.points()).sum();
        f64::from(sum) / f64::from(max) * 100.0
    }

    pub fn scores(&self) -> AssessmentScores {
        AssessmentScores {
            values: AssessmentCategory::ALL.map(|c| self.category_score(c)),
        }
    }
}

/// Per-category maturity scores in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssessmentScores {
    values: [f64; 5],
}

impl AssessmentScores {
    pub fn get(&self, category: AssessmentCategory) -> f64 {
        self.values[category.index()]
    }

    /// `(category, score)` pairs in wizard order.
    pub fn iter(&self) -> impl Iterator<Item = (AssessmentCategory, f64)> + '_ {
        AssessmentCategory::ALL.into_iter().zip(self.values)
    }

    /// The weakest category; ties go to the earliest one.
    pub fn lowest(&self) -> AssessmentCategory {
        let mut best = (AssessmentCategory::ALL[0], self.values[0]);
        for (c, s) in self.iter().skip(1) {
            if s < best.1 {
                best = (c, s);
            }
        }
        best.0
    }

    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    pub fn stage(&self) -> MaturityStage {
        MaturityStage::from_score(self.mean())
    }
}

impl Serialize for AssessmentScores {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (c, s) in self.iter() {
            map.serialize_entry(c.as_str(), &s)?;
        }
        map.end()
    }
}
