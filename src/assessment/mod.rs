//! The ESG maturity assessment: a linear five-step wizard over fixed checklists,
//! a per-category score, and an AI-written consultant narrative.

mod model;

pub use model::{
    AssessmentAnswers, AssessmentCategory, AssessmentScores, MaturityLevel, MaturityStage,
};

use crate::core::{
    Content, GenerationService, Prompt, content::text_or_fallback, format::format_score,
};
use serde::Serialize;

const RECOMMENDATIONS_FALLBACK: &str = "Could not generate recommendations. A good first step is to analyze your lowest-scoring category and identify 'quick wins' that can build momentum for your ESG strategy.";

/// Scores plus the narrative requested for them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResults {
    pub scores: AssessmentScores,
    pub stage: MaturityStage,
    pub recommendations: Content<String>,
}

/// Builds the consultant prompt for a set of scores.
pub fn recommendations_prompt(scores: &AssessmentScores) -> String {
    let lines: Vec<String> = scores
        .iter()
        .map(|(c, s)| format!("- {}: {}/100", c.as_str(), format_score(s)))
        .collect();
    format!(
        "An organization performed an ESG maturity assessment based on \"The Leader's Guide to Sustainable Business Transformation.\" Here are their maturity scores (out of 100) for each key category:\n{}\n\n\n\
Act as a top-tier ESG strategy consultant providing feedback to their leadership team. \n\
1.  First, provide a brief, high-level summary of their current ESG maturity stage (e.g., Foundational, Developing, Strategic, Transformational) based on the overall scores.\n\
2.  Then, provide 3 concise, actionable, and prioritized recommendations to help them advance. The recommendations should be strategic and focus on their weakest area, which appears to be \"{}\". Frame the advice for C-level executives.",
        lines.join("\n"),
        scores.lowest().as_str()
    )
}

/// Wizard state: the current step, the answers so far, and the results once finished.
#[derive(Debug, Clone, Default)]
pub struct AssessmentWizard {
    step: usize,
    answers: AssessmentAnswers,
    results: Option<AssessmentResults>,
}

impl AssessmentWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_category(&self) -> AssessmentCategory {
        AssessmentCategory::ALL[self.step]
    }

    /// Zero-based step index.
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn is_first_step(&self) -> bool {
        self.step == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.step + 1 == AssessmentCategory::ALL.len()
    }

    pub fn answers(&self) -> &AssessmentAnswers {
        &self.answers
    }

    pub fn results(&self) -> Option<&AssessmentResults> {
        self.results.as_ref()
    }

    /// Answers question `index` of the current category.
    pub fn answer(&mut self, index: usize, level: MaturityLevel) -> bool {
        let category = self.current_category();
        self.answers.set(category, index, level)
    }

    /// Advances one step. No-op on the last step.
    pub fn next(&mut self) -> bool {
        if self.is_last_step() {
            return false;
        }
        self.step += 1;
        true
    }

    /// Goes back one step. No-op on the first step.
    pub fn previous(&mut self) -> bool {
        if self.is_first_step() {
            return false;
        }
        self.step -= 1;
        true
    }

    pub fn scores(&self) -> AssessmentScores {
        self.answers.scores()
    }

    /// Computes the scores, requests the narrative and stores the results.
    ///
    /// A failed request yields the fixed fallback advice, marked as sample content.
    #[tracing::instrument(skip_all)]
    pub async fn finish(&mut self, generator: &dyn GenerationService) -> &AssessmentResults {
        let scores = self.scores();
        let prompt = Prompt::text(recommendations_prompt(&scores));
        let recommendations = text_or_fallback(
            generator,
            &prompt,
            "assessment recommendations",
            RECOMMENDATIONS_FALLBACK,
        )
        .await;
        self.results.insert(AssessmentResults {
            scores,
            stage: scores.stage(),
            recommendations,
        })
    }

    /// Resets answers, step and results.
    pub fn restart(&mut self) {
        *self = Self::default();
    }
}
