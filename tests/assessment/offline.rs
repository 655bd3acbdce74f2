use httpmock::MockServer;
use impactsphere::{
    AssessmentCategory, AssessmentWizard, MaturityLevel, assessment::MaturityStage,
    charts::RadarChart,
};

use crate::common::{client_for, fixture, mock_generate};

fn answer_all(wizard: &mut AssessmentWizard, level: MaturityLevel) {
    let n = wizard.current_category().questions().len();
    for i in 0..n {
        assert!(wizard.answer(i, level));
    }
}

#[tokio::test]
async fn offline_wizard_finishes_with_narrative() {
    let server = MockServer::start();
    let mock = mock_generate(
        &server,
        r#"which appears to be \"Technology and data\""#,
        200,
        fixture("generate_recommendations"),
    );
    let client = client_for(&server);

    let mut wizard = AssessmentWizard::new();
    answer_all(&mut wizard, MaturityLevel::Completed);
    wizard.next();
    answer_all(&mut wizard, MaturityLevel::InProgress);
    wizard.next();
    answer_all(&mut wizard, MaturityLevel::InProgress);
    wizard.next();
    wizard.answer(0, MaturityLevel::InProgress);
    wizard.next();
    answer_all(&mut wizard, MaturityLevel::Completed);
    assert!(wizard.is_last_step());

    let results = wizard.finish(&client).await.clone();

    mock.assert();
    assert_eq!(results.scores.get(AssessmentCategory::ReportingProcess), 100.0);
    assert_eq!(results.scores.get(AssessmentCategory::StrategyAndValue), 50.0);
    assert_eq!(results.scores.lowest(), AssessmentCategory::TechnologyAndData);
    assert_eq!(results.stage, MaturityStage::Strategic);
    assert!(!results.recommendations.is_sample());
    assert!(
        results
            .recommendations
            .data
            .starts_with("Your organization is at the Developing stage.")
    );

    let chart = RadarChart::from(&results.scores);
    assert_eq!(chart.points[3].tooltip()[1], "Maturity Score: 8 / 100");
    assert!(wizard.results().is_some());
}

#[tokio::test]
async fn failed_narrative_uses_fixed_advice_and_restart_clears() {
    let server = MockServer::start();
    let mock = mock_generate(&server, "ESG maturity assessment", 502, "{}".to_string());
    let client = client_for(&server);

    let mut wizard = AssessmentWizard::new();
    let results = wizard.finish(&client).await;

    assert!(results.recommendations.is_sample());
    assert!(
        results
            .recommendations
            .data
            .starts_with("Could not generate recommendations.")
    );
    assert_eq!(results.stage, MaturityStage::Foundational);
    mock.assert();

    wizard.restart();
    assert!(wizard.results().is_none());
    assert!(wizard.is_first_step());
}
