use impactsphere::{
    AssessmentCategory, AssessmentWizard, ImpactClient, MaturityLevel, charts::RadarChart,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = ImpactClient::from_env()?;

    // Walk the wizard, cycling through the answer choices.
    let mut wizard = AssessmentWizard::new();
    loop {
        let category = wizard.current_category();
        println!("{category}");
        for (i, question) in category.questions().iter().enumerate() {
            let level = MaturityLevel::ALL[(i + wizard.step()) % MaturityLevel::ALL.len()];
            println!("  [{}] {question}", level.label());
            wizard.answer(i, level);
        }
        if category == AssessmentCategory::ReportingProcess {
            wizard.answer(0, MaturityLevel::Completed);
        }
        if !wizard.next() {
            break;
        }
    }

    let results = wizard.finish(&client).await;
    println!("Stage: {:?}", results.stage);
    print!("{}", RadarChart::from(&results.scores).render_text());
    println!();
    if let Some(banner) = results.recommendations.banner() {
        println!("[{}]", banner.title);
    }
    println!("{}", results.recommendations.data);

    Ok(())
}
