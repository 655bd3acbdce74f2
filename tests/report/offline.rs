use chrono::{TimeZone, Utc};
use futures::future::BoxFuture;
use httpmock::MockServer;
use impactsphere::{
    ContentSource, DataEntryForm, Dashboard, GenerationService, ImpactError, Kpi, Prompt, View,
    report::{IndustryAverageData, NO_DATA_TITLE, ReportBuilder},
};
use std::time::{Duration, Instant};

use crate::common::{client_for, fixture, mock_generate};

/// Answers every prompt after a fixed delay.
struct SlowSummary(Duration);

impl GenerationService for SlowSummary {
    fn generate<'a>(&'a self, _: &'a Prompt) -> BoxFuture<'a, Result<String, ImpactError>> {
        Box::pin(async move {
            tokio::time::sleep(self.0).await;
            Ok("Summary after a while.".to_string())
        })
    }
}

fn acme_form() -> DataEntryForm {
    let mut f = DataEntryForm::new();
    f.set_business_name("Acme Corporation")
        .set_kpi(Kpi::CarbonFootprint, "10500")
        .set_kpi(Kpi::EnergyConsumption, "25000")
        .set_kpi(Kpi::RenewableEnergyMix, "42")
        .set_kpi(Kpi::WasteDiversionRate, "68")
        .set_kpi(Kpi::WaterUsage, "48000")
        .set_kpi(Kpi::SupplyChainEmissions, "16000")
        .set_kpi(Kpi::EmployeeEngagement, "80")
        .set_kpi(Kpi::SustainableProcurement, "55");
    f
}

#[tokio::test]
async fn offline_report_joins_summary_and_benchmarks() {
    let server = MockServer::start();
    let mock = mock_generate(
        &server,
        r#"\"Acme Corporation\": {\"carbonFootprint\":10500,\"energyConsumption\":25000,"#,
        200,
        fixture("generate_report_summary"),
    );
    let client = client_for(&server);
    let now = Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap();
    let data = acme_form().submit_at(now).unwrap();

    let delay = Duration::from_millis(50);
    let started = Instant::now();
    let report = ReportBuilder::new(&client, data)
        .benchmark_delay(delay)
        .build()
        .await;

    mock.assert();
    assert!(started.elapsed() >= delay);
    assert_eq!(report.summary.source, ContentSource::Live);
    assert!(report.summary.data.starts_with("Acme Corporation made clear progress"));
    assert!(report.summary.data.ends_with("main areas for improvement."));
    assert_eq!(report.averages, IndustryAverageData::REFERENCE);

    let text = report.to_text();
    assert!(text.starts_with("Acme Corporation - Sustainability Report\n"));
    assert!(text.contains("Reporting Period: June 3, 2024 - June 10, 2024\n"));
    assert!(text.contains("- Water Usage (m³): 48,000\n"));
    assert_eq!(report.text_file_name(), "Acme_Corporation_Report.txt");
    assert!(report.mailto_url().starts_with(
        "mailto:?subject=Sustainability%20Report%20for%20Acme%20Corporation%20from%20ImpactSphere&body="
    ));
}

#[tokio::test]
async fn summary_and_benchmark_overlap() {
    let delay = Duration::from_millis(300);
    let generator = SlowSummary(delay);
    let data = acme_form()
        .submit_at(Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap())
        .unwrap();

    let started = Instant::now();
    let report = ReportBuilder::new(&generator, data)
        .benchmark_delay(delay)
        .build()
        .await;
    let elapsed = started.elapsed();

    assert!(elapsed >= delay);
    assert!(elapsed < delay * 2 - Duration::from_millis(100), "took {elapsed:?}");
    assert_eq!(report.summary.data, "Summary after a while.");
    assert_eq!(report.averages, IndustryAverageData::REFERENCE);
}

#[tokio::test]
async fn failed_summary_uses_fallback_text() {
    let server = MockServer::start();
    let mock = mock_generate(&server, "executive summary", 500, "{}".to_string());
    let client = client_for(&server);
    let data = acme_form()
        .submit_at(Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap())
        .unwrap();

    let report = ReportBuilder::new(&client, data)
        .benchmark_delay(Duration::from_millis(1))
        .build()
        .await;

    mock.assert();
    assert!(report.summary.is_sample());
    assert!(report.summary.data.starts_with("Could not generate summary."));
    assert!(report.print_document().contains("Grid (Fossil) : 58%"));
}

#[tokio::test]
async fn dashboard_reports_only_after_submission() {
    let server = MockServer::start();
    let _mock = mock_generate(
        &server,
        "executive summary",
        200,
        fixture("generate_report_summary"),
    );
    let client = client_for(&server);
    let mut session = Dashboard::new();

    assert!(session.report_builder(&client).is_none());
    assert_eq!(NO_DATA_TITLE, "No Data to Report");

    let data = acme_form().submit().unwrap();
    session.submit_data(data);
    assert_eq!(session.active_view(), View::Reporting);

    let report = session
        .report_builder(&client)
        .expect("data submitted")
        .benchmark_delay(Duration::from_millis(1))
        .build()
        .await;
    assert_eq!(report.data.business_name, "Acme Corporation");
    assert_eq!(report.kpi_tiles()[7].value, "42%");
}
