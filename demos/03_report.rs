use impactsphere::{Dashboard, DataEntryForm, ImpactClient, Kpi, PeriodUnit, report::NO_DATA_TITLE};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=impactsphere=debug shows the benchmark lookup and any fallbacks.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = ImpactClient::from_env()?;
    let mut session = Dashboard::new();
    if session.report_builder(&client).is_none() {
        println!("{NO_DATA_TITLE}");
    }

    let mut form = DataEntryForm::new();
    form.set_business_name("Acme Corporation")
        .set_period("3", PeriodUnit::Months)
        .set_kpi(Kpi::CarbonFootprint, "10500")
        .set_kpi(Kpi::EnergyConsumption, "25000")
        .set_kpi(Kpi::RenewableEnergyMix, "42")
        .set_kpi(Kpi::WasteDiversionRate, "68")
        .set_kpi(Kpi::WaterUsage, "48000")
        .set_kpi(Kpi::SupplyChainEmissions, "16000")
        .set_kpi(Kpi::EmployeeEngagement, "80")
        .set_kpi(Kpi::SustainableProcurement, "55");

    match form.submit() {
        Ok(data) => session.submit_data(data),
        Err(errors) => {
            for e in &errors.errors {
                eprintln!("{}: {}", e.field, e.message);
            }
            return Err(errors.into());
        }
    }

    if let Some(builder) = session.report_builder(&client) {
        let report = builder.build().await;
        println!("{}", report.print_document());
        println!("Saved as: {}", report.text_file_name());
        println!("Email: {}", report.mailto_url());
    }

    Ok(())
}
