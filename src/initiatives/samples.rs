use super::model::{Initiative, Intensity};

fn initiative(title: &str, description: &str, difficulty: Intensity) -> Initiative {
    Initiative {
        title: title.to_string(),
        description: description.to_string(),
        difficulty,
    }
}

pub(crate) fn sample_initiatives() -> Vec<Initiative> {
    vec![
        initiative(
            "Launch an ESG Data Inventory",
            "Catalogue every system, spreadsheet and supplier portal that holds ESG data, name an owner for each, and record how often it refreshes. The inventory becomes the backbone for automated reporting.",
            Intensity::Low,
        ),
        initiative(
            "Tie Executive Scorecards to ESG Targets",
            "Add two or three material ESG metrics to leadership scorecards so accountability for emissions, safety or diversity sits with the people who control the budgets.",
            Intensity::Medium,
        ),
        initiative(
            "Engage Top Suppliers on Emissions Data",
            "Ask the suppliers behind most of your spend for primary emissions data, replacing spend-based estimates in your Scope 3 inventory and opening joint reduction projects.",
            Intensity::High,
        ),
    ]
}
