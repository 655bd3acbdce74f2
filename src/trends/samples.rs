use super::model::SustainabilityTrend;

fn trend(name: &str, value: &str, change: f64, insight: &str) -> SustainabilityTrend {
    SustainabilityTrend {
        name: name.to_string(),
        value: value.to_string(),
        change,
        insight: insight.to_string(),
    }
}

/// The fixed snapshot shown when live trends are unavailable.
pub fn sample_trends() -> Vec<SustainabilityTrend> {
    vec![
        trend(
            "Global Renewable Energy Investment",
            "$1.8T",
            12.0,
            "Investment continues to accelerate, driven by lower costs and policy support.",
        ),
        trend(
            "Average Carbon Price (Global)",
            "$32/ton",
            8.0,
            "Carbon pricing mechanisms are expanding, but prices remain below levels needed for Paris Agreement goals.",
        ),
        trend(
            "Global EV Market Share",
            "18%",
            25.0,
            "Rapid adoption in major markets is reshaping the automotive industry.",
        ),
        trend(
            "Corporate ESG Reporting Rate (S&P 500)",
            "96%",
            4.0,
            "Mandatory reporting and investor pressure have made ESG disclosure standard practice.",
        ),
        trend(
            "Circular Economy Growth (Projected)",
            "$4.5T",
            7.0,
            "Represents a significant economic opportunity in waste reduction and resource efficiency.",
        ),
        trend(
            "Global Plastic Waste Generation",
            "353M tons",
            -2.0,
            "Modest progress in reduction highlights the ongoing challenge of plastic pollution.",
        ),
    ]
}
