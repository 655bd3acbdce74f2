use serde::{Deserialize, Serialize};

/// Slice label whose value is compared against the benchmark.
pub const RENEWABLES: &str = "Renewables";

/// Donut chart of percentage shares plus one benchmark value for the caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieChart {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub average_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
}

impl PieSlice {
    pub fn tooltip(&self) -> String {
        format!("{} : {}%", self.name, self.value)
    }
}

impl PieChart {
    pub fn new(
        labels: impl IntoIterator<Item = impl Into<String>>,
        values: Vec<f64>,
        average_value: f64,
    ) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            values,
            average_value,
        }
    }

    pub fn slices(&self) -> Vec<PieSlice> {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, name)| PieSlice {
                name: name.clone(),
                value: self.values.get(i).copied().unwrap_or_default(),
            })
            .collect()
    }

    /// Value of the `Renewables` slice, or 0 when there is none.
    pub fn renewable_value(&self) -> f64 {
        self.labels
            .iter()
            .position(|l| l == RENEWABLES)
            .and_then(|i| self.values.get(i).copied())
            .unwrap_or_default()
    }

    pub fn legend(&self) -> Vec<&str> {
        self.labels.iter().map(String::as_str).collect()
    }

    pub fn caption(&self) -> String {
        format!(
            "Your renewable mix is {}% compared to the industry average of {}%.",
            self.renewable_value(),
            self.average_value
        )
    }

    pub fn render_text(&self) -> String {
        let mut out: String = self
            .slices()
            .iter()
            .map(|s| format!("  {}\n", s.tooltip()))
            .collect();
        out.push_str("  ");
        out.push_str(&self.caption());
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_uses_renewables_slice() {
        let chart = PieChart::new(["Grid (Fossil)", "Renewables"], vec![58.0, 42.0], 35.0);
        assert_eq!(
            chart.caption(),
            "Your renewable mix is 42% compared to the industry average of 35%."
        );
        assert_eq!(chart.slices()[0].tooltip(), "Grid (Fossil) : 58%");
    }

    #[test]
    fn missing_renewables_label_reads_as_zero() {
        let chart = PieChart::new(["Coal", "Gas"], vec![70.0, 30.0], 35.0);
        assert_eq!(chart.renewable_value(), 0.0);
        assert!(chart.caption().starts_with("Your renewable mix is 0%"));
    }

    #[test]
    fn text_block_ends_with_caption() {
        let chart = PieChart::new(["Grid (Fossil)", "Renewables"], vec![62.5, 37.5], 35.0);
        let text = chart.render_text();
        assert!(text.contains("  Renewables : 37.5%\n"));
        assert!(text.trim_end().ends_with("industry average of 35%."));
    }
}
