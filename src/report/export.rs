use serde::Serialize;

use super::Report;

const PRINT_FOOTER: &str =
    "Generated by ImpactSphere | For more information, visit myHerb.co.il";

/// An email draft as a `mailto:` link, ready to hand to the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}

impl EmailDraft {
    pub fn mailto_url(&self) -> String {
        format!(
            "mailto:?subject={}&body={}",
            encode_component(&self.subject),
            encode_component(&self.body)
        )
    }
}

/// Percent-encodes a query component with `%20` for spaces.
fn encode_component(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Collapses every whitespace run into one `_`.
fn underscore_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push('_');
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

impl Report {
    /// Plain-text export body.
    pub fn to_text(&self) -> String {
        let mut out = format!("{} - Sustainability Report\n", self.data.business_name);
        out.push_str("=================================\n\n");
        out.push_str(&format!("Reporting Period: {}\n\n", self.reporting_period()));
        out.push_str(&format!(
            "AI-Generated Executive Summary:\n{}\n\n",
            self.summary.data
        ));
        out.push_str("Key Performance Indicators:\n");
        for tile in self.kpi_tiles() {
            out.push_str(&format!("- {}: {}\n", tile.label, tile.value));
        }
        out
    }

    /// `Acme_Corp_Report.txt`
    pub fn text_file_name(&self) -> String {
        format!("{}_Report.txt", underscore_whitespace(&self.data.business_name))
    }

    pub fn email_draft(&self) -> EmailDraft {
        let name = &self.data.business_name;
        EmailDraft {
            subject: format!("Sustainability Report for {name} from ImpactSphere"),
            body: format!(
                "Hello,\n\nPlease find the latest sustainability report summary for {name} below.\n\n\
                 Reporting Period: {}\n\n\
                 Executive Summary:\n{}\n\n\
                 This report was generated using ImpactSphere.\n",
                self.reporting_period(),
                self.summary.data
            ),
        }
    }

    pub fn mailto_url(&self) -> String {
        self.email_draft().mailto_url()
    }

    /// The full printable document: header, summary, tiles, both charts and footer.
    pub fn print_document(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.data.business_name);
        out.push('\n');
        out.push_str("Sustainability Report | ImpactSphere\n");
        out.push_str(&format!("Reporting Period: {}\n\n", self.reporting_period()));

        out.push_str("AI-Generated Executive Summary\n");
        out.push_str(&self.summary.data);
        out.push_str("\n\n");

        for tile in self.kpi_tiles() {
            out.push_str(&format!(
                "{}: {} ({})\n",
                tile.label,
                tile.value,
                tile.change_label()
            ));
        }
        out.push('\n');

        out.push_str("Carbon Footprint by Scope (tCO₂e)\n");
        out.push_str(&self.scope_chart().render_text());
        out.push('\n');
        out.push_str("Energy Consumption by Source\n");
        out.push_str(&self.energy_mix_chart().render_text());
        out.push('\n');

        out.push_str(PRINT_FOOTER);
        out.push('\n');
        out
    }
}
