use super::model::{EsgPlaybookCategory, ResourceItem};

fn item(title: &str, description: &str) -> ResourceItem {
    ResourceItem {
        title: title.to_string(),
        description: description.to_string(),
    }
}

pub(crate) fn sample_resources(category: EsgPlaybookCategory) -> Vec<ResourceItem> {
    match category {
        EsgPlaybookCategory::ValueDrivers => vec![
            item(
                "Cost Savings Through Resource Efficiency",
                "Measuring energy, water and material flows exposes waste that is invisible in financial ledgers. Organizations that act on granular ESG data routinely cut utility and procurement spend while lowering emissions.",
            ),
            item(
                "Competitive Advantage and Market Access",
                "Customers, investors and public tenders increasingly screen suppliers on credible sustainability performance. Verified ESG data turns a compliance obligation into a differentiator in bids and brand positioning.",
            ),
            item(
                "Business Resilience",
                "Climate, supply and regulatory shocks hit hardest where exposure is unmeasured. ESG data reveals concentration risks in suppliers, sites and resources early enough to diversify.",
            ),
            item(
                "Risk Management",
                "Integrating ESG indicators into enterprise risk registers connects physical climate risk, transition risk and reputational risk to the controls leadership already governs.",
            ),
        ],
        EsgPlaybookCategory::OvercomingChallenges => vec![
            item(
                "Breaking Down Siloed Data",
                "ESG data lives in facilities logs, HR systems, ERPs and supplier portals. A shared inventory of sources and owners is the first step toward a single reliable view.",
            ),
            item(
                "Working Within Resourcing Constraints",
                "Few teams have dedicated ESG analysts. Prioritizing material metrics and automating collection lets a small team deliver credible reporting.",
            ),
            item(
                "Managing Scope and Complexity",
                "Scope 3 emissions and multi-framework disclosure can overwhelm early programs. Phase the scope: start with what is material and measurable, then expand.",
            ),
            item(
                "Building a Common Language",
                "Finance, operations and sustainability teams use the same words differently. A shared glossary and metric definitions prevent reporting disputes.",
            ),
        ],
        EsgPlaybookCategory::DataReadinessFramework => vec![
            item(
                "Stage 1: Data Gathering",
                "Map regulatory and business requirements, inventory data sources and fill gaps where estimates are used today.",
            ),
            item(
                "Stage 2: Data Insights",
                "Standardize capture procedures and validation controls so that ESG data is trustworthy enough to analyze alongside financial data.",
            ),
            item(
                "Stage 3: Data Action",
                "Embed ESG metrics in decisions, scorecards and dashboards, and automate disclosure so insight drives operational change.",
            ),
            item(
                "Dimensions: Process, Technology, People",
                "Readiness advances only when reporting processes, supporting technology and organizational culture mature together.",
            ),
        ],
        EsgPlaybookCategory::IndustryUseCases => vec![
            item(
                "Financial Services",
                "Portfolio emissions measurement, climate stress testing and sustainable product labelling depend on consistent counterparty ESG data.",
            ),
            item(
                "Manufacturing",
                "Energy monitoring at the line level, circular material programs and supplier emissions data reduce both cost and carbon intensity.",
            ),
            item(
                "Retail",
                "Product-level footprints, packaging reduction and responsible sourcing claims require traceable supply chain data.",
            ),
            item(
                "Energy",
                "Methane monitoring, renewable portfolio reporting and transition planning are central to license to operate and capital access.",
            ),
        ],
    }
}
