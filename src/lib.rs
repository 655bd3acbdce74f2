//! impactsphere: ESG sustainability dashboard core.
//!
//! KPI data entry and validation, a five-category maturity assessment, AI-curated
//! educational content with static fallbacks, and stakeholder reports with chart
//! models and local exports.
//!
//! Every AI-backed view goes through a [`GenerationService`]; [`ImpactClient`] is
//! the HTTP implementation. Content fetchers never fail: on any error they return
//! their sample set tagged [`ContentSource::Sample`] so the caller can show the
//! [`FallbackBanner`].
//!
//! ```no_run
//! use impactsphere::{ImpactClient, playbook::{EsgPlaybookCategory, PlaybookBuilder}};
//!
//! # async fn run() -> Result<(), impactsphere::ImpactError> {
//! let client = ImpactClient::from_env()?;
//! let articles = PlaybookBuilder::new(&client, EsgPlaybookCategory::ValueDrivers)
//!     .fetch()
//!     .await;
//! if let Some(banner) = articles.banner() {
//!     println!("{}: {}", banner.title, banner.message);
//! }
//! for a in &articles.data {
//!     println!("{}: {}", a.title, a.description);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;

pub mod assessment;
pub mod challenges;
pub mod charts;
pub mod entry;
pub mod initiatives;
pub mod insight;
pub mod library;
pub mod playbook;
pub mod report;
pub mod router;
pub mod tracker;
pub mod trends;

pub use crate::core::{
    Backoff, CategoryView, Content, ContentSource, FallbackBanner, GenerationService,
    ImpactClient, ImpactClientBuilder, ImpactError, LatestSlot, Prompt, RetryConfig, Schema,
    SchemaType, Ticket,
};

pub use assessment::{AssessmentCategory, AssessmentScores, AssessmentWizard, MaturityLevel};
pub use entry::{DataEntryForm, Kpi, PeriodUnit, SustainabilityData, ValidationErrors};
pub use report::{Report, ReportBuilder};
pub use router::{Dashboard, View};
pub use tracker::{Tracker, TrackerItem};
