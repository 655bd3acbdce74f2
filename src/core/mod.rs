//! Core components of the `impactsphere` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`ImpactClient`] and its builder.
//! - The primary [`ImpactError`] type.
//! - The generative completion wire format and response schemas.
//! - The [`Content`] wrapper that records whether data is live or sample.
//! - The [`LatestSlot`] guard that drops stale responses.

/// The main client (`ImpactClient`), builder, and configuration.
pub mod client;
/// Live-or-sample content wrapper and the fallback banner.
pub mod content;
/// The primary error type (`ImpactError`) for the crate.
pub mod error;
/// Locale-style number and date formatting shared by reports and charts.
pub mod format;
pub(crate) mod generate;
/// Declarative JSON response schemas sent with structured prompts.
pub mod schema;
/// Service traits for abstracting text generation.
pub mod services;
/// Request-generation tagging for views that switch categories.
pub mod slot;
pub(crate) mod wire;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::ImpactClient`
pub use client::{Backoff, ImpactClient, ImpactClientBuilder, RetryConfig};
pub use content::{Content, ContentSource, FallbackBanner};
pub use error::ImpactError;
pub use schema::{Schema, SchemaType};
pub use services::{GenerationService, Prompt};
pub use slot::{CategoryView, LatestSlot, Ticket};
