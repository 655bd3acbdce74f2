//! Chart models for the report and the assessment results.
//!
//! Each model is plain serializable data plus the tooltip, legend and caption
//! strings a renderer needs, and a `render_text` block used by text exports.

mod bar;
mod pie;
mod radar;

pub use bar::{BarChart, BarPoint, INDUSTRY_AVERAGE, YOUR_RESULT};
pub use pie::{PieChart, PieSlice, RENEWABLES};
pub use radar::{RadarChart, RadarPoint, SERIES as RADAR_SERIES};
