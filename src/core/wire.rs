use serde::{Deserialize, Serialize};

use crate::core::Schema;

/* ---------------- request ---------------- */

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateRequest<'a> {
    pub(crate) contents: Vec<RequestContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Serialize)]
pub(crate) struct RequestContent<'a> {
    pub(crate) parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
pub(crate) struct RequestPart<'a> {
    pub(crate) text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig<'a> {
    pub(crate) response_mime_type: &'static str,
    pub(crate) response_schema: &'a Schema,
}

impl<'a> GenerateRequest<'a> {
    pub(crate) fn new(prompt: &'a str, schema: Option<&'a Schema>) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: schema.map(|s| GenerationConfig {
                response_mime_type: "application/json",
                response_schema: s,
            }),
        }
    }
}

/* ---------------- response ---------------- */

#[derive(Deserialize)]
pub(crate) struct GenerateEnvelope {
    pub(crate) candidates: Option<Vec<Candidate>>,
    pub(crate) error: Option<ApiErrorBody>,
}

#[derive(Deserialize)]
pub(crate) struct Candidate {
    pub(crate) content: Option<CandidateContent>,
}

#[derive(Deserialize)]
pub(crate) struct CandidateContent {
    pub(crate) parts: Option<Vec<ResponsePart>>,
}

#[derive(Deserialize)]
pub(crate) struct ResponsePart {
    pub(crate) text: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct ApiErrorBody {
    pub(crate) code: Option<u16>,
    pub(crate) message: Option<String>,
}

impl GenerateEnvelope {
    /// Concatenated text of the first candidate, if it has any.
    pub(crate) fn into_text(self) -> Option<String> {
        let parts = self
            .candidates?
            .into_iter()
            .next()?
            .content?
            .parts?;
        let text: String = parts.into_iter().filter_map(|p| p.text).collect();
        (!text.trim().is_empty()).then_some(text)
    }
}
