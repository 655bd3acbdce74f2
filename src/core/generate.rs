use serde::de::DeserializeOwned;

use crate::core::{
    ImpactClient, ImpactError, net,
    services::Prompt,
    wire::{GenerateEnvelope, GenerateRequest},
};

/// Sends one prompt and returns the first candidate's text.
pub(crate) async fn generate(
    client: &ImpactClient,
    prompt: &Prompt,
) -> Result<String, ImpactError> {
    let url = client.generate_url()?;
    let body = GenerateRequest::new(&prompt.text, prompt.schema.as_ref());

    let req = client.authorize(client.http().post(url).json(&body));
    let resp = client.send_with_retry(req, prompt.retry.as_ref()).await?;

    if !resp.status().is_success() {
        return Err(ImpactError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    let text = net::get_text(resp, "generateContent").await?;
    let envelope: GenerateEnvelope = serde_json::from_str(&text)?;

    if let Some(err) = envelope.error {
        let code = err.code.map(|c| format!("{c} ")).unwrap_or_default();
        return Err(ImpactError::Api(format!(
            "{code}{}",
            err.message.unwrap_or_else(|| "unknown error".into())
        )));
    }

    envelope.into_text().ok_or(ImpactError::EmptyResponse)
}

/// Parses a JSON array answer, rejecting an empty list.
///
/// Models occasionally wrap JSON in a Markdown code fence even in JSON mode; the
/// fence is stripped before parsing.
pub(crate) fn parse_list<T: DeserializeOwned>(raw: &str) -> Result<Vec<T>, ImpactError> {
    let items: Vec<T> = serde_json::from_str(strip_fence(raw))?;
    if items.is_empty() {
        return Err(ImpactError::EmptyResponse);
    }
    Ok(items)
}

fn strip_fence(raw: &str) -> &str {
    let t = raw.trim();
    let Some(rest) = t.strip_prefix("```") else {
        return t;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
