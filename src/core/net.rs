/// Read the response body as text, logging its size at `trace`.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    what: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;
    tracing::trace!(what, bytes = text.len(), "read completion body");
    Ok(text)
}
