use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("payload serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("payload is not a JSON array of strings: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Encodes the URL list as a JSON array safe to inline inside a `<script>`
/// element: `<`, `>` and `&` become `\u` escapes so no array entry can
/// terminate the surrounding tag.
pub fn encode_script_payload(urls: &[String]) -> Result<String, PayloadError> {
    let json = serde_json::to_string(urls).map_err(PayloadError::Serialize)?;
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

/// Decodes an embedded payload back into the ordered URL list. The `\u`
/// escapes applied by `encode_script_payload` are plain JSON and need no
/// special handling.
pub fn decode_script_payload(json: &str) -> Result<Vec<String>, PayloadError> {
    serde_json::from_str(json).map_err(PayloadError::Parse)
}
