//! Response-shape normalization. The upstream body is untrusted,
//! partially-structured JSON whose shape varies by routed provider, so
//! extraction is an ordered list of pure strategies rather than nested
//! control flow.

use serde_json::Value;

use crate::connectors::AdapterError;

/// One extraction strategy: probe a known shape, yield the payload if it
/// matches.
pub type ExtractFn = fn(&Value) -> Option<String>;

/// Known text completion shapes, tried in order.
pub const TEXT_EXTRACTORS: &[ExtractFn] = &[message_content, choice_text];

/// Cap on the raw-body fallback so an arbitrarily large upstream response
/// cannot balloon the reply.
pub const RAW_FALLBACK_LIMIT: usize = 2000;

/// Primary OpenAI-style shape: `choices[0].message.content`.
pub fn message_content(body: &Value) -> Option<String> {
    body.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
}

/// Alternate shape some routed providers use: `choices[0].text`.
pub fn choice_text(body: &Value) -> Option<String> {
    body.pointer("/choices/0/text")
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
}

/// Runs the strategy chain and, when no known shape matches, falls back to
/// a truncated serialization of the whole body instead of failing.
///
/// TODO: the raw-body fallback mirrors the behavior this service replaced
/// and mostly helps debugging; consider turning it into a hard
/// unexpected-shape error once the routed model set has settled.
pub fn extract_text(body: &Value) -> String {
    TEXT_EXTRACTORS
        .iter()
        .find_map(|strategy| strategy(body))
        .unwrap_or_else(|| truncated_raw(body))
}

/// Locates `choices[0].message.images[0].image_url.url`. An intact message
/// with no images is a model refusal (`NoImage`); a broken path is a shape
/// we do not understand (`UnexpectedShape`).
pub fn extract_image(body: &Value) -> Result<String, AdapterError> {
    let message = body
        .pointer("/choices/0/message")
        .filter(|m| m.is_object())
        .ok_or(AdapterError::UnexpectedShape)?;

    let images = match message.get("images") {
        Some(Value::Array(images)) => images,
        Some(_) => return Err(AdapterError::NoImage),
        None => return Err(AdapterError::NoImage),
    };
    let first = images.first().ok_or(AdapterError::NoImage)?;

    first
        .pointer("/image_url/url")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(AdapterError::UnexpectedShape)
}

fn truncated_raw(body: &Value) -> String {
    let raw = body.to_string();
    if raw.len() <= RAW_FALLBACK_LIMIT {
        return raw;
    }
    // Cut on a char boundary at or below the limit.
    let mut end = RAW_FALLBACK_LIMIT;
    while !raw.is_char_boundary(end) {
        end -= 1;
    }
    raw[..end].to_string()
}
