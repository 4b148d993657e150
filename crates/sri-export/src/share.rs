//! Result links that carry the headline numbers in the URL itself.

use base64::{Engine as _, engine::general_purpose};
use sri_core::clock::Clock;
use sri_core::models::session::AssessmentSession;
use sri_core::models::share::{SharePayload, SharedSri};

use crate::error::ExportError;

/// Payload for a completed session; `None` until it has results. A session
/// with no recorded end time is stamped with the current time.
pub fn payload_from_session(session: &AssessmentSession, clock: &impl Clock) -> Option<SharePayload> {
    let results = session.results.as_ref()?;
    Some(SharePayload {
        sri: SharedSri {
            total_score: results.sri.total_score,
            level: results.sri.level,
            dimension_scores: results.sri.dimension_scores,
        },
        kind: session.kind,
        completed_at: session.end_time.unwrap_or_else(|| clock.now()),
    })
}

/// Standard base64 of the payload JSON.
pub fn encode(payload: &SharePayload) -> Result<String, ExportError> {
    let json = serde_json::to_vec(payload)?;
    Ok(general_purpose::STANDARD.encode(json))
}

/// Inverse of [`encode`]. Tolerates the mangling a query string applies:
/// `+` read back as a space and percent-escaped `+`, `/` and `=`.
pub fn decode(data: &str) -> Result<SharePayload, ExportError> {
    let cleaned = data
        .trim()
        .replace(' ', "+")
        .replace("%2B", "+")
        .replace("%2b", "+")
        .replace("%2F", "/")
        .replace("%2f", "/")
        .replace("%3D", "=")
        .replace("%3d", "=");

    let bytes = general_purpose::STANDARD
        .decode(cleaned.as_bytes())
        .map_err(|e| ExportError::Decode(format!("invalid base64: {e}")))?;
    let payload: SharePayload = serde_json::from_slice(&bytes)
        .map_err(|e| ExportError::Decode(format!("invalid payload: {e}")))?;

    if payload.sri.total_score > 100 {
        return Err(ExportError::Decode(format!(
            "total score {} out of range",
            payload.sri.total_score
        )));
    }
    Ok(payload)
}

/// `{base}/results?shared=true&data=...` with the payload escaped for a
/// query string.
pub fn share_url(base: &str, payload: &SharePayload) -> Result<String, ExportError> {
    let data = encode(payload)?
        .replace('+', "%2B")
        .replace('/', "%2F")
        .replace('=', "%3D");
    Ok(format!(
        "{}/results?shared=true&data={data}",
        base.trim_end_matches('/')
    ))
}

/// Pull the payload back out of a share URL.
pub fn decode_url(url: &str) -> Result<SharePayload, ExportError> {
    let query = url
        .split_once('?')
        .map(|(_, q)| q)
        .ok_or_else(|| ExportError::Decode("URL has no query string".to_string()))?;
    let data = query
        .split('&')
        .find_map(|pair| pair.strip_prefix("data="))
        .ok_or_else(|| ExportError::Decode("URL has no data parameter".to_string()))?;
    decode(data)
}
