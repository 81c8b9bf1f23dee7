use serde_json::Value;

use crate::identity::errors::ResolveError;
use crate::identity::types::SessionPayload;
use crate::utils::base64_decode;

/// Decode a raw session cookie value into its payload.
///
/// # Arguments
/// * `value` - The cookie value exactly as stored (standard base64 of a JSON document)
///
/// # Returns
/// * `Result<SessionPayload, ResolveError>` - The payload, `DecodeFailure` for bad base64,
///   or `StructureFailure` when the decoded bytes are not JSON
pub fn decode_session_cookie(value: &str) -> Result<SessionPayload, ResolveError> {
    let decoded = base64_decode(value)?;

    let json: Value = serde_json::from_slice(&decoded)
        .map_err(|e| ResolveError::StructureFailure(e.to_string()))?;

    Ok(SessionPayload::from(json))
}
