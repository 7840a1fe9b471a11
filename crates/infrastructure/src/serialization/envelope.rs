//! Web API response envelope decoding.
//!
//! Every Web API response is a JSON object with an `ok` flag. Failures carry
//! an `error` code, and successes may carry a `warning`. The remaining fields
//! are the method's payload.

use serde::de::DeserializeOwned;
use serde_json::Value;
use slackweb_application::TransportError;
use slackweb_domain::ApiMethod;

/// Error code used when the server reports `ok: false` without a code.
pub const UNKNOWN_ERROR_CODE: &str = "unknown_error";

/// Decodes a response body into `T`, checking the envelope first.
///
/// # Errors
///
/// - [`TransportError::Decode`] if the body is not a JSON object with a
///   boolean `ok` field, or the payload does not match `T`
/// - [`TransportError::Platform`] if `ok` is false
pub fn decode_envelope<T: DeserializeOwned>(
    method: ApiMethod,
    body: &[u8],
) -> Result<T, TransportError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| TransportError::Decode(e.to_string()))?;

    let ok = value
        .get("ok")
        .and_then(Value::as_bool)
        .ok_or_else(|| TransportError::Decode(format!("{method}: missing `ok` flag")))?;

    if !ok {
        let code = value
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_ERROR_CODE)
            .to_string();
        return Err(TransportError::Platform { method, code });
    }

    if let Some(warning) = value.get("warning").and_then(Value::as_str) {
        tracing::warn!(%method, warning, "Web API returned a warning");
    }

    serde_json::from_value(value).map_err(|e| TransportError::Decode(format!("{method}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::de::IgnoredAny;
    use slackweb_domain::StarListResponse;

    #[test]
    fn test_decodes_payload() {
        let body = br#"{"ok": true, "items": [], "response_metadata": {"next_cursor": "xyz"}}"#;
        let response: StarListResponse =
            decode_envelope(ApiMethod::StarsList, body).expect("decode should work");
        assert_eq!(response.next_cursor(), Some("xyz"));
    }

    #[test]
    fn test_ok_false_is_platform_error() {
        let body = br#"{"ok": false, "error": "not_starred"}"#;
        let result = decode_envelope::<IgnoredAny>(ApiMethod::StarsRemove, body);

        assert!(matches!(
            result,
            Err(TransportError::Platform { method: ApiMethod::StarsRemove, ref code })
                if code == "not_starred"
        ));
    }

    #[test]
    fn test_ok_false_without_code() {
        let result = decode_envelope::<IgnoredAny>(ApiMethod::StarsAdd, br#"{"ok": false}"#);
        assert_eq!(
            result.map(|_| ()),
            Err(TransportError::Platform {
                method: ApiMethod::StarsAdd,
                code: UNKNOWN_ERROR_CODE.to_string(),
            })
        );
    }

    #[test]
    fn test_warning_does_not_fail() {
        let body = br#"{"ok": true, "warning": "superfluous_charset"}"#;
        assert!(decode_envelope::<IgnoredAny>(ApiMethod::StarsAdd, body).is_ok());
    }

    #[test]
    fn test_missing_ok_is_decode_error() {
        let result = decode_envelope::<IgnoredAny>(ApiMethod::StarsAdd, br#"{"items": []}"#);
        assert!(matches!(result, Err(TransportError::Decode(_))));
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let result = decode_envelope::<IgnoredAny>(ApiMethod::StarsAdd, b"<html>");
        assert!(matches!(result, Err(TransportError::Decode(_))));
    }

    #[test]
    fn test_payload_shape_mismatch_is_decode_error() {
        let body = br#"{"ok": true, "items": "not a list"}"#;
        let result = decode_envelope::<StarListResponse>(ApiMethod::StarsList, body);
        assert!(matches!(result, Err(TransportError::Decode(_))));
    }
}
