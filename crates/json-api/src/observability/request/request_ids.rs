//! `x-request-id` handling for pantry requests.
//!
//! A caller-supplied id is echoed back so clients can correlate their logs
//! with ours. Missing, blank or oversized ids are replaced with a fresh
//! UUIDv7.

use salvo::{
    http::{StatusCode, header::HeaderValue},
    prelude::Response,
};
use tracing::warn;
use uuid::Uuid;

pub(super) const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest caller-supplied id kept in spans and echoed back.
const MAX_REQUEST_ID_LEN: usize = 128;

pub(super) fn resolve_request_id(header_value: Option<String>) -> String {
    match header_value.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() && id.len() <= MAX_REQUEST_ID_LEN => id.to_string(),
        _ => Uuid::now_v7().to_string(),
    }
}

pub(super) fn set_request_id_header(res: &mut Response, request_id: &str) {
    match HeaderValue::from_str(request_id) {
        Ok(value) => {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        Err(source) => {
            warn!(request_id, "request id is not a valid header value: {source}");
        }
    }
}

pub(super) fn response_status_or_ok(status_code: Option<StatusCode>) -> StatusCode {
    status_code.unwrap_or(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_ids_are_kept_without_surrounding_whitespace() {
        assert_eq!(resolve_request_id(Some(" req-42 ".to_string())), "req-42");
    }

    #[test]
    fn blank_or_oversized_ids_are_replaced() {
        for header in [None, Some("   ".to_string()), Some("x".repeat(MAX_REQUEST_ID_LEN + 1))] {
            let id = resolve_request_id(header);

            assert!(Uuid::parse_str(&id).is_ok(), "expected a generated uuid, got {id}");
        }
    }
}
