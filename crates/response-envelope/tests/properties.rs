//! Property tests for page storage and the envelope wire round trip.

use proptest::prelude::*;
use response_envelope::{DomainError, Page, ResponseEnvelope, StatusKind};
use serde_json::Value;

fn arb_payload() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        ".*".prop_map(Value::from),
        prop::collection::vec(any::<i32>(), 0..8).prop_map(Value::from),
    ]
}

fn arb_envelope() -> impl Strategy<Value = ResponseEnvelope> {
    prop_oneof![
        arb_payload().prop_map(ResponseEnvelope::success),
        arb_payload().prop_map(ResponseEnvelope::fail),
        (any::<i32>(), ".*").prop_map(|(code, message)| ResponseEnvelope::error(code, message)),
    ]
}

proptest! {
    /// Page metadata is stored exactly as supplied, with content in order.
    #[test]
    fn page_keeps_arguments_verbatim(
        page in any::<i32>(),
        limit in any::<i32>(),
        total in any::<i32>(),
        content in prop::collection::vec(".*", 0..16),
    ) {
        let built = Page::new(page, limit, total, content.clone());

        prop_assert_eq!(built.page(), page);
        prop_assert_eq!(built.limit(), limit);
        prop_assert_eq!(built.total(), total);
        prop_assert_eq!(built.content(), content.as_slice());
    }

    /// Paginated envelopes carry the page unchanged on the wire.
    #[test]
    fn paginated_wire_form_preserves_order(
        page in any::<i32>(),
        total in any::<i32>(),
        content in prop::collection::vec(any::<i64>(), 0..16),
    ) {
        let limit = i32::try_from(content.len()).unwrap_or(i32::MAX);
        let envelope = ResponseEnvelope::success_page(page, limit, total, content.clone());
        let wire = serde_json::to_value(&envelope).map_err(|e| TestCaseError::fail(e.to_string()))?;

        prop_assert_eq!(&wire["data"]["page"], &Value::from(page));
        prop_assert_eq!(&wire["data"]["total"], &Value::from(total));
        prop_assert_eq!(&wire["data"]["content"], &Value::from(content));
    }

    /// Every envelope reads back equal to itself.
    #[test]
    fn wire_round_trip_is_lossless(envelope in arb_envelope()) {
        let text = serde_json::to_string(&envelope).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let parsed: ResponseEnvelope =
            serde_json::from_str(&text).map_err(|e| TestCaseError::fail(e.to_string()))?;

        prop_assert_eq!(parsed, envelope);
    }

    /// Absent fields never reach the wire for any status.
    #[test]
    fn status_decides_emitted_fields(envelope in arb_envelope()) {
        let wire = serde_json::to_value(&envelope).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let has = |key: &str| wire.get(key).is_some();

        match envelope.status() {
            StatusKind::Success | StatusKind::Fail => {
                prop_assert!(has("data") && !has("code") && !has("message"));
            }
            StatusKind::Error => {
                prop_assert!(!has("data") && has("code") && has("message"));
            }
        }
    }

    /// Domain errors convert to the same fields as an explicit error.
    #[test]
    fn domain_error_matches_explicit_fields(code in any::<i32>(), message in ".*") {
        let converted: ResponseEnvelope =
            ResponseEnvelope::from_domain_error(DomainError::new(code, message.clone()));

        prop_assert_eq!(converted.status(), StatusKind::Error);
        prop_assert_eq!(converted.code(), Some(code));
        prop_assert_eq!(converted.message(), Some(message.as_str()));
        prop_assert!(converted.data().is_none());
    }
}
