//! Serde round-trips for the classification types (feature `serde`).
#![cfg(feature = "serde")]

use dispatch::{DebugKind, MessageKind};

#[test]
fn message_kind_round_trips_through_json() {
    for kind in [MessageKind::Warning, MessageKind::Debug] {
        let encoded = serde_json::to_string(&kind).expect("serialize");
        let decoded: MessageKind = serde_json::from_str(&encoded).expect("deserialize");
        assert_eq!(decoded, kind);
    }
}

#[test]
fn debug_kind_round_trips_through_json() {
    for kind in [DebugKind::Console, DebugKind::Table] {
        let encoded = serde_json::to_string(&kind).expect("serialize");
        let decoded: DebugKind = serde_json::from_str(&encoded).expect("deserialize");
        assert_eq!(decoded, kind);
    }
}

#[test]
fn kinds_serialize_as_variant_names() {
    let encoded = serde_json::to_string(&MessageKind::Warning).expect("serialize");
    assert_eq!(encoded, "\"Warning\"");
    let encoded = serde_json::to_string(&DebugKind::Table).expect("serialize");
    assert_eq!(encoded, "\"Table\"");
}

#[test]
fn unknown_variant_is_rejected() {
    let result: Result<MessageKind, _> = serde_json::from_str("\"Fatal\"");
    assert!(result.is_err());
}
