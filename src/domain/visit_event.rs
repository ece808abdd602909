//! Visit event payload for asynchronous visit accounting.

use serde::{Deserialize, Serialize};

/// An in-flight visit event, published by the redirect path and consumed in
/// batches by the visit worker.
///
/// Events are ephemeral: they exist only between publish and aggregation and
/// have no identity beyond their payload. Delivery is at-least-once; the
/// in-memory queue variant may lose uncommitted events on process restart,
/// which is an accepted trade-off for visit counts.
///
/// # Wire Format
///
/// Serialized as JSON for the queue:
/// `{"short_code": "...", "ip_address": "..."|null, "user_agent": "..."|null}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitEvent {
    pub short_code: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl VisitEvent {
    /// Creates a new visit event.
    pub fn new(short_code: String, ip_address: Option<String>, user_agent: Option<&str>) -> Self {
        Self {
            short_code,
            ip_address,
            user_agent: user_agent.map(|s| s.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_creation_full() {
        let event = VisitEvent::new(
            "abc123".to_string(),
            Some("192.168.1.1".to_string()),
            Some("Mozilla/5.0"),
        );

        assert_eq!(event.short_code, "abc123");
        assert_eq!(event.ip_address, Some("192.168.1.1".to_string()));
        assert_eq!(event.user_agent, Some("Mozilla/5.0".to_string()));
    }

    #[test]
    fn test_event_creation_minimal() {
        let event = VisitEvent::new("xyz".to_string(), None, None);

        assert_eq!(event.short_code, "xyz");
        assert!(event.ip_address.is_none());
        assert!(event.user_agent.is_none());
    }

    #[test]
    fn test_event_wire_format() {
        let event = VisitEvent::new("promo".to_string(), Some("10.0.0.1".to_string()), None);

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""short_code":"promo""#));
        assert!(json.contains(r#""ip_address":"10.0.0.1""#));
        assert!(json.contains(r#""user_agent":null"#));

        let parsed: VisitEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn test_malformed_payload_rejected() {
        assert!(serde_json::from_str::<VisitEvent>(r#"{"ip_address":"1.2.3.4"}"#).is_err());
        assert!(serde_json::from_str::<VisitEvent>("not json").is_err());
    }
}
