/// Chat Wire Payloads
///
/// The inbound payload carries the sender and the message text; the
/// room is taken from the connection's URL path, never from the
/// payload. On fan-out the server rebroadcasts the original inbound
/// JSON verbatim, so clients parse back the same shape they sent.
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Payload of one inbound text frame. Unknown extra fields are
/// tolerated and preserved in the rebroadcast raw text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundFrame {
    pub sender: String,
    pub message: String,
}

/// Error frame sent back to the offending connection only, e.g. on a
/// malformed payload. Never broadcast.
#[derive(Debug, Serialize)]
pub struct ErrorFrame {
    pub error: Cow<'static, str>,
}

impl ErrorFrame {
    pub fn new(error: impl Into<Cow<'static, str>>) -> Self {
        Self { error: error.into() }
    }

    pub fn to_json(&self) -> String {
        // serialization of two string fields cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inbound_frame_deserializes() {
        let json = r#"{"sender":"alice","message":"hi there"}"#;
        let frame: InboundFrame = serde_json::from_str(json).unwrap();
        assert_eq!(frame.sender, "alice");
        assert_eq!(frame.message, "hi there");
    }

    #[test]
    fn extra_fields_are_tolerated() {
        let json = r#"{"sender":"alice","message":"hi","client_ts":1724500000}"#;
        let frame: InboundFrame = serde_json::from_str(json).unwrap();
        assert_eq!(frame.sender, "alice");
    }

    #[test]
    fn missing_message_field_is_an_error() {
        let json = r#"{"sender":"alice"}"#;
        assert!(serde_json::from_str::<InboundFrame>(json).is_err());
    }

    #[test]
    fn missing_sender_field_is_an_error() {
        let json = r#"{"message":"hi"}"#;
        assert!(serde_json::from_str::<InboundFrame>(json).is_err());
    }

    #[test]
    fn empty_message_is_allowed() {
        let json = r#"{"sender":"alice","message":""}"#;
        let frame: InboundFrame = serde_json::from_str(json).unwrap();
        assert!(frame.message.is_empty());
    }

    #[test]
    fn error_frame_serializes() {
        let json = ErrorFrame::new("invalid message payload").to_json();
        assert_eq!(json, r#"{"error":"invalid message payload"}"#);
    }
}
