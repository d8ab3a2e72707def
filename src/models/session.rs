//! Browser session model.

use serde::{Deserialize, Serialize};

/// The buyer's browser session as seen by the front-end collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Session identifier shared with the tracking snippet.
    pub id: String,
    /// Client IP address.
    pub ip: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let session = Session {
            id: "SESSION_ID".to_owned(),
            ip: "1.2.3.4".to_owned(),
        };
        let json = serde_json::to_string(&session).unwrap();
        assert_eq!(json, r#"{"id":"SESSION_ID","ip":"1.2.3.4"}"#);
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
