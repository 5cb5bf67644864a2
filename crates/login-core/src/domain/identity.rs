//! Identity and Session
//!
//! `Identity` is what a credential lookup yields; `Session` is the record
//! persisted while a user is logged in.

use serde::{Deserialize, Serialize};

/// Display identity of an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub first_name: String,
    pub last_name: String,
}

impl Identity {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Persisted logged-in record.
///
/// Stored as `{"firstName": "...", "lastName": "..."}`. Its presence is the
/// whole authentication signal: there is no token and no expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub first_name: String,
    pub last_name: String,
}

impl Session {
    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<Identity> for Session {
    fn from(identity: Identity) -> Self {
        Self {
            first_name: identity.first_name,
            last_name: identity.last_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_json_uses_camel_case_keys() {
        let session = Session::from(Identity::new("Ayush", "Kumar"));
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json, serde_json::json!({ "firstName": "Ayush", "lastName": "Kumar" }));
    }

    #[test]
    fn test_session_reads_browser_record() {
        let raw = r#"{"firstName":"Ayush","lastName":"Kumar"}"#;
        let session: Session = serde_json::from_str(raw).unwrap();
        assert_eq!(session.full_name(), "Ayush Kumar");
    }
}
