//! Mock Credential
//!
//! The single account compiled into the app.

use super::Identity;

/// A mobile/password pair plus the identity it unlocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credential {
    pub mobile: &'static str,
    pub password: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
}

impl Credential {
    /// Byte-for-byte comparison of both fields
    pub fn matches(&self, mobile: &str, password: &str) -> bool {
        self.mobile == mobile && self.password == password
    }

    pub fn identity(&self) -> Identity {
        Identity::new(self.first_name, self.last_name)
    }
}

/// The only valid login
pub const MOCK_CREDENTIAL: Credential = Credential {
    mobile: "1234567890",
    password: "password123",
    first_name: "Ayush",
    last_name: "Kumar",
};
