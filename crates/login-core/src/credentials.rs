//! Credential Lookup
//!
//! Abstract account check so a real backend can replace the mock one
//! without touching the flows.

use crate::domain::{Credential, Identity, MOCK_CREDENTIAL};

/// Checks a mobile/password pair
pub trait CredentialVerifier: Send + Sync {
    /// Identity of the matching account, `None` on mismatch
    fn verify(&self, mobile: &str, password: &str) -> Option<Identity>;
}

/// Fixed list of accounts held in memory
#[derive(Debug, Clone)]
pub struct MockCredentials {
    accounts: Vec<Credential>,
}

impl MockCredentials {
    pub fn new(accounts: Vec<Credential>) -> Self {
        Self { accounts }
    }
}

impl Default for MockCredentials {
    /// Only the built-in mock account
    fn default() -> Self {
        Self::new(vec![MOCK_CREDENTIAL])
    }
}

impl CredentialVerifier for MockCredentials {
    fn verify(&self, mobile: &str, password: &str) -> Option<Identity> {
        self.accounts
            .iter()
            .find(|c| c.matches(mobile, password))
            .map(Credential::identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_account_verifies() {
        let creds = MockCredentials::default();
        let identity = creds.verify("1234567890", "password123").unwrap();
        assert_eq!(identity, Identity::new("Ayush", "Kumar"));
    }

    #[test]
    fn test_any_other_pair_fails() {
        let creds = MockCredentials::default();
        let pairs = [
            ("1234567890", "password12"),
            ("1234567890", "Password123"),
            ("1234567890", "password123 "),
            ("0234567890", "password123"),
            (" 1234567890", "password123"),
            ("", ""),
        ];
        for (mobile, password) in pairs {
            assert!(creds.verify(mobile, password).is_none(), "{mobile}/{password}");
        }
    }
}
