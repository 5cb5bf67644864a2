//! Domain Layer
//!
//! Plain data: the mock credential, identities, sessions.

mod credential;
mod identity;

pub use credential::{Credential, MOCK_CREDENTIAL};
pub use identity::{Identity, Session};
