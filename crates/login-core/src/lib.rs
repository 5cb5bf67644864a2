//! Login Core
//!
//! Target-independent logic behind the login portal: the mock credential
//! check, session persistence, simulated delay, form validation, the
//! dashboard greeting and todo list. Browser bindings live in the UI crate
//! and plug in through the traits exported here.

pub mod config;
pub mod credentials;
pub mod delay;
pub mod domain;
pub mod error;
pub mod form;
pub mod greeting;
pub mod latch;
pub mod login;
pub mod notice;
pub mod register;
pub mod route;
pub mod services;
pub mod session;
pub mod todo;

pub use config::AppConfig;
pub use credentials::{CredentialVerifier, MockCredentials};
pub use delay::{AbortHandle, Delay, Immediate};
pub use domain::{Credential, Identity, Session, MOCK_CREDENTIAL};
pub use error::{AuthError, AuthResult, StoreError, ValidationError};
pub use form::{LoginField, LoginForm, RegisterField, RegisterForm};
pub use greeting::{greeting, greeting_now, Clock, LocalClock, TimeOfDay};
pub use latch::{SubmitGuard, SubmitLatch};
pub use login::{LoginFlow, LoginOutcome};
pub use notice::{FlowKind, Notice, NoticeLevel, SocialProvider};
pub use register::{RegisterFlow, RegisterOutcome};
pub use route::{guard_dashboard, logout, GuardDecision, Route};
pub use services::Services;
pub use session::{
    read_session, KeyedSessionStore, MemorySessionStore, MemoryStorage, SessionStore,
    StorageBackend,
};
pub use todo::{adds_on_key, TodoList, EMPTY_PLACEHOLDER};
