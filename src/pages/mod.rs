//! Route-level Pages
//!
//! Each page is a thin wrapper: layout plus the component that owns the
//! page's behaviour.

mod dashboard;
mod login;
mod not_found;
mod register;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
