//! UI Components
//!
//! Reusable Leptos components.

mod login_form;
mod register_form;
mod social_login;
mod text_field;
mod todo_panel;
mod toaster;

pub use login_form::LoginForm;
pub use register_form::RegisterForm;
pub use social_login::SocialLoginButtons;
pub use text_field::TextField;
pub use todo_panel::TodoPanel;
pub use toaster::Toaster;
