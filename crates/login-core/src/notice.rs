//! User-Visible Notices
//!
//! Transient messages produced by flow outcomes. The UI turns them into toasts.

use std::fmt;

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

impl NoticeLevel {
    /// CSS modifier used by the toaster
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Error => "error",
            NoticeLevel::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }
}

/// Which form an outcome belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    Login,
    Register,
}

impl FlowKind {
    pub fn success_notice(&self) -> Notice {
        match self {
            FlowKind::Login => Notice::success("Login successful!"),
            FlowKind::Register => Notice::success("Registration successful!"),
        }
    }

    /// Submit button label
    pub fn submit_label(&self, pending: bool) -> &'static str {
        match (self, pending) {
            (FlowKind::Login, false) => "Login",
            (FlowKind::Login, true) => "Logging in...",
            (FlowKind::Register, false) => "Register",
            (FlowKind::Register, true) => "Registering...",
        }
    }
}

/// Social login buttons. None of them is wired up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    Facebook,
    Apple,
}

impl SocialProvider {
    pub const ALL: [SocialProvider; 3] = [
        SocialProvider::Google,
        SocialProvider::Facebook,
        SocialProvider::Apple,
    ];

    pub fn coming_soon(&self) -> Notice {
        Notice::info(format!("{} login coming soon!", self))
    }
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SocialProvider::Google => "Google",
            SocialProvider::Facebook => "Facebook",
            SocialProvider::Apple => "Apple",
        };
        f.write_str(name)
    }
}

pub const TODO_ADDED: &str = "Todo added successfully!";
pub const TODO_REMOVED: &str = "Todo removed successfully!";
