//! Form State
//!
//! Field values of the login and register forms, with the same checks the
//! inputs declare (`required`, `pattern="[0-9]{10}"`).

use crate::error::ValidationError;

/// Exactly ten ASCII digits
pub fn is_valid_mobile(mobile: &str) -> bool {
    mobile.len() == 10 && mobile.bytes().all(|b| b.is_ascii_digit())
}

/// Mobile number with all but the last four digits hidden, for logs
pub fn mask_mobile(mobile: &str) -> String {
    let visible = mobile.chars().count().min(4);
    let hidden = mobile.chars().count() - visible;
    let tail: String = mobile.chars().skip(hidden).collect();
    format!("{}{}", "*".repeat(hidden), tail)
}

fn require(value: &str, label: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::Required(label))
    } else {
        Ok(())
    }
}

// ========================
// Login
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Mobile,
    Password,
}

impl LoginField {
    /// Input `name` attribute to field
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "mobile" => Some(LoginField::Mobile),
            "password" => Some(LoginField::Password),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub mobile: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(mobile: impl Into<String>, password: impl Into<String>) -> Self {
        Self { mobile: mobile.into(), password: password.into() }
    }

    pub fn set(&mut self, field: LoginField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LoginField::Mobile => self.mobile = value,
            LoginField::Password => self.password = value,
        }
    }

    pub fn get(&self, field: LoginField) -> &str {
        match field {
            LoginField::Mobile => &self.mobile,
            LoginField::Password => &self.password,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.mobile, "Mobile number")?;
        require(&self.password, "Password")?;
        if !is_valid_mobile(&self.mobile) {
            return Err(ValidationError::InvalidMobile);
        }
        Ok(())
    }
}

// ========================
// Register
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    FirstName,
    LastName,
    Mobile,
    Password,
}

impl RegisterField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "firstName" => Some(RegisterField::FirstName),
            "lastName" => Some(RegisterField::LastName),
            "mobile" => Some(RegisterField::Mobile),
            "password" => Some(RegisterField::Password),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub password: String,
}

impl RegisterForm {
    pub fn set(&mut self, field: RegisterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            RegisterField::FirstName => self.first_name = value,
            RegisterField::LastName => self.last_name = value,
            RegisterField::Mobile => self.mobile = value,
            RegisterField::Password => self.password = value,
        }
    }

    pub fn get(&self, field: RegisterField) -> &str {
        match field {
            RegisterField::FirstName => &self.first_name,
            RegisterField::LastName => &self.last_name,
            RegisterField::Mobile => &self.mobile,
            RegisterField::Password => &self.password,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.first_name, "First name")?;
        require(&self.last_name, "Last name")?;
        require(&self.mobile, "Mobile number")?;
        require(&self.password, "Password")?;
        if !is_valid_mobile(&self.mobile) {
            return Err(ValidationError::InvalidMobile);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_pattern() {
        assert!(is_valid_mobile("1234567890"));
        assert!(!is_valid_mobile("123456789"));
        assert!(!is_valid_mobile("12345678901"));
        assert!(!is_valid_mobile("12345a7890"));
        assert!(!is_valid_mobile("١٢٣٤٥٦٧٨٩٠"));
    }

    #[test]
    fn test_mask_mobile() {
        assert_eq!(mask_mobile("1234567890"), "******7890");
        assert_eq!(mask_mobile("12"), "12");
    }

    #[test]
    fn test_login_form_set_by_name() {
        let mut form = LoginForm::default();
        form.set(LoginField::from_name("mobile").unwrap(), "1234567890");
        form.set(LoginField::from_name("password").unwrap(), "secret");
        assert_eq!(form, LoginForm::new("1234567890", "secret"));
        assert_eq!(form.get(LoginField::Password), "secret");
        assert!(LoginField::from_name("email").is_none());
    }

    #[test]
    fn test_login_validation() {
        assert_eq!(
            LoginForm::new("", "x").validate(),
            Err(ValidationError::Required("Mobile number"))
        );
        assert_eq!(
            LoginForm::new("1234567890", "").validate(),
            Err(ValidationError::Required("Password"))
        );
        assert_eq!(LoginForm::new("12345", "x").validate(), Err(ValidationError::InvalidMobile));
        assert!(LoginForm::new("9999999999", "anything").validate().is_ok());
    }

    #[test]
    fn test_register_validation() {
        let mut form = RegisterForm::default();
        assert_eq!(form.validate(), Err(ValidationError::Required("First name")));

        form.set(RegisterField::FirstName, "John");
        form.set(RegisterField::LastName, "Doe");
        form.set(RegisterField::Mobile, "555");
        form.set(RegisterField::Password, "pw");
        assert_eq!(form.validate(), Err(ValidationError::InvalidMobile));

        form.set(RegisterField::from_name("mobile").unwrap(), "5555555555");
        assert!(form.validate().is_ok());
    }
}
