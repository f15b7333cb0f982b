//! Client-side checks run before any write request is sent.

use crate::consts::cli_consts::MIN_PASSWORD_LEN;
use crate::models::{NewShop, NewUser, PasswordChange, ShopStatus, ShopUpdate, UserUpdate};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Status must be one of active, inactive or pending")]
    InvalidStatus,
}

/// Requests that can be checked before they are sent.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Check that a string looks like an email address: a local part, `@`, and a
/// domain with a dot that has text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

fn require_opt(value: Option<&str>, field: &'static str) -> Result<(), ValidationError> {
    require(value.unwrap_or_default(), field)
}

fn check_email(email: &str) -> Result<(), ValidationError> {
    require(email, "Email")?;
    if !is_valid_email(email.trim()) {
        return Err(ValidationError::InvalidEmail(email.trim().to_string()));
    }
    Ok(())
}

pub fn check_password(password: &str) -> Result<(), ValidationError> {
    require(password, "Password")?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

fn check_status(status: ShopStatus) -> Result<(), ValidationError> {
    if !status.is_writable() {
        return Err(ValidationError::InvalidStatus);
    }
    Ok(())
}

impl Validate for NewUser {
    fn validate(&self) -> Result<(), ValidationError> {
        check_email(&self.email)?;
        if self.user_type.is_driver() {
            require_opt(self.name.as_deref(), "Name")?;
            require_opt(self.phone.as_deref(), "Phone")?;
            require_opt(self.afm.as_deref(), "AFM")?;
            return check_password(self.password.as_deref().unwrap_or_default());
        }
        match self.password.as_deref() {
            Some(password) if !password.is_empty() => check_password(password),
            _ => Ok(()),
        }
    }
}

impl Validate for UserUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        check_email(&self.email)
    }
}

impl Validate for PasswordChange {
    fn validate(&self) -> Result<(), ValidationError> {
        check_password(&self.password)
    }
}

impl Validate for NewShop {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.shop_name, "Shop name")?;
        check_email(&self.email)?;
        check_password(&self.password)?;
        require(&self.afm, "AFM")?;
        check_status(self.status)
    }
}

impl Validate for ShopUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.shop_name, "Shop name")?;
        require(&self.afm, "AFM")?;
        check_status(self.status)
    }
}
