//! Authentication collaborator.
//!
//! The client has no backend: `DemoAuthenticator` checks credentials against
//! a fixed account list (overridable from config) and hands out opaque tokens.

use serde::Deserialize;
use thiserror::Error;

use super::Role;

/// Minimum password length accepted by the signup forms
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("password must be at least {MIN_PASSWORD_LEN} characters")]
    WeakPassword,
    #[error("an account already exists for {0}")]
    AlreadyRegistered(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    fn validate(&self) -> Result<(), AuthError> {
        if self.email.trim().is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        if self.password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }
        Ok(())
    }
}

/// Successful login result
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grant {
    pub role: Role,
    pub token: String,
}

/// Login service consumed by the navigation controller.
pub trait Authenticator {
    fn login(&self, credentials: &Credentials) -> Result<Grant, AuthError>;

    /// Create an account for `role` and log straight into it.
    fn sign_up(&self, role: Role, credentials: &Credentials) -> Result<Grant, AuthError>;
}

/// Demo account entry (also the shape of `accounts` in the config file)
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct DemoAccount {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl DemoAccount {
    fn new(email: &str, password: &str, role: Role) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            role,
        }
    }
}

/// Built-in accounts, one per role
pub fn default_accounts() -> Vec<DemoAccount> {
    vec![
        DemoAccount::new("customer@dogclub.test", "woofwoof", Role::Customer),
        DemoAccount::new("club@dogclub.test", "woofwoof", Role::Club),
        DemoAccount::new("teacher@dogclub.test", "woofwoof", Role::Teacher),
    ]
}

pub struct DemoAuthenticator {
    accounts: Vec<DemoAccount>,
}

impl DemoAuthenticator {
    pub fn new(accounts: Vec<DemoAccount>) -> Self {
        Self { accounts }
    }

    fn token_for(role: Role, email: &str) -> String {
        let local = email.split('@').next().unwrap_or(email);
        format!("demo-{}-{}", role.as_str(), local)
    }
}

impl Default for DemoAuthenticator {
    fn default() -> Self {
        Self::new(default_accounts())
    }
}

impl Authenticator for DemoAuthenticator {
    fn login(&self, credentials: &Credentials) -> Result<Grant, AuthError> {
        credentials.validate()?;
        let email = credentials.email.trim();
        let account = self
            .accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email) && a.password == credentials.password)
            .ok_or(AuthError::InvalidCredentials)?;

        Ok(Grant {
            role: account.role,
            token: Self::token_for(account.role, &account.email),
        })
    }

    fn sign_up(&self, role: Role, credentials: &Credentials) -> Result<Grant, AuthError> {
        credentials.validate()?;
        if credentials.password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword);
        }
        let email = credentials.email.trim();
        if self.accounts.iter().any(|a| a.email.eq_ignore_ascii_case(email)) {
            return Err(AuthError::AlreadyRegistered(email.to_string()));
        }

        // Nothing is persisted; the new account only lives for this session
        Ok(Grant {
            role,
            token: Self::token_for(role, email),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_resolves_role_from_account() {
        let auth = DemoAuthenticator::default();
        let grant = auth
            .login(&Credentials::new("Club@dogclub.test", "woofwoof"))
            .expect("club login");
        assert_eq!(grant.role, Role::Club);
        assert_eq!(grant.token, "demo-club-club");
    }

    #[test]
    fn login_rejects_wrong_password() {
        let auth = DemoAuthenticator::default();
        let err = auth
            .login(&Credentials::new("customer@dogclub.test", "meow"))
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[test]
    fn login_requires_both_fields() {
        let auth = DemoAuthenticator::default();
        assert_eq!(
            auth.login(&Credentials::new("  ", "x")).unwrap_err(),
            AuthError::MissingField("email")
        );
        assert_eq!(
            auth.login(&Credentials::new("a@b.c", "")).unwrap_err(),
            AuthError::MissingField("password")
        );
    }

    #[test]
    fn sign_up_grants_requested_role() {
        let auth = DemoAuthenticator::default();
        let grant = auth
            .sign_up(Role::Teacher, &Credentials::new("new@dogclub.test", "secret1"))
            .expect("signup");
        assert_eq!(grant.role, Role::Teacher);
    }

    #[test]
    fn sign_up_rejects_short_password_and_existing_email() {
        let auth = DemoAuthenticator::default();
        assert_eq!(
            auth.sign_up(Role::Customer, &Credentials::new("x@y.z", "123"))
                .unwrap_err(),
            AuthError::WeakPassword
        );
        assert!(matches!(
            auth.sign_up(
                Role::Customer,
                &Credentials::new("teacher@dogclub.test", "longenough")
            ),
            Err(AuthError::AlreadyRegistered(_))
        ));
    }
}
