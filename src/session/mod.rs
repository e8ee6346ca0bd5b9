//! Session state and the pre-authentication flow.
//!
//! - `Role` fixes which page partition and tab bar are reachable
//! - `Session` is created on login and fully cleared on logout
//! - `Authenticator` is the login collaborator (demo accounts in this client)
//! - `AuthFlow` drives the login / signup screens shown before a session exists

mod auth;
mod flow;

pub use auth::{
    default_accounts, AuthError, Authenticator, Credentials, DemoAccount, DemoAuthenticator, Grant,
};
pub use flow::{AuthFlow, AuthScreen};

use serde::{Deserialize, Serialize};
use std::fmt;

/// User role chosen at login
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Club,
    Teacher,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Club => "club",
            Role::Teacher => "teacher",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "customer" => Some(Role::Customer),
            "club" => Some(Role::Club),
            "teacher" => Some(Role::Teacher),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::Club => "Club administrator",
            Role::Teacher => "Teacher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated session. `Default` is the logged-out state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    role: Option<Role>,
    #[serde(skip)]
    token: Option<String>,
}

impl Session {
    pub(crate) fn open(grant: Grant) -> Self {
        Self {
            role: Some(grant.role),
            token: Some(grant.token),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
