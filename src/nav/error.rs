use thiserror::Error;

use super::page::Page;
use super::selection::{EntityKind, SelectionField};
use crate::session::{AuthError, Role};

/// Navigation failures. A failed operation leaves the controller untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    #[error("not logged in")]
    NotAuthenticated,

    #[error("already logged in")]
    AlreadyAuthenticated,

    #[error("page {raw:?} does not exist for the {role} role")]
    UnknownPage { role: Role, raw: String },

    #[error("page {page} is not reachable with the {role} role")]
    RoleMismatch { role: Role, page: Page },

    #[error("logged in as {current}; log out before switching to {requested}")]
    InvalidRoleTransition { current: Role, requested: Role },

    #[error("{page} needs {field} in the selection")]
    MissingSelection { page: Page, field: SelectionField },

    #[error("no {kind:?} detail page for the {role} role")]
    NoDetailPage { role: Role, kind: EntityKind },

    #[error("choose an account type before signing up")]
    NoSignupRole,

    #[error("no rating invitation is open")]
    NoRatingInProgress,

    #[error("rating must be between 1 and 5 stars, got {0}")]
    InvalidRating(u8),

    #[error(transparent)]
    Auth(#[from] AuthError),
}
