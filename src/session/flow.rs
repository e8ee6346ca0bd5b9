//! Pre-authentication screen flow.
//!
//! Login -> ChooseSignupType -> Signup{Customer,Club,Teacher}. Back links from
//! the signup forms converge on ChooseSignupType.

use serde::Serialize;

use super::Role;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthScreen {
    #[default]
    Login,
    ChooseSignupType,
    SignupCustomer,
    SignupClub,
    SignupTeacher,
}

impl AuthScreen {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthScreen::Login => "login",
            AuthScreen::ChooseSignupType => "chooseSignupType",
            AuthScreen::SignupCustomer => "signupCustomer",
            AuthScreen::SignupClub => "signupClub",
            AuthScreen::SignupTeacher => "signupTeacher",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AuthScreen::Login => "Log in",
            AuthScreen::ChooseSignupType => "Create an account",
            AuthScreen::SignupCustomer => "Sign up as dog owner",
            AuthScreen::SignupClub => "Register your club",
            AuthScreen::SignupTeacher => "Sign up as teacher",
        }
    }

    /// Role created by this signup form, if it is one
    pub fn signup_role(&self) -> Option<Role> {
        match self {
            AuthScreen::SignupCustomer => Some(Role::Customer),
            AuthScreen::SignupClub => Some(Role::Club),
            AuthScreen::SignupTeacher => Some(Role::Teacher),
            AuthScreen::Login | AuthScreen::ChooseSignupType => None,
        }
    }

    fn signup_for(role: Role) -> Self {
        match role {
            Role::Customer => AuthScreen::SignupCustomer,
            Role::Club => AuthScreen::SignupClub,
            Role::Teacher => AuthScreen::SignupTeacher,
        }
    }
}

/// Five-state machine for the screens shown while logged out
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AuthFlow {
    screen: AuthScreen,
}

impl AuthFlow {
    pub fn screen(&self) -> AuthScreen {
        self.screen
    }

    /// "Create account" link on the login screen
    pub fn start_signup(&mut self) {
        self.screen = AuthScreen::ChooseSignupType;
    }

    /// Pick the account type; allowed from the chooser or from another form
    pub fn choose(&mut self, role: Role) {
        self.screen = AuthScreen::signup_for(role);
    }

    pub fn back(&mut self) {
        self.screen = match self.screen {
            AuthScreen::Login | AuthScreen::ChooseSignupType => AuthScreen::Login,
            AuthScreen::SignupCustomer | AuthScreen::SignupClub | AuthScreen::SignupTeacher => {
                AuthScreen::ChooseSignupType
            }
        };
    }

    pub fn reset(&mut self) {
        self.screen = AuthScreen::Login;
    }
}
