//! Screens shown before a session exists.

use dioxus::prelude::*;

use crate::session::{AuthScreen, Role};

#[component]
pub fn AuthPanel(screen: AuthScreen) -> Element {
    let title = screen.title();

    rsx! {
        section { class: "auth", "data-auth": "{screen.as_str()}",
            h1 { "{title}" }
            {match screen {
                AuthScreen::Login => rsx! {
                    form {
                        input { r#type: "email", name: "email", placeholder: "Email" }
                        input { r#type: "password", name: "password", placeholder: "Password" }
                        a { class: "btn", "data-command": "login", "Log in" }
                    }
                    a { "data-command": "signup", "Create an account" }
                },
                AuthScreen::ChooseSignupType => rsx! {
                    ul {
                        for role in [Role::Customer, Role::Club, Role::Teacher] {
                            li { key: "{role}",
                                a { "data-command": "signup {role}", "{role.label()}" }
                            }
                        }
                    }
                    a { "data-command": "auth-back", "Back to login" }
                },
                AuthScreen::SignupCustomer | AuthScreen::SignupClub | AuthScreen::SignupTeacher => rsx! {
                    form {
                        input { r#type: "email", name: "email", placeholder: "Email" }
                        input { r#type: "password", name: "password", placeholder: "Password" }
                        a { class: "btn", "data-command": "login", "Sign up" }
                    }
                    a { "data-command": "auth-back", "Back" }
                },
            }}
        }
    }
}
