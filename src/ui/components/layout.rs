//! Layout component wrapping every screen.

use dioxus::prelude::*;

use super::tab_bar::TabBarNav;
use crate::nav::{Page, Tab};

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Screen title (header bar)
    pub title: String,
    /// Page tag, exposed as `data-page`
    pub page: String,
    /// Target of the back arrow
    #[props(default)]
    pub back: Option<Page>,
    /// Tabs to draw; empty on fullscreen pages
    #[props(default)]
    pub tabs: Vec<Tab>,
    /// Page highlighted in the tab bar
    #[props(default)]
    pub active: Option<Page>,
    /// Screen content
    pub children: Element,
}

/// Header, body and the role's bottom tab bar.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("DOGCLUB_VERSION");

    rsx! {
        div { class: "app", "data-page": "{props.page}",
            header { class: "app-header",
                if let Some(back) = props.back {
                    a {
                        class: "back",
                        "data-command": "back",
                        "aria-label": "Back to {back.title()}",
                        "‹"
                    }
                }
                h1 { "{props.title}" }
            }
            main { class: "app-body",
                {props.children}
            }
            if !props.tabs.is_empty() {
                TabBarNav { tabs: props.tabs.clone(), active: props.active }
            }
            footer { class: "app-footer",
                small { class: "text-muted", "Dogclub v{version}" }
            }
        }
    }
}
