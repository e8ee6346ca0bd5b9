//! Bottom tab bar.

use dioxus::prelude::*;

use crate::nav::{Page, Tab};

#[derive(Props, Clone, PartialEq)]
pub struct TabBarNavProps {
    pub tabs: Vec<Tab>,
    /// Page of the highlighted tab, if the current page is a tab root
    #[props(default)]
    pub active: Option<Page>,
}

#[component]
pub fn TabBarNav(props: TabBarNavProps) -> Element {
    rsx! {
        nav { class: "tab-bar",
            ul {
                for tab in props.tabs.iter() {
                    li { key: "{tab.page}",
                        if props.active == Some(tab.page) {
                            a {
                                "data-command": "go {tab.page}",
                                "aria-current": "page",
                                strong { "{tab.icon} {tab.label}" }
                            }
                        } else {
                            a { "data-command": "go {tab.page}", "{tab.icon} {tab.label}" }
                        }
                    }
                }
            }
        }
    }
}
