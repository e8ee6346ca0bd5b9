//! Landing screens and plain lists.

use dioxus::prelude::*;

use crate::data::{Club, Listing};

/// Customer home: mixed club/event feed
#[component]
pub fn HomeScreen(listings: Vec<Listing>) -> Element {
    rsx! {
        section { class: "home",
            h2 { "Near you" }
            ul { class: "listing",
                for item in listings.iter() {
                    li { key: "{item.id}",
                        a { "data-command": "select {item.id}",
                            strong { "{item.title}" }
                            " "
                            small { class: "text-muted", "{item.subtitle}" }
                        }
                    }
                }
            }
            p {
                a { "data-command": "go clubs", "Browse all clubs" }
            }
        }
    }
}

#[component]
pub fn ClubsScreen(clubs: Vec<Club>, detail_page: String) -> Element {
    rsx! {
        ul { class: "clubs",
            for club in clubs.iter() {
                li { key: "{club.id}",
                    a { "data-command": "open {detail_page} club={club.id}",
                        strong { "{club.name}" }
                        " · {club.city} · ★{club.rating}"
                    }
                }
            }
        }
    }
}

/// Role dashboard: a few headline figures and shortcuts
#[component]
pub fn DashboardScreen(greeting: String, stats: Vec<(String, String)>, shortcuts: Vec<(String, String)>) -> Element {
    rsx! {
        section { class: "dashboard",
            p { "{greeting}" }
            dl {
                for (label, value) in stats.iter() {
                    dt { "{label}" }
                    dd { "{value}" }
                }
            }
            ul { class: "shortcuts",
                for (command, label) in shortcuts.iter() {
                    li { key: "{command}",
                        a { "data-command": "{command}", "{label}" }
                    }
                }
            }
        }
    }
}
