use dioxus::prelude::*;

/// Fallback for pages without a dedicated screen
#[component]
pub fn GenericScreen(title: String, page: String) -> Element {
    rsx! {
        section { class: "generic", "data-page": "{page}",
            p { class: "text-muted", "{title}" }
        }
    }
}
