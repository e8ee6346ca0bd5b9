use dioxus::prelude::*;

/// Placeholder for a screen whose selection is incomplete.
#[component]
pub fn EmptyState(
    /// Selection field the page needed
    missing: String,
) -> Element {
    rsx! {
        div { class: "card empty-state", "data-missing": "{missing}",
            p { "Nothing selected." }
            small { class: "text-muted", "This screen needs a {missing} to show anything." }
        }
    }
}

/// Placeholder for a lookup that found no record.
#[component]
pub fn NotFound(
    /// Kind of record, e.g. "club"
    what: String,
    id: Option<u32>,
) -> Element {
    rsx! {
        div { class: "card not-found",
            if let Some(id) = id {
                p { "No {what} with id {id}." }
            } else {
                p { "No {what} found." }
            }
        }
    }
}
