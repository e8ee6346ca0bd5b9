//! Post-session rating invitation and form.

use dioxus::prelude::*;

use crate::data::{Booking, Club};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RatingStep {
    Invitation,
    Form,
}

#[component]
pub fn RatingScreen(booking_id: u32, booking: Option<Booking>, club: Option<Club>, step: RatingStep) -> Element {
    let club_name = club.as_ref().map(|c| c.name).unwrap_or("your club");
    let question = match booking.as_ref() {
        Some(b) => format!("How was your session at {} on {}?", club_name, b.starts_at.format("%d %B")),
        None => format!("How was your session at {}?", club_name),
    };

    rsx! {
        section { class: "rating", "data-booking": "{booking_id}",
            {match step {
                RatingStep::Invitation => rsx! {
                    p { "{question}" }
                    a { class: "btn", "data-command": "rate-accept", "Rate now" }
                    a { "data-command": "rate-dismiss", "Later" }
                },
                RatingStep::Form => rsx! {
                    p { "Rate {club_name}" }
                    div { class: "stars",
                        for stars in 1..=5u8 {
                            a { key: "{stars}", "data-command": "rate-submit {stars}", "★" }
                        }
                    }
                    a { "data-command": "rate-dismiss", "Skip" }
                },
            }}
        }
    }
}
