//! Booking form, confirmation and booking details.

use dioxus::prelude::*;

use crate::data::{Booking, BookingStatus, Club, Dog, Teacher};
use crate::ui::components::NotFound;

#[component]
pub fn BookingScreen(
    club: Option<Club>,
    teacher: Option<Teacher>,
    #[props(default = false)] confirmed: bool,
) -> Element {
    let club_name = club.as_ref().map(|c| c.name).unwrap_or("Unknown club");
    let price = club.as_ref().map(|c| c.price_per_session).unwrap_or_default();

    rsx! {
        section { class: "booking",
            h2 { "{club_name}" }
            if let Some(teacher) = teacher.as_ref() {
                p { "With {teacher.name}" }
            }
            p { "{price} € per session" }
            if confirmed {
                p { strong { "Your session is booked." } }
                a { "data-command": "go myBookings", "See my bookings" }
            } else {
                a { class: "btn", "data-command": "confirm", "Confirm booking" }
            }
        }
    }
}

#[component]
pub fn BookingDetailScreen(
    booking_id: u32,
    booking: Option<Booking>,
    club: Option<Club>,
    dog: Option<Dog>,
    /// Customer view: offer the rating flow on completed sessions
    #[props(default = false)]
    can_rate: bool,
) -> Element {
    let Some(booking) = booking else {
        return rsx! { NotFound { what: "booking".to_string(), id: Some(booking_id) } };
    };
    let when = booking.starts_at.format("%d/%m/%Y %H:%M").to_string();
    let club_name = club.as_ref().map(|c| c.name).unwrap_or("Unknown club");
    let dog_name = dog.as_ref().map(|d| d.name).unwrap_or("-");
    let status = booking.status.label();

    rsx! {
        article { class: "booking-detail",
            p { strong { "{club_name}" } }
            p { "{when}" }
            p { "Dog: {dog_name}" }
            p { "Status: {status}" }
            if can_rate && booking.status == BookingStatus::Completed {
                a { class: "btn", "data-command": "rate {booking.id}", "Rate this session" }
            }
        }
    }
}

#[component]
pub fn BookingListScreen(bookings: Vec<Booking>, detail_page: String) -> Element {
    let rows: Vec<(u32, String, &'static str)> = bookings
        .iter()
        .map(|b| (b.id, b.starts_at.format("%d/%m %H:%M").to_string(), b.status.label()))
        .collect();

    rsx! {
        ul { class: "bookings",
            for (id, when, status) in rows {
                li { key: "{id}",
                    a { "data-command": "open {detail_page} booking={id}",
                        "#{id} · {when} · {status}"
                    }
                }
            }
        }
    }
}
