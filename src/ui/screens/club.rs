//! Club, teacher and event detail screens.

use dioxus::prelude::*;

use crate::data::{Channel, Club, Event, Teacher};
use crate::ui::components::NotFound;

#[component]
pub fn ClubScreen(
    club_id: u32,
    club: Option<Club>,
    teachers: Vec<Teacher>,
    channels: Vec<Channel>,
    /// Customer view: show booking actions
    #[props(default = false)]
    can_book: bool,
) -> Element {
    let Some(club) = club else {
        return rsx! { NotFound { what: "club".to_string(), id: Some(club_id) } };
    };

    rsx! {
        article { class: "club",
            h2 { "{club.name}" }
            p { small { class: "text-muted", "{club.city} · ★{club.rating} · {club.price_per_session} € / session" } }
            p { "{club.description}" }
            if can_book {
                a { class: "btn", "data-command": "book {club.id}", "Book a session" }
            }
            h3 { "Teachers" }
            ul {
                for teacher in teachers.iter() {
                    li { key: "{teacher.id}",
                        if can_book {
                            a { "data-command": "teacher {club.id} {teacher.id}", "{teacher.name}" }
                        } else {
                            "{teacher.name}"
                        }
                        " · {teacher.specialty}"
                    }
                }
            }
            h3 { "Channels" }
            ul {
                for channel in channels.iter() {
                    li { key: "{channel.id}",
                        a { "data-command": "channel {club.id} {channel.id} {channel.name}", "# {channel.name}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TeacherScreen(
    teacher_id: u32,
    teacher: Option<Teacher>,
    club: Option<Club>,
    #[props(default = false)] can_book: bool,
) -> Element {
    let Some(teacher) = teacher else {
        return rsx! { NotFound { what: "teacher".to_string(), id: Some(teacher_id) } };
    };
    let club_name = club.as_ref().map(|c| c.name).unwrap_or("an unknown club");
    let club_id = club.as_ref().map(|c| c.id).unwrap_or(teacher.club_id);

    rsx! {
        article { class: "teacher",
            h2 { "{teacher.name}" }
            p { "{teacher.specialty} at {club_name}" }
            if teacher.home_training {
                p { small { "Offers home training" } }
            }
            if can_book {
                a {
                    class: "btn",
                    "data-command": "book {club_id} {teacher.id}",
                    "Book with {teacher.name}"
                }
            }
        }
    }
}

#[component]
pub fn EventScreen(event_id: u32, event: Option<Event>, club: Option<Club>) -> Element {
    let Some(event) = event else {
        return rsx! { NotFound { what: "event".to_string(), id: Some(event_id) } };
    };
    let when = event.starts_at.format("%A %d %B %Y, %H:%M").to_string();
    let host = club.as_ref().map(|c| c.name).unwrap_or("Unknown club");

    rsx! {
        article { class: "event",
            h2 { "{event.title}" }
            p { "{when}" }
            p { "Hosted by {host}" }
            if event.places_left == 0 {
                p { strong { "Fully booked" } }
            } else {
                p { "{event.places_left} places left" }
            }
        }
    }
}

#[component]
pub fn TeacherListScreen(
    teachers: Vec<Teacher>,
    /// Club view: offer more teacher seats
    #[props(default = false)]
    can_add: bool,
) -> Element {
    rsx! {
        ul { class: "teachers",
            for teacher in teachers.iter() {
                li { key: "{teacher.id}",
                    a { "data-command": "teacher {teacher.club_id} {teacher.id}",
                        strong { "{teacher.name}" }
                        " · {teacher.specialty}"
                    }
                }
            }
        }
        if can_add {
            a { class: "btn", "data-command": "go clubTeachersPricing", "Add teachers" }
        }
    }
}

#[component]
pub fn EventListScreen(events: Vec<Event>, detail_page: String) -> Element {
    let rows: Vec<(&Event, String)> = events
        .iter()
        .map(|e| (e, e.starts_at.format("%d/%m %H:%M").to_string()))
        .collect();

    rsx! {
        ul { class: "events",
            for (event, when) in rows {
                li { key: "{event.id}",
                    a { "data-command": "open {detail_page} event={event.id}",
                        strong { "{event.title}" }
                        " · {when}"
                    }
                }
            }
        }
    }
}
