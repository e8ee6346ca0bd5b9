//! Plain-text rendering of a screen view for terminals and logs.

use super::screens::{DogView, RatingStep, SEAT_PACKS};
use super::view::ScreenView;

/// Body lines for a view, without header or tab bar
pub fn body_lines(view: &ScreenView) -> Vec<String> {
    let mut out = Vec::new();
    match view {
        ScreenView::Home { listings } => {
            for item in listings {
                out.push(format!("[{}] {} · {}", item.id, item.title, item.subtitle));
            }
        }
        ScreenView::Dashboard {
            greeting,
            stats,
            shortcuts,
        } => {
            out.push(greeting.clone());
            for (label, value) in stats {
                out.push(format!("{}: {}", label, value));
            }
            for (command, label) in shortcuts {
                out.push(format!("> {} ({})", label, command));
            }
        }
        ScreenView::Clubs { clubs, .. } => {
            for club in clubs {
                out.push(format!("[{}] {} · {} · ★{}", club.id, club.name, club.city, club.rating));
            }
        }
        ScreenView::Club {
            id,
            club,
            teachers,
            channels,
            can_book,
        } => match club {
            None => out.push(format!("No club with id {}.", id)),
            Some(club) => {
                out.push(format!("{} ({})", club.name, club.city));
                out.push(club.description.to_string());
                for t in teachers {
                    out.push(format!("  teacher [{}] {} · {}", t.id, t.name, t.specialty));
                }
                for c in channels {
                    out.push(format!("  channel [{}] #{}", c.id, c.name));
                }
                if *can_book {
                    out.push(format!("> book {}", club.id));
                }
            }
        },
        ScreenView::Teacher {
            id,
            teacher,
            club,
            can_book,
        } => match teacher {
            None => out.push(format!("No teacher with id {}.", id)),
            Some(t) => {
                let club_name = club.as_ref().map(|c| c.name).unwrap_or("an unknown club");
                out.push(format!("{} · {} at {}", t.name, t.specialty, club_name));
                if *can_book {
                    let club_id = club.as_ref().map(|c| c.id).unwrap_or(t.club_id);
                    out.push(format!("> book {} {}", club_id, t.id));
                }
            }
        },
        ScreenView::Teachers { teachers, .. } => {
            for t in teachers {
                out.push(format!("[{}] {} · {}", t.id, t.name, t.specialty));
            }
        }
        ScreenView::Event { id, event, club } => match event {
            None => out.push(format!("No event with id {}.", id)),
            Some(e) => {
                let host = club.as_ref().map(|c| c.name).unwrap_or("Unknown club");
                out.push(format!("{} · {}", e.title, e.starts_at.format("%d/%m/%Y %H:%M")));
                out.push(format!("Hosted by {} · {} places left", host, e.places_left));
            }
        },
        ScreenView::Events { events, .. } => {
            for e in events {
                out.push(format!("[{}] {} · {}", e.id, e.title, e.starts_at.format("%d/%m %H:%M")));
            }
        }
        ScreenView::Booking {
            club,
            teacher,
            confirmed,
        } => {
            let club_name = club.as_ref().map(|c| c.name).unwrap_or("Unknown club");
            match teacher {
                Some(t) => out.push(format!("{} with {}", club_name, t.name)),
                None => out.push(club_name.to_string()),
            }
            if *confirmed {
                out.push("Your session is booked.".to_string());
            } else {
                out.push("> confirm".to_string());
            }
        }
        ScreenView::BookingDetail {
            id,
            booking,
            club,
            dog,
            can_rate,
        } => match booking {
            None => out.push(format!("No booking with id {}.", id)),
            Some(b) => {
                let club_name = club.as_ref().map(|c| c.name).unwrap_or("Unknown club");
                let dog_name = dog.as_ref().map(|d| d.name).unwrap_or("-");
                out.push(format!(
                    "#{} · {} · {} · {} · {}",
                    b.id,
                    club_name,
                    dog_name,
                    b.starts_at.format("%d/%m/%Y %H:%M"),
                    b.status.label()
                ));
                if *can_rate && b.status == crate::data::BookingStatus::Completed {
                    out.push(format!("> rate {}", b.id));
                }
            }
        },
        ScreenView::Bookings { bookings, .. } => {
            for b in bookings {
                out.push(format!(
                    "[{}] {} · {}",
                    b.id,
                    b.starts_at.format("%d/%m %H:%M"),
                    b.status.label()
                ));
            }
        }
        ScreenView::Dog { id, dog, view } => match dog {
            None => out.push(format!("No dog with id {}.", id)),
            Some(d) => {
                out.push(format!("{} · {}", d.name, d.breed));
                match view {
                    DogView::Overview | DogView::Progression => {
                        out.push(format!("Level {} · {} xp", d.level, d.xp));
                        out.push(format!("{}/{} tasks done", d.tasks_done(), d.tasks.len()));
                    }
                    DogView::Tasks => {
                        for task in &d.tasks {
                            let mark = if task.done { "x" } else { " " };
                            out.push(format!("[{}] {}", mark, task.title));
                        }
                    }
                    DogView::Badges => {
                        if d.badges.is_empty() {
                            out.push("No badges yet.".to_string());
                        }
                        for badge in &d.badges {
                            out.push(format!("* {}", badge));
                        }
                    }
                }
            }
        },
        ScreenView::Dogs { dogs, .. } => {
            for d in dogs {
                out.push(format!("[{}] {} · {} · level {}", d.id, d.name, d.breed, d.level));
            }
        }
        ScreenView::Channels {
            channels,
            club_names,
            ..
        } => {
            for (c, club) in channels.iter().zip(club_names) {
                out.push(format!("[{} {}] #{} · {}", c.club_id, c.id, c.name, club));
            }
        }
        ScreenView::ChatRoom { channel, messages } => {
            out.push(format!("#{}", channel.name));
            if messages.is_empty() {
                out.push("No messages yet.".to_string());
            }
            for m in messages {
                out.push(format!("{}: {}", m.author, m.body));
            }
        }
        ScreenView::Forum { channel, posts, .. } => {
            out.push(format!("Forum · {}", channel.name));
            for p in posts {
                out.push(format!("[{}] {} by {}", p.id, p.title, p.author));
            }
        }
        ScreenView::Post { id, post } => match post {
            None => out.push(format!("No post with id {}.", id)),
            Some(p) => {
                out.push(format!("{} by {}", p.title, p.author));
                out.push(p.body.to_string());
            }
        },
        ScreenView::Rating {
            id,
            club,
            step,
            ..
        } => {
            let club_name = club.as_ref().map(|c| c.name).unwrap_or("your club");
            match step {
                RatingStep::Invitation => {
                    out.push(format!("How was your session at {} (booking {})?", club_name, id));
                    out.push("> rate-accept | rate-dismiss".to_string());
                }
                RatingStep::Form => {
                    out.push(format!("Rate {} from 1 to 5 stars", club_name));
                    out.push("> rate-submit <stars> | rate-dismiss".to_string());
                }
            }
        }
        ScreenView::Pricing => {
            for (seats, price) in SEAT_PACKS {
                out.push(format!(
                    "{} seat(s) · {} € / seat > open clubTeachersPayment seats={} price={}",
                    seats, price, seats, price
                ));
            }
        }
        ScreenView::Payment { pricing } => {
            out.push(format!(
                "{} seat(s) x {} € = {} €",
                pricing.count,
                pricing.price,
                pricing.total()
            ));
            out.push("> pay-complete".to_string());
        }
        ScreenView::Leaderboard { rows } => {
            for (rank, row) in rows.iter().enumerate() {
                out.push(format!("{}. {} · {} xp", rank + 1, row.dog_name, row.xp));
            }
        }
        ScreenView::Empty { missing } => {
            out.push(format!("Nothing selected (needs {}).", missing));
        }
        ScreenView::Generic { title, .. } => out.push(title.to_string()),
    }
    out
}
