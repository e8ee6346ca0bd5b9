//! Read-only catalogue the screens render from.
//!
//! Lookups return `Option`; a screen whose entity is missing renders a
//! not-found state instead of failing.

mod mock;

pub use mock::MockCatalog;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::nav::EntityRef;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Club {
    pub id: u32,
    pub name: &'static str,
    pub city: &'static str,
    pub description: &'static str,
    pub rating: f32,
    pub price_per_session: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Teacher {
    pub id: u32,
    pub name: &'static str,
    pub club_id: u32,
    pub specialty: &'static str,
    pub home_training: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Event {
    pub id: u32,
    pub club_id: u32,
    pub title: &'static str,
    pub starts_at: NaiveDateTime,
    pub places_left: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DogTask {
    pub title: &'static str,
    pub done: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dog {
    pub id: u32,
    pub name: &'static str,
    pub breed: &'static str,
    pub owner: &'static str,
    pub level: u32,
    pub xp: u32,
    pub tasks: Vec<DogTask>,
    pub badges: Vec<&'static str>,
}

impl Dog {
    pub fn tasks_done(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Upcoming => "Upcoming",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Booking {
    pub id: u32,
    pub club_id: u32,
    pub teacher_id: Option<u32>,
    pub dog_id: u32,
    pub starts_at: NaiveDateTime,
    pub status: BookingStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Channel {
    pub id: u32,
    pub club_id: u32,
    pub name: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Message {
    pub club_id: u32,
    pub channel_id: u32,
    pub author: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Post {
    pub id: u32,
    pub club_id: u32,
    pub channel_id: u32,
    pub title: &'static str,
    pub author: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub dog_id: u32,
    pub dog_name: &'static str,
    pub xp: u32,
}

/// One row of the mixed home feed
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Listing {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: String,
}

impl Listing {
    /// Entity the listing opens when tapped
    pub fn target(&self) -> EntityRef {
        EntityRef::from_listing_id(self.id)
    }
}

/// Source of the records shown on screens
pub trait Catalog {
    fn clubs(&self) -> &[Club];
    fn teachers(&self) -> &[Teacher];
    fn events(&self) -> &[Event];
    fn dogs(&self) -> &[Dog];
    fn bookings(&self) -> &[Booking];
    fn channels(&self) -> &[Channel];
    fn messages(&self) -> &[Message];
    fn posts(&self) -> &[Post];

    fn club(&self, id: u32) -> Option<&Club> {
        self.clubs().iter().find(|c| c.id == id)
    }

    fn teacher(&self, id: u32) -> Option<&Teacher> {
        self.teachers().iter().find(|t| t.id == id)
    }

    fn event(&self, id: u32) -> Option<&Event> {
        self.events().iter().find(|e| e.id == id)
    }

    fn dog(&self, id: u32) -> Option<&Dog> {
        self.dogs().iter().find(|d| d.id == id)
    }

    fn booking(&self, id: u32) -> Option<&Booking> {
        self.bookings().iter().find(|b| b.id == id)
    }

    fn post(&self, id: u32) -> Option<&Post> {
        self.posts().iter().find(|p| p.id == id)
    }

    fn teachers_of(&self, club_id: u32) -> Vec<&Teacher> {
        self.teachers()
            .iter()
            .filter(|t| t.club_id == club_id)
            .collect()
    }

    fn channels_of(&self, club_id: u32) -> Vec<&Channel> {
        self.channels()
            .iter()
            .filter(|c| c.club_id == club_id)
            .collect()
    }

    fn messages_in(&self, club_id: u32, channel_id: u32) -> Vec<&Message> {
        self.messages()
            .iter()
            .filter(|m| m.club_id == club_id && m.channel_id == channel_id)
            .collect()
    }

    fn posts_in(&self, club_id: u32, channel_id: u32) -> Vec<&Post> {
        self.posts()
            .iter()
            .filter(|p| p.club_id == club_id && p.channel_id == channel_id)
            .collect()
    }

    /// Dogs ranked by xp, highest first
    fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let mut rows: Vec<LeaderboardEntry> = self
            .dogs()
            .iter()
            .map(|d| LeaderboardEntry {
                dog_id: d.id,
                dog_name: d.name,
                xp: d.xp,
            })
            .collect();
        rows.sort_by(|a, b| b.xp.cmp(&a.xp).then(a.dog_id.cmp(&b.dog_id)));
        rows
    }

    /// Home feed mixing clubs and upcoming events in one id space
    fn listing(&self) -> Vec<Listing> {
        let clubs = self.clubs().iter().map(|c| Listing {
            id: c.id,
            title: c.name,
            subtitle: c.city.to_string(),
        });
        let events = self.events().iter().map(|e| Listing {
            id: e.id,
            title: e.title,
            subtitle: e.starts_at.format("%a %d %b, %H:%M").to_string(),
        });
        clubs.chain(events).collect()
    }
}
