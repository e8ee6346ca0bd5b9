//! Fixed demo records. Club ids stay outside 200..300 and event ids inside
//! it so the home feed can share one id space.

use chrono::{NaiveDate, NaiveDateTime};

use super::{
    Booking, BookingStatus, Catalog, Channel, Club, Dog, DogTask, Event, Message, Post, Teacher,
};

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, min, 0))
        .unwrap_or_default()
}

fn task(title: &'static str, done: bool) -> DogTask {
    DogTask { title, done }
}

#[derive(Debug, Clone)]
pub struct MockCatalog {
    clubs: Vec<Club>,
    teachers: Vec<Teacher>,
    events: Vec<Event>,
    dogs: Vec<Dog>,
    bookings: Vec<Booking>,
    channels: Vec<Channel>,
    messages: Vec<Message>,
    posts: Vec<Post>,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalog {
    pub fn new() -> Self {
        let clubs = vec![
            Club {
                id: 7,
                name: "Riverside Canine Club",
                city: "Lyon",
                description: "Obedience and agility on the banks of the Saône.",
                rating: 4.7,
                price_per_session: 25,
            },
            Club {
                id: 12,
                name: "Happy Paws Academy",
                city: "Grenoble",
                description: "Puppy school and positive reinforcement classes.",
                rating: 4.5,
                price_per_session: 30,
            },
            Club {
                id: 150,
                name: "Mont Blanc Mushers",
                city: "Chamonix",
                description: "Canicross and sled dog training.",
                rating: 4.9,
                price_per_session: 40,
            },
            Club {
                id: 310,
                name: "Canal Agility Club",
                city: "Annecy",
                description: "Competitive agility, all levels welcome.",
                rating: 4.2,
                price_per_session: 22,
            },
        ];

        let teachers = vec![
            Teacher {
                id: 1,
                name: "Camille Durand",
                club_id: 7,
                specialty: "Obedience",
                home_training: true,
            },
            Teacher {
                id: 2,
                name: "Hugo Martin",
                club_id: 7,
                specialty: "Agility",
                home_training: false,
            },
            Teacher {
                id: 3,
                name: "Léa Bernard",
                club_id: 12,
                specialty: "Puppy socialisation",
                home_training: true,
            },
            Teacher {
                id: 4,
                name: "Noah Petit",
                club_id: 150,
                specialty: "Canicross",
                home_training: false,
            },
        ];

        let events = vec![
            Event {
                id: 201,
                club_id: 7,
                title: "Autumn obedience trial",
                starts_at: at(2026, 11, 7, 9, 30),
                places_left: 12,
            },
            Event {
                id: 250,
                club_id: 12,
                title: "Puppy meet-up",
                starts_at: at(2026, 11, 14, 14, 0),
                places_left: 4,
            },
            Event {
                id: 299,
                club_id: 150,
                title: "Night canicross",
                starts_at: at(2026, 12, 5, 18, 0),
                places_left: 0,
            },
        ];

        let dogs = vec![
            Dog {
                id: 1,
                name: "Rex",
                breed: "German Shepherd",
                owner: "customer@dogclub.test",
                level: 4,
                xp: 820,
                tasks: vec![
                    task("Sit for 10 seconds", true),
                    task("Heel on a loose lead", true),
                    task("Recall through distractions", false),
                ],
                badges: vec!["First class", "Good citizen"],
            },
            Dog {
                id: 2,
                name: "Luna",
                breed: "Border Collie",
                owner: "customer@dogclub.test",
                level: 6,
                xp: 1340,
                tasks: vec![
                    task("Weave poles", true),
                    task("A-frame contact", false),
                ],
                badges: vec!["Agility starter", "Speed demon", "Ten classes"],
            },
            Dog {
                id: 3,
                name: "Pixel",
                breed: "Jack Russell",
                owner: "marie@dogclub.test",
                level: 2,
                xp: 310,
                tasks: vec![task("Down-stay", false), task("Leave it", false)],
                badges: vec![],
            },
        ];

        let bookings = vec![
            Booking {
                id: 1,
                club_id: 7,
                teacher_id: Some(1),
                dog_id: 1,
                starts_at: at(2026, 10, 12, 10, 0),
                status: BookingStatus::Completed,
            },
            Booking {
                id: 2,
                club_id: 12,
                teacher_id: Some(3),
                dog_id: 2,
                starts_at: at(2026, 10, 24, 16, 0),
                status: BookingStatus::Upcoming,
            },
            Booking {
                id: 5,
                club_id: 7,
                teacher_id: None,
                dog_id: 2,
                starts_at: at(2026, 9, 30, 9, 0),
                status: BookingStatus::Completed,
            },
            Booking {
                id: 9,
                club_id: 150,
                teacher_id: Some(4),
                dog_id: 3,
                starts_at: at(2026, 10, 2, 18, 0),
                status: BookingStatus::Cancelled,
            },
        ];

        let channels = vec![
            Channel {
                id: 1,
                club_id: 7,
                name: "General",
            },
            Channel {
                id: 2,
                club_id: 7,
                name: "Agility",
            },
            Channel {
                id: 1,
                club_id: 12,
                name: "Puppy class",
            },
        ];

        let messages = vec![
            Message {
                club_id: 7,
                channel_id: 1,
                author: "Camille Durand",
                body: "Saturday class moves to the north field.",
            },
            Message {
                club_id: 7,
                channel_id: 1,
                author: "customer@dogclub.test",
                body: "Thanks, see you there!",
            },
            Message {
                club_id: 7,
                channel_id: 2,
                author: "Hugo Martin",
                body: "New tunnel arrived, bring treats.",
            },
            Message {
                club_id: 12,
                channel_id: 1,
                author: "Léa Bernard",
                body: "Remember the vaccination booklet.",
            },
        ];

        let posts = vec![
            Post {
                id: 1,
                club_id: 7,
                channel_id: 1,
                title: "Best treats for recall?",
                author: "customer@dogclub.test",
                body: "Rex ignores kibble outdoors. What works for yours?",
            },
            Post {
                id: 2,
                club_id: 7,
                channel_id: 2,
                title: "Competition calendar 2027",
                author: "Hugo Martin",
                body: "Dates for the regional agility rounds are out.",
            },
            Post {
                id: 3,
                club_id: 12,
                channel_id: 1,
                title: "Crate training tips",
                author: "Léa Bernard",
                body: "Short sessions, lots of rewards, never as punishment.",
            },
        ];

        Self {
            clubs,
            teachers,
            events,
            dogs,
            bookings,
            channels,
            messages,
            posts,
        }
    }
}

impl Catalog for MockCatalog {
    fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    fn events(&self) -> &[Event] {
        &self.events
    }

    fn dogs(&self) -> &[Dog] {
        &self.dogs
    }

    fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    fn channels(&self) -> &[Channel] {
        &self.channels
    }

    fn messages(&self) -> &[Message] {
        &self.messages
    }

    fn posts(&self) -> &[Post] {
        &self.posts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::EntityKind;

    #[test]
    fn listing_ids_route_by_band() {
        let catalog = MockCatalog::new();
        for row in catalog.listing() {
            let target = row.target();
            match target.kind {
                EntityKind::Club => assert!(catalog.club(row.id).is_some(), "club {}", row.id),
                EntityKind::Event => assert!(catalog.event(row.id).is_some(), "event {}", row.id),
                other => panic!("unexpected kind {:?}", other),
            }
        }
    }

    #[test]
    fn lookups_return_none_for_unknown_ids() {
        let catalog = MockCatalog::new();
        assert!(catalog.club(999).is_none());
        assert!(catalog.dog(42).is_none());
        assert!(catalog.messages_in(7, 99).is_empty());
    }

    #[test]
    fn leaderboard_is_sorted_by_xp() {
        let rows = MockCatalog::new().leaderboard();
        assert_eq!(rows[0].dog_name, "Luna");
        assert!(rows.windows(2).all(|w| w[0].xp >= w[1].xp));
    }

    #[test]
    fn channel_ids_are_scoped_per_club() {
        let catalog = MockCatalog::new();
        assert_eq!(catalog.messages_in(7, 1).len(), 2);
        assert_eq!(catalog.messages_in(12, 1).len(), 1);
        assert_eq!(catalog.teachers_of(7).len(), 2);
    }

    #[test]
    fn dates_are_valid() {
        let catalog = MockCatalog::new();
        for event in catalog.events() {
            assert_ne!(event.starts_at, NaiveDateTime::default());
        }
    }
}
