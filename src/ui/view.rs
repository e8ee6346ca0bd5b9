//! Screen view models.
//!
//! `build` turns a resolved page into owned data pulled from the catalogue.
//! The HTML and plain-text renderers both consume the same `ScreenView`, so
//! the two outputs never disagree about what a screen shows.

use crate::data::{
    Booking, Catalog, Channel, Club, Dog, Event, LeaderboardEntry, Listing, Post, Teacher,
};
use crate::nav::{
    ChannelRef, ClubPage, CustomerPage, EntityKind, Page, ScreenProps, SelectionField,
    TeacherPage, TeachersPricing,
};

use super::screens::{DogView, RatingStep};

#[derive(Clone, Debug, PartialEq)]
pub enum ScreenView {
    Home {
        listings: Vec<Listing>,
    },
    Dashboard {
        greeting: String,
        stats: Vec<(String, String)>,
        shortcuts: Vec<(String, String)>,
    },
    Clubs {
        clubs: Vec<Club>,
        detail_page: &'static str,
    },
    Club {
        id: u32,
        club: Option<Club>,
        teachers: Vec<Teacher>,
        channels: Vec<Channel>,
        can_book: bool,
    },
    Teacher {
        id: u32,
        teacher: Option<Teacher>,
        club: Option<Club>,
        can_book: bool,
    },
    Teachers {
        teachers: Vec<Teacher>,
        can_add: bool,
    },
    Event {
        id: u32,
        event: Option<Event>,
        club: Option<Club>,
    },
    Events {
        events: Vec<Event>,
        detail_page: &'static str,
    },
    Booking {
        club: Option<Club>,
        teacher: Option<Teacher>,
        confirmed: bool,
    },
    BookingDetail {
        id: u32,
        booking: Option<Booking>,
        club: Option<Club>,
        dog: Option<Dog>,
        can_rate: bool,
    },
    Bookings {
        bookings: Vec<Booking>,
        detail_page: &'static str,
    },
    Dog {
        id: u32,
        dog: Option<Dog>,
        view: DogView,
    },
    Dogs {
        dogs: Vec<Dog>,
        detail_page: &'static str,
    },
    Channels {
        channels: Vec<Channel>,
        club_names: Vec<String>,
        with_forum: bool,
    },
    ChatRoom {
        channel: ChannelRef,
        messages: Vec<crate::data::Message>,
    },
    Forum {
        club_id: u32,
        channel: ChannelRef,
        posts: Vec<Post>,
        detail_page: &'static str,
    },
    Post {
        id: u32,
        post: Option<Post>,
    },
    Rating {
        id: u32,
        booking: Option<Booking>,
        club: Option<Club>,
        step: RatingStep,
    },
    Pricing,
    Payment {
        pricing: TeachersPricing,
    },
    Leaderboard {
        rows: Vec<LeaderboardEntry>,
    },
    /// Selection incomplete for the page
    Empty {
        missing: SelectionField,
    },
    Generic {
        title: &'static str,
        page: &'static str,
    },
}

impl ScreenView {
    pub fn empty(missing: SelectionField) -> Self {
        ScreenView::Empty { missing }
    }
}

/// Build the view for a resolved page
pub fn build(props: &ScreenProps, catalog: &dyn Catalog) -> ScreenView {
    match props.page {
        Page::Customer(page) => customer(page, props, catalog),
        Page::Club(page) => club(page, props, catalog),
        Page::Teacher(page) => teacher(page, props, catalog),
    }
}

fn generic(page: Page) -> ScreenView {
    ScreenView::Generic {
        title: page.title(),
        page: page.as_str(),
    }
}

fn customer(page: CustomerPage, props: &ScreenProps, catalog: &dyn Catalog) -> ScreenView {
    let sel = &props.selection;
    match page {
        CustomerPage::Home => ScreenView::Home {
            listings: catalog.listing(),
        },
        CustomerPage::Clubs => ScreenView::Clubs {
            clubs: catalog.clubs().to_vec(),
            detail_page: CustomerPage::ClubDetail.as_str(),
        },
        CustomerPage::Events => ScreenView::Home {
            listings: catalog
                .listing()
                .into_iter()
                .filter(|l| l.target().kind == EntityKind::Event)
                .collect(),
        },
        CustomerPage::ClubDetail => club_view(sel.club_id.unwrap_or_default(), catalog, true),
        CustomerPage::TeacherDetail => {
            teacher_view(sel.teacher_id.unwrap_or_default(), sel.club_id, catalog, true)
        }
        CustomerPage::EventDetail => event_view(sel.event_id.unwrap_or_default(), catalog),
        CustomerPage::Booking | CustomerPage::BookingConfirmation => ScreenView::Booking {
            club: sel.club_id.and_then(|id| catalog.club(id)).cloned(),
            teacher: sel.teacher_id.and_then(|id| catalog.teacher(id)).cloned(),
            confirmed: page == CustomerPage::BookingConfirmation,
        },
        CustomerPage::HomeTrainingBooking => {
            let teacher = sel.teacher_id.and_then(|id| catalog.teacher(id)).cloned();
            ScreenView::Booking {
                club: teacher.as_ref().and_then(|t| catalog.club(t.club_id)).cloned(),
                teacher,
                confirmed: false,
            }
        }
        CustomerPage::HomeTraining => ScreenView::Teachers {
            teachers: catalog
                .teachers()
                .iter()
                .filter(|t| t.home_training)
                .cloned()
                .collect(),
            can_add: false,
        },
        CustomerPage::MyBookings => ScreenView::Bookings {
            bookings: catalog.bookings().to_vec(),
            detail_page: CustomerPage::BookingDetail.as_str(),
        },
        CustomerPage::BookingDetail => {
            booking_view(sel.booking_id.unwrap_or_default(), catalog, true)
        }
        CustomerPage::Chat => channels_view(catalog, true),
        CustomerPage::ChatRoom => chat_room_view(sel.club_id, sel.channel.as_ref(), catalog),
        CustomerPage::Forum => forum_view(
            sel.club_id,
            sel.channel.as_ref(),
            CustomerPage::PostDetail.as_str(),
            catalog,
        ),
        CustomerPage::PostDetail => post_view(sel.post_id.unwrap_or_default(), catalog),
        CustomerPage::MyDogs => ScreenView::Dogs {
            dogs: catalog.dogs().to_vec(),
            detail_page: CustomerPage::DogProgression.as_str(),
        },
        CustomerPage::DogProgression => dog_view(sel.dog_id, DogView::Progression, catalog),
        CustomerPage::DogTasks => dog_view(sel.dog_id, DogView::Tasks, catalog),
        CustomerPage::DogBadges => dog_view(sel.dog_id, DogView::Badges, catalog),
        CustomerPage::Leaderboard => ScreenView::Leaderboard {
            rows: catalog.leaderboard(),
        },
        CustomerPage::RatingInvitation => rating_view(sel.booking_id, RatingStep::Invitation, catalog),
        CustomerPage::Rating => rating_view(sel.booking_id, RatingStep::Form, catalog),
        CustomerPage::Notifications
        | CustomerPage::Profile
        | CustomerPage::AiProgram
        | CustomerPage::Favorites
        | CustomerPage::Settings => generic(page.into()),
    }
}

fn club(page: ClubPage, props: &ScreenProps, catalog: &dyn Catalog) -> ScreenView {
    let sel = &props.selection;
    match page {
        ClubPage::ClubHome => ScreenView::Dashboard {
            greeting: "Welcome back to your club dashboard.".to_string(),
            stats: vec![
                ("Bookings".to_string(), catalog.bookings().len().to_string()),
                ("Teachers".to_string(), catalog.teachers().len().to_string()),
                ("Events".to_string(), catalog.events().len().to_string()),
            ],
            shortcuts: vec![
                ("go clubCreateEvent".to_string(), "New event".to_string()),
                ("go clubTeachersPricing".to_string(), "Add teachers".to_string()),
                ("go clubStats".to_string(), "Statistics".to_string()),
            ],
        },
        ClubPage::ClubBookings => ScreenView::Bookings {
            bookings: catalog.bookings().to_vec(),
            detail_page: ClubPage::ClubBookingDetail.as_str(),
        },
        ClubPage::ClubBookingDetail => {
            booking_view(sel.booking_id.unwrap_or_default(), catalog, false)
        }
        ClubPage::ClubTeachers => ScreenView::Teachers {
            teachers: catalog.teachers().to_vec(),
            can_add: true,
        },
        ClubPage::ClubTeacherDetail => {
            teacher_view(sel.teacher_id.unwrap_or_default(), None, catalog, false)
        }
        ClubPage::ClubTeachersPricing => ScreenView::Pricing,
        ClubPage::ClubTeachersPayment => match sel.teachers_pricing {
            Some(pricing) => ScreenView::Payment { pricing },
            None => ScreenView::empty(SelectionField::TeachersPricing),
        },
        ClubPage::ClubEvents => ScreenView::Events {
            events: catalog.events().to_vec(),
            detail_page: ClubPage::ClubEventDetail.as_str(),
        },
        ClubPage::ClubEventDetail => event_view(sel.event_id.unwrap_or_default(), catalog),
        ClubPage::ClubChat => channels_view(catalog, true),
        ClubPage::ClubChatRoom => chat_room_view(sel.club_id, sel.channel.as_ref(), catalog),
        ClubPage::ClubForum => forum_view(
            sel.club_id,
            sel.channel.as_ref(),
            ClubPage::ClubPostDetail.as_str(),
            catalog,
        ),
        ClubPage::ClubPostDetail => post_view(sel.post_id.unwrap_or_default(), catalog),
        ClubPage::ClubMembers => ScreenView::Dogs {
            dogs: catalog.dogs().to_vec(),
            detail_page: ClubPage::ClubMemberDog.as_str(),
        },
        ClubPage::ClubMemberDog => dog_view(sel.dog_id, DogView::Overview, catalog),
        ClubPage::ClubLeaderboard => ScreenView::Leaderboard {
            rows: catalog.leaderboard(),
        },
        ClubPage::ClubCreateEvent
        | ClubPage::ClubNotifications
        | ClubPage::ClubSchedule
        | ClubPage::ClubStats
        | ClubPage::ClubProfile
        | ClubPage::ClubSettings => generic(page.into()),
    }
}

fn teacher(page: TeacherPage, props: &ScreenProps, catalog: &dyn Catalog) -> ScreenView {
    let sel = &props.selection;
    match page {
        TeacherPage::TeacherHome => ScreenView::Dashboard {
            greeting: "Your teaching week at a glance.".to_string(),
            stats: vec![
                ("Sessions".to_string(), catalog.bookings().len().to_string()),
                ("Students".to_string(), catalog.dogs().len().to_string()),
            ],
            shortcuts: vec![
                ("go teacherAvailability".to_string(), "Set availability".to_string()),
                ("go teacherEarnings".to_string(), "Earnings".to_string()),
            ],
        },
        TeacherPage::TeacherBookings => ScreenView::Bookings {
            bookings: catalog.bookings().to_vec(),
            detail_page: TeacherPage::TeacherBookingDetail.as_str(),
        },
        TeacherPage::TeacherBookingDetail => {
            booking_view(sel.booking_id.unwrap_or_default(), catalog, false)
        }
        TeacherPage::TeacherClubs => ScreenView::Clubs {
            clubs: catalog.clubs().to_vec(),
            detail_page: TeacherPage::TeacherClubDetail.as_str(),
        },
        TeacherPage::TeacherClubDetail => club_view(sel.club_id.unwrap_or_default(), catalog, false),
        TeacherPage::TeacherStudents => ScreenView::Dogs {
            dogs: catalog.dogs().to_vec(),
            detail_page: TeacherPage::TeacherDogDetail.as_str(),
        },
        TeacherPage::TeacherDogDetail => dog_view(sel.dog_id, DogView::Overview, catalog),
        TeacherPage::TeacherDogProgression => dog_view(sel.dog_id, DogView::Progression, catalog),
        TeacherPage::TeacherDogTasks => dog_view(sel.dog_id, DogView::Tasks, catalog),
        TeacherPage::TeacherChat => channels_view(catalog, false),
        TeacherPage::TeacherChatRoom => chat_room_view(sel.club_id, sel.channel.as_ref(), catalog),
        TeacherPage::TeacherSchedule
        | TeacherPage::TeacherAvailability
        | TeacherPage::TeacherHomeTraining
        | TeacherPage::TeacherNotifications
        | TeacherPage::TeacherEarnings
        | TeacherPage::TeacherProfile
        | TeacherPage::TeacherSettings => generic(page.into()),
    }
}

fn club_view(id: u32, catalog: &dyn Catalog, can_book: bool) -> ScreenView {
    ScreenView::Club {
        id,
        club: catalog.club(id).cloned(),
        teachers: catalog.teachers_of(id).into_iter().cloned().collect(),
        channels: catalog.channels_of(id).into_iter().cloned().collect(),
        can_book,
    }
}

/// `club_id` is the club the teacher was opened from; without it the
/// teacher's own club is shown
fn teacher_view(id: u32, club_id: Option<u32>, catalog: &dyn Catalog, can_book: bool) -> ScreenView {
    let teacher = catalog.teacher(id).cloned();
    let club_id = club_id.or(teacher.as_ref().map(|t| t.club_id));
    ScreenView::Teacher {
        id,
        club: club_id.and_then(|c| catalog.club(c)).cloned(),
        teacher,
        can_book,
    }
}

fn event_view(id: u32, catalog: &dyn Catalog) -> ScreenView {
    let event = catalog.event(id).cloned();
    ScreenView::Event {
        id,
        club: event.as_ref().and_then(|e| catalog.club(e.club_id)).cloned(),
        event,
    }
}

fn booking_view(id: u32, catalog: &dyn Catalog, can_rate: bool) -> ScreenView {
    let booking = catalog.booking(id).cloned();
    ScreenView::BookingDetail {
        id,
        club: booking.as_ref().and_then(|b| catalog.club(b.club_id)).cloned(),
        dog: booking.as_ref().and_then(|b| catalog.dog(b.dog_id)).cloned(),
        booking,
        can_rate,
    }
}

fn dog_view(id: Option<u32>, view: DogView, catalog: &dyn Catalog) -> ScreenView {
    let id = id.unwrap_or_default();
    ScreenView::Dog {
        id,
        dog: catalog.dog(id).cloned(),
        view,
    }
}

fn channels_view(catalog: &dyn Catalog, with_forum: bool) -> ScreenView {
    let channels = catalog.channels().to_vec();
    let club_names = channels
        .iter()
        .map(|c| {
            catalog
                .club(c.club_id)
                .map(|club| club.name.to_string())
                .unwrap_or_default()
        })
        .collect();
    ScreenView::Channels {
        channels,
        club_names,
        with_forum,
    }
}

fn chat_room_view(club_id: Option<u32>, channel: Option<&ChannelRef>, catalog: &dyn Catalog) -> ScreenView {
    let (Some(club_id), Some(channel)) = (club_id, channel) else {
        return ScreenView::empty(SelectionField::Channel);
    };
    ScreenView::ChatRoom {
        channel: channel.clone(),
        messages: catalog
            .messages_in(club_id, channel.id)
            .into_iter()
            .cloned()
            .collect(),
    }
}

fn forum_view(
    club_id: Option<u32>,
    channel: Option<&ChannelRef>,
    detail_page: &'static str,
    catalog: &dyn Catalog,
) -> ScreenView {
    let (Some(club_id), Some(channel)) = (club_id, channel) else {
        return ScreenView::empty(SelectionField::Channel);
    };
    ScreenView::Forum {
        club_id,
        channel: channel.clone(),
        posts: catalog
            .posts_in(club_id, channel.id)
            .into_iter()
            .cloned()
            .collect(),
        detail_page,
    }
}

fn post_view(id: u32, catalog: &dyn Catalog) -> ScreenView {
    ScreenView::Post {
        id,
        post: catalog.post(id).cloned(),
    }
}

fn rating_view(booking_id: Option<u32>, step: RatingStep, catalog: &dyn Catalog) -> ScreenView {
    let id = booking_id.unwrap_or_default();
    let booking = catalog.booking(id).cloned();
    ScreenView::Rating {
        id,
        club: booking.as_ref().and_then(|b| catalog.club(b.club_id)).cloned(),
        booking,
        step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MockCatalog;
    use crate::nav::{PageRegistry, Resolution, SelectionContext};
    use crate::session::Role;

    fn ready(page: Page, selection: &SelectionContext) -> ScreenProps {
        match PageRegistry::default().resolve(page, selection, None) {
            Resolution::Ready(props) => props,
            other => panic!("expected ready, got {:?}", other),
        }
    }

    #[test]
    fn every_page_without_requirements_builds() {
        let catalog = MockCatalog::new();
        let empty = SelectionContext::default();
        for role in [Role::Customer, Role::Club, Role::Teacher] {
            for page in Page::all(role) {
                if page.spec().requires.is_empty() {
                    let _ = build(&ready(page, &empty), &catalog);
                }
            }
        }
    }

    #[test]
    fn home_feed_lists_clubs_and_events() {
        let catalog = MockCatalog::new();
        let view = build(&ready(Page::home(Role::Customer), &SelectionContext::default()), &catalog);
        match view {
            ScreenView::Home { listings } => {
                assert!(listings.iter().any(|l| l.id == 250));
                assert!(listings.iter().any(|l| l.id == 7));
            }
            other => panic!("expected home, got {:?}", other),
        }
    }

    #[test]
    fn unknown_club_id_builds_not_found_view() {
        let catalog = MockCatalog::new();
        let props = ScreenProps {
            page: CustomerPage::ClubDetail.into(),
            selection: crate::nav::ScopedSelection {
                club_id: Some(999),
                ..Default::default()
            },
            back: None,
        };
        match build(&props, &catalog) {
            ScreenView::Club { id, club, .. } => {
                assert_eq!(id, 999);
                assert!(club.is_none());
            }
            other => panic!("expected club view, got {:?}", other),
        }
    }

    #[test]
    fn teacher_detail_shows_the_club_it_was_opened_from() {
        let catalog = MockCatalog::new();
        let mut selection = SelectionContext::default();
        selection.merge(crate::nav::SelectionPatch::new().teacher(1).club(12));

        match build(&ready(CustomerPage::TeacherDetail.into(), &selection), &catalog) {
            ScreenView::Teacher { id, teacher, club, .. } => {
                assert_eq!(id, 1);
                assert_eq!(teacher.map(|t| t.club_id), Some(7));
                assert_eq!(club.map(|c| c.id), Some(12));
            }
            other => panic!("expected teacher view, got {:?}", other),
        }
    }
}
