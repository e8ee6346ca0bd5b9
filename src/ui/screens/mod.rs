//! Screen components, one per kind of view.

mod auth;
mod booking;
mod chat;
mod club;
mod dog;
mod generic;
mod home;
mod leaderboard;
mod payment;
mod rating;

pub use auth::AuthPanel;
pub use booking::{BookingDetailScreen, BookingListScreen, BookingScreen};
pub use chat::{ChannelListScreen, ChatRoomScreen, ForumScreen, PostScreen};
pub use club::{ClubScreen, EventListScreen, EventScreen, TeacherListScreen, TeacherScreen};
pub use dog::{DogListScreen, DogScreen, DogView};
pub use generic::GenericScreen;
pub use home::{ClubsScreen, DashboardScreen, HomeScreen};
pub use leaderboard::LeaderboardScreen;
pub use payment::{PaymentScreen, PricingScreen, SEAT_PACKS};
pub use rating::{RatingScreen, RatingStep};

use dioxus::prelude::*;

use super::components::EmptyState;
use super::view::ScreenView;

/// Body of the current screen
#[component]
pub fn ScreenBody(view: ScreenView) -> Element {
    match view {
        ScreenView::Home { listings } => rsx! { HomeScreen { listings } },
        ScreenView::Dashboard {
            greeting,
            stats,
            shortcuts,
        } => rsx! { DashboardScreen { greeting, stats, shortcuts } },
        ScreenView::Clubs { clubs, detail_page } => rsx! {
            ClubsScreen { clubs, detail_page: detail_page.to_string() }
        },
        ScreenView::Club {
            id,
            club,
            teachers,
            channels,
            can_book,
        } => rsx! {
            ClubScreen { club_id: id, club, teachers, channels, can_book }
        },
        ScreenView::Teacher {
            id,
            teacher,
            club,
            can_book,
        } => rsx! {
            TeacherScreen { teacher_id: id, teacher, club, can_book }
        },
        ScreenView::Teachers { teachers, can_add } => rsx! {
            TeacherListScreen { teachers, can_add }
        },
        ScreenView::Event { id, event, club } => rsx! {
            EventScreen { event_id: id, event, club }
        },
        ScreenView::Events {
            events,
            detail_page,
        } => rsx! {
            EventListScreen { events, detail_page: detail_page.to_string() }
        },
        ScreenView::Booking {
            club,
            teacher,
            confirmed,
        } => rsx! { BookingScreen { club, teacher, confirmed } },
        ScreenView::BookingDetail {
            id,
            booking,
            club,
            dog,
            can_rate,
        } => rsx! {
            BookingDetailScreen { booking_id: id, booking, club, dog, can_rate }
        },
        ScreenView::Bookings {
            bookings,
            detail_page,
        } => rsx! {
            BookingListScreen { bookings, detail_page: detail_page.to_string() }
        },
        ScreenView::Dog { id, dog, view } => rsx! { DogScreen { dog_id: id, dog, view } },
        ScreenView::Dogs { dogs, detail_page } => rsx! {
            DogListScreen { dogs, detail_page: detail_page.to_string() }
        },
        ScreenView::Channels {
            channels,
            club_names,
            with_forum,
        } => rsx! { ChannelListScreen { channels, club_names, with_forum } },
        ScreenView::ChatRoom { channel, messages } => rsx! {
            ChatRoomScreen { channel, messages }
        },
        ScreenView::Forum {
            club_id,
            channel,
            posts,
            detail_page,
        } => rsx! {
            ForumScreen { club_id, channel, posts, detail_page: detail_page.to_string() }
        },
        ScreenView::Post { id, post } => rsx! { PostScreen { post_id: id, post } },
        ScreenView::Rating {
            id,
            booking,
            club,
            step,
        } => rsx! { RatingScreen { booking_id: id, booking, club, step } },
        ScreenView::Pricing => rsx! { PricingScreen {} },
        ScreenView::Payment { pricing } => rsx! { PaymentScreen { pricing } },
        ScreenView::Leaderboard { rows } => rsx! { LeaderboardScreen { rows } },
        ScreenView::Empty { missing } => rsx! {
            EmptyState { missing: missing.to_string() }
        },
        ScreenView::Generic { title, page } => rsx! {
            GenericScreen { title: title.to_string(), page: page.to_string() }
        },
    }
}
