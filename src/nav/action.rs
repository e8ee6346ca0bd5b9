//! Callbacks a screen can emit back into the controller.

use super::page::Page;
use super::selection::{EntityRef, SelectionPatch};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Navigate(Page),
    /// Raw page id from an untyped source (deep link, shell)
    NavigateTo(String),
    NavigateWithEntity(Page, SelectionPatch),
    Back,
    /// Tap on a mixed club/event listing entry
    SelectListing(u32),
    Open(EntityRef),
    BookAppointment {
        club_id: u32,
        teacher_id: Option<u32>,
    },
    ConfirmBooking,
    OpenChannel {
        club_id: u32,
        channel_id: u32,
        name: String,
    },
    OpenForum {
        club_id: u32,
        channel_id: u32,
        name: String,
    },
    OpenDog(u32),
    OpenTeacher {
        club_id: u32,
        teacher_id: u32,
    },
    StartRating {
        booking_id: u32,
    },
    AcceptRatingInvitation,
    SubmitRating {
        stars: u8,
    },
    DismissRating,
    CompleteTeachersPayment,
}
