//! Selection Context: the entity ids that parameterize the current screen.
//!
//! Only the navigation controller mutates a `SelectionContext`; screens get a
//! `ScopedSelection` holding just the fields their page declared.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::page::Page;

/// Individual field of the Selection Context
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionField {
    ClubId,
    Channel,
    PostId,
    EventId,
    BookingId,
    TeacherId,
    DogId,
    RatingReturn,
    TeachersPricing,
}

impl SelectionField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionField::ClubId => "clubId",
            SelectionField::Channel => "channel",
            SelectionField::PostId => "postId",
            SelectionField::EventId => "eventId",
            SelectionField::BookingId => "bookingId",
            SelectionField::TeacherId => "teacherId",
            SelectionField::DogId => "dogId",
            SelectionField::RatingReturn => "ratingReturnTarget",
            SelectionField::TeachersPricing => "teachersPricingData",
        }
    }
}

impl fmt::Display for SelectionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chat channel inside a club (id plus display name)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRef {
    pub id: u32,
    pub name: String,
}

/// Teacher seat purchase carried from the pricing page to the payment page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeachersPricing {
    pub count: u32,
    pub price: u32,
}

impl TeachersPricing {
    pub fn total(&self) -> u32 {
        self.count.saturating_mul(self.price)
    }
}

/// Kind of entity an explicit reference points at
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Club,
    Event,
    Teacher,
    Dog,
    Booking,
    Post,
}

impl EntityKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "club" => Some(EntityKind::Club),
            "event" => Some(EntityKind::Event),
            "teacher" => Some(EntityKind::Teacher),
            "dog" => Some(EntityKind::Dog),
            "booking" => Some(EntityKind::Booking),
            "post" => Some(EntityKind::Post),
            _ => None,
        }
    }
}

/// Discriminated `{kind, id}` reference to an entity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub id: u32,
}

/// Listing ids in this band are events; everything else is a club
const LEGACY_EVENT_BAND: std::ops::Range<u32> = 200..300;

impl EntityRef {
    pub fn new(kind: EntityKind, id: u32) -> Self {
        Self { kind, id }
    }

    /// Interpret a mixed club/event listing id.
    ///
    /// The home feed shares one numeric id space between clubs and events:
    /// ids in `[200, 300)` are events, every other id is a club.
    pub fn from_listing_id(id: u32) -> Self {
        if LEGACY_EVENT_BAND.contains(&id) {
            Self::new(EntityKind::Event, id)
        } else {
            Self::new(EntityKind::Club, id)
        }
    }

    /// Patch writing this reference into its selection field
    pub fn to_patch(&self) -> SelectionPatch {
        let patch = SelectionPatch::new();
        match self.kind {
            EntityKind::Club => patch.club(self.id),
            EntityKind::Event => patch.event(self.id),
            EntityKind::Teacher => patch.teacher(self.id),
            EntityKind::Dog => patch.dog(self.id),
            EntityKind::Booking => patch.booking(self.id),
            EntityKind::Post => patch.post(self.id),
        }
    }
}

/// Fields merged into the context by `navigate_with_entity`.
/// Only fields that are `Some` overwrite existing values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionPatch {
    pub club_id: Option<u32>,
    pub channel: Option<ChannelRef>,
    pub post_id: Option<u32>,
    pub event_id: Option<u32>,
    pub booking_id: Option<u32>,
    pub teacher_id: Option<u32>,
    pub dog_id: Option<u32>,
    pub teachers_pricing: Option<TeachersPricing>,
}

impl SelectionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn club(mut self, id: u32) -> Self {
        self.club_id = Some(id);
        self
    }

    pub fn channel(mut self, id: u32, name: impl Into<String>) -> Self {
        self.channel = Some(ChannelRef {
            id,
            name: name.into(),
        });
        self
    }

    pub fn post(mut self, id: u32) -> Self {
        self.post_id = Some(id);
        self
    }

    pub fn event(mut self, id: u32) -> Self {
        self.event_id = Some(id);
        self
    }

    pub fn booking(mut self, id: u32) -> Self {
        self.booking_id = Some(id);
        self
    }

    pub fn teacher(mut self, id: u32) -> Self {
        self.teacher_id = Some(id);
        self
    }

    pub fn dog(mut self, id: u32) -> Self {
        self.dog_id = Some(id);
        self
    }

    pub fn teachers_pricing(mut self, count: u32, price: u32) -> Self {
        self.teachers_pricing = Some(TeachersPricing { count, price });
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Currently selected entities
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionContext {
    club_id: Option<u32>,
    channel: Option<ChannelRef>,
    post_id: Option<u32>,
    event_id: Option<u32>,
    booking_id: Option<u32>,
    teacher_id: Option<u32>,
    dog_id: Option<u32>,
    rating_return_target: Option<Page>,
    teachers_pricing_data: Option<TeachersPricing>,
}

impl SelectionContext {
    pub fn club_id(&self) -> Option<u32> {
        self.club_id
    }

    pub fn channel(&self) -> Option<&ChannelRef> {
        self.channel.as_ref()
    }

    pub fn post_id(&self) -> Option<u32> {
        self.post_id
    }

    pub fn event_id(&self) -> Option<u32> {
        self.event_id
    }

    pub fn booking_id(&self) -> Option<u32> {
        self.booking_id
    }

    pub fn teacher_id(&self) -> Option<u32> {
        self.teacher_id
    }

    pub fn dog_id(&self) -> Option<u32> {
        self.dog_id
    }

    pub fn rating_return_target(&self) -> Option<Page> {
        self.rating_return_target
    }

    pub fn teachers_pricing(&self) -> Option<TeachersPricing> {
        self.teachers_pricing_data
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn has(&self, field: SelectionField) -> bool {
        match field {
            SelectionField::ClubId => self.club_id.is_some(),
            SelectionField::Channel => self.channel.is_some(),
            SelectionField::PostId => self.post_id.is_some(),
            SelectionField::EventId => self.event_id.is_some(),
            SelectionField::BookingId => self.booking_id.is_some(),
            SelectionField::TeacherId => self.teacher_id.is_some(),
            SelectionField::DogId => self.dog_id.is_some(),
            SelectionField::RatingReturn => self.rating_return_target.is_some(),
            SelectionField::TeachersPricing => self.teachers_pricing_data.is_some(),
        }
    }

    pub(crate) fn merge(&mut self, patch: SelectionPatch) {
        let SelectionPatch {
            club_id,
            channel,
            post_id,
            event_id,
            booking_id,
            teacher_id,
            dog_id,
            teachers_pricing,
        } = patch;

        if club_id.is_some() {
            self.club_id = club_id;
        }
        if channel.is_some() {
            self.channel = channel;
        }
        if post_id.is_some() {
            self.post_id = post_id;
        }
        if event_id.is_some() {
            self.event_id = event_id;
        }
        if booking_id.is_some() {
            self.booking_id = booking_id;
        }
        if teacher_id.is_some() {
            self.teacher_id = teacher_id;
        }
        if dog_id.is_some() {
            self.dog_id = dog_id;
        }
        if teachers_pricing.is_some() {
            self.teachers_pricing_data = teachers_pricing;
        }
    }

    pub(crate) fn set_rating_return(&mut self, target: Option<Page>) {
        self.rating_return_target = target;
    }

    pub(crate) fn take_rating_return(&mut self) -> Option<Page> {
        self.rating_return_target.take()
    }

    pub(crate) fn take_teachers_pricing(&mut self) -> Option<TeachersPricing> {
        self.teachers_pricing_data.take()
    }

    /// Reset every field at once
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    /// Project the fields a page declared. Returns the first missing one.
    pub fn scope(&self, requires: &[SelectionField]) -> Result<ScopedSelection, SelectionField> {
        if let Some(missing) = requires.iter().copied().find(|f| !self.has(*f)) {
            return Err(missing);
        }

        let mut scoped = ScopedSelection::default();
        for field in requires {
            match field {
                SelectionField::ClubId => scoped.club_id = self.club_id,
                SelectionField::Channel => scoped.channel = self.channel.clone(),
                SelectionField::PostId => scoped.post_id = self.post_id,
                SelectionField::EventId => scoped.event_id = self.event_id,
                SelectionField::BookingId => scoped.booking_id = self.booking_id,
                SelectionField::TeacherId => scoped.teacher_id = self.teacher_id,
                SelectionField::DogId => scoped.dog_id = self.dog_id,
                SelectionField::RatingReturn => {
                    scoped.rating_return_target = self.rating_return_target
                }
                SelectionField::TeachersPricing => {
                    scoped.teachers_pricing = self.teachers_pricing_data
                }
            }
        }
        Ok(scoped)
    }
}

/// Subset of the Selection Context a screen is entitled to read
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopedSelection {
    pub club_id: Option<u32>,
    pub channel: Option<ChannelRef>,
    pub post_id: Option<u32>,
    pub event_id: Option<u32>,
    pub booking_id: Option<u32>,
    pub teacher_id: Option<u32>,
    pub dog_id: Option<u32>,
    pub rating_return_target: Option<Page>,
    pub teachers_pricing: Option<TeachersPricing>,
}
