//! Page registry: role dispatch tables and screen resolution.
//!
//! - `dispatch` maps a raw page id to a page of the active role, falling back
//!   to that role's home
//! - `resolve` checks the page's required selection fields and hands the
//!   screen exactly those fields, or an empty resolution when one is missing
//! - `detail_page` / `teacher_page` / `chat_room_page` / `forum_page` pick
//!   the role-specific page for an entity

use serde::Serialize;

use super::error::NavError;
use super::page::{ClubPage, CustomerPage, Page, TeacherPage};
use super::selection::{EntityKind, ScopedSelection, SelectionContext, SelectionField};
use crate::session::Role;

/// Outcome of looking up a raw page id
#[derive(Debug, PartialEq, Eq)]
pub enum Dispatch {
    Known(Page),
    /// Unknown id: the role home is shown and the error is kept observable
    Fallback { home: Page, error: NavError },
}

impl Dispatch {
    pub fn page(&self) -> Page {
        match self {
            Dispatch::Known(page) => *page,
            Dispatch::Fallback { home, .. } => *home,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Dispatch::Fallback { .. })
    }
}

pub fn dispatch(role: Role, raw: &str) -> Dispatch {
    match Page::parse(role, raw) {
        Some(page) => Dispatch::Known(page),
        None => {
            tracing::warn!("Unknown page {:?} for role {}, showing home", raw, role);
            Dispatch::Fallback {
                home: Page::home(role),
                error: NavError::UnknownPage {
                    role,
                    raw: raw.to_string(),
                },
            }
        }
    }
}

/// Everything a screen receives from the controller
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScreenProps {
    pub page: Page,
    pub selection: ScopedSelection,
    /// Target of the screen's back affordance
    pub back: Option<Page>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Ready(ScreenProps),
    /// A required field is absent: the screen renders its empty state
    Empty { page: Page, missing: SelectionField },
}

impl Resolution {
    pub fn page(&self) -> Page {
        match self {
            Resolution::Ready(props) => props.page,
            Resolution::Empty { page, .. } => *page,
        }
    }

    pub fn error(&self) -> Option<NavError> {
        match self {
            Resolution::Ready(_) => None,
            Resolution::Empty { page, missing } => Some(NavError::MissingSelection {
                page: *page,
                field: *missing,
            }),
        }
    }
}

/// Resolves pages to screen props
#[derive(Clone, Copy, Debug, Default)]
pub struct PageRegistry {
    /// Log missing selections at warn instead of debug
    strict: bool,
}

impl PageRegistry {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    pub fn resolve(
        &self,
        page: Page,
        selection: &SelectionContext,
        previous: Option<Page>,
    ) -> Resolution {
        match selection.scope(page.spec().requires) {
            Ok(scoped) => Resolution::Ready(ScreenProps {
                page,
                selection: scoped,
                back: previous,
            }),
            Err(missing) => {
                if self.strict {
                    tracing::warn!("Screen {} rendered empty: missing {}", page, missing);
                } else {
                    tracing::debug!("Screen {} rendered empty: missing {}", page, missing);
                }
                Resolution::Empty { page, missing }
            }
        }
    }
}

/// Detail page showing one entity for the given role
pub fn detail_page(role: Role, kind: EntityKind) -> Option<Page> {
    let page: Page = match (role, kind) {
        (Role::Customer, EntityKind::Club) => CustomerPage::ClubDetail.into(),
        (Role::Customer, EntityKind::Event) => CustomerPage::EventDetail.into(),
        (Role::Customer, EntityKind::Dog) => CustomerPage::DogProgression.into(),
        (Role::Customer, EntityKind::Booking) => CustomerPage::BookingDetail.into(),
        (Role::Customer, EntityKind::Post) => CustomerPage::PostDetail.into(),
        // Teacher detail is scoped to a club: see `teacher_page`
        (Role::Customer, EntityKind::Teacher) => return None,

        (Role::Club, EntityKind::Event) => ClubPage::ClubEventDetail.into(),
        (Role::Club, EntityKind::Teacher) => ClubPage::ClubTeacherDetail.into(),
        (Role::Club, EntityKind::Dog) => ClubPage::ClubMemberDog.into(),
        (Role::Club, EntityKind::Booking) => ClubPage::ClubBookingDetail.into(),
        (Role::Club, EntityKind::Post) => ClubPage::ClubPostDetail.into(),
        (Role::Club, EntityKind::Club) => return None,

        (Role::Teacher, EntityKind::Club) => TeacherPage::TeacherClubDetail.into(),
        (Role::Teacher, EntityKind::Dog) => TeacherPage::TeacherDogDetail.into(),
        (Role::Teacher, EntityKind::Booking) => TeacherPage::TeacherBookingDetail.into(),
        (Role::Teacher, EntityKind::Event | EntityKind::Teacher | EntityKind::Post) => {
            return None
        }
    };
    Some(page)
}

/// Teacher detail page; the customer variant also needs the teacher's club
pub fn teacher_page(role: Role) -> Option<Page> {
    match role {
        Role::Customer => Some(CustomerPage::TeacherDetail.into()),
        Role::Club => Some(ClubPage::ClubTeacherDetail.into()),
        Role::Teacher => None,
    }
}

pub fn chat_room_page(role: Role) -> Page {
    match role {
        Role::Customer => CustomerPage::ChatRoom.into(),
        Role::Club => ClubPage::ClubChatRoom.into(),
        Role::Teacher => TeacherPage::TeacherChatRoom.into(),
    }
}

pub fn forum_page(role: Role) -> Option<Page> {
    match role {
        Role::Customer => Some(CustomerPage::Forum.into()),
        Role::Club => Some(ClubPage::ClubForum.into()),
        Role::Teacher => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::selection::{EntityRef, SelectionPatch};

    fn ctx(patch: SelectionPatch) -> SelectionContext {
        let mut ctx = SelectionContext::default();
        ctx.merge(patch);
        ctx
    }

    #[test]
    fn dispatch_never_crosses_role_partitions() {
        let d = dispatch(Role::Customer, "clubHome");
        assert!(d.is_fallback());
        assert_eq!(d.page(), Page::Customer(CustomerPage::Home));

        let d = dispatch(Role::Club, "clubHome");
        assert_eq!(d, Dispatch::Known(Page::Club(ClubPage::ClubHome)));
    }

    #[test]
    fn dispatch_fallback_carries_unknown_page_error() {
        match dispatch(Role::Teacher, "nope") {
            Dispatch::Fallback { home, error } => {
                assert_eq!(home, Page::home(Role::Teacher));
                assert_eq!(
                    error,
                    NavError::UnknownPage {
                        role: Role::Teacher,
                        raw: "nope".to_string()
                    }
                );
            }
            other => panic!("expected fallback, got {:?}", other),
        }
    }

    #[test]
    fn teacher_detail_needs_teacher_and_club() {
        let registry = PageRegistry::default();
        let page = Page::Customer(CustomerPage::TeacherDetail);

        let only_teacher = registry.resolve(page, &ctx(SelectionPatch::new().teacher(4)), None);
        assert_eq!(
            only_teacher,
            Resolution::Empty {
                page,
                missing: SelectionField::ClubId
            }
        );

        let both = registry.resolve(
            page,
            &ctx(SelectionPatch::new().teacher(4).club(7)),
            None,
        );
        match both {
            Resolution::Ready(props) => {
                assert_eq!(props.selection.teacher_id, Some(4));
                assert_eq!(props.selection.club_id, Some(7));
            }
            other => panic!("expected ready, got {:?}", other),
        }
    }

    #[test]
    fn screen_only_sees_declared_fields() {
        let registry = PageRegistry::new(true);
        let selection = ctx(SelectionPatch::new().club(7).dog(2).booking(9));
        let page = Page::Customer(CustomerPage::DogBadges);

        match registry.resolve(page, &selection, Some(Page::Customer(CustomerPage::DogTasks))) {
            Resolution::Ready(props) => {
                assert_eq!(props.selection.dog_id, Some(2));
                assert_eq!(props.selection.club_id, None);
                assert_eq!(props.selection.booking_id, None);
                assert_eq!(props.back, Some(Page::Customer(CustomerPage::DogTasks)));
            }
            other => panic!("expected ready, got {:?}", other),
        }
    }

    #[test]
    fn missing_selection_is_reported_not_raised() {
        let registry = PageRegistry::new(true);
        let page = Page::Club(ClubPage::ClubChatRoom);
        let resolution = registry.resolve(page, &ctx(SelectionPatch::new().club(1)), None);
        assert_eq!(
            resolution.error(),
            Some(NavError::MissingSelection {
                page,
                field: SelectionField::Channel
            })
        );
    }

    #[test]
    fn detail_pages_stay_in_role_partition() {
        for role in [Role::Customer, Role::Club, Role::Teacher] {
            for kind in [
                EntityKind::Club,
                EntityKind::Event,
                EntityKind::Teacher,
                EntityKind::Dog,
                EntityKind::Booking,
                EntityKind::Post,
            ] {
                if let Some(page) = detail_page(role, kind) {
                    assert_eq!(page.role(), role);
                    assert!(page.preserves_selection());
                }
            }
            assert_eq!(chat_room_page(role).role(), role);
        }
    }

    #[test]
    fn entity_patch_satisfies_its_detail_page() {
        let registry = PageRegistry::default();
        for role in [Role::Customer, Role::Club, Role::Teacher] {
            for kind in [
                EntityKind::Club,
                EntityKind::Event,
                EntityKind::Teacher,
                EntityKind::Dog,
                EntityKind::Booking,
                EntityKind::Post,
            ] {
                let Some(page) = detail_page(role, kind) else {
                    continue;
                };
                let selection = ctx(EntityRef::new(kind, 1).to_patch());
                assert!(
                    matches!(registry.resolve(page, &selection, None), Resolution::Ready(_)),
                    "{} opened from a bare {:?} reference would render empty",
                    page,
                    kind
                );
            }
        }
    }

    #[test]
    fn teacher_page_per_role() {
        assert_eq!(
            teacher_page(Role::Customer),
            Some(Page::Customer(CustomerPage::TeacherDetail))
        );
        assert_eq!(
            teacher_page(Role::Club),
            Some(Page::Club(ClubPage::ClubTeacherDetail))
        );
        assert_eq!(teacher_page(Role::Teacher), None);
        assert_eq!(detail_page(Role::Customer, EntityKind::Teacher), None);
    }
}
