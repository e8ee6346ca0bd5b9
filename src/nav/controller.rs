//! Navigation controller: the only owner of session, navigation state and
//! Selection Context.
//!
//! Every operation either completes or returns an error without touching
//! state. Transitions apply the destination page's reset behaviour, so after
//! a transition the selection is either untouched or fully cleared.

use serde::Serialize;

use super::action::Action;
use super::error::NavError;
use super::page::{ClubPage, CustomerPage, Page, ResetBehavior};
use super::registry;
use super::selection::{EntityKind, EntityRef, SelectionContext, SelectionPatch};
use crate::session::{AuthFlow, AuthScreen, Authenticator, Credentials, Grant, Role, Session};

/// Current and previous page (single level of history)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    current_page: Option<Page>,
    previous_page: Option<Page>,
}

impl NavigationState {
    pub fn current_page(&self) -> Option<Page> {
        self.current_page
    }

    pub fn previous_page(&self) -> Option<Page> {
        self.previous_page
    }
}

/// Serializable view of the whole controller
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub authenticated: bool,
    pub role: Option<Role>,
    pub auth_screen: Option<AuthScreen>,
    #[serde(flatten)]
    pub navigation: NavigationState,
    pub selection: SelectionContext,
}

#[derive(Debug, Default)]
pub struct NavigationController {
    session: Session,
    auth_flow: AuthFlow,
    nav: NavigationState,
    selection: SelectionContext,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn role(&self) -> Option<Role> {
        self.session.role()
    }

    pub fn auth_flow(&self) -> &AuthFlow {
        &self.auth_flow
    }

    pub fn state(&self) -> NavigationState {
        self.nav
    }

    pub fn current_page(&self) -> Option<Page> {
        self.nav.current_page
    }

    pub fn previous_page(&self) -> Option<Page> {
        self.nav.previous_page
    }

    pub fn selection(&self) -> &SelectionContext {
        &self.selection
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            authenticated: self.session.is_authenticated(),
            role: self.session.role(),
            auth_screen: (!self.session.is_authenticated()).then(|| self.auth_flow.screen()),
            navigation: self.nav,
            selection: self.selection.clone(),
        }
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Log in and land on the role's home page
    pub fn login(
        &mut self,
        auth: &dyn Authenticator,
        credentials: &Credentials,
    ) -> Result<Page, NavError> {
        let grant = auth.login(credentials)?;
        self.begin_session(grant)
    }

    /// Submit the signup form currently shown by the auth flow
    pub fn sign_up(
        &mut self,
        auth: &dyn Authenticator,
        credentials: &Credentials,
    ) -> Result<Page, NavError> {
        if self.session.is_authenticated() {
            return Err(NavError::AlreadyAuthenticated);
        }
        let role = self
            .auth_flow
            .screen()
            .signup_role()
            .ok_or(NavError::NoSignupRole)?;
        let grant = auth.sign_up(role, credentials)?;
        self.begin_session(grant)
    }

    fn begin_session(&mut self, grant: Grant) -> Result<Page, NavError> {
        if let Some(current) = self.session.role() {
            if current != grant.role {
                tracing::warn!(
                    "Rejected role switch {} -> {} without logout",
                    current,
                    grant.role
                );
                return Err(NavError::InvalidRoleTransition {
                    current,
                    requested: grant.role,
                });
            }
            // Same role: refresh the token, stay where we are
            self.session = Session::open(grant);
            return Ok(self.nav.current_page.unwrap_or(Page::home(current)));
        }

        let role = grant.role;
        let home = Page::home(role);
        self.session = Session::open(grant);
        self.auth_flow.reset();
        self.selection.clear();
        self.nav = NavigationState {
            current_page: Some(home),
            previous_page: None,
        };
        tracing::info!("Logged in as {}", role);
        Ok(home)
    }

    /// Clear the session and return to the login screen
    pub fn logout(&mut self) {
        if let Some(role) = self.session.role() {
            tracing::info!("Logged out ({})", role);
        }
        self.session = Session::default();
        self.auth_flow.reset();
        self.nav = NavigationState::default();
        self.selection.clear();
    }

    pub fn start_signup(&mut self) -> Result<(), NavError> {
        self.require_logged_out()?;
        self.auth_flow.start_signup();
        Ok(())
    }

    pub fn choose_signup(&mut self, role: Role) -> Result<(), NavError> {
        self.require_logged_out()?;
        self.auth_flow.choose(role);
        Ok(())
    }

    pub fn auth_back(&mut self) -> Result<(), NavError> {
        self.require_logged_out()?;
        self.auth_flow.back();
        Ok(())
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn navigate(&mut self, page: impl Into<Page>) -> Result<(), NavError> {
        let page = page.into();
        self.check_reachable(page)?;
        self.transition(page);
        Ok(())
    }

    /// Navigate by raw page id. Ids outside the active role's table are
    /// rejected without changing state.
    pub fn navigate_to(&mut self, raw: &str) -> Result<Page, NavError> {
        let role = self.require_role()?;
        let page = Page::parse(role, raw).ok_or_else(|| {
            tracing::warn!("Unknown page {:?} for role {}", raw, role);
            NavError::UnknownPage {
                role,
                raw: raw.to_string(),
            }
        })?;
        self.transition(page);
        Ok(page)
    }

    /// Merge `patch` into the selection, then navigate
    pub fn navigate_with_entity(
        &mut self,
        page: impl Into<Page>,
        patch: SelectionPatch,
    ) -> Result<(), NavError> {
        let page = page.into();
        self.check_reachable(page)?;
        if !page.preserves_selection() && !patch.is_empty() {
            tracing::warn!("Entity fields for {} discarded: page clears selection", page);
        }
        self.selection.merge(patch);
        self.transition(page);
        Ok(())
    }

    /// Return to the previous page, or home when there is none
    pub fn back(&mut self) -> Result<Page, NavError> {
        let role = self.require_role()?;
        let target = self.nav.previous_page.unwrap_or(Page::home(role));
        self.transition(target);
        Ok(target)
    }

    /// Open an entry of the mixed club/event listing
    pub fn select_listing(&mut self, id: u32) -> Result<Page, NavError> {
        self.open(EntityRef::from_listing_id(id))
    }

    /// Open the role's detail page for an explicit entity reference
    pub fn open(&mut self, entity: EntityRef) -> Result<Page, NavError> {
        let role = self.require_role()?;
        let page = registry::detail_page(role, entity.kind).ok_or(NavError::NoDetailPage {
            role,
            kind: entity.kind,
        })?;
        self.navigate_with_entity(page, entity.to_patch())?;
        Ok(page)
    }

    pub fn open_dog(&mut self, dog_id: u32) -> Result<Page, NavError> {
        self.open(EntityRef::new(EntityKind::Dog, dog_id))
    }

    /// Open a teacher as seen from one of their clubs
    pub fn open_teacher(&mut self, club_id: u32, teacher_id: u32) -> Result<Page, NavError> {
        let role = self.require_role()?;
        let page = registry::teacher_page(role).ok_or(NavError::NoDetailPage {
            role,
            kind: EntityKind::Teacher,
        })?;
        self.navigate_with_entity(
            page,
            SelectionPatch::new().club(club_id).teacher(teacher_id),
        )?;
        Ok(page)
    }

    pub fn open_channel(
        &mut self,
        club_id: u32,
        channel_id: u32,
        name: impl Into<String>,
    ) -> Result<Page, NavError> {
        let role = self.require_role()?;
        let page = registry::chat_room_page(role);
        self.navigate_with_entity(
            page,
            SelectionPatch::new().club(club_id).channel(channel_id, name),
        )?;
        Ok(page)
    }

    pub fn open_forum(
        &mut self,
        club_id: u32,
        channel_id: u32,
        name: impl Into<String>,
    ) -> Result<Page, NavError> {
        let role = self.require_role()?;
        let page = registry::forum_page(role).ok_or(NavError::NoDetailPage {
            role,
            kind: EntityKind::Post,
        })?;
        self.navigate_with_entity(
            page,
            SelectionPatch::new().club(club_id).channel(channel_id, name),
        )?;
        Ok(page)
    }

    pub fn book_appointment(&mut self, club_id: u32, teacher_id: Option<u32>) -> Result<(), NavError> {
        let mut patch = SelectionPatch::new().club(club_id);
        if let Some(teacher_id) = teacher_id {
            patch = patch.teacher(teacher_id);
        }
        self.navigate_with_entity(CustomerPage::Booking, patch)
    }

    pub fn confirm_booking(&mut self) -> Result<(), NavError> {
        self.navigate(CustomerPage::BookingConfirmation)
    }

    // =========================================================================
    // Rating flow
    // =========================================================================

    /// Open the rating invitation, remembering where the flow started
    pub fn start_rating(&mut self, booking_id: u32) -> Result<(), NavError> {
        let invitation = Page::from(CustomerPage::RatingInvitation);
        self.check_reachable(invitation)?;

        // Restarting from inside the flow keeps the original origin
        if !self.in_rating_flow() {
            self.selection.set_rating_return(self.nav.current_page);
        }
        self.navigate_with_entity(invitation, SelectionPatch::new().booking(booking_id))
    }

    pub fn accept_rating_invitation(&mut self) -> Result<(), NavError> {
        self.require_role()?;
        if self.nav.current_page != Some(CustomerPage::RatingInvitation.into()) {
            return Err(NavError::NoRatingInProgress);
        }
        self.navigate(CustomerPage::Rating)
    }

    pub fn submit_rating(&mut self, stars: u8) -> Result<Page, NavError> {
        self.require_role()?;
        if !(1..=5).contains(&stars) {
            return Err(NavError::InvalidRating(stars));
        }
        if !self.in_rating_flow() {
            return Err(NavError::NoRatingInProgress);
        }
        tracing::info!(
            "Rated booking {:?} with {} stars",
            self.selection.booking_id(),
            stars
        );
        self.finish_rating()
    }

    /// Leave the rating flow without rating. Outside the flow this goes
    /// home and drops any origin left behind by a flow that was exited
    /// through ordinary navigation.
    pub fn dismiss_rating(&mut self) -> Result<Page, NavError> {
        let role = self.require_role()?;
        if !self.in_rating_flow() {
            if let Some(stale) = self.selection.take_rating_return() {
                tracing::debug!("Dropped stale rating return target {}", stale);
            }
            let home = Page::home(role);
            self.transition(home);
            return Ok(home);
        }
        self.finish_rating()
    }

    fn finish_rating(&mut self) -> Result<Page, NavError> {
        let role = self.require_role()?;
        let target = self
            .selection
            .take_rating_return()
            .filter(|page| page.role() == role)
            .unwrap_or(Page::home(role));
        self.transition(target);
        Ok(target)
    }

    fn in_rating_flow(&self) -> bool {
        matches!(
            self.nav.current_page,
            Some(Page::Customer(CustomerPage::RatingInvitation | CustomerPage::Rating))
        )
    }

    // =========================================================================
    // Club teacher seats
    // =========================================================================

    /// Payment succeeded: drop the pricing data and show the teacher list
    pub fn complete_teachers_payment(&mut self) -> Result<(), NavError> {
        let teachers = Page::from(ClubPage::ClubTeachers);
        self.check_reachable(teachers)?;
        if let Some(pricing) = self.selection.take_teachers_pricing() {
            tracing::info!(
                "Teacher seats paid: {} x {} = {}",
                pricing.count,
                pricing.price,
                pricing.total()
            );
        }
        self.transition(teachers);
        Ok(())
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Apply a screen callback
    pub fn apply(&mut self, action: Action) -> Result<(), NavError> {
        tracing::trace!("apply {:?}", action);
        match action {
            Action::Navigate(page) => self.navigate(page),
            Action::NavigateTo(raw) => self.navigate_to(&raw).map(drop),
            Action::NavigateWithEntity(page, patch) => self.navigate_with_entity(page, patch),
            Action::Back => self.back().map(drop),
            Action::SelectListing(id) => self.select_listing(id).map(drop),
            Action::Open(entity) => self.open(entity).map(drop),
            Action::BookAppointment {
                club_id,
                teacher_id,
            } => self.book_appointment(club_id, teacher_id),
            Action::ConfirmBooking => self.confirm_booking(),
            Action::OpenChannel {
                club_id,
                channel_id,
                name,
            } => self.open_channel(club_id, channel_id, name).map(drop),
            Action::OpenForum {
                club_id,
                channel_id,
                name,
            } => self.open_forum(club_id, channel_id, name).map(drop),
            Action::OpenDog(dog_id) => self.open_dog(dog_id).map(drop),
            Action::OpenTeacher {
                club_id,
                teacher_id,
            } => self.open_teacher(club_id, teacher_id).map(drop),
            Action::StartRating { booking_id } => self.start_rating(booking_id),
            Action::AcceptRatingInvitation => self.accept_rating_invitation(),
            Action::SubmitRating { stars } => self.submit_rating(stars).map(drop),
            Action::DismissRating => self.dismiss_rating().map(drop),
            Action::CompleteTeachersPayment => self.complete_teachers_payment(),
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn require_role(&self) -> Result<Role, NavError> {
        self.session.role().ok_or(NavError::NotAuthenticated)
    }

    fn require_logged_out(&self) -> Result<(), NavError> {
        if self.session.is_authenticated() {
            return Err(NavError::AlreadyAuthenticated);
        }
        Ok(())
    }

    fn check_reachable(&self, page: Page) -> Result<Role, NavError> {
        let role = self.require_role()?;
        if page.role() != role {
            tracing::warn!("Rejected navigation to {} with role {}", page, role);
            return Err(NavError::RoleMismatch { role, page });
        }
        Ok(role)
    }

    /// previous := current, current := page, then the reset policy
    fn transition(&mut self, page: Page) {
        let from = self.nav.current_page.replace(page);
        self.nav.previous_page = from;

        match page.spec().reset {
            ResetBehavior::Preserve => {}
            ResetBehavior::Clear => self.selection.clear(),
        }

        tracing::debug!(
            "navigate {} -> {} ({:?})",
            from.map(|p| p.as_str()).unwrap_or("-"),
            page,
            page.spec().reset
        );
    }
}
