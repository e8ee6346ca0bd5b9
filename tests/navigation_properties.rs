//! Behavioural tests for the navigation controller, driven through the
//! public API only.

use dogclub_client::nav::{
    dispatch, ClubPage, CustomerPage, EntityKind, EntityRef, NavError, NavigationController, Page,
    PageRegistry, Resolution, SelectionField, SelectionPatch, TabBar, TeacherPage,
    TeachersPricing,
};
use dogclub_client::session::{Credentials, DemoAuthenticator, Role};

fn logged_in(role: Role) -> NavigationController {
    let email = format!("{}@dogclub.test", role.as_str());
    let mut nav = NavigationController::new();
    nav.login(&DemoAuthenticator::default(), &Credentials::new(email, "woofwoof"))
        .expect("demo login");
    nav
}

fn full_patch() -> SelectionPatch {
    SelectionPatch::new()
        .club(7)
        .channel(1, "General")
        .post(2)
        .event(250)
        .booking(5)
        .teacher(1)
        .dog(2)
        .teachers_pricing(2, 99)
}

// =============================================================================
// Reset policy
// =============================================================================

#[test]
fn clearing_destination_empties_every_field() {
    let mut nav = logged_in(Role::Customer);
    nav.navigate_with_entity(CustomerPage::TeacherDetail, full_patch())
        .unwrap();
    nav.start_rating(5).unwrap();
    assert!(!nav.selection().is_empty());

    for page in CustomerPage::ALL
        .iter()
        .copied()
        .filter(|p| !Page::from(*p).preserves_selection())
    {
        nav.navigate_with_entity(CustomerPage::TeacherDetail, full_patch())
            .unwrap();
        nav.navigate(page).unwrap();
        assert!(
            nav.selection().is_empty(),
            "{} should clear the selection",
            page.as_str()
        );
        assert_eq!(nav.selection().rating_return_target(), None);
    }
}

#[test]
fn chains_ending_on_clearing_page_leave_nothing_behind() {
    let mut nav = logged_in(Role::Club);
    nav.navigate_with_entity(ClubPage::ClubTeacherDetail, SelectionPatch::new().teacher(3))
        .unwrap();
    nav.navigate_with_entity(ClubPage::ClubEventDetail, SelectionPatch::new().event(201))
        .unwrap();
    nav.open_channel(7, 2, "Agility").unwrap();
    nav.navigate(ClubPage::ClubStats).unwrap();

    assert!(nav.selection().is_empty());
}

#[test]
fn preserving_destination_keeps_club() {
    let mut nav = logged_in(Role::Customer);
    nav.navigate_with_entity(CustomerPage::ClubDetail, SelectionPatch::new().club(7))
        .unwrap();

    nav.navigate(CustomerPage::Booking).unwrap();

    assert_eq!(nav.current_page(), Some(CustomerPage::Booking.into()));
    assert_eq!(nav.selection().club_id(), Some(7));
}

#[test]
fn preserving_destination_keeps_selection_untouched() {
    let mut nav = logged_in(Role::Customer);
    nav.navigate_with_entity(CustomerPage::TeacherDetail, full_patch())
        .unwrap();
    let before = nav.selection().clone();

    for page in [
        CustomerPage::Notifications,
        CustomerPage::Leaderboard,
        CustomerPage::Chat,
        CustomerPage::DogBadges,
    ] {
        nav.navigate(page).unwrap();
        assert_eq!(nav.selection(), &before, "{} changed the selection", page.as_str());
    }
}

// =============================================================================
// History
// =============================================================================

#[test]
fn previous_page_tracks_the_last_transition() {
    let mut nav = logged_in(Role::Teacher);
    nav.navigate(TeacherPage::TeacherSchedule).unwrap();
    nav.navigate(TeacherPage::TeacherEarnings).unwrap();

    assert_eq!(nav.previous_page(), Some(TeacherPage::TeacherSchedule.into()));
    assert_eq!(nav.current_page(), Some(TeacherPage::TeacherEarnings.into()));
}

#[test]
fn back_swaps_current_and_previous() {
    let mut nav = logged_in(Role::Customer);
    nav.navigate(CustomerPage::Events).unwrap();
    nav.navigate(CustomerPage::Profile).unwrap();

    assert_eq!(nav.back().unwrap(), CustomerPage::Events.into());
    assert_eq!(nav.previous_page(), Some(CustomerPage::Profile.into()));

    // One level only: back again returns to Profile, not Home
    assert_eq!(nav.back().unwrap(), CustomerPage::Profile.into());
}

#[test]
fn back_without_history_goes_home() {
    let mut nav = logged_in(Role::Club);
    assert_eq!(nav.previous_page(), None);
    assert_eq!(nav.back().unwrap(), ClubPage::ClubHome.into());
}

#[test]
fn rejected_navigation_changes_nothing() {
    let mut nav = logged_in(Role::Customer);
    nav.navigate_with_entity(CustomerPage::ClubDetail, SelectionPatch::new().club(12))
        .unwrap();
    let before = nav.snapshot();

    assert!(matches!(
        nav.navigate(ClubPage::ClubStats),
        Err(NavError::RoleMismatch { .. })
    ));
    assert!(matches!(
        nav.navigate_to("clubStats"),
        Err(NavError::UnknownPage { .. })
    ));
    assert_eq!(nav.snapshot(), before);
}

// =============================================================================
// Role isolation
// =============================================================================

#[test]
fn foreign_page_id_falls_back_to_role_home() {
    let result = dispatch(Role::Customer, "clubHome");
    assert!(result.is_fallback());
    assert_eq!(result.page(), CustomerPage::Home.into());

    assert_eq!(dispatch(Role::Teacher, "home").page(), TeacherPage::TeacherHome.into());
    assert!(!dispatch(Role::Club, "clubHome").is_fallback());
}

#[test]
fn tab_bar_follows_the_role() {
    let nav = logged_in(Role::Teacher);
    let page = nav.current_page().unwrap();
    let bar = TabBar::for_role(Role::Teacher);

    assert!(bar.is_visible(page));
    assert_eq!(bar.active(page).map(|t| t.page), Some(page));
    assert!(bar.tabs().iter().all(|t| t.page.role() == Role::Teacher));
}

#[test]
fn role_cannot_change_without_logout() {
    let mut nav = logged_in(Role::Customer);
    let err = nav
        .login(
            &DemoAuthenticator::default(),
            &Credentials::new("club@dogclub.test", "woofwoof"),
        )
        .unwrap_err();
    assert_eq!(
        err,
        NavError::InvalidRoleTransition {
            current: Role::Customer,
            requested: Role::Club
        }
    );
    assert_eq!(nav.role(), Some(Role::Customer));

    nav.logout();
    assert_eq!(nav.current_page(), None);
    nav.login(
        &DemoAuthenticator::default(),
        &Credentials::new("club@dogclub.test", "woofwoof"),
    )
    .unwrap();
    assert_eq!(nav.current_page(), Some(ClubPage::ClubHome.into()));
}

// =============================================================================
// Listing ids
// =============================================================================

#[test]
fn listing_ids_split_on_the_event_band() {
    let mut nav = logged_in(Role::Customer);

    assert_eq!(nav.select_listing(150).unwrap(), CustomerPage::ClubDetail.into());
    assert_eq!(nav.selection().club_id(), Some(150));

    assert_eq!(nav.select_listing(250).unwrap(), CustomerPage::EventDetail.into());
    assert_eq!(nav.selection().event_id(), Some(250));

    for id in [199, 300] {
        assert_eq!(nav.select_listing(id).unwrap(), CustomerPage::ClubDetail.into());
        assert_eq!(nav.selection().club_id(), Some(id));
    }

    assert_eq!(EntityRef::from_listing_id(200).kind, EntityKind::Event);
    assert_eq!(EntityRef::from_listing_id(299).kind, EntityKind::Event);
}

#[test]
fn explicit_reference_skips_the_band_check() {
    let mut nav = logged_in(Role::Customer);
    let page = nav.open(EntityRef::new(EntityKind::Club, 250)).unwrap();
    assert_eq!(page, CustomerPage::ClubDetail.into());
    assert_eq!(nav.selection().club_id(), Some(250));
    assert_eq!(nav.selection().event_id(), None);
}

// =============================================================================
// Rating return
// =============================================================================

#[test]
fn rating_returns_to_its_origin() {
    let mut nav = logged_in(Role::Customer);
    nav.navigate(CustomerPage::Notifications).unwrap();

    nav.start_rating(5).unwrap();
    assert_eq!(
        nav.selection().rating_return_target(),
        Some(CustomerPage::Notifications.into())
    );

    nav.accept_rating_invitation().unwrap();
    assert_eq!(nav.previous_page(), Some(CustomerPage::RatingInvitation.into()));

    assert_eq!(nav.submit_rating(4).unwrap(), CustomerPage::Notifications.into());
    assert_eq!(nav.selection().rating_return_target(), None);

    // Nothing pending any more
    assert_eq!(nav.dismiss_rating().unwrap(), CustomerPage::Home.into());
}

#[test]
fn dismissing_the_invitation_returns_to_origin() {
    let mut nav = logged_in(Role::Customer);
    nav.navigate(CustomerPage::Notifications).unwrap();
    nav.start_rating(1).unwrap();

    assert_eq!(nav.dismiss_rating().unwrap(), CustomerPage::Notifications.into());
    assert_eq!(nav.selection().rating_return_target(), None);
}

#[test]
fn leaving_the_flow_then_dismissing_goes_home() {
    let mut nav = logged_in(Role::Customer);
    nav.navigate(CustomerPage::Notifications).unwrap();
    nav.start_rating(1).unwrap();
    nav.navigate(CustomerPage::Leaderboard).unwrap();
    nav.navigate(CustomerPage::Chat).unwrap();

    assert_eq!(nav.dismiss_rating().unwrap(), CustomerPage::Home.into());
    assert_eq!(nav.selection().rating_return_target(), None);
}

#[test]
fn invalid_star_count_keeps_the_flow_open() {
    let mut nav = logged_in(Role::Customer);
    nav.navigate(CustomerPage::MyBookings).unwrap();
    nav.start_rating(5).unwrap();
    nav.accept_rating_invitation().unwrap();

    assert_eq!(nav.submit_rating(6), Err(NavError::InvalidRating(6)));
    assert_eq!(nav.current_page(), Some(CustomerPage::Rating.into()));
    assert_eq!(
        nav.selection().rating_return_target(),
        Some(CustomerPage::MyBookings.into())
    );
}

// =============================================================================
// Screen contract
// =============================================================================

#[test]
fn screens_with_missing_fields_resolve_empty() {
    let registry = PageRegistry::default();
    let mut nav = logged_in(Role::Customer);
    nav.navigate(CustomerPage::ChatRoom).unwrap();

    let resolution = registry.resolve(
        nav.current_page().unwrap(),
        nav.selection(),
        nav.previous_page(),
    );
    match resolution {
        Resolution::Empty { missing, .. } => assert_eq!(missing, SelectionField::ClubId),
        other => panic!("expected empty resolution, got {:?}", other),
    }
}

#[test]
fn teacher_opened_from_home_training_resolves() {
    let registry = PageRegistry::default();
    let mut nav = logged_in(Role::Customer);
    nav.navigate(CustomerPage::HomeTraining).unwrap();

    let page = nav.open_teacher(7, 1).unwrap();
    match registry.resolve(page, nav.selection(), nav.previous_page()) {
        Resolution::Ready(props) => {
            assert_eq!(props.selection.teacher_id, Some(1));
            assert_eq!(props.selection.club_id, Some(7));
            assert_eq!(props.back, Some(CustomerPage::HomeTraining.into()));
        }
        other => panic!("expected ready resolution, got {:?}", other),
    }
}

// =============================================================================
// Club teacher seats
// =============================================================================

#[test]
fn club_pays_for_teacher_seats() {
    let mut nav = logged_in(Role::Club);
    assert_eq!(nav.current_page(), Some(ClubPage::ClubHome.into()));

    nav.navigate_to("clubTeachersPricing").unwrap();
    nav.navigate_with_entity(
        ClubPage::ClubTeachersPayment,
        SelectionPatch::new().teachers_pricing(2, 99),
    )
    .unwrap();
    assert_eq!(
        nav.selection().teachers_pricing(),
        Some(TeachersPricing { count: 2, price: 99 })
    );

    nav.complete_teachers_payment().unwrap();
    assert_eq!(nav.selection().teachers_pricing(), None);
    assert_eq!(nav.current_page(), Some(ClubPage::ClubTeachers.into()));
}

#[test]
fn controllers_are_independent() {
    let mut a = logged_in(Role::Customer);
    let b = logged_in(Role::Customer);
    a.open_dog(2).unwrap();

    assert_eq!(a.selection().dog_id(), Some(2));
    assert_eq!(b.selection().dog_id(), None);
    assert_eq!(b.current_page(), Some(CustomerPage::Home.into()));
}
