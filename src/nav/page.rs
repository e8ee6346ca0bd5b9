//! Page identifiers, one closed enum per role.
//!
//! Each page is declared exactly once in the tables below together with its
//! title, reset behaviour, required selection fields and chrome. The
//! generated `spec()` is an exhaustive match, so a page cannot exist without
//! saying whether it keeps the Selection Context.

use serde::{Serialize, Serializer};
use std::fmt;

use super::selection::SelectionField;
use crate::session::Role;

/// What happens to the Selection Context when a page is entered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetBehavior {
    /// Selection survives the transition untouched
    Preserve,
    /// Every selection field is cleared
    Clear,
}

/// Whether the role's bottom tab bar is drawn on the page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Chrome {
    TabBar,
    Fullscreen,
}

/// Static declaration attached to every page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSpec {
    pub title: &'static str,
    pub reset: ResetBehavior,
    pub requires: &'static [SelectionField],
    pub chrome: Chrome,
}

macro_rules! declare_pages {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $variant:ident => $tag:literal, $title:literal, $reset:ident,
                [$($field:ident),*], $chrome:ident;
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $tag),+
                }
            }

            pub fn parse(s: &str) -> Option<Self> {
                match s {
                    $($tag => Some($name::$variant),)+
                    _ => None,
                }
            }

            pub fn spec(&self) -> PageSpec {
                match self {
                    $($name::$variant => PageSpec {
                        title: $title,
                        reset: ResetBehavior::$reset,
                        requires: &[$(SelectionField::$field),*],
                        chrome: Chrome::$chrome,
                    }),+
                }
            }
        }
    };
}

declare_pages! {
    /// Pages reachable with the customer (dog owner) role
    CustomerPage {
        Home => "home", "Home", Clear, [], TabBar;
        Clubs => "clubs", "Find a club", Clear, [], TabBar;
        ClubDetail => "clubDetail", "Club", Preserve, [ClubId], TabBar;
        TeacherDetail => "teacherDetail", "Teacher", Preserve, [TeacherId, ClubId], TabBar;
        EventDetail => "eventDetail", "Event", Preserve, [EventId], TabBar;
        Events => "events", "Events", Clear, [], TabBar;
        Booking => "booking", "Book a session", Preserve, [ClubId], Fullscreen;
        BookingConfirmation => "bookingConfirmation", "Booking confirmed", Preserve, [ClubId], Fullscreen;
        HomeTraining => "homeTraining", "Home training", Preserve, [], TabBar;
        HomeTrainingBooking => "homeTrainingBooking", "Book home training", Preserve, [TeacherId], Fullscreen;
        MyBookings => "myBookings", "My bookings", Clear, [], TabBar;
        BookingDetail => "bookingDetail", "Booking", Preserve, [BookingId], TabBar;
        Chat => "chat", "Messages", Preserve, [], TabBar;
        ChatRoom => "chatRoom", "Chat", Preserve, [ClubId, Channel], Fullscreen;
        Forum => "forum", "Forum", Preserve, [ClubId, Channel], TabBar;
        PostDetail => "postDetail", "Post", Preserve, [PostId], TabBar;
        Notifications => "notifications", "Notifications", Preserve, [], TabBar;
        Profile => "profile", "Profile", Clear, [], TabBar;
        MyDogs => "myDogs", "My dogs", Clear, [], TabBar;
        DogProgression => "dogProgression", "Progression", Preserve, [DogId], TabBar;
        DogTasks => "dogTasks", "Tasks", Preserve, [DogId], TabBar;
        DogBadges => "dogBadges", "Badges", Preserve, [DogId], TabBar;
        Leaderboard => "leaderboard", "Leaderboard", Preserve, [], TabBar;
        RatingInvitation => "ratingInvitation", "How did it go?", Preserve, [BookingId], Fullscreen;
        Rating => "rating", "Rate your session", Preserve, [BookingId], Fullscreen;
        AiProgram => "aiProgram", "Training program", Clear, [], TabBar;
        Favorites => "favorites", "Favorites", Clear, [], TabBar;
        Settings => "settings", "Settings", Clear, [], TabBar;
    }
}

declare_pages! {
    /// Pages reachable with the club administrator role
    ClubPage {
        ClubHome => "clubHome", "Dashboard", Clear, [], TabBar;
        ClubBookings => "clubBookings", "Bookings", Clear, [], TabBar;
        ClubBookingDetail => "clubBookingDetail", "Booking", Preserve, [BookingId], TabBar;
        ClubTeachers => "clubTeachers", "Teachers", Clear, [], TabBar;
        ClubTeacherDetail => "clubTeacherDetail", "Teacher", Preserve, [TeacherId], TabBar;
        ClubTeachersPricing => "clubTeachersPricing", "Teacher seats", Clear, [], Fullscreen;
        ClubTeachersPayment => "clubTeachersPayment", "Payment", Preserve, [TeachersPricing], Fullscreen;
        ClubEvents => "clubEvents", "Events", Clear, [], TabBar;
        ClubEventDetail => "clubEventDetail", "Event", Preserve, [EventId], TabBar;
        ClubCreateEvent => "clubCreateEvent", "New event", Clear, [], Fullscreen;
        ClubChat => "clubChat", "Messages", Preserve, [], TabBar;
        ClubChatRoom => "clubChatRoom", "Chat", Preserve, [ClubId, Channel], Fullscreen;
        ClubForum => "clubForum", "Forum", Preserve, [ClubId, Channel], TabBar;
        ClubPostDetail => "clubPostDetail", "Post", Preserve, [PostId], TabBar;
        ClubMembers => "clubMembers", "Members", Clear, [], TabBar;
        ClubMemberDog => "clubMemberDog", "Member dog", Preserve, [DogId], TabBar;
        ClubNotifications => "clubNotifications", "Notifications", Preserve, [], TabBar;
        ClubLeaderboard => "clubLeaderboard", "Leaderboard", Preserve, [], TabBar;
        ClubSchedule => "clubSchedule", "Schedule", Clear, [], TabBar;
        ClubStats => "clubStats", "Statistics", Clear, [], TabBar;
        ClubProfile => "clubProfile", "Club profile", Clear, [], TabBar;
        ClubSettings => "clubSettings", "Settings", Clear, [], TabBar;
    }
}

declare_pages! {
    /// Pages reachable with the independent teacher role
    TeacherPage {
        TeacherHome => "teacherHome", "Home", Clear, [], TabBar;
        TeacherSchedule => "teacherSchedule", "Schedule", Clear, [], TabBar;
        TeacherAvailability => "teacherAvailability", "Availability", Clear, [], Fullscreen;
        TeacherBookings => "teacherBookings", "Bookings", Clear, [], TabBar;
        TeacherBookingDetail => "teacherBookingDetail", "Booking", Preserve, [BookingId], TabBar;
        TeacherClubs => "teacherClubs", "My clubs", Clear, [], TabBar;
        TeacherClubDetail => "teacherClubDetail", "Club", Preserve, [ClubId], TabBar;
        TeacherStudents => "teacherStudents", "Students", Clear, [], TabBar;
        TeacherDogDetail => "teacherDogDetail", "Dog", Preserve, [DogId], TabBar;
        TeacherDogProgression => "teacherDogProgression", "Progression", Preserve, [DogId], TabBar;
        TeacherDogTasks => "teacherDogTasks", "Tasks", Preserve, [DogId], TabBar;
        TeacherHomeTraining => "teacherHomeTraining", "Home training", Preserve, [], TabBar;
        TeacherChat => "teacherChat", "Messages", Preserve, [], TabBar;
        TeacherChatRoom => "teacherChatRoom", "Chat", Preserve, [ClubId, Channel], Fullscreen;
        TeacherNotifications => "teacherNotifications", "Notifications", Preserve, [], TabBar;
        TeacherEarnings => "teacherEarnings", "Earnings", Clear, [], TabBar;
        TeacherProfile => "teacherProfile", "Profile", Clear, [], TabBar;
        TeacherSettings => "teacherSettings", "Settings", Clear, [], TabBar;
    }
}

/// A page tagged with the role partition it belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Customer(CustomerPage),
    Club(ClubPage),
    Teacher(TeacherPage),
}

impl Page {
    /// Landing page after login, also the fallback for unknown ids
    pub fn home(role: Role) -> Self {
        match role {
            Role::Customer => Page::Customer(CustomerPage::Home),
            Role::Club => Page::Club(ClubPage::ClubHome),
            Role::Teacher => Page::Teacher(TeacherPage::TeacherHome),
        }
    }

    /// Parse a page id inside one role's partition only
    pub fn parse(role: Role, s: &str) -> Option<Self> {
        match role {
            Role::Customer => CustomerPage::parse(s).map(Page::Customer),
            Role::Club => ClubPage::parse(s).map(Page::Club),
            Role::Teacher => TeacherPage::parse(s).map(Page::Teacher),
        }
    }

    /// Every page of a role, in declaration order
    pub fn all(role: Role) -> Vec<Page> {
        match role {
            Role::Customer => CustomerPage::ALL.iter().copied().map(Page::Customer).collect(),
            Role::Club => ClubPage::ALL.iter().copied().map(Page::Club).collect(),
            Role::Teacher => TeacherPage::ALL.iter().copied().map(Page::Teacher).collect(),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Page::Customer(_) => Role::Customer,
            Page::Club(_) => Role::Club,
            Page::Teacher(_) => Role::Teacher,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Customer(p) => p.as_str(),
            Page::Club(p) => p.as_str(),
            Page::Teacher(p) => p.as_str(),
        }
    }

    pub fn spec(&self) -> PageSpec {
        match self {
            Page::Customer(p) => p.spec(),
            Page::Club(p) => p.spec(),
            Page::Teacher(p) => p.spec(),
        }
    }

    pub fn title(&self) -> &'static str {
        self.spec().title
    }

    pub fn preserves_selection(&self) -> bool {
        self.spec().reset == ResetBehavior::Preserve
    }

    pub fn hides_tab_bar(&self) -> bool {
        self.spec().chrome == Chrome::Fullscreen
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Page {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl From<CustomerPage> for Page {
    fn from(page: CustomerPage) -> Self {
        Page::Customer(page)
    }
}

impl From<ClubPage> for Page {
    fn from(page: ClubPage) -> Self {
        Page::Club(page)
    }
}

impl From<TeacherPage> for Page {
    fn from(page: TeacherPage) -> Self {
        Page::Teacher(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ROLES: [Role; 3] = [Role::Customer, Role::Club, Role::Teacher];

    #[test]
    fn tags_are_unique_across_all_partitions() {
        let mut seen = HashSet::new();
        for role in ROLES {
            for page in Page::all(role) {
                assert!(seen.insert(page.as_str()), "duplicate tag {}", page);
            }
        }
        assert!(seen.len() >= 60, "expected ~70 pages, got {}", seen.len());
    }

    #[test]
    fn tags_parse_back_within_own_partition_only() {
        for role in ROLES {
            for page in Page::all(role) {
                assert_eq!(Page::parse(role, page.as_str()), Some(page));
                for other in ROLES.iter().filter(|r| **r != role) {
                    assert_eq!(Page::parse(*other, page.as_str()), None);
                }
            }
        }
    }

    #[test]
    fn pages_with_required_fields_preserve_selection() {
        // Merged entity fields must survive the transition into the page that reads them
        for role in ROLES {
            for page in Page::all(role) {
                if !page.spec().requires.is_empty() {
                    assert!(page.preserves_selection(), "{} requires fields but clears", page);
                }
            }
        }
    }

    #[test]
    fn homes_clear_selection_and_show_tab_bar() {
        for role in ROLES {
            let home = Page::home(role);
            assert_eq!(home.role(), role);
            assert!(!home.preserves_selection());
            assert!(!home.hides_tab_bar());
        }
    }

    #[test]
    fn serializes_as_tag() {
        let json = serde_json::to_string(&Page::Club(ClubPage::ClubTeachers)).unwrap();
        assert_eq!(json, "\"clubTeachers\"");
    }
}
