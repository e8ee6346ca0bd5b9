//! Bottom tab bars, one per role. Visibility and the active tab are pure
//! functions of (role, current page).

use serde::Serialize;

use super::page::{ClubPage, CustomerPage, Page, TeacherPage};
use crate::session::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub page: Page,
    pub label: &'static str,
    pub icon: &'static str,
}

const fn tab(page: Page, label: &'static str, icon: &'static str) -> Tab {
    Tab { page, label, icon }
}

const CUSTOMER_TABS: &[Tab] = &[
    tab(Page::Customer(CustomerPage::Home), "Home", "🏠"),
    tab(Page::Customer(CustomerPage::Clubs), "Clubs", "🔍"),
    tab(Page::Customer(CustomerPage::MyBookings), "Bookings", "📅"),
    tab(Page::Customer(CustomerPage::Chat), "Messages", "💬"),
    tab(Page::Customer(CustomerPage::Profile), "Profile", "🐕"),
];

const CLUB_TABS: &[Tab] = &[
    tab(Page::Club(ClubPage::ClubHome), "Dashboard", "🏠"),
    tab(Page::Club(ClubPage::ClubBookings), "Bookings", "📅"),
    tab(Page::Club(ClubPage::ClubTeachers), "Teachers", "🎓"),
    tab(Page::Club(ClubPage::ClubChat), "Messages", "💬"),
    tab(Page::Club(ClubPage::ClubProfile), "Club", "🏟"),
];

const TEACHER_TABS: &[Tab] = &[
    tab(Page::Teacher(TeacherPage::TeacherHome), "Home", "🏠"),
    tab(Page::Teacher(TeacherPage::TeacherSchedule), "Schedule", "📅"),
    tab(Page::Teacher(TeacherPage::TeacherStudents), "Students", "🐕"),
    tab(Page::Teacher(TeacherPage::TeacherChat), "Messages", "💬"),
    tab(Page::Teacher(TeacherPage::TeacherProfile), "Profile", "👤"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabBar {
    role: Role,
    tabs: &'static [Tab],
}

impl TabBar {
    pub fn for_role(role: Role) -> Self {
        let tabs = match role {
            Role::Customer => CUSTOMER_TABS,
            Role::Club => CLUB_TABS,
            Role::Teacher => TEACHER_TABS,
        };
        Self { role, tabs }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn tabs(&self) -> &'static [Tab] {
        self.tabs
    }

    /// The bar renders unless the page is fullscreen or outside the role
    pub fn is_visible(&self, current: Page) -> bool {
        current.role() == self.role && !current.hides_tab_bar()
    }

    /// Tab whose page equals the current page, if any
    pub fn active(&self, current: Page) -> Option<&'static Tab> {
        self.tabs.iter().find(|t| t.page == current)
    }
}
