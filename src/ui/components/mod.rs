//! Shared UI components.

pub mod empty_state;
pub mod layout;
pub mod tab_bar;

pub use empty_state::{EmptyState, NotFound};
pub use layout::Layout;
pub use tab_bar::TabBarNav;
