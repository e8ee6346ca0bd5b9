//! Navigation core: page catalogue, Selection Context, controller, registry
//! and tab bars.

mod action;
mod controller;
mod error;
pub mod page;
pub mod registry;
pub mod selection;
mod tabs;

pub use action::Action;
pub use controller::{NavigationController, NavigationState, Snapshot};
pub use error::NavError;
pub use page::{Chrome, ClubPage, CustomerPage, Page, PageSpec, ResetBehavior, TeacherPage};
pub use registry::{dispatch, Dispatch, PageRegistry, Resolution, ScreenProps};
pub use selection::{
    ChannelRef, EntityKind, EntityRef, ScopedSelection, SelectionContext, SelectionField,
    SelectionPatch, TeachersPricing,
};
pub use tabs::{Tab, TabBar};
