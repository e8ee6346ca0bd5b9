//! Screen rendering.
//!
//! - components/ - shared Dioxus components (layout, tab bar, empty states)
//! - screens/ - one component per kind of screen
//! - view - catalogue lookups producing owned view models
//! - summary - plain-text rendering of the same view models
//!
//! HTML is produced with Dioxus SSR. Both renderers start from the registry's
//! `Resolution`, so a page with incomplete selection renders its empty state
//! in either mode.

pub mod components;
pub mod screens;
pub mod summary;
pub mod view;

use dioxus::prelude::*;
use serde::Deserialize;
use std::fmt::Write as _;

use crate::data::Catalog;
use crate::nav::{NavigationController, Page, PageRegistry, Resolution, TabBar};
use components::Layout;
use screens::{AuthPanel, ScreenBody};
use view::ScreenView;

/// Output format of the shell's `show` command
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    #[default]
    Summary,
    Html,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Summary => "summary",
            RenderMode::Html => "html",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "summary" | "text" => Some(RenderMode::Summary),
            "html" => Some(RenderMode::Html),
            _ => None,
        }
    }
}

/// Resolved view of the current page
struct Frame {
    page: Page,
    view: ScreenView,
}

fn frame(nav: &NavigationController, registry: &PageRegistry, catalog: &dyn Catalog) -> Option<Frame> {
    let page = nav.current_page()?;
    let view = match registry.resolve(page, nav.selection(), nav.previous_page()) {
        Resolution::Ready(props) => view::build(&props, catalog),
        Resolution::Empty { missing, .. } => ScreenView::empty(missing),
    };
    Some(Frame { page, view })
}

pub fn render(
    mode: RenderMode,
    nav: &NavigationController,
    registry: &PageRegistry,
    catalog: &dyn Catalog,
) -> String {
    match mode {
        RenderMode::Summary => render_summary(nav, registry, catalog),
        RenderMode::Html => render_html(nav, registry, catalog),
    }
}

/// Full HTML document for the current screen
pub fn render_html(nav: &NavigationController, registry: &PageRegistry, catalog: &dyn Catalog) -> String {
    let html = match frame(nav, registry, catalog) {
        None => {
            let screen = nav.auth_flow().screen();
            dioxus::ssr::render_element(rsx! { AuthPanel { screen } })
        }
        Some(Frame { page, view }) => {
            let bar = TabBar::for_role(page.role());
            let tabs = if bar.is_visible(page) {
                bar.tabs().to_vec()
            } else {
                Vec::new()
            };
            let active = bar.active(page).map(|t| t.page);
            let back = nav.previous_page();

            dioxus::ssr::render_element(rsx! {
                Layout {
                    title: page.title().to_string(),
                    page: page.as_str().to_string(),
                    back,
                    tabs,
                    active,
                    ScreenBody { view }
                }
            })
        }
    };
    format!("<!DOCTYPE html>\n<html lang=\"en\">\n{}</html>", html)
}

/// Plain-text rendering: header, body lines and the tab bar
pub fn render_summary(nav: &NavigationController, registry: &PageRegistry, catalog: &dyn Catalog) -> String {
    let mut out = String::new();

    let Some(Frame { page, view }) = frame(nav, registry, catalog) else {
        let screen = nav.auth_flow().screen();
        let _ = writeln!(out, "== {} ==", screen.title());
        match screen.signup_role() {
            Some(role) => {
                let _ = writeln!(out, "Signing up as {}: login <email> <password>", role.label());
                let _ = writeln!(out, "> auth-back");
            }
            None if screen == crate::session::AuthScreen::ChooseSignupType => {
                let _ = writeln!(out, "> signup customer | signup club | signup teacher | auth-back");
            }
            None => {
                let _ = writeln!(out, "> login <email> <password> | signup");
            }
        }
        return out;
    };

    let _ = writeln!(out, "== {} [{}] ==", page.title(), page);
    if let Some(back) = nav.previous_page() {
        let _ = writeln!(out, "< back to {}", back);
    }
    for line in summary::body_lines(&view) {
        let _ = writeln!(out, "{}", line);
    }

    let bar = TabBar::for_role(page.role());
    if bar.is_visible(page) {
        let tabs: Vec<String> = bar
            .tabs()
            .iter()
            .map(|t| {
                if t.page == page {
                    format!("[{}]", t.label)
                } else {
                    t.label.to_string()
                }
            })
            .collect();
        let _ = writeln!(out, "-- {} --", tabs.join(" | "));
    }
    out
}
