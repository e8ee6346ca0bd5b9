//! Dogclub Client - Rust Implementation
//!
//! Simulated mobile client for a dog-training-club marketplace with three
//! kinds of user: dog owners, club administrators and teachers.
//!
//! This library provides:
//! - Session handling and the login / signup flow
//! - Role-partitioned page catalogue with explicit selection reset policy
//! - Navigation controller (single-level back, rating return, entity routing)
//! - Page registry and per-role tab bars
//! - Mock catalogue of clubs, teachers, events, dogs and bookings
//! - Screens rendered with Dioxus SSR or as plain text
//! - Line-oriented command shell

#[cfg(feature = "cli")]
pub mod config;
pub mod data;
pub mod nav;
pub mod session;
pub mod shell;
pub mod ui;
