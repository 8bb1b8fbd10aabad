//! # Campus Timetable Client
//!
//! REST client for the college ERP backend's timetable and catalog endpoints.
//!
//! - **Config**: environment-driven settings and the explicit [`config::Session`]
//! - **Source**: the [`source::TimetableSource`] trait, with a mockall mock for tests
//! - **Http**: the reqwest-backed implementation of that trait
//! - **Views**: fetching a view straight into a [`campus_timetable_core::grid::WeeklyGrid`]

/// Configuration module for client settings
pub mod config;
/// Tolerant decoding of backend response bodies
pub mod envelope;
/// reqwest implementation of the timetable source
pub mod http;
/// Backend access trait and view selection
pub mod source;
/// Grid loading for a timetable view
pub mod views;

pub use config::{ClientConfig, Session};
pub use http::HttpTimetableClient;
pub use source::{TimetableSource, TimetableView};
