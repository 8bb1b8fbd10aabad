//! # Campus Timetable Core
//!
//! Domain types and pure logic for the college timetable: the slot model, the
//! weekly grid resolver, 12-hour time formatting, the cascading slot creation
//! form and a plain-text grid renderer.
//!
//! Nothing here performs I/O. Slot lists are fetched by the client crate and
//! handed to [`grid::WeeklyGrid::build`] or [`grid::resolve_cell`].

/// Error type shared by every timetable crate
pub mod errors;
/// Weekly grid lookup and field resolution
pub mod grid;
/// Wire and domain models
pub mod models;
/// Plain-text rendering of a weekly grid
pub mod render;
/// Dependent-selection form for creating a slot
pub mod slot_form;
/// 12-hour clock formatting
pub mod time_format;
