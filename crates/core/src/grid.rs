//! # Weekly grid
//!
//! A timetable view is a sparse matrix of days by time slots. The backend
//! returns a flat list of [`SlotRecord`]s; this module answers which record,
//! if any, occupies a given cell and what the cell should display.
//!
//! ## Field resolution
//!
//! Every display field is taken from the first source that has a value:
//!
//! 1. the live relation embedded in the record (`subject.name`)
//! 2. the joined foreign key (`subject_id.name`)
//! 3. the snapshot captured when the slot was created (`slotSnapshot.subject_name`)
//!
//! The snapshot keeps historical views stable after a subject or teacher is
//! reassigned or deleted.

use serde::Serialize;
use tracing::warn;

use crate::errors::TimetableResult;
use crate::models::{
    calendar::{ClockTime, Day, TimeRange},
    slot::{SlotRecord, SlotType},
};

/// Returns the first candidate that holds a value.
///
/// A present empty string still counts as a value.
pub fn coalesce<T, I>(candidates: I) -> Option<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    candidates.into_iter().flatten().next()
}

/// Which display fields of a [`ResolvedSlot`] came from the snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SnapshotFields {
    pub subject: bool,
    pub teacher: bool,
    pub room: bool,
    pub slot_type: bool,
}

impl SnapshotFields {
    pub fn any(&self) -> bool {
        self.subject || self.teacher || self.room || self.slot_type
    }
}

/// Display values of one occupied cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSlot {
    pub day: Day,
    pub time: TimeRange,
    pub subject_name: Option<String>,
    pub teacher_name: Option<String>,
    pub course_name: Option<String>,
    pub room: Option<String>,
    pub slot_type: Option<SlotType>,
    /// Whether any field above fell back to the creation-time snapshot.
    pub from_snapshot: bool,
    pub snapshot_fields: SnapshotFields,
}

/// Takes `live` if present, otherwise `fallback`, recording whether the
/// fallback was used.
fn or_snapshot<T>(live: Option<T>, fallback: Option<T>, used: &mut bool) -> Option<T> {
    match live {
        Some(value) => Some(value),
        None => {
            *used = fallback.is_some();
            fallback
        }
    }
}

impl ResolvedSlot {
    pub fn from_record(record: &SlotRecord) -> Self {
        let snapshot = record.slot_snapshot.as_ref();
        let mut fields = SnapshotFields::default();

        let subject_name = or_snapshot(
            coalesce([
                record.subject.as_ref().and_then(|r| r.name().map(str::to_owned)),
                record.subject_ref.as_ref().and_then(|r| r.name().map(str::to_owned)),
            ]),
            snapshot.and_then(|s| s.subject_name.clone()),
            &mut fields.subject,
        );
        let teacher_name = or_snapshot(
            coalesce([
                record.teacher.as_ref().and_then(|r| r.name().map(str::to_owned)),
                record.teacher_ref.as_ref().and_then(|r| r.name().map(str::to_owned)),
            ]),
            snapshot.and_then(|s| s.teacher_name.clone()),
            &mut fields.teacher,
        );
        let room = or_snapshot(
            record.room.clone(),
            snapshot.and_then(|s| s.room.clone()),
            &mut fields.room,
        );
        let slot_type = or_snapshot(
            record.slot_type,
            snapshot.and_then(|s| s.slot_type),
            &mut fields.slot_type,
        );

        let course_name = record
            .course_ref
            .as_ref()
            .and_then(|r| r.name().map(str::to_owned));

        Self {
            day: record.day,
            time: TimeRange {
                start: record.start_time,
                end: record.end_time,
            },
            subject_name,
            teacher_name,
            course_name,
            room,
            slot_type,
            from_snapshot: fields.any(),
            snapshot_fields: fields,
        }
    }
}

fn find_slot(day: Day, start: ClockTime, slots: &[SlotRecord]) -> Option<&SlotRecord> {
    slots
        .iter()
        .find(|slot| slot.day == day && slot.start_time == start)
}

/// Resolves the cell at `(day, time_range_label)`.
///
/// Only the start of the label takes part in the lookup. An empty cell, or a
/// label whose start is not a time, yields `None`.
pub fn resolve_cell(
    day: Day,
    time_range_label: &str,
    slots: &[SlotRecord],
) -> Option<ResolvedSlot> {
    let start = TimeRange::parse_start(time_range_label).ok()?;
    find_slot(day, start, slots).map(ResolvedSlot::from_record)
}

/// One row of the grid: a time slot and a cell per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridRow {
    pub label: String,
    pub time: TimeRange,
    pub cells: Vec<Option<ResolvedSlot>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyGrid {
    days: Vec<Day>,
    rows: Vec<GridRow>,
}

impl WeeklyGrid {
    /// Lays `slots` out over the given axes.
    ///
    /// # Errors
    ///
    /// Returns `TimetableError::Validation` if a time slot label is not of the
    /// form `HH:MM - HH:MM`.
    pub fn build(days: &[Day], time_slots: &[&str], slots: &[SlotRecord]) -> TimetableResult<Self> {
        warn_on_duplicates(slots);

        let rows = time_slots
            .iter()
            .map(|label| -> TimetableResult<GridRow> {
                let time: TimeRange = label.parse()?;
                let cells = days
                    .iter()
                    .map(|&day| resolve_cell(day, label, slots))
                    .collect();
                Ok(GridRow {
                    label: (*label).to_string(),
                    time,
                    cells,
                })
            })
            .collect::<TimetableResult<Vec<_>>>()?;

        Ok(Self {
            days: days.to_vec(),
            rows,
        })
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    pub fn cell(&self, day: Day, label: &str) -> Option<&ResolvedSlot> {
        let column = self.days.iter().position(|&d| d == day)?;
        self.rows
            .iter()
            .find(|row| row.label == label)
            .and_then(|row| row.cells[column].as_ref())
    }

    pub fn occupied_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.cells.iter().filter(|cell| cell.is_some()).count())
            .sum()
    }

    /// Slots that do not land on any cell of this grid.
    pub fn unplaced<'a>(&self, slots: &'a [SlotRecord]) -> Vec<&'a SlotRecord> {
        slots
            .iter()
            .filter(|slot| {
                !self.days.contains(&slot.day)
                    || !self.rows.iter().any(|row| row.time.start == slot.start_time)
            })
            .collect()
    }
}

fn warn_on_duplicates(slots: &[SlotRecord]) {
    for (index, slot) in slots.iter().enumerate() {
        let first = find_slot(slot.day, slot.start_time, slots);
        if first.is_some_and(|first| !std::ptr::eq(first, slot)) {
            warn!(
                day = %slot.day,
                start = %slot.start_time,
                index,
                "Duplicate slot for the same day and start time; only the first is shown"
            );
        }
    }
}
