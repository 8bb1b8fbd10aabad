use campus_timetable_core::{
    errors::TimetableResult,
    grid::WeeklyGrid,
    models::calendar::{DAYS, TIME_SLOTS},
};
use tracing::warn;

use crate::source::{TimetableSource, TimetableView};

/// Fetches the slots for `view` and lays them out on the standard week.
///
/// Slots outside the grid axes are logged and left out.
pub async fn load_grid(
    source: &dyn TimetableSource,
    view: TimetableView,
) -> TimetableResult<WeeklyGrid> {
    let slots = source.fetch_slots(view.clone()).await?;
    let grid = WeeklyGrid::build(&DAYS, &TIME_SLOTS, &slots)?;

    for slot in grid.unplaced(&slots) {
        warn!(
            view = %view.title(),
            day = %slot.day,
            start = %slot.start_time,
            "Slot falls outside the timetable grid"
        );
    }

    Ok(grid)
}
