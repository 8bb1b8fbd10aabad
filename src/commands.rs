use campus_timetable_client::{views::load_grid, TimetableSource, TimetableView};
use campus_timetable_core::{
    errors::{TimetableError, TimetableResult},
    models::slot::SlotRecord,
    render::{render_grid, Placeholders},
    slot_form::SlotForm,
    time_format::format_clock_12h,
};

use crate::cli::AddSlotArgs;

/// Renders one timetable view, with a legend when snapshot values are shown.
pub async fn show(source: &dyn TimetableSource, view: TimetableView) -> TimetableResult<String> {
    let grid = load_grid(source, view.clone()).await?;

    let mut out = format!("{}\n", view.title());
    out.push_str(&render_grid(&grid, &Placeholders::default()));

    if grid.occupied_count() == 0 {
        out.push_str("No classes scheduled.\n");
    }
    let uses_snapshot = grid
        .rows()
        .iter()
        .flat_map(|row| row.cells.iter().flatten())
        .any(|cell| cell.from_snapshot);
    if uses_snapshot {
        out.push_str("* recorded when the slot was created; the live record has changed\n");
    }
    Ok(out)
}

pub async fn courses(source: &dyn TimetableSource) -> TimetableResult<String> {
    let courses = source.list_courses().await?;
    Ok(courses
        .iter()
        .map(|course| {
            format!(
                "{}\t{}\t{}\n",
                course.id,
                course.code.as_deref().unwrap_or("-"),
                course.name
            )
        })
        .collect())
}

pub async fn subjects(
    source: &dyn TimetableSource,
    course_id: Option<String>,
) -> TimetableResult<String> {
    let subjects = source.list_subjects(course_id).await?;
    Ok(subjects
        .iter()
        .map(|subject| {
            let semester = subject
                .semester
                .map(|s| format!("sem {}", s))
                .unwrap_or_else(|| "-".to_string());
            format!("{}\t{}\t{}\n", subject.id, semester, subject.name)
        })
        .collect())
}

/// Walks the slot form through its dependent selections and posts the result.
///
/// Courses and subjects may be named by id or by code.
pub async fn add_slot(
    source: &dyn TimetableSource,
    args: AddSlotArgs,
) -> TimetableResult<SlotRecord> {
    let mut form = SlotForm::new();

    let course = source
        .list_courses()
        .await?
        .into_iter()
        .find(|c| c.id == args.course_id || c.code.as_deref() == Some(args.course_id.as_str()))
        .ok_or_else(|| TimetableError::NotFound(format!("Course {} not found", args.course_id)))?;
    let course_id = course.id.clone();
    form.select_course(course);

    let subjects = source.list_subjects(Some(course_id.clone())).await?;
    let subject = form
        .subjects_for_course(&subjects)
        .into_iter()
        .find(|s| s.id == args.subject_id || s.code.as_deref() == Some(args.subject_id.as_str()))
        .cloned()
        .ok_or_else(|| {
            TimetableError::NotFound(format!(
                "Subject {} is not offered by course {}",
                args.subject_id, course_id
            ))
        })?;
    form.select_subject(subject)?;

    let teacher = source
        .list_teachers()
        .await?
        .into_iter()
        .find(|t| t.id == args.teacher_id)
        .ok_or_else(|| TimetableError::NotFound(format!("Teacher {} not found", args.teacher_id)))?;
    form.select_teacher(teacher)?;

    form.set_day(args.day);
    form.set_times(args.start, args.end);
    form.set_room(args.room);
    if let Some(slot_type) = args.slot_type {
        form.set_slot_type(slot_type);
    }
    if let Some(semester) = args.semester {
        form.set_semester(semester);
    }

    let request = form.build()?;
    source.create_slot(request).await
}

pub fn describe_created(slot: &SlotRecord) -> String {
    format!(
        "Created {} slot on {} {} - {}",
        slot.slot_type.map(|t| t.label()).unwrap_or("LECTURE"),
        slot.day.full_name(),
        format_clock_12h(slot.start_time),
        format_clock_12h(slot.end_time)
    )
}
