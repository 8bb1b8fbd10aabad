use std::collections::HashMap;

use campus_timetable_client::TimetableView;
use campus_timetable_core::models::{
    calendar::{ClockTime, Day},
    slot::SlotType,
};
use eyre::{eyre, Result, WrapErr};

pub const USAGE: &str = "\
Usage: timetable <command>

Commands:
  student                        Show the signed-in student's timetable
  teacher                        Show the signed-in teacher's timetable
  course <course_id> [semester]  Show a course timetable
  courses                        List courses
  subjects [course_id]           List subjects, optionally for one course
  add-slot course=<id> subject=<id> teacher=<id> day=<DAY>
           start=<HH:MM> end=<HH:MM> room=<room>
           [type=LECTURE|LAB|PRACTICAL] [semester=<n>]
                                 Create a timetable slot";

#[derive(Debug, Clone, PartialEq)]
pub struct AddSlotArgs {
    pub course_id: String,
    pub subject_id: String,
    pub teacher_id: String,
    pub day: Day,
    pub start: ClockTime,
    pub end: ClockTime,
    pub room: String,
    pub slot_type: Option<SlotType>,
    pub semester: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Show(TimetableView),
    Courses,
    Subjects(Option<String>),
    AddSlot(AddSlotArgs),
}

fn parse_semester(raw: &str) -> Result<u32> {
    raw.parse().wrap_err_with(|| format!("Invalid semester: {}", raw))
}

pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let command = args.next().ok_or_else(|| eyre!("Missing command"))?;
    let rest: Vec<String> = args.collect();

    match (command.as_str(), rest.as_slice()) {
        ("student", []) => Ok(Command::Show(TimetableView::Student)),
        ("teacher", []) => Ok(Command::Show(TimetableView::Teacher)),
        ("course", [course_id]) => Ok(Command::Show(TimetableView::Course {
            course_id: course_id.clone(),
            semester: None,
        })),
        ("course", [course_id, semester]) => Ok(Command::Show(TimetableView::Course {
            course_id: course_id.clone(),
            semester: Some(parse_semester(semester)?),
        })),
        ("courses", []) => Ok(Command::Courses),
        ("subjects", []) => Ok(Command::Subjects(None)),
        ("subjects", [course_id]) => Ok(Command::Subjects(Some(course_id.clone()))),
        ("add-slot", pairs) => parse_add_slot(pairs).map(Command::AddSlot),
        (other, _) => Err(eyre!("Unknown command or wrong arguments: {}", other)),
    }
}

fn required<'a>(values: &HashMap<&str, &'a str>, key: &str) -> Result<&'a str> {
    values
        .get(key)
        .copied()
        .ok_or_else(|| eyre!("Missing {}=", key))
}

fn parse_add_slot(pairs: &[String]) -> Result<AddSlotArgs> {
    let mut values: HashMap<&str, &str> = HashMap::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| eyre!("Expected key=value, got {}", pair))?;
        values.insert(key.trim(), value.trim());
    }

    Ok(AddSlotArgs {
        course_id: required(&values, "course")?.to_string(),
        subject_id: required(&values, "subject")?.to_string(),
        teacher_id: required(&values, "teacher")?.to_string(),
        day: required(&values, "day")?.parse()?,
        start: required(&values, "start")?.parse()?,
        end: required(&values, "end")?.parse()?,
        room: required(&values, "room")?.to_string(),
        slot_type: values.get("type").map(|raw| raw.parse::<SlotType>()).transpose()?,
        semester: values.get("semester").map(|raw| parse_semester(raw)).transpose()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_view_commands() {
        assert_eq!(parse_args(args("student")).unwrap(), Command::Show(TimetableView::Student));
        assert_eq!(parse_args(args("teacher")).unwrap(), Command::Show(TimetableView::Teacher));
        assert_eq!(
            parse_args(args("course c-bsc 3")).unwrap(),
            Command::Show(TimetableView::Course {
                course_id: "c-bsc".to_string(),
                semester: Some(3),
            })
        );
        assert_eq!(
            parse_args(args("subjects c-bsc")).unwrap(),
            Command::Subjects(Some("c-bsc".to_string()))
        );
    }

    #[test]
    fn test_add_slot() {
        let command = parse_args(args(
            "add-slot course=c-bsc subject=s-1 teacher=t-1 day=mon start=09:00 end=10:00 room=R101 type=lab",
        ))
        .unwrap();

        assert_eq!(
            command,
            Command::AddSlot(AddSlotArgs {
                course_id: "c-bsc".to_string(),
                subject_id: "s-1".to_string(),
                teacher_id: "t-1".to_string(),
                day: Day::Mon,
                start: ClockTime::new(9, 0).unwrap(),
                end: ClockTime::new(10, 0).unwrap(),
                room: "R101".to_string(),
                slot_type: Some(SlotType::Lab),
                semester: None,
            })
        );
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse_args(Vec::<String>::new()).is_err());
        assert!(parse_args(args("timetable")).is_err());
        assert!(parse_args(args("student extra")).is_err());
        assert!(parse_args(args("course c-bsc first")).is_err());
        assert!(parse_args(args("add-slot course=c-bsc")).is_err());
        assert!(parse_args(args("add-slot course c-bsc")).is_err());
        assert!(parse_args(args(
            "add-slot course=c subject=s teacher=t day=sun start=09:00 end=10:00 room=R1"
        ))
        .is_err());
    }
}
