use campus_timetable_core::models::{
    calendar::{ClockTime, Day, TimeRange, DAYS, TIME_SLOTS},
    catalog::{Course, Subject, Teacher},
    slot::{CreateSlotRequest, Reference, SlotRecord, SlotSnapshot, SlotType},
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_value, json, to_value};

#[rstest]
#[case("MON", Day::Mon)]
#[case("tue", Day::Tue)]
#[case("Wednesday", Day::Wed)]
#[case(" THURSDAY ", Day::Thu)]
#[case("Fri", Day::Fri)]
#[case("saturday", Day::Sat)]
fn test_day_parsing(#[case] input: &str, #[case] expected: Day) {
    assert_eq!(input.parse::<Day>().unwrap(), expected);
}

#[test]
fn test_day_rejects_sunday() {
    assert!("SUN".parse::<Day>().is_err());
}

#[test]
fn test_day_serializes_as_code() {
    assert_eq!(to_value(Day::Mon).unwrap(), json!("MON"));
    assert_eq!(from_value::<Day>(json!("Monday")).unwrap(), Day::Mon);
}

#[test]
fn test_axes_are_ordered() {
    assert_eq!(DAYS.len(), 6);
    assert!(DAYS.windows(2).all(|pair| pair[0] < pair[1]));

    let ranges: Vec<TimeRange> = TIME_SLOTS.iter().map(|label| label.parse().unwrap()).collect();
    assert!(ranges.iter().all(|range| range.start < range.end));
    assert!(ranges.windows(2).all(|pair| pair[0].end <= pair[1].start));
}

#[rstest]
#[case("09:00", 9, 0)]
#[case("23:59", 23, 59)]
#[case("13:30:00", 13, 30)]
#[case(" 00:30 ", 0, 30)]
fn test_clock_time_parsing(#[case] input: &str, #[case] hour: u32, #[case] minute: u32) {
    let time: ClockTime = input.parse().unwrap();
    assert_eq!((time.hour(), time.minute()), (hour, minute));
}

#[rstest]
#[case("")]
#[case("25:00")]
#[case("noon")]
#[case("12:61")]
fn test_clock_time_rejects_malformed(#[case] input: &str) {
    assert!(input.parse::<ClockTime>().is_err());
}

#[test]
fn test_clock_time_ignores_seconds() {
    let with_seconds: ClockTime = "09:00:45".parse().unwrap();
    let without: ClockTime = "09:00".parse().unwrap();
    assert_eq!(with_seconds, without);
    assert_eq!(with_seconds.to_string(), "09:00");
}

#[test]
fn test_time_range_parsing() {
    let range: TimeRange = "09:00 - 10:00".parse().unwrap();
    assert_eq!(range.start, ClockTime::new(9, 0).unwrap());
    assert_eq!(range.end, ClockTime::new(10, 0).unwrap());
    assert_eq!(range.to_string(), "09:00 - 10:00");

    assert_eq!(
        TimeRange::parse_start("14:00 - 15:00").unwrap(),
        ClockTime::new(14, 0).unwrap()
    );
    assert_eq!(TimeRange::parse_start("14:00").unwrap(), ClockTime::new(14, 0).unwrap());
    assert!("09:00".parse::<TimeRange>().is_err());
}

#[rstest]
#[case("09:00-10:00")]
#[case("09:00 -10:00")]
#[case(" 09:00 - 10:00 ")]
fn test_label_start_agrees_with_range(#[case] label: &str) {
    let range: TimeRange = label.parse().unwrap();
    assert_eq!(TimeRange::parse_start(label).unwrap(), range.start);
    assert_eq!(range.start, ClockTime::new(9, 0).unwrap());
}

#[test]
fn test_slot_record_with_live_relations() {
    let record: SlotRecord = from_value(json!({
        "_id": "slot-1",
        "day": "MON",
        "startTime": "09:00",
        "endTime": "10:00",
        "subject": { "_id": "sub-1", "name": "Physics" },
        "teacher": { "_id": "t-1", "name": "Dr. Rao" },
        "subject_id": "sub-1",
        "teacher_id": "t-1",
        "course_id": { "_id": "c-1", "name": "B.Sc" },
        "room": "R101",
        "slotType": "LECTURE"
    }))
    .unwrap();

    assert_eq!(record.id.as_deref(), Some("slot-1"));
    assert_eq!(record.day, Day::Mon);
    assert_eq!(record.subject.as_ref().and_then(Reference::name), Some("Physics"));
    assert_eq!(record.subject_ref, Some(Reference::Id("sub-1".to_string())));
    assert_eq!(record.course_ref.as_ref().and_then(Reference::name), Some("B.Sc"));
    assert_eq!(record.course_ref.as_ref().and_then(Reference::id), Some("c-1"));
    assert_eq!(record.slot_type, Some(SlotType::Lecture));
}

#[test]
fn test_slot_record_with_snapshot_only() {
    let record: SlotRecord = from_value(json!({
        "day": "Tuesday",
        "start_time": "11:00:00",
        "end_time": "12:00:00",
        "subject_id": null,
        "teacher_id": null,
        "slotSnapshot": {
            "subject_name": "Old Physics",
            "teacher_name": "Dr. Former",
            "room": "Lab 2",
            "slot_type": "Lab"
        }
    }))
    .unwrap();

    assert_eq!(record.day, Day::Tue);
    assert_eq!(record.start_time, ClockTime::new(11, 0).unwrap());
    assert!(record.subject_ref.is_none());
    assert_eq!(
        record.slot_snapshot,
        Some(SlotSnapshot {
            subject_name: Some("Old Physics".to_string()),
            teacher_name: Some("Dr. Former".to_string()),
            room: Some("Lab 2".to_string()),
            slot_type: Some(SlotType::Lab),
        })
    );
}

#[test]
fn test_create_slot_request_wire_format() {
    let request = CreateSlotRequest {
        course_id: "c-1".to_string(),
        subject_id: "sub-1".to_string(),
        teacher_id: "t-1".to_string(),
        day: Day::Fri,
        start_time: ClockTime::new(14, 0).unwrap(),
        end_time: ClockTime::new(15, 0).unwrap(),
        room: "R12".to_string(),
        slot_type: SlotType::Practical,
        semester: Some(3),
        slot_snapshot: SlotSnapshot {
            subject_name: Some("Chemistry".to_string()),
            teacher_name: Some("Dr. Iyer".to_string()),
            room: Some("R12".to_string()),
            slot_type: Some(SlotType::Practical),
        },
    };

    assert_eq!(
        to_value(&request).unwrap(),
        json!({
            "course_id": "c-1",
            "subject_id": "sub-1",
            "teacher_id": "t-1",
            "day": "FRI",
            "startTime": "14:00",
            "endTime": "15:00",
            "room": "R12",
            "slotType": "PRACTICAL",
            "semester": 3,
            "slotSnapshot": {
                "subject_name": "Chemistry",
                "teacher_name": "Dr. Iyer",
                "room": "R12",
                "slot_type": "PRACTICAL"
            }
        })
    );
}

#[test]
fn test_catalog_models() {
    let course: Course =
        from_value(json!({ "_id": "c-1", "name": "B.Tech", "code": "BT" })).unwrap();
    assert_eq!(course.id, "c-1");
    assert_eq!(course.semesters, None);

    let subject: Subject =
        from_value(json!({ "_id": "s-1", "name": "Maths", "course_id": "c-1", "semester": 1 }))
            .unwrap();
    assert_eq!(subject.course_id.as_deref(), Some("c-1"));

    let teacher: Teacher = from_value(json!({ "_id": "t-1", "name": "Dr. Rao" })).unwrap();
    assert!(teacher.subjects.is_empty());
    assert!(teacher.can_teach("anything"));

    let assigned: Teacher =
        from_value(json!({ "id": "t-2", "name": "Dr. Sen", "subjects": ["s-1"] })).unwrap();
    assert!(assigned.can_teach("s-1"));
    assert!(!assigned.can_teach("s-2"));
}

#[test]
fn test_slot_list_with_inconsistent_relations() {
    let records: Vec<SlotRecord> = serde_json::from_str(
        r#"[
            {
                "day": "MON",
                "startTime": "09:00",
                "endTime": "10:00",
                "subject": "s-1",
                "teacher": "t-1",
                "slotType": "",
                "slotSnapshot": { "subject_name": "Old Physics", "slot_type": "SEMINAR" }
            },
            {
                "day": "TUE",
                "startTime": "10:00",
                "endTime": "11:00",
                "subject": { "name": "Physics" },
                "slotType": "lab"
            }
        ]"#,
    )
    .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].subject, Some(Reference::Id("s-1".to_string())));
    assert_eq!(records[0].teacher.as_ref().and_then(Reference::id), Some("t-1"));
    assert_eq!(records[0].slot_type, None);
    assert_eq!(records[0].slot_snapshot.as_ref().and_then(|s| s.slot_type), None);
    assert_eq!(records[1].subject.as_ref().and_then(Reference::name), Some("Physics"));
    assert_eq!(records[1].slot_type, Some(SlotType::Lab));
}
