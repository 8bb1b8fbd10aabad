//! # Slot creation form
//!
//! Creating a slot is a cascade of dependent choices: the course narrows the
//! subjects, and the subject narrows the teachers. Changing an earlier choice
//! clears every later one, so the form can never hold a subject from another
//! course or a teacher who is not assigned to the subject.
//!
//! [`SlotForm::build`] validates the draft and captures the slot snapshot from
//! the names selected at that moment.

use crate::{
    errors::{TimetableError, TimetableResult},
    models::{
        calendar::{ClockTime, Day},
        catalog::{Course, Subject, Teacher},
        slot::{CreateSlotRequest, SlotSnapshot, SlotType},
    },
};

#[derive(Debug, Clone, Default)]
pub struct SlotForm {
    course: Option<Course>,
    subject: Option<Subject>,
    teacher: Option<Teacher>,
    day: Option<Day>,
    start_time: Option<ClockTime>,
    end_time: Option<ClockTime>,
    room: Option<String>,
    slot_type: Option<SlotType>,
    semester: Option<u32>,
}

impl SlotForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn course(&self) -> Option<&Course> {
        self.course.as_ref()
    }

    pub fn subject(&self) -> Option<&Subject> {
        self.subject.as_ref()
    }

    pub fn teacher(&self) -> Option<&Teacher> {
        self.teacher.as_ref()
    }

    /// Selects the course. Picking a different course clears subject and teacher.
    pub fn select_course(&mut self, course: Course) {
        if self.course.as_ref().map(|c| &c.id) != Some(&course.id) {
            self.subject = None;
            self.teacher = None;
        }
        self.course = Some(course);
    }

    /// Subjects offered by the selected course.
    pub fn subjects_for_course<'a>(&self, subjects: &'a [Subject]) -> Vec<&'a Subject> {
        let Some(course) = &self.course else {
            return Vec::new();
        };
        subjects
            .iter()
            .filter(|s| s.course_id.as_deref() == Some(course.id.as_str()))
            .collect()
    }

    /// Selects the subject. Picking a different subject clears the teacher.
    pub fn select_subject(&mut self, subject: Subject) -> TimetableResult<()> {
        let course = self
            .course
            .as_ref()
            .ok_or_else(|| TimetableError::Validation("Select a course first".to_string()))?;

        if subject.course_id.as_deref() != Some(course.id.as_str()) {
            return Err(TimetableError::Validation(format!(
                "Subject {} does not belong to course {}",
                subject.name, course.name
            )));
        }

        if self.subject.as_ref().map(|s| &s.id) != Some(&subject.id) {
            self.teacher = None;
        }
        self.subject = Some(subject);
        Ok(())
    }

    /// Teachers who may take the selected subject.
    pub fn teachers_for_subject<'a>(&self, teachers: &'a [Teacher]) -> Vec<&'a Teacher> {
        let Some(subject) = &self.subject else {
            return Vec::new();
        };
        teachers.iter().filter(|t| t.can_teach(&subject.id)).collect()
    }

    pub fn select_teacher(&mut self, teacher: Teacher) -> TimetableResult<()> {
        let subject = self
            .subject
            .as_ref()
            .ok_or_else(|| TimetableError::Validation("Select a subject first".to_string()))?;

        if !teacher.can_teach(&subject.id) {
            return Err(TimetableError::Validation(format!(
                "{} is not assigned to {}",
                teacher.name, subject.name
            )));
        }

        self.teacher = Some(teacher);
        Ok(())
    }

    pub fn set_day(&mut self, day: Day) {
        self.day = Some(day);
    }

    pub fn set_times(&mut self, start: ClockTime, end: ClockTime) {
        self.start_time = Some(start);
        self.end_time = Some(end);
    }

    pub fn set_room(&mut self, room: impl Into<String>) {
        self.room = Some(room.into());
    }

    pub fn set_slot_type(&mut self, slot_type: SlotType) {
        self.slot_type = Some(slot_type);
    }

    pub fn set_semester(&mut self, semester: u32) {
        self.semester = Some(semester);
    }

    /// Validates the draft and produces the request body.
    ///
    /// The slot type defaults to a lecture when none was chosen.
    pub fn build(&self) -> TimetableResult<CreateSlotRequest> {
        let course = required(self.course.as_ref(), "course")?;
        let subject = required(self.subject.as_ref(), "subject")?;
        let teacher = required(self.teacher.as_ref(), "teacher")?;
        let day = required(self.day, "day")?;
        let start_time = required(self.start_time, "start time")?;
        let end_time = required(self.end_time, "end time")?;

        if end_time <= start_time {
            return Err(TimetableError::Validation(format!(
                "End time {} must be after start time {}",
                end_time, start_time
            )));
        }

        let room = self
            .room
            .as_deref()
            .map(str::trim)
            .filter(|room| !room.is_empty())
            .ok_or_else(|| TimetableError::Validation("Room is required".to_string()))?
            .to_string();

        let slot_type = self.slot_type.unwrap_or(SlotType::Lecture);

        Ok(CreateSlotRequest {
            course_id: course.id.clone(),
            subject_id: subject.id.clone(),
            teacher_id: teacher.id.clone(),
            day,
            start_time,
            end_time,
            room: room.clone(),
            slot_type,
            semester: self.semester,
            slot_snapshot: SlotSnapshot {
                subject_name: Some(subject.name.clone()),
                teacher_name: Some(teacher.name.clone()),
                room: Some(room),
                slot_type: Some(slot_type),
            },
        })
    }
}

fn required<T>(value: Option<T>, field: &str) -> TimetableResult<T> {
    value.ok_or_else(|| TimetableError::Validation(format!("Missing {}", field)))
}
