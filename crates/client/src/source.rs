use async_trait::async_trait;
use campus_timetable_core::{
    errors::TimetableResult,
    models::{
        catalog::{Course, Subject, Teacher},
        slot::{CreateSlotRequest, SlotRecord},
    },
};
use mockall::automock;

/// Whose timetable to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimetableView {
    /// The signed-in student's own timetable
    Student,
    /// The signed-in teacher's own timetable
    Teacher,
    /// A course timetable, optionally narrowed to one semester
    Course {
        course_id: String,
        semester: Option<u32>,
    },
}

impl TimetableView {
    pub fn title(&self) -> String {
        match self {
            TimetableView::Student => "My timetable".to_string(),
            TimetableView::Teacher => "Teaching timetable".to_string(),
            TimetableView::Course {
                course_id,
                semester: Some(semester),
            } => format!("Course {} (semester {})", course_id, semester),
            TimetableView::Course { course_id, .. } => format!("Course {}", course_id),
        }
    }
}

/// Read and write access to timetable data held by the backend.
#[automock]
#[async_trait]
pub trait TimetableSource: Send + Sync {
    async fn fetch_slots(&self, view: TimetableView) -> TimetableResult<Vec<SlotRecord>>;

    async fn list_courses(&self) -> TimetableResult<Vec<Course>>;

    async fn list_subjects(&self, course_id: Option<String>) -> TimetableResult<Vec<Subject>>;

    async fn list_teachers(&self) -> TimetableResult<Vec<Teacher>>;

    async fn create_slot(&self, request: CreateSlotRequest) -> TimetableResult<SlotRecord>;
}
