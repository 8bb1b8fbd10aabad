use serde::{Deserialize, Deserializer, Serialize};

use super::calendar::{ClockTime, Day};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SlotType {
    #[serde(alias = "Lecture", alias = "lecture")]
    Lecture,
    #[serde(alias = "Lab", alias = "lab")]
    Lab,
    #[serde(alias = "Practical", alias = "practical")]
    Practical,
}

impl SlotType {
    pub fn label(self) -> &'static str {
        match self {
            SlotType::Lecture => "LECTURE",
            SlotType::Lab => "LAB",
            SlotType::Practical => "PRACTICAL",
        }
    }
}

impl std::str::FromStr for SlotType {
    type Err = crate::errors::TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LECTURE" => Ok(SlotType::Lecture),
            "LAB" => Ok(SlotType::Lab),
            "PRACTICAL" => Ok(SlotType::Practical),
            _ => Err(crate::errors::TimetableError::Validation(format!(
                "Unknown slot type: {}",
                s
            ))),
        }
    }
}

/// Decodes an optional slot type. Empty or unknown values decode as `None`.
fn lenient_slot_type<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<SlotType>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| raw.parse().ok()))
}

/// A related record as the backend embeds it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A foreign key that is either still a bare id or has been joined into the
/// referenced record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference {
    Id(String),
    Joined(NamedRef),
}

impl Reference {
    pub fn id(&self) -> Option<&str> {
        match self {
            Reference::Id(id) => Some(id),
            Reference::Joined(named) => named.id.as_deref(),
        }
    }

    /// Name of the referenced record, only available once joined.
    pub fn name(&self) -> Option<&str> {
        match self {
            Reference::Id(_) => None,
            Reference::Joined(named) => named.name.as_deref(),
        }
    }
}

/// Display values copied onto the slot when it was created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_slot_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub slot_type: Option<SlotType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRecord {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, alias = "timetable_id", skip_serializing_if = "Option::is_none")]
    pub timetable_id: Option<String>,
    pub day: Day,
    #[serde(alias = "start_time")]
    pub start_time: ClockTime,
    #[serde(alias = "end_time")]
    pub end_time: ClockTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,
    #[serde(default, rename = "subject_id", skip_serializing_if = "Option::is_none")]
    pub subject_ref: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher: Option<Reference>,
    #[serde(default, rename = "teacher_id", skip_serializing_if = "Option::is_none")]
    pub teacher_ref: Option<Reference>,
    #[serde(default, rename = "course_id", skip_serializing_if = "Option::is_none")]
    pub course_ref: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(
        default,
        alias = "slot_type",
        deserialize_with = "lenient_slot_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub slot_type: Option<SlotType>,
    #[serde(default, alias = "slot_snapshot", skip_serializing_if = "Option::is_none")]
    pub slot_snapshot: Option<SlotSnapshot>,
}

impl SlotRecord {
    /// A bare record with only its grid coordinates set.
    pub fn new(day: Day, start_time: ClockTime, end_time: ClockTime) -> Self {
        Self {
            id: None,
            timetable_id: None,
            day,
            start_time,
            end_time,
            subject: None,
            subject_ref: None,
            teacher: None,
            teacher_ref: None,
            course_ref: None,
            room: None,
            slot_type: None,
            slot_snapshot: None,
        }
    }
}

/// Payload for `POST /timetable`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlotRequest {
    #[serde(rename = "course_id")]
    pub course_id: String,
    #[serde(rename = "subject_id")]
    pub subject_id: String,
    #[serde(rename = "teacher_id")]
    pub teacher_id: String,
    pub day: Day,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub room: String,
    pub slot_type: SlotType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<u32>,
    pub slot_snapshot: SlotSnapshot,
}
