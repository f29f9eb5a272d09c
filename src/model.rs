use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// One logged class session for the signed-in student.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub date: NaiveDate,
    pub subject: String,
    pub status: AttendanceStatus,
    /// Display label like "9:00 AM"; carried verbatim, never parsed.
    pub time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

/// Per-subject attendance totals. `percentage` comes from the data source;
/// it is not recomputed from present/total here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectAttendanceSummary {
    pub subject: String,
    pub present: u32,
    pub total: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableEntry {
    /// Range label like "9:00 AM - 10:30 AM".
    pub time: String,
    pub subject: String,
    pub room: String,
    pub instructor: String,
    #[serde(rename = "type")]
    pub kind: ClassKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassKind {
    Lecture,
    Practical,
    Lab,
    Tutorial,
}

/// One day of the week plan. The week is an ordered list of these,
/// Monday through Sunday; weekend days carry empty entry lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub day: String,
    pub entries: Vec<TimetableEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub content: String,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: NaiveDate,
    pub last_modified: NaiveDate,
    pub starred: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
    /// Human-readable size like "2.3 MB"; display-only.
    pub size: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Pdf,
    Image,
    Document,
}

/// Canonical day labels, Monday first. Timetable data and day lookups use
/// these exact strings.
pub const WEEK_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
