use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{
    Attachment, AttachmentKind, AttendanceRecord, AttendanceStatus, ClassKind, DaySchedule, Note,
    SubjectAttendanceSummary, TimetableEntry, WEEK_DAYS,
};

/// Everything the handlers read. Loaded once per `dataset.load` and never
/// written back; the shell owns all mutation flows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Subjects the shell's filter dropdowns enumerate.
    pub subjects: Vec<String>,
    pub attendance: Vec<AttendanceRecord>,
    pub subject_summaries: Vec<SubjectAttendanceSummary>,
    pub timetable: Vec<DaySchedule>,
    pub notes: Vec<Note>,
}

/// Read-only JSON snapshot, same shape `Dataset` serializes to.
pub fn load_snapshot(path: &Path) -> anyhow::Result<Dataset> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read dataset snapshot {}", path.display()))?;
    let dataset: Dataset = serde_json::from_str(&text)
        .with_context(|| format!("parse dataset snapshot {}", path.display()))?;
    validate(&dataset).with_context(|| format!("validate dataset snapshot {}", path.display()))?;
    Ok(dataset)
}

/// Timetable day keys are fixed to the seven calendar days; reject snapshots
/// that would silently fail every day lookup.
fn validate(dataset: &Dataset) -> anyhow::Result<()> {
    for schedule in &dataset.timetable {
        if !WEEK_DAYS.contains(&schedule.day.as_str()) {
            anyhow::bail!("unknown timetable day {:?}", schedule.day);
        }
    }
    for row in &dataset.subject_summaries {
        if row.present > row.total {
            anyhow::bail!(
                "subject {:?} has present {} greater than total {}",
                row.subject,
                row.present,
                row.total
            );
        }
    }
    Ok(())
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    // Seed literals only; every call site is a valid calendar date.
    NaiveDate::from_ymd_opt(year, month, day).expect("seed date")
}

fn entry(time: &str, subject: &str, room: &str, instructor: &str, kind: ClassKind) -> TimetableEntry {
    TimetableEntry {
        time: time.to_string(),
        subject: subject.to_string(),
        room: room.to_string(),
        instructor: instructor.to_string(),
        kind,
    }
}

impl Dataset {
    /// The built-in demo dataset the daemon serves until a shell loads its
    /// own snapshot.
    pub fn builtin() -> Self {
        let subjects = [
            "Mathematics",
            "Physics",
            "Chemistry",
            "Computer Science",
            "English",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let attendance = vec![
            AttendanceRecord {
                id: "1".into(),
                date: ymd(2024, 1, 15),
                subject: "Mathematics".into(),
                status: AttendanceStatus::Present,
                time: "9:00 AM".into(),
            },
            AttendanceRecord {
                id: "2".into(),
                date: ymd(2024, 1, 15),
                subject: "Physics".into(),
                status: AttendanceStatus::Absent,
                time: "11:00 AM".into(),
            },
            AttendanceRecord {
                id: "3".into(),
                date: ymd(2024, 1, 14),
                subject: "Computer Science".into(),
                status: AttendanceStatus::Present,
                time: "2:00 PM".into(),
            },
            AttendanceRecord {
                id: "4".into(),
                date: ymd(2024, 1, 14),
                subject: "English".into(),
                status: AttendanceStatus::Late,
                time: "4:00 PM".into(),
            },
            AttendanceRecord {
                id: "5".into(),
                date: ymd(2024, 1, 13),
                subject: "Chemistry".into(),
                status: AttendanceStatus::Present,
                time: "10:00 AM".into(),
            },
        ];

        let subject_summaries = vec![
            SubjectAttendanceSummary {
                subject: "Mathematics".into(),
                present: 28,
                total: 32,
                percentage: 87.5,
            },
            SubjectAttendanceSummary {
                subject: "Physics".into(),
                present: 22,
                total: 30,
                percentage: 73.3,
            },
            SubjectAttendanceSummary {
                subject: "Chemistry".into(),
                present: 25,
                total: 28,
                percentage: 89.3,
            },
            SubjectAttendanceSummary {
                subject: "Computer Science".into(),
                present: 30,
                total: 32,
                percentage: 93.8,
            },
            SubjectAttendanceSummary {
                subject: "English".into(),
                present: 18,
                total: 26,
                percentage: 69.2,
            },
        ];

        let timetable = vec![
            DaySchedule {
                day: "Monday".into(),
                entries: vec![
                    entry("9:00 AM - 10:30 AM", "Mathematics", "A-101", "Dr. Smith", ClassKind::Lecture),
                    entry("11:00 AM - 12:30 PM", "Physics", "B-204", "Prof. Johnson", ClassKind::Lecture),
                    entry("2:00 PM - 3:30 PM", "Computer Science", "C-301", "Dr. Brown", ClassKind::Practical),
                ],
            },
            DaySchedule {
                day: "Tuesday".into(),
                entries: vec![
                    entry("9:00 AM - 10:30 AM", "Chemistry", "Lab-A", "Dr. Wilson", ClassKind::Lab),
                    entry("11:00 AM - 12:30 PM", "English", "A-205", "Ms. Davis", ClassKind::Tutorial),
                    entry("2:00 PM - 3:30 PM", "Mathematics", "A-101", "Dr. Smith", ClassKind::Tutorial),
                ],
            },
            DaySchedule {
                day: "Wednesday".into(),
                entries: vec![
                    entry("9:00 AM - 10:30 AM", "Physics", "B-204", "Prof. Johnson", ClassKind::Lecture),
                    entry("11:00 AM - 12:30 PM", "Computer Science", "C-301", "Dr. Brown", ClassKind::Lecture),
                    entry("2:00 PM - 4:00 PM", "Physics Lab", "Lab-B", "Prof. Johnson", ClassKind::Lab),
                ],
            },
            DaySchedule {
                day: "Thursday".into(),
                entries: vec![
                    entry("9:00 AM - 10:30 AM", "Mathematics", "A-101", "Dr. Smith", ClassKind::Lecture),
                    entry("11:00 AM - 12:30 PM", "Chemistry", "A-301", "Dr. Wilson", ClassKind::Lecture),
                    entry("2:00 PM - 3:30 PM", "English", "A-205", "Ms. Davis", ClassKind::Lecture),
                ],
            },
            DaySchedule {
                day: "Friday".into(),
                entries: vec![
                    entry("9:00 AM - 10:30 AM", "Computer Science", "C-301", "Dr. Brown", ClassKind::Lecture),
                    entry("11:00 AM - 12:30 PM", "Mathematics", "A-101", "Dr. Smith", ClassKind::Tutorial),
                    entry("2:00 PM - 4:00 PM", "Chemistry Lab", "Lab-A", "Dr. Wilson", ClassKind::Lab),
                ],
            },
            DaySchedule {
                day: "Saturday".into(),
                entries: Vec::new(),
            },
            DaySchedule {
                day: "Sunday".into(),
                entries: Vec::new(),
            },
        ];

        let notes = vec![
            Note {
                id: "1".into(),
                title: "Calculus Integration Techniques".into(),
                subject: "Mathematics".into(),
                content: "Detailed notes on various integration methods including substitution, parts, and partial fractions...".into(),
                attachments: vec![
                    Attachment {
                        name: "integration_examples.pdf".into(),
                        kind: AttachmentKind::Pdf,
                        size: "2.3 MB".into(),
                    },
                    Attachment {
                        name: "formula_sheet.jpg".into(),
                        kind: AttachmentKind::Image,
                        size: "1.2 MB".into(),
                    },
                ],
                tags: vec!["calculus".into(), "integration".into(), "formulas".into()],
                created_at: ymd(2024, 1, 15),
                last_modified: ymd(2024, 1, 16),
                starred: true,
            },
            Note {
                id: "2".into(),
                title: "Quantum Physics Fundamentals".into(),
                subject: "Physics".into(),
                content: "Introduction to quantum mechanics, wave-particle duality, and Heisenberg uncertainty principle...".into(),
                attachments: vec![Attachment {
                    name: "quantum_diagrams.png".into(),
                    kind: AttachmentKind::Image,
                    size: "850 KB".into(),
                }],
                tags: vec!["quantum".into(), "mechanics".into(), "physics".into()],
                created_at: ymd(2024, 1, 14),
                last_modified: ymd(2024, 1, 14),
                starred: false,
            },
            Note {
                id: "3".into(),
                title: "Data Structures and Algorithms".into(),
                subject: "Computer Science".into(),
                content: "Comprehensive guide to arrays, linked lists, stacks, queues, trees, and graph algorithms...".into(),
                attachments: vec![
                    Attachment {
                        name: "algorithm_complexity.pdf".into(),
                        kind: AttachmentKind::Pdf,
                        size: "1.8 MB".into(),
                    },
                    Attachment {
                        name: "code_examples.txt".into(),
                        kind: AttachmentKind::Document,
                        size: "45 KB".into(),
                    },
                ],
                tags: vec!["algorithms".into(), "data-structures".into(), "programming".into()],
                created_at: ymd(2024, 1, 13),
                last_modified: ymd(2024, 1, 15),
                starred: true,
            },
        ];

        Dataset {
            subjects,
            attendance,
            subject_summaries,
            timetable,
            notes,
        }
    }
}
