use std::cmp::Ordering;

use crate::model::{
    AttendanceRecord, AttendanceStatus, DaySchedule, Note, SubjectAttendanceSummary, TimetableEntry,
};

/// Slug form a shell sends as a subject filter value:
/// lower-cased, first space folded to a hyphen.
/// Only the first space is replaced; both sides of the wire apply the same
/// transform, so multi-space subjects still match as long as nobody "fixes"
/// one side alone.
pub fn subject_slug(name: &str) -> String {
    name.to_lowercase().replacen(' ', "-", 1)
}

/// Subjects below this percentage count as low attendance.
pub const LOW_ATTENDANCE_THRESHOLD: f64 = 75.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(AttendanceStatus),
}

impl StatusFilter {
    /// "all" and anything unrecognized put no constraint on the dimension.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "present" => StatusFilter::Only(AttendanceStatus::Present),
            "absent" => StatusFilter::Only(AttendanceStatus::Absent),
            "late" => StatusFilter::Only(AttendanceStatus::Late),
            _ => StatusFilter::All,
        }
    }

    fn matches(self, status: AttendanceStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(want) => want == status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubjectFilter {
    #[default]
    All,
    Slug(String),
}

impl SubjectFilter {
    /// Empty string and "all-subjects" both mean unconstrained.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" | "all-subjects" => SubjectFilter::All,
            slug => SubjectFilter::Slug(slug.to_string()),
        }
    }

    fn matches(&self, subject: &str) -> bool {
        match self {
            SubjectFilter::All => true,
            SubjectFilter::Slug(slug) => subject_slug(subject) == *slug,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteSortKey {
    Title,
    Created,
    #[default]
    Modified,
}

impl NoteSortKey {
    /// Unrecognized keys fall back to the default sort.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "title" => NoteSortKey::Title,
            "created" => NoteSortKey::Created,
            _ => NoteSortKey::Modified,
        }
    }

    fn comparator(self) -> fn(&Note, &Note) -> Ordering {
        match self {
            NoteSortKey::Title => cmp_title,
            NoteSortKey::Created => cmp_created,
            NoteSortKey::Modified => cmp_modified,
        }
    }
}

fn cmp_title(a: &Note, b: &Note) -> Ordering {
    a.title.to_lowercase().cmp(&b.title.to_lowercase())
}

fn cmp_created(a: &Note, b: &Note) -> Ordering {
    b.created_at.cmp(&a.created_at)
}

fn cmp_modified(a: &Note, b: &Note) -> Ordering {
    b.last_modified.cmp(&a.last_modified)
}

/// Shared scaffolding for the list views: keep items passing `predicate`,
/// then order them with `comparator` when one is selected. The sort is
/// stable, so ties keep their filtered-order relative position, and without
/// a comparator the input order is preserved. The source slice is never
/// touched.
fn select<'a, T, P>(
    items: &'a [T],
    predicate: P,
    comparator: Option<fn(&T, &T) -> Ordering>,
) -> Vec<&'a T>
where
    P: Fn(&T) -> bool,
{
    let mut out: Vec<&'a T> = items.iter().filter(|item| predicate(item)).collect();
    if let Some(cmp) = comparator {
        out.sort_by(|a, b| cmp(a, b));
    }
    out
}

#[derive(Debug, Clone, Default)]
pub struct AttendanceQuery {
    pub search: String,
    pub status: StatusFilter,
    pub subject: SubjectFilter,
}

/// Attendance log view: all three predicates must hold. The free-text query
/// matches the subject case-insensitively or the ISO date string literally.
/// Output keeps the records' original relative order.
pub fn filter_attendance<'a>(
    records: &'a [AttendanceRecord],
    query: &AttendanceQuery,
) -> Vec<&'a AttendanceRecord> {
    let needle = query.search.to_lowercase();
    select(
        records,
        |record| {
            let date_label = record.date.format("%Y-%m-%d").to_string();
            let matches_search = record.subject.to_lowercase().contains(&needle)
                || date_label.contains(query.search.as_str());
            matches_search
                && query.status.matches(record.status)
                && query.subject.matches(&record.subject)
        },
        None,
    )
}

/// Unweighted mean of the per-subject percentages. Empty input is 0.0, not
/// a division by zero.
pub fn overall_percentage(summaries: &[SubjectAttendanceSummary]) -> f64 {
    if summaries.is_empty() {
        return 0.0;
    }
    let sum: f64 = summaries.iter().map(|s| s.percentage).sum();
    sum / summaries.len() as f64
}

pub fn low_attendance_count(summaries: &[SubjectAttendanceSummary]) -> usize {
    summaries
        .iter()
        .filter(|s| s.percentage < LOW_ATTENDANCE_THRESHOLD)
        .count()
}

#[derive(Debug, Clone, Default)]
pub struct NotesQuery {
    pub search: String,
    pub subject: SubjectFilter,
    pub starred_only: bool,
    pub sort: NoteSortKey,
}

/// Notes library view: filter, then order by exactly one key. Title sorts
/// ascending on the case-folded title; the date keys sort newest first.
pub fn filter_notes<'a>(notes: &'a [Note], query: &NotesQuery) -> Vec<&'a Note> {
    let needle = query.search.to_lowercase();
    select(
        notes,
        |note| {
            let matches_search = note.title.to_lowercase().contains(&needle)
                || note.content.to_lowercase().contains(&needle)
                || note.tags.iter().any(|tag| tag.to_lowercase().contains(&needle));
            matches_search
                && query.subject.matches(&note.subject)
                && (!query.starred_only || note.starred)
        },
        Some(query.sort.comparator()),
    )
}

/// Day lookup for the timetable and the dashboard's today panel. Unknown or
/// empty days yield an empty slice, never an error.
pub fn entries_for_day<'a>(week: &'a [DaySchedule], day: &str) -> &'a [TimetableEntry] {
    week.iter()
        .find(|schedule| schedule.day == day)
        .map(|schedule| schedule.entries.as_slice())
        .unwrap_or(&[])
}
