use chrono::{Datelike, Local};
use serde_json::json;

use super::dataset;
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::model::weekday_label;
use crate::views;

/// One round trip for everything the dashboard renders: the attendance
/// stat cards, the per-subject rows, and the today panel.
fn handle_overview(state: &mut AppState, req: &Request) -> serde_json::Value {
    let data = match dataset(state, req) {
        Ok(d) => d,
        Err(resp) => return resp,
    };

    let today = weekday_label(Local::now().date_naive().weekday());
    let todays_classes = views::entries_for_day(&data.timetable, today);

    let subjects = match serde_json::to_value(&data.subject_summaries) {
        Ok(v) => v,
        Err(e) => return err(&req.id, "encode_failed", e.to_string(), None),
    };
    let todays = match serde_json::to_value(todays_classes) {
        Ok(v) => v,
        Err(e) => return err(&req.id, "encode_failed", e.to_string(), None),
    };

    ok(
        &req.id,
        json!({
            "overallAttendance": views::overall_percentage(&data.subject_summaries),
            "lowAttendanceCount": views::low_attendance_count(&data.subject_summaries),
            "lowAttendanceThreshold": views::LOW_ATTENDANCE_THRESHOLD,
            "subjects": subjects,
            "totalNotes": data.notes.len(),
            "today": today,
            "todaysClasses": todays,
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "dashboard.overview" => Some(handle_overview(state, req)),
        _ => None,
    }
}
