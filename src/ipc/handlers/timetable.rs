use chrono::{Datelike, Local};
use serde_json::json;

use super::dataset;
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::model::weekday_label;
use crate::views;

fn required_str(req: &Request, key: &str) -> Result<String, serde_json::Value> {
    req.params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|v| v.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| err(&req.id, "bad_params", format!("missing {}", key), None))
}

fn day_view(req: &Request, state: &AppState, day: &str) -> serde_json::Value {
    let data = match dataset(state, req) {
        Ok(d) => d,
        Err(resp) => return resp,
    };
    let entries = views::entries_for_day(&data.timetable, day);
    match serde_json::to_value(entries) {
        Ok(rows) => ok(
            &req.id,
            json!({
                "day": day,
                "entries": rows,
                "count": entries.len(),
            }),
        ),
        Err(e) => err(&req.id, "encode_failed", e.to_string(), None),
    }
}

/// Full week, Monday through Sunday, empty weekend days included.
fn handle_week(state: &mut AppState, req: &Request) -> serde_json::Value {
    let data = match dataset(state, req) {
        Ok(d) => d,
        Err(resp) => return resp,
    };
    match serde_json::to_value(&data.timetable) {
        Ok(days) => ok(&req.id, json!({ "days": days })),
        Err(e) => err(&req.id, "encode_failed", e.to_string(), None),
    }
}

/// Any day label succeeds; a day with no sessions (or an unknown label)
/// comes back with an empty entry list.
fn handle_day(state: &mut AppState, req: &Request) -> serde_json::Value {
    let day = match required_str(req, "day") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    day_view(req, state, &day)
}

fn handle_today(state: &mut AppState, req: &Request) -> serde_json::Value {
    let today = weekday_label(Local::now().date_naive().weekday());
    day_view(req, state, today)
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "timetable.week" => Some(handle_week(state, req)),
        "timetable.day" => Some(handle_day(state, req)),
        "timetable.today" => Some(handle_today(state, req)),
        _ => None,
    }
}
