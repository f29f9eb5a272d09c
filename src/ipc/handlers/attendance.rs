use serde_json::json;

use super::{dataset, optional_str};
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::views::{self, AttendanceQuery, StatusFilter, SubjectFilter};

/// `attendance.list` params: `search`, `status`, `subject`, all optional
/// strings. Absent or unrecognized values leave that dimension open.
fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let data = match dataset(state, req) {
        Ok(d) => d,
        Err(resp) => return resp,
    };

    let query = AttendanceQuery {
        search: optional_str(req, "search"),
        status: StatusFilter::parse(&optional_str(req, "status")),
        subject: SubjectFilter::parse(&optional_str(req, "subject")),
    };
    let records = views::filter_attendance(&data.attendance, &query);

    match serde_json::to_value(&records) {
        Ok(rows) => ok(
            &req.id,
            json!({
                "records": rows,
                "matched": records.len(),
                "total": data.attendance.len(),
            }),
        ),
        Err(e) => err(&req.id, "encode_failed", e.to_string(), None),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "attendance.list" => Some(handle_list(state, req)),
        _ => None,
    }
}
