use serde_json::json;

use super::{dataset, optional_bool, optional_str};
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::views::{self, NoteSortKey, NotesQuery, SubjectFilter};

/// `notes.list` params: `search`, `subject`, `sortBy` (optional strings)
/// and `starredOnly` (optional bool). Unknown sort keys fall back to the
/// last-modified order the library opens with.
fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let data = match dataset(state, req) {
        Ok(d) => d,
        Err(resp) => return resp,
    };

    let query = NotesQuery {
        search: optional_str(req, "search"),
        subject: SubjectFilter::parse(&optional_str(req, "subject")),
        starred_only: optional_bool(req, "starredOnly"),
        sort: NoteSortKey::parse(&optional_str(req, "sortBy")),
    };
    let notes = views::filter_notes(&data.notes, &query);

    match serde_json::to_value(&notes) {
        Ok(rows) => ok(
            &req.id,
            json!({
                "notes": rows,
                "matched": notes.len(),
                "total": data.notes.len(),
            }),
        ),
        Err(e) => err(&req.id, "encode_failed", e.to_string(), None),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "notes.list" => Some(handle_list(state, req)),
        _ => None,
    }
}
