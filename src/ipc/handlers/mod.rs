pub mod attendance;
pub mod core;
pub mod dashboard;
pub mod notes;
pub mod timetable;

use crate::ipc::error::err;
use crate::ipc::types::{AppState, Request};
use crate::store::Dataset;

/// Data methods answer `no_dataset` until the shell loads one.
pub(super) fn dataset<'a>(
    state: &'a AppState,
    req: &Request,
) -> Result<&'a Dataset, serde_json::Value> {
    state
        .dataset
        .as_ref()
        .ok_or_else(|| err(&req.id, "no_dataset", "load a dataset first", None))
}

pub(super) fn optional_str(req: &Request, key: &str) -> String {
    req.params
        .get(key)
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

pub(super) fn optional_bool(req: &Request, key: &str) -> bool {
    req.params
        .get(key)
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}
