use std::path::PathBuf;

use serde_json::json;

use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::store::{self, Dataset};

fn handle_health(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "datasetLoaded": state.dataset.is_some(),
            "source": state.source,
        }),
    )
}

fn dataset_summary(source: &str, dataset: &Dataset) -> serde_json::Value {
    json!({
        "source": source,
        "subjects": dataset.subjects,
        "counts": {
            "attendance": dataset.attendance.len(),
            "subjectSummaries": dataset.subject_summaries.len(),
            "timetableDays": dataset.timetable.len(),
            "notes": dataset.notes.len(),
        }
    })
}

/// `dataset.load` without a path serves the built-in seed; with a path it
/// reads a JSON snapshot. Either way the previous dataset is replaced whole.
fn handle_dataset_load(state: &mut AppState, req: &Request) -> serde_json::Value {
    let path = req
        .params
        .get("path")
        .and_then(|v| v.as_str())
        .map(PathBuf::from);

    match path {
        Some(path) => match store::load_snapshot(&path) {
            Ok(dataset) => {
                let source = path.to_string_lossy().to_string();
                let summary = dataset_summary(&source, &dataset);
                state.dataset = Some(dataset);
                state.source = Some(source);
                ok(&req.id, summary)
            }
            Err(e) => err(&req.id, "dataset_load_failed", format!("{e:#}"), None),
        },
        None => {
            let dataset = Dataset::builtin();
            let summary = dataset_summary("builtin", &dataset);
            state.dataset = Some(dataset);
            state.source = Some("builtin".to_string());
            ok(&req.id, summary)
        }
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(state, req)),
        "dataset.load" => Some(handle_dataset_load(state, req)),
        _ => None,
    }
}
