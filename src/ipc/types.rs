use serde::Deserialize;

use crate::store::Dataset;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// `dataset` stays `None` until the shell sends `dataset.load`; every data
/// method gates on it.
pub struct AppState {
    pub dataset: Option<Dataset>,
    /// Where the loaded dataset came from: "builtin" or a snapshot path.
    pub source: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            dataset: None,
            source: None,
        }
    }
}
