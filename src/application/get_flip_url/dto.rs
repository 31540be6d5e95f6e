use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FlipUrlResponse {
    pub catalogue_id: String,
    pub flip_url: Option<String>,
}
