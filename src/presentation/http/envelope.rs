use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Wraps every successful payload as `{"message": ...}`, the shape the mobile
/// client unpacks.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Envelope<T> {
    pub message: T,
}

impl<T> Envelope<T> {
    pub fn new(message: T) -> Self {
        Self { message }
    }
}
