// src/api/types.rs
use serde::{Deserialize, Serialize};

use crate::domain::UserId;

/// Standard response wrapper used by the DevConnect backend.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectWinnerRequest {
    pub freelancer_id: UserId,
}
