
// src/domain/bids.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::core::UserId;
use crate::money::AmountValue;

/// A bid as recorded by the server and pushed back to every participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    pub freelancer_id: UserId,
    pub freelancer_name: String,
    pub amount: AmountValue,
    pub time: DateTime<Utc>,
}

/// A candidate bid on its way to the server. The timestamp is assigned
/// server-side when the bid is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidSubmission {
    pub freelancer_id: UserId,
    pub freelancer_name: String,
    pub amount: AmountValue,
}
