// src/domain/rooms.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use super::bids::Bid;
use super::core::{RoomId, UserId};
use crate::money::AmountValue;

/// Room lifecycle as observed by the client.
///
/// `Completed` and `Cancelled` are terminal; the client handles no further
/// transitions out of them short of a fresh authoritative snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    #[default]
    Waiting,
    Active,
    Completed,
    Cancelled,
}

impl RoomStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RoomStatus::Completed | RoomStatus::Cancelled)
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomStatus::Waiting => write!(f, "waiting"),
            RoomStatus::Active => write!(f, "active"),
            RoomStatus::Completed => write!(f, "completed"),
            RoomStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// An invited freelancer. Membership is fixed for the room's lifetime; only
/// the `online` flag toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub freelancer_id: UserId,
    pub freelancer_name: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub online: bool,
}

/// Full authoritative state of one reverse-auction room, as fetched over REST
/// or pushed as the reconciliation event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSnapshot {
    pub id: RoomId,
    pub project_title: String,
    pub budget_range: String,
    pub duration: String,
    pub client_id: UserId,
    pub starting_price: AmountValue,
    pub current_price: AmountValue,
    #[serde(default)]
    pub status: RoomStatus,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub bids: Vec<Bid>,
    #[serde(default)]
    pub winner: Option<Bid>,
}
