// src/domain/core.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::rooms::RoomStatus;
use crate::money::AmountValue;

pub type UserId = String;
pub type RoomId = String;

/// Which privilege set the server applies to this connection's actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Freelancer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Client => write!(f, "client"),
            Role::Freelancer => write!(f, "freelancer"),
        }
    }
}

/// Authenticated identity a session joins a room with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub user_name: String,
    pub role: Role,
}

impl Identity {
    pub fn new(user_id: impl Into<UserId>, user_name: impl Into<String>, role: Role) -> Self {
        Identity {
            user_id: user_id.into(),
            user_name: user_name.into(),
            role,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Errors {
    #[error("Missing identity or room id, refusing to join")]
    MissingIdentity,

    #[error("Not joined to a room")]
    NotJoined,

    #[error("Action not available to role: {0}")]
    WrongRole(Role),

    #[error("Bid amount must be positive: {0}")]
    InvalidBidAmount(AmountValue),

    #[error("Bid {amount} must be below the current price {current}")]
    BidNotBelowCurrent {
        amount: AmountValue,
        current: AmountValue,
    },

    #[error("Bidding is not active")]
    BiddingNotActive,

    #[error("No recorded bid from freelancer: {0}")]
    NoBidFromFreelancer(UserId),

    #[error("Room is already {0}")]
    RoomClosed(RoomStatus),

    #[error("Not permitted in this room")]
    NotAllowed,
}
