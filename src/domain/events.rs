// src/domain/events.rs
use serde::{Deserialize, Serialize};

use super::bids::{Bid, BidSubmission};
use super::core::{Role, RoomId, UserId};
use super::rooms::RoomSnapshot;

/// Server-to-client pushes, a closed union over the channel's event names.
///
/// Wire framing is `{"event": <name>, "data": <payload>}`. Frames whose name
/// or payload fails to parse are dropped by the transport, so every value of
/// this type has already passed shape validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ServerEvent {
    /// Set of participant ids currently connected.
    #[serde(rename = "updateOnlineUsers")]
    UpdateOnlineUsers(Vec<UserId>),

    /// A bid was accepted by the server.
    #[serde(rename = "newBid")]
    NewBid(Bid),

    /// Full-state reconciliation push; overrides anything built from
    /// incremental events.
    #[serde(rename = "biddingData")]
    BiddingData(RoomSnapshot),

    /// Countdown mirror; either field may be absent.
    #[serde(rename = "timer-update")]
    TimerUpdate {
        #[serde(rename = "initialTimer", skip_serializing_if = "Option::is_none")]
        initial_timer: Option<i64>,
        #[serde(rename = "mainTimer", skip_serializing_if = "Option::is_none")]
        main_timer: Option<i64>,
    },

    #[serde(rename = "bidding-started")]
    BiddingStarted,

    #[serde(rename = "bidding-ended")]
    BiddingEnded,

    /// The submitter is not permitted in this room.
    #[serde(rename = "not-allowed")]
    NotAllowed,
}

/// Client-to-server emissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ClientEvent {
    #[serde(rename = "joinRoom", rename_all = "camelCase")]
    JoinRoom {
        room_id: RoomId,
        user_id: UserId,
        user_name: String,
        role: Role,
    },

    #[serde(rename = "leaveRoom", rename_all = "camelCase")]
    LeaveRoom { room_id: RoomId, user_id: UserId },

    #[serde(rename = "placeBid", rename_all = "camelCase")]
    PlaceBid { room_id: RoomId, bid: BidSubmission },
}

impl ClientEvent {
    /// Channel-level event name, as the server expects it.
    pub fn name(&self) -> &'static str {
        match self {
            ClientEvent::JoinRoom { .. } => "joinRoom",
            ClientEvent::LeaveRoom { .. } => "leaveRoom",
            ClientEvent::PlaceBid { .. } => "placeBid",
        }
    }
}
