// src/domain/view.rs
use serde::Serialize;

use super::bids::Bid;
use super::core::{Errors, RoomId, UserId};
use super::events::ServerEvent;
use super::rooms::{Participant, RoomSnapshot, RoomStatus};
use crate::money::AmountValue;

/// How long the rendering layer should keep the new-bid highlight up before
/// calling [`RoomView::clear_pulse`]. Cosmetic only.
pub const PULSE_MILLIS: u64 = 2000;

/// Local projection of one auction room, the single source of truth for what
/// the UI renders.
///
/// Two inputs feed it: incremental pushes for low-latency feedback, and the
/// `biddingData` full snapshot which overrides any drift from missed pushes.
/// Countdown fields are display-only mirrors of server values; nothing here
/// decrements them or decides locally that bidding has ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomView {
    pub room_id: RoomId,
    pub status: RoomStatus,
    pub starting_price: AmountValue,
    pub current_price: AmountValue,
    pub timer: Option<i64>,
    pub initial_timer: Option<i64>,
    /// Set by `bidding-started`, cleared by `bidding-ended`. Drives the UI
    /// countdown only; authoritative status still comes from snapshots.
    pub timer_running: bool,
    pub pulse: bool,
    pub participants: Vec<Participant>,
    pub bids: Vec<Bid>,
    pub winner: Option<Bid>,
}

impl RoomView {
    /// Builds the initial view from the REST snapshot fetched on mount.
    ///
    /// The price shown before any push arrives is the starting price, and the
    /// status stays at `waiting` until a push says otherwise.
    pub fn from_snapshot(snapshot: RoomSnapshot) -> Self {
        RoomView {
            room_id: snapshot.id,
            status: RoomStatus::Waiting,
            starting_price: snapshot.starting_price,
            current_price: snapshot.starting_price,
            timer: None,
            initial_timer: None,
            timer_running: false,
            pulse: false,
            participants: snapshot.participants,
            bids: snapshot.bids,
            winner: None,
        }
    }

    /// Applies one push event. Handler order for independent fields does not
    /// matter: a timer tick and a bid arriving back-to-back commute.
    pub fn apply(&mut self, event: ServerEvent) {
        match event {
            ServerEvent::UpdateOnlineUsers(online_ids) => {
                for participant in &mut self.participants {
                    participant.online = online_ids.contains(&participant.freelancer_id);
                }
            }
            ServerEvent::NewBid(bid) => {
                self.current_price = bid.amount;
                self.bids.push(bid);
                self.pulse = true;
            }
            ServerEvent::BiddingData(snapshot) => {
                self.current_price = snapshot.current_price;
                self.participants = snapshot.participants;
                self.bids = snapshot.bids;
                self.winner = snapshot.winner;
                self.status = snapshot.status;
            }
            ServerEvent::TimerUpdate {
                initial_timer,
                main_timer,
            } => {
                if let Some(value) = initial_timer {
                    self.initial_timer = Some(value);
                }
                if let Some(value) = main_timer {
                    self.timer = Some(value);
                }
            }
            ServerEvent::BiddingStarted => {
                self.timer_running = true;
            }
            ServerEvent::BiddingEnded => {
                self.timer_running = false;
                self.pulse = false;
            }
            // Rejection signal, not state; surfaced by the session.
            ServerEvent::NotAllowed => {}
        }
    }

    /// Drops the transient new-bid highlight.
    pub fn clear_pulse(&mut self) {
        self.pulse = false;
    }

    /// Most recent recorded bid from the given freelancer, if any.
    pub fn latest_bid_from(&self, freelancer_id: &UserId) -> Option<&Bid> {
        self.bids
            .iter()
            .rev()
            .find(|bid| &bid.freelancer_id == freelancer_id)
    }

    /// Optimistic local transition after a confirmed cancellation.
    pub fn mark_cancelled(&mut self) {
        self.status = RoomStatus::Cancelled;
        self.timer_running = false;
        self.pulse = false;
    }

    /// Optimistic local transition after a confirmed winner selection.
    ///
    /// The winner is always an already-recorded bid entry, never synthesized
    /// from caller input.
    pub fn complete_with_winner(&mut self, freelancer_id: &UserId) -> Result<(), Errors> {
        let winning_bid = self
            .latest_bid_from(freelancer_id)
            .cloned()
            .ok_or_else(|| Errors::NoBidFromFreelancer(freelancer_id.clone()))?;

        self.status = RoomStatus::Completed;
        self.timer_running = false;
        self.pulse = false;
        self.winner = Some(winning_bid);
        Ok(())
    }
}
