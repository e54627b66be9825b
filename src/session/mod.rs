// src/session/mod.rs
use std::sync::Arc;

use log::{debug, info};
use thiserror::Error;

use crate::api::{ApiError, BiddingBackend};
use crate::domain::{
    BidSubmission, ClientEvent, Errors, Identity, Role, RoomId, RoomView, ServerEvent,
};
use crate::money::AmountValue;
use crate::realtime::{Transport, TransportError};
use crate::stats::RoomStats;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Domain(#[from] Errors),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// One view's membership in one bidding room, from join to leave.
///
/// `open` fetches the authoritative snapshot and announces the join; from then
/// on the owner feeds inbound pushes through [`handle`](RoomSession::handle)
/// and the session's [`RoomView`] is the single writer of view state. Dropping
/// the session (or calling [`leave`](RoomSession::leave)) notifies the server;
/// events arriving afterwards are dropped, so a stale view never mutates.
pub struct RoomSession {
    room_id: RoomId,
    identity: Identity,
    transport: Arc<dyn Transport>,
    backend: Arc<dyn BiddingBackend>,
    view: RoomView,
    joined: bool,
}

impl RoomSession {
    pub async fn open(
        transport: Arc<dyn Transport>,
        backend: Arc<dyn BiddingBackend>,
        identity: Identity,
        room_id: RoomId,
    ) -> Result<Self, SessionError> {
        // Never join as an anonymous or unidentified participant.
        if identity.user_id.is_empty() || room_id.is_empty() {
            return Err(Errors::MissingIdentity.into());
        }

        let snapshot = backend.fetch_room(&room_id).await?;
        let view = RoomView::from_snapshot(snapshot);

        transport.emit(ClientEvent::JoinRoom {
            room_id: room_id.clone(),
            user_id: identity.user_id.clone(),
            user_name: identity.user_name.clone(),
            role: identity.role,
        })?;
        info!(
            "Joined room {} as {} ({})",
            room_id, identity.user_name, identity.role
        );

        Ok(RoomSession {
            room_id,
            identity,
            transport,
            backend,
            view,
            joined: true,
        })
    }

    pub fn view(&self) -> &RoomView {
        &self.view
    }

    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    pub fn stats(&self) -> RoomStats {
        RoomStats::of(&self.view)
    }

    /// Feeds one inbound push into the view. Events received outside the
    /// join/leave window are dropped. `not-allowed` comes back as an error for
    /// the caller to surface; it never implies a state change.
    pub fn handle(&mut self, event: ServerEvent) -> Result<(), Errors> {
        if !self.joined {
            debug!("Dropping event after leave: {:?}", event);
            return Ok(());
        }
        if let ServerEvent::NotAllowed = event {
            return Err(Errors::NotAllowed);
        }
        self.view.apply(event);
        Ok(())
    }

    /// Validates and emits a candidate bid (freelancer side).
    ///
    /// The bid is NOT appended locally; the authoritative `newBid` push does
    /// that, which keeps history correct when the server rejects a racing bid.
    pub fn submit_bid(&mut self, amount: AmountValue) -> Result<(), SessionError> {
        self.require(Role::Freelancer)?;
        if amount <= 0 {
            return Err(Errors::InvalidBidAmount(amount).into());
        }
        if !self.view.timer_running {
            return Err(Errors::BiddingNotActive.into());
        }
        if amount >= self.view.current_price {
            return Err(Errors::BidNotBelowCurrent {
                amount,
                current: self.view.current_price,
            }
            .into());
        }

        self.transport.emit(ClientEvent::PlaceBid {
            room_id: self.room_id.clone(),
            bid: BidSubmission {
                freelancer_id: self.identity.user_id.clone(),
                freelancer_name: self.identity.user_name.clone(),
                amount,
            },
        })?;
        Ok(())
    }

    /// Cancels the auction (owner side). The status flips to `cancelled` only
    /// after the backend confirms; on failure the view is untouched.
    pub async fn cancel_auction(&mut self) -> Result<(), SessionError> {
        self.require(Role::Client)?;
        if self.view.status.is_terminal() {
            return Err(Errors::RoomClosed(self.view.status).into());
        }

        self.backend.cancel_bidding(&self.room_id).await?;
        self.view.mark_cancelled();
        info!("Room {} cancelled", self.room_id);
        Ok(())
    }

    /// Selects the winning freelancer (owner side). The winning amount is
    /// looked up from the recorded bid history, never taken from caller input.
    pub async fn select_winner(&mut self, freelancer_id: &str) -> Result<(), SessionError> {
        self.require(Role::Client)?;
        let freelancer_id = freelancer_id.to_string();
        // Refuse before the REST round-trip when no such bid exists.
        if self.view.latest_bid_from(&freelancer_id).is_none() {
            return Err(Errors::NoBidFromFreelancer(freelancer_id).into());
        }

        self.backend
            .select_winner(&self.room_id, &freelancer_id)
            .await?;
        self.view.complete_with_winner(&freelancer_id)?;
        info!("Room {} completed, winner {}", self.room_id, freelancer_id);
        Ok(())
    }

    /// Announces departure. Idempotent; also run on drop.
    pub fn leave(&mut self) {
        if !self.joined {
            return;
        }
        self.joined = false;
        let leave = ClientEvent::LeaveRoom {
            room_id: self.room_id.clone(),
            user_id: self.identity.user_id.clone(),
        };
        if let Err(err) = self.transport.emit(leave) {
            debug!("Could not announce leave for room {}: {}", self.room_id, err);
        }
    }

    fn require(&self, role: Role) -> Result<(), Errors> {
        if !self.joined {
            return Err(Errors::NotJoined);
        }
        if self.identity.role != role {
            return Err(Errors::WrongRole(self.identity.role));
        }
        Ok(())
    }
}

impl Drop for RoomSession {
    fn drop(&mut self) {
        self.leave();
    }
}
