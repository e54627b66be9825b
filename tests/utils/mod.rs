#![allow(dead_code)]
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use tokio::sync::broadcast;

use devconnect_bidding::api::{ApiError, BiddingBackend};
use devconnect_bidding::domain::{
    Bid, ClientEvent, Participant, RoomId, RoomSnapshot, RoomStatus, ServerEvent, UserId,
};
use devconnect_bidding::money::AmountValue;
use devconnect_bidding::realtime::{Transport, TransportError};
// See https://users.rust-lang.org/t/sharing-code-and-macros-in-tests-directory/3098/7

// Sample data for tests
pub fn sample_room_id() -> String {
    "room-1".to_string()
}

pub fn sample_client_id() -> String {
    "Client_1".to_string()
}

pub fn sample_opened_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

pub fn freelancer_1() -> Participant {
    Participant {
        freelancer_id: "Freelancer_1".to_string(),
        freelancer_name: "Freelancer 1".to_string(),
        rating: 4.5,
        online: false,
    }
}

pub fn freelancer_2() -> Participant {
    Participant {
        freelancer_id: "Freelancer_2".to_string(),
        freelancer_name: "Freelancer 2".to_string(),
        rating: 4.0,
        online: false,
    }
}

pub fn freelancer_3() -> Participant {
    Participant {
        freelancer_id: "Freelancer_3".to_string(),
        freelancer_name: "Freelancer 3".to_string(),
        rating: 3.5,
        online: false,
    }
}

pub fn bid_from(participant: &Participant, amount: AmountValue, seconds: i64) -> Bid {
    Bid {
        freelancer_id: participant.freelancer_id.clone(),
        freelancer_name: participant.freelancer_name.clone(),
        amount,
        time: sample_opened_at() + Duration::seconds(seconds),
    }
}

/// A fresh room in the waiting phase, starting price 1000.
pub fn sample_snapshot() -> RoomSnapshot {
    RoomSnapshot {
        id: sample_room_id(),
        project_title: "Marketplace revamp".to_string(),
        budget_range: "500-1000".to_string(),
        duration: "2 weeks".to_string(),
        client_id: sample_client_id(),
        starting_price: 1000,
        current_price: 1000,
        status: RoomStatus::Waiting,
        participants: vec![freelancer_1(), freelancer_2(), freelancer_3()],
        bids: Vec::new(),
        winner: None,
    }
}

/// Transport double that records every emission and lets tests inject pushes.
pub struct FakeTransport {
    emitted: Mutex<Vec<ClientEvent>>,
    events: broadcast::Sender<ServerEvent>,
}

impl FakeTransport {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(64);
        FakeTransport {
            emitted: Mutex::new(Vec::new()),
            events,
        }
    }

    pub fn emitted(&self) -> Vec<ClientEvent> {
        self.emitted.lock().unwrap().clone()
    }

    pub fn push(&self, event: ServerEvent) {
        let _ = self.events.send(event);
    }
}

impl Transport for FakeTransport {
    fn emit(&self, event: ClientEvent) -> Result<(), TransportError> {
        self.emitted.lock().unwrap().push(event);
        Ok(())
    }

    fn events(&self) -> broadcast::Receiver<ServerEvent> {
        self.events.subscribe()
    }
}

/// Backend double serving a fixed snapshot; control calls can be programmed
/// to fail with a server message.
pub struct FakeBackend {
    pub snapshot: RoomSnapshot,
    pub fail_with: Mutex<Option<String>>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn new(snapshot: RoomSnapshot) -> Self {
        FakeBackend {
            snapshot,
            fail_with: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn fail_next(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn outcome(&self) -> Result<(), ApiError> {
        match self.fail_with.lock().unwrap().take() {
            Some(message) => Err(ApiError::Server(message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BiddingBackend for FakeBackend {
    async fn fetch_room(&self, room_id: &RoomId) -> Result<RoomSnapshot, ApiError> {
        self.calls.lock().unwrap().push(format!("fetch {}", room_id));
        Ok(self.snapshot.clone())
    }

    async fn select_winner(
        &self,
        room_id: &RoomId,
        freelancer_id: &UserId,
    ) -> Result<(), ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("select {} {}", room_id, freelancer_id));
        self.outcome()
    }

    async fn cancel_bidding(&self, room_id: &RoomId) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(format!("cancel {}", room_id));
        self.outcome()
    }

    async fn rooms_for_project(&self, _project_id: &str) -> Result<Vec<RoomSnapshot>, ApiError> {
        Ok(vec![self.snapshot.clone()])
    }
}
