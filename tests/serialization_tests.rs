mod utils;

use devconnect_bidding::domain::{
    BidSubmission, ClientEvent, Role, RoomSnapshot, RoomStatus, ServerEvent,
};
use utils::*;

// Inbound frames

#[test]
fn test_new_bid_frame_parses() {
    let frame = r#"{
        "event": "newBid",
        "data": {
            "freelancerId": "Freelancer_2",
            "freelancerName": "Freelancer 2",
            "amount": 650,
            "time": "2024-03-01T09:00:02Z"
        }
    }"#;

    let event: ServerEvent = serde_json::from_str(frame).unwrap();
    match event {
        ServerEvent::NewBid(bid) => {
            assert_eq!(bid.freelancer_id, "Freelancer_2");
            assert_eq!(bid.amount, 650);
        }
        other => panic!("Expected newBid, got {:?}", other),
    }
}

#[test]
fn test_timer_update_allows_partial_payloads() {
    let only_main = r#"{"event": "timer-update", "data": {"mainTimer": 90}}"#;
    let event: ServerEvent = serde_json::from_str(only_main).unwrap();
    assert_eq!(
        event,
        ServerEvent::TimerUpdate {
            initial_timer: None,
            main_timer: Some(90),
        }
    );

    let only_initial = r#"{"event": "timer-update", "data": {"initialTimer": 30}}"#;
    let event: ServerEvent = serde_json::from_str(only_initial).unwrap();
    assert_eq!(
        event,
        ServerEvent::TimerUpdate {
            initial_timer: Some(30),
            main_timer: None,
        }
    );
}

#[test]
fn test_payloadless_frames_parse() {
    let started: ServerEvent = serde_json::from_str(r#"{"event": "bidding-started"}"#).unwrap();
    assert_eq!(started, ServerEvent::BiddingStarted);

    let ended: ServerEvent = serde_json::from_str(r#"{"event": "bidding-ended"}"#).unwrap();
    assert_eq!(ended, ServerEvent::BiddingEnded);

    let rejected: ServerEvent = serde_json::from_str(r#"{"event": "not-allowed"}"#).unwrap();
    assert_eq!(rejected, ServerEvent::NotAllowed);
}

#[test]
fn test_online_users_frame_parses() {
    let frame = r#"{"event": "updateOnlineUsers", "data": ["Freelancer_1", "Freelancer_3"]}"#;
    let event: ServerEvent = serde_json::from_str(frame).unwrap();
    assert_eq!(
        event,
        ServerEvent::UpdateOnlineUsers(vec![
            "Freelancer_1".to_string(),
            "Freelancer_3".to_string()
        ])
    );
}

#[test]
fn test_bidding_data_frame_defaults_missing_collections() {
    let frame = r#"{
        "event": "biddingData",
        "data": {
            "id": "room-1",
            "projectTitle": "Marketplace revamp",
            "budgetRange": "500-1000",
            "duration": "2 weeks",
            "clientId": "Client_1",
            "startingPrice": 1000,
            "currentPrice": 800,
            "status": "active"
        }
    }"#;

    let event: ServerEvent = serde_json::from_str(frame).unwrap();
    match event {
        ServerEvent::BiddingData(snapshot) => {
            assert_eq!(snapshot.status, RoomStatus::Active);
            assert_eq!(snapshot.current_price, 800);
            assert!(snapshot.participants.is_empty());
            assert!(snapshot.bids.is_empty());
            assert!(snapshot.winner.is_none());
        }
        other => panic!("Expected biddingData, got {:?}", other),
    }
}

#[test]
fn test_unknown_or_malformed_frames_fail_shape_validation() {
    // Typo'd event names never dispatch silently
    assert!(serde_json::from_str::<ServerEvent>(r#"{"event": "newBids", "data": {}}"#).is_err());
    // Non-numeric amount
    let bad_amount = r#"{
        "event": "newBid",
        "data": {"freelancerId": "F", "freelancerName": "F", "amount": "cheap", "time": "2024-03-01T09:00:02Z"}
    }"#;
    assert!(serde_json::from_str::<ServerEvent>(bad_amount).is_err());
    // Not a frame at all
    assert!(serde_json::from_str::<ServerEvent>("42").is_err());
}

// Outbound frames

#[test]
fn test_join_room_frame_shape() {
    let event = ClientEvent::JoinRoom {
        room_id: "room-1".to_string(),
        user_id: "Client_1".to_string(),
        user_name: "Client 1".to_string(),
        role: Role::Client,
    };
    assert_eq!(event.name(), "joinRoom");

    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains(r#""event":"joinRoom""#));
    assert!(json.contains(r#""roomId":"room-1""#));
    assert!(json.contains(r#""userId":"Client_1""#));
    assert!(json.contains(r#""userName":"Client 1""#));
    assert!(json.contains(r#""role":"client""#));
}

#[test]
fn test_place_bid_frame_shape() {
    let event = ClientEvent::PlaceBid {
        room_id: "room-1".to_string(),
        bid: BidSubmission {
            freelancer_id: "Freelancer_1".to_string(),
            freelancer_name: "Freelancer 1".to_string(),
            amount: 900,
        },
    };
    assert_eq!(event.name(), "placeBid");

    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains(r#""event":"placeBid""#));
    assert!(json.contains(r#""freelancerId":"Freelancer_1""#));
    assert!(json.contains(r#""amount":900"#));
}

#[test]
fn test_leave_room_frame_round_trips() {
    let event = ClientEvent::LeaveRoom {
        room_id: "room-1".to_string(),
        user_id: "Freelancer_1".to_string(),
    };
    let json = serde_json::to_string(&event).unwrap();
    let parsed: ClientEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, event);
}

// REST snapshot

#[test]
fn test_room_snapshot_uses_wire_field_names() {
    let snapshot = sample_snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains(r#""projectTitle":"Marketplace revamp""#));
    assert!(json.contains(r#""budgetRange":"500-1000""#));
    assert!(json.contains(r#""clientId":"Client_1""#));
    assert!(json.contains(r#""startingPrice":1000"#));
    assert!(json.contains(r#""status":"waiting""#));

    let parsed: RoomSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, snapshot);
}

#[test]
fn test_room_status_wire_strings() {
    for (status, text) in [
        (RoomStatus::Waiting, "\"waiting\""),
        (RoomStatus::Active, "\"active\""),
        (RoomStatus::Completed, "\"completed\""),
        (RoomStatus::Cancelled, "\"cancelled\""),
    ] {
        assert_eq!(serde_json::to_string(&status).unwrap(), text);
        assert_eq!(
            serde_json::from_str::<RoomStatus>(text).unwrap(),
            status
        );
    }
}
