// src/stats.rs
//! Derived statistics over a room's bid history.
//!
//! All of these are pure functions of the append-only `bids` list plus the
//! price fields; they are recomputed on demand, never cached.

use std::collections::HashSet;

use crate::domain::{Bid, RoomView};
use crate::money::AmountValue;

/// Lowest recorded bid, falling back to the current price when no bids exist
/// ("lowest bid" is undefined otherwise).
pub fn lowest_bid(bids: &[Bid], current_price: AmountValue) -> AmountValue {
    bids.iter()
        .map(|bid| bid.amount)
        .min()
        .unwrap_or(current_price)
}

pub fn total_bids(bids: &[Bid]) -> usize {
    bids.len()
}

pub fn unique_bidders(bids: &[Bid]) -> usize {
    bids.iter()
        .map(|bid| bid.freelancer_id.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Rounded mean of all bid amounts, `0` for an empty history.
pub fn average_bid(bids: &[Bid]) -> AmountValue {
    if bids.is_empty() {
        return 0;
    }
    let sum: AmountValue = bids.iter().map(|bid| bid.amount).sum();
    (sum as f64 / bids.len() as f64).round() as AmountValue
}

/// What the client saves relative to the starting price.
pub fn savings(bids: &[Bid], starting_price: AmountValue, current_price: AmountValue) -> AmountValue {
    starting_price - lowest_bid(bids, current_price)
}

/// One-shot summary of everything the room header renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomStats {
    pub lowest_bid: AmountValue,
    pub total_bids: usize,
    pub unique_bidders: usize,
    pub average_bid: AmountValue,
    pub savings: AmountValue,
}

impl RoomStats {
    pub fn of(view: &RoomView) -> Self {
        RoomStats {
            lowest_bid: lowest_bid(&view.bids, view.current_price),
            total_bids: total_bids(&view.bids),
            unique_bidders: unique_bidders(&view.bids),
            average_bid: average_bid(&view.bids),
            savings: savings(&view.bids, view.starting_price, view.current_price),
        }
    }
}
