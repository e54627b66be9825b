// src/domain/mod.rs
pub mod bids;
pub mod core;
pub mod events;
pub mod rooms;
pub mod view;

pub use self::bids::*;
pub use self::core::*;
pub use self::events::*;
pub use self::rooms::*;
pub use self::view::*;
