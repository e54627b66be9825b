// src/lib.rs
pub mod api;
pub mod domain;
pub mod money;
pub mod realtime;
pub mod session;
pub mod stats;

pub use domain::*;
pub use money::*;
