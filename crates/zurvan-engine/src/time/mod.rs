//! Time subsystem.
//!
//! Provides the fixed-period tick scheduler driving redraws, without coupling
//! to the runtime. Intended usage:
//! - one `Ticker` per event loop
//! - feed `deadline()` into the loop's wait, call `due()` when it wakes

mod ticker;

pub use ticker::{TickTime, Ticker};
