//! Platform abstraction layer
//!
//! The pieces of the outside world the simulation reads from:
//! - Time (monotonic seconds)
//! - Input (held keys resolved to a single direction)

pub mod clock;
pub mod input;

pub use clock::{Clock, MonotonicClock, SteppedClock};
pub use input::{HeldKeys, direction_for_key};
