//! Port definitions - trait boundaries between the UI and the outside world.

pub mod outbound;
