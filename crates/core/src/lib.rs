//! Domain logic for the RoomReel Challenge backend.
//!
//! Pure, I/O-free building blocks: the frame-quality heuristic that decides
//! whether a camera frame is a "good shot", the weighted reward selector
//! run at submission time, and the shared id/timestamp types. Everything
//! here is deterministic given an injected random source.

pub mod error;
pub mod frame;
pub mod reward;
pub mod shot;
pub mod types;
