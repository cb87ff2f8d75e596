//! Platform abstraction layer
//!
//! Host-facing helpers that are not gameplay:
//! - Frame timestamps to simulation `dt`

pub mod clock;

pub use clock::FrameClock;
