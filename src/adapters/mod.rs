//! Adapter implementations for port traits
//!
//! - [`counter`] - In-memory atomic counter implementing `IdGenerator`

pub mod counter;

pub use counter::SequentialIds;
