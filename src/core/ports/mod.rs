//! Port traits (interfaces) for state the domain depends on
//!
//! Entities never own a hidden global counter. They draw their ids from an
//! [`IdGenerator`] handed to their constructor, so tests can supply a fresh
//! or reset counter.
//!
//! Implementations live in the `adapters` module.

mod id_generator;

pub use id_generator::IdGenerator;
