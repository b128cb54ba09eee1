//! Domain services
//!
//! - [`school`] - Factory owning one id counter per entity kind

pub mod school;

pub use school::{EntityKind, School};
