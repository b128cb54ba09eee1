//! Core domain logic for roster
//!
//! This module contains pure domain logic with no I/O dependencies beyond
//! the writer handed to [`models::Describe::display_details`].
//!
//! ## Architecture
//!
//! - `models/` - Entities (`Person`, `Student`, `StudentRecord`, `Course`) and
//!   the `Describe` capability
//! - `services/` - The `School` factory that owns one id counter per kind
//! - `ports/` - Trait definitions for id generation

pub mod models;
pub mod ports;
pub mod services;
