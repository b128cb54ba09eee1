//! Id generator port
//!
//! Defines the interface for handing out entity ids.

/// Source of sequential entity ids
///
/// Ids start at 1, increase by one on every call to [`IdGenerator::next_id`]
/// and are never handed out twice unless the generator is explicitly reset.
pub trait IdGenerator: Send + Sync {
    /// Take the next id, advancing the counter
    fn next_id(&self) -> u64;

    /// The id the next call to [`IdGenerator::next_id`] will return
    fn peek(&self) -> u64;

    /// Rewind the counter so the next id is 1 again
    fn reset(&self);
}
