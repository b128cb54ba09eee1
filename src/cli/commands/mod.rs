//! Command implementations

mod demo;
mod show;

pub use demo::demo;
pub use show::show;
