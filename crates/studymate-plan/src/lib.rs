//! Plan allocation engine for studymate
//!
//! This crate contains:
//! - Time allocation algorithms (equal and priority-weighted splits)
//! - Weekly schedule preview generation
//! - The plan wizard step machine with store-backed draft persistence
//!
//! Everything except draft persistence is pure computation over the shared
//! domain types.

mod allocation;
mod preview;
mod wizard;

pub use allocation::*;
pub use preview::*;
pub use wizard::*;
