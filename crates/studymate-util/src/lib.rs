//! Shared utilities for studymate
//!
//! This crate provides:
//! - ID types (RecordId, ScheduleId)
//! - Time utilities (monotonic time, wall-clock minutes, duration formatting)
//! - Default paths for the config file and data directory

mod ids;
mod paths;
mod time;

pub use ids::*;
pub use paths::*;
pub use time::*;
