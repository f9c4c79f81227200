//! Study timer engine for studymate
//!
//! This crate is the heart of the app, containing:
//! - Session state machine (Idle -> Running -> Paused -> Completed -> Idle)
//! - Elapsed-time accounting from monotonic wall-clock deltas
//! - Pomodoro phase transitions with best-effort notifications
//! - Snapshot save/restore for crash and restart recovery
//! - Daily study summaries

mod engine;
mod events;
mod notify;
mod summary;

pub use engine::*;
pub use events::*;
pub use notify::*;
pub use summary::*;
