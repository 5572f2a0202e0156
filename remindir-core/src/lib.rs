//! Core types for remindir.
//!
//! This crate holds everything that does not talk to the network:
//! - `Reminder` and the request payloads sent to the reminder backend
//! - date normalization and formatting for the loosely-typed `date` field
//! - view derivations (overdue status, dashboard summary, sorting, calendar)
//! - client configuration

pub mod calendar;
pub mod company;
pub mod config;
pub mod constants;
pub mod date;
pub mod error;
pub mod reminder;
pub mod sort;
pub mod status;
pub mod summary;
pub mod view_state;

// Re-export the reminder types at crate root for convenience
pub use reminder::*;
