#![forbid(unsafe_code)]

//! Core logic for the gym check-in terminal.
//!
//! This crate provides:
//! - The member record and roster file codec
//! - Membership rules (customer lookup, fee currency)
//! - Input validation and line sources
//! - The append-only workout log
//! - The session loop tying them together

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod roster;
pub mod membership;
pub mod input;
pub mod workout_log;
pub mod session;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use roster::{format_date, load_roster, parse_date, parse_roster};
pub use membership::{is_customer, is_paying_customer, MembershipStatus};
pub use input::{validate, Input, InputError, InputSource, PromptSource, ScriptedSource};
pub use workout_log::{CheckInSink, WorkoutSheet};
pub use session::{Session, Step};
