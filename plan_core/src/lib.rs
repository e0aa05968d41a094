#![forbid(unsafe_code)]

//! Core domain model and business logic for the twelve-week training
//! plan calculator.
//!
//! This crate provides:
//! - Domain types (exercise specs, day plans, prescriptions)
//! - The built-in program table
//! - Calendar-to-program schedule resolution
//! - The progression/deload engine
//! - Text rendering for prescriptions

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod program;
pub mod schedule;
pub mod progression;
pub mod engine;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::{Config, ScheduleConfig};
pub use program::{build_default_program, get_default_program};
pub use schedule::{locate, ProgramPosition, ProgramStatus};
pub use engine::{prescribe, prescribe_day};
