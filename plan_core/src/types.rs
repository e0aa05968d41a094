//! Core domain types for the twelve-week training plan.
//!
//! This module defines the fundamental types used throughout the system:
//! - Exercise specifications (one tagged variant per progression kind)
//! - Day plans and the program table
//! - Prescriptions (the computed dose for one exercise on one day)

use serde::{Deserialize, Serialize};

/// Number of day slots in the program table
pub const DAYS_PER_WEEK: usize = 7;

// ============================================================================
// Exercise Specification Types
// ============================================================================

/// A single exercise slot in a day plan, holding Week 1 baseline values.
///
/// Each variant carries exactly the fields its progression rules need.
/// The kind of an exercise is part of the type; it is never inferred from
/// the name text or from which optional fields happen to be present.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExerciseSpec {
    /// Free-text entry with no progression (recovery days, mobility work)
    Descriptive { name: String, description: String },

    /// Lift with an external load that ramps linearly each week
    Loaded {
        name: String,
        sets: u32,
        reps: u32,
        base_load_lbs: f64,
        weekly_increment_lbs: f64,
    },

    /// One-minute treadmill repeats with weekly pace progression
    TreadmillIntervals {
        name: String,
        intervals: u32,
        base_mph: f64,
        mph_increment: f64,
    },

    /// 100 m sprint repeats at a fixed effort cue
    SprintIntervals {
        name: String,
        intervals: u32,
        effort: String,
    },

    /// 25 m pool repeats whose rest shrinks every other week
    PoolIntervals {
        name: String,
        intervals: u32,
        base_rest_secs: u32,
        rest_decrement_secs: u32,
    },

    /// Steady-state cardio with weekly duration progression
    Steady {
        name: String,
        base_minutes: u32,
        minutes_increment: u32,
    },

    /// Timed hold (planks, ring support) with weekly duration progression
    TimedHold {
        name: String,
        sets: u32,
        base_hold_secs: u32,
        hold_increment_secs: u32,
    },

    /// Fixed sets and reps at bodyweight
    Bodyweight { name: String, sets: u32, reps: u32 },

    /// Entry with no recognized programming; prescribed as its bare name
    Unspecified { name: String },
}

impl ExerciseSpec {
    /// Display name of the exercise, regardless of variant
    pub fn name(&self) -> &str {
        match self {
            ExerciseSpec::Descriptive { name, .. }
            | ExerciseSpec::Loaded { name, .. }
            | ExerciseSpec::TreadmillIntervals { name, .. }
            | ExerciseSpec::SprintIntervals { name, .. }
            | ExerciseSpec::PoolIntervals { name, .. }
            | ExerciseSpec::Steady { name, .. }
            | ExerciseSpec::TimedHold { name, .. }
            | ExerciseSpec::Bodyweight { name, .. }
            | ExerciseSpec::Unspecified { name } => name,
        }
    }
}

// ============================================================================
// Day Plan and Program Types
// ============================================================================

/// One day's baseline exercise list
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DayPlan {
    pub title: String,
    pub exercises: Vec<ExerciseSpec>,
}

/// The full training program: one plan per day-of-week slot.
///
/// Slot 0 is the start date's weekday; slots cycle 0-6 through the week.
/// Modeling the table as a fixed array makes "every slot present" hold by
/// construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Program {
    pub days: [DayPlan; DAYS_PER_WEEK],
}

impl Program {
    /// Day plan for the given slot (0-6)
    pub fn day(&self, day_of_week: usize) -> &DayPlan {
        &self.days[day_of_week % DAYS_PER_WEEK]
    }
}

// ============================================================================
// Prescription Types
// ============================================================================

/// The computed dose for a single exercise on a specific program week.
///
/// This is a structured record; turning it into display text is left to
/// the rendering layer.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Dose {
    /// Free-text instruction, nothing to compute
    Freeform { detail: String },

    /// Sets x reps at an external load
    Lift { sets: u32, reps: u32, load_lbs: u32 },

    /// Sets x reps at bodyweight
    Bodyweight { sets: u32, reps: u32 },

    /// One-minute work intervals at a target pace
    PacedIntervals { count: u32, pace_mph: u32 },

    /// 100 m repeats at an effort cue
    EffortIntervals { count: u32, effort: String },

    /// 25 m repeats with a rest target
    RestedIntervals { count: u32, rest_secs: u32 },

    /// Continuous minutes
    Steady { minutes: u32 },

    /// Timed hold sets
    TimedHold { sets: u32, hold_secs: u32 },

    /// No recognized programming; name only
    Unscored,
}

/// A fully computed prescription for one exercise
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Prescription {
    pub name: String,
    pub dose: Dose,
}

/// A fully computed day: title plus one prescription per exercise
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PrescribedDay {
    pub title: String,
    pub week: u32,
    pub deload: bool,
    pub prescriptions: Vec<Prescription>,
}
