//! The built-in twelve-week training program.
//!
//! Week 1 baseline exercises for each day of the cycle. Slot 0 is the
//! start date's weekday (a Sunday under the default schedule).

use crate::types::*;
use once_cell::sync::Lazy;

/// Cached program table - built once and reused across all operations
static DEFAULT_PROGRAM: Lazy<Program> = Lazy::new(build_default_program_internal);

/// Get a reference to the cached program table
pub fn get_default_program() -> &'static Program {
    &DEFAULT_PROGRAM
}

/// Builds the program table with the built-in exercise roster
///
/// **Note**: For production use, prefer `get_default_program()` which
/// returns a cached reference. This function is retained for testing.
pub fn build_default_program() -> Program {
    build_default_program_internal()
}

fn build_default_program_internal() -> Program {
    let sunday = DayPlan {
        title: "Sunday (Recovery or Light Cardio)".into(),
        exercises: vec![ExerciseSpec::Descriptive {
            name: "Recovery or Light Cardio".into(),
            description: "Walk, yoga, gentle swim. No heavy lifting.".into(),
        }],
    };

    let monday = DayPlan {
        title: "Monday".into(),
        exercises: vec![
            ExerciseSpec::Loaded {
                name: "Snatch".into(),
                sets: 4,
                reps: 3,
                base_load_lbs: 100.0,
                weekly_increment_lbs: 2.5,
            },
            ExerciseSpec::Loaded {
                name: "Back Squat".into(),
                sets: 4,
                reps: 5,
                base_load_lbs: 145.0,
                weekly_increment_lbs: 5.0,
            },
            ExerciseSpec::Bodyweight {
                name: "Ring Push-Ups".into(),
                sets: 4,
                reps: 8,
            },
            ExerciseSpec::Bodyweight {
                name: "Ring Rows".into(),
                sets: 4,
                reps: 8,
            },
            ExerciseSpec::Bodyweight {
                name: "Box Jumps".into(),
                sets: 4,
                reps: 3,
            },
            ExerciseSpec::TreadmillIntervals {
                name: "Treadmill Intervals".into(),
                intervals: 5,
                base_mph: 6.0,
                mph_increment: 0.5,
            },
        ],
    };

    let tuesday = DayPlan {
        title: "Tuesday".into(),
        exercises: vec![
            ExerciseSpec::Loaded {
                name: "Clean & Jerk".into(),
                sets: 4,
                reps: 3,
                base_load_lbs: 135.0,
                weekly_increment_lbs: 5.0,
            },
            ExerciseSpec::Loaded {
                name: "Bench Press".into(),
                sets: 4,
                reps: 5,
                base_load_lbs: 105.0,
                weekly_increment_lbs: 5.0,
            },
            ExerciseSpec::Bodyweight {
                name: "Ring Chin-Ups".into(),
                sets: 4,
                reps: 6,
            },
            ExerciseSpec::Bodyweight {
                name: "Ring Dips".into(),
                sets: 4,
                reps: 6,
            },
            ExerciseSpec::Bodyweight {
                // Reps are per leg
                name: "Split Squat Jumps".into(),
                sets: 3,
                reps: 5,
            },
            ExerciseSpec::PoolIntervals {
                name: "Pool Intervals".into(),
                intervals: 6,
                base_rest_secs: 30,
                rest_decrement_secs: 5,
            },
        ],
    };

    let wednesday = DayPlan {
        title: "Wednesday".into(),
        exercises: vec![
            ExerciseSpec::Loaded {
                name: "Deadlift".into(),
                sets: 4,
                reps: 5,
                base_load_lbs: 185.0,
                weekly_increment_lbs: 10.0,
            },
            ExerciseSpec::Loaded {
                name: "Overhead Press".into(),
                sets: 4,
                reps: 5,
                base_load_lbs: 75.0,
                weekly_increment_lbs: 2.5,
            },
            ExerciseSpec::Bodyweight {
                name: "Ring Bodyweight Row".into(),
                sets: 3,
                reps: 10,
            },
            ExerciseSpec::Bodyweight {
                name: "Ring Push-Ups (Feet Elevated)".into(),
                sets: 3,
                reps: 10,
            },
            ExerciseSpec::Bodyweight {
                name: "Broad Jumps".into(),
                sets: 4,
                reps: 2,
            },
            ExerciseSpec::Steady {
                name: "Treadmill Run".into(),
                base_minutes: 10,
                minutes_increment: 1,
            },
        ],
    };

    let thursday = DayPlan {
        title: "Thursday".into(),
        exercises: vec![
            ExerciseSpec::Descriptive {
                name: "Extended Mobility".into(),
                description: "20 min stretch + foam roll".into(),
            },
            ExerciseSpec::Loaded {
                // Kept near 80% of Monday's snatch
                name: "Snatch (Technique)".into(),
                sets: 3,
                reps: 3,
                base_load_lbs: 80.0,
                weekly_increment_lbs: 2.0,
            },
            ExerciseSpec::Bodyweight {
                // Reps are per side
                name: "Pallof Holds (Band)".into(),
                sets: 3,
                reps: 10,
            },
            ExerciseSpec::Loaded {
                // 2x25 lbs dumbbells; reps are per leg
                name: "DB Walking Lunges".into(),
                sets: 3,
                reps: 8,
                base_load_lbs: 50.0,
                weekly_increment_lbs: 5.0,
            },
            ExerciseSpec::TimedHold {
                name: "Core Plank Variations".into(),
                sets: 3,
                base_hold_secs: 45,
                hold_increment_secs: 10,
            },
            ExerciseSpec::Steady {
                name: "Zone 2 Cardio".into(),
                base_minutes: 20,
                minutes_increment: 2,
            },
        ],
    };

    let friday = DayPlan {
        title: "Friday".into(),
        exercises: vec![
            ExerciseSpec::Loaded {
                name: "Power Clean".into(),
                sets: 4,
                reps: 3,
                base_load_lbs: 155.0,
                weekly_increment_lbs: 2.5,
            },
            ExerciseSpec::Loaded {
                name: "Front Squat".into(),
                sets: 4,
                reps: 3,
                base_load_lbs: 135.0,
                weekly_increment_lbs: 5.0,
            },
            ExerciseSpec::TimedHold {
                name: "Ring Supported Push-Up Hold (Top Lock)".into(),
                sets: 3,
                base_hold_secs: 15,
                hold_increment_secs: 5,
            },
            ExerciseSpec::Loaded {
                // 2x20 lbs dumbbells
                name: "Single-Leg RDL (DBs)".into(),
                sets: 3,
                reps: 8,
                base_load_lbs: 40.0,
                weekly_increment_lbs: 5.0,
            },
            ExerciseSpec::SprintIntervals {
                name: "Sprint Intervals".into(),
                intervals: 6,
                effort: "~90% effort".into(),
            },
        ],
    };

    let saturday = DayPlan {
        title: "Saturday".into(),
        exercises: vec![ExerciseSpec::Descriptive {
            name: "Recovery or Light Cardio".into(),
            description: "Walk, yoga, gentle swim. No heavy lifting.".into(),
        }],
    };

    Program {
        days: [
            sunday, monday, tuesday, wednesday, thursday, friday, saturday,
        ],
    }
}

impl Program {
    /// Validate the program table for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (slot, day) in self.days.iter().enumerate() {
            if day.title.is_empty() {
                errors.push(format!("Day slot {} has empty title", slot));
            }
            if day.exercises.is_empty() {
                errors.push(format!("Day '{}' has no exercises", day.title));
            }

            for spec in &day.exercises {
                if spec.name().is_empty() {
                    errors.push(format!("Day '{}' has exercise with empty name", day.title));
                }

                match spec {
                    ExerciseSpec::Descriptive { name, description } => {
                        if description.is_empty() {
                            errors.push(format!("'{}' has empty description", name));
                        }
                    }
                    ExerciseSpec::Loaded {
                        name,
                        sets,
                        reps,
                        base_load_lbs,
                        weekly_increment_lbs,
                    } => {
                        if *sets == 0 || *reps == 0 {
                            errors.push(format!("'{}' has zero sets or reps", name));
                        }
                        if !base_load_lbs.is_finite() || *base_load_lbs < 0.0 {
                            errors.push(format!(
                                "'{}' has invalid base load {}",
                                name, base_load_lbs
                            ));
                        }
                        if !weekly_increment_lbs.is_finite() || *weekly_increment_lbs < 0.0 {
                            errors.push(format!(
                                "'{}' has invalid load increment {}",
                                name, weekly_increment_lbs
                            ));
                        }
                    }
                    ExerciseSpec::TreadmillIntervals {
                        name,
                        intervals,
                        base_mph,
                        mph_increment,
                    } => {
                        if *intervals == 0 {
                            errors.push(format!("'{}' has zero intervals", name));
                        }
                        if !base_mph.is_finite() || *base_mph < 0.0 {
                            errors.push(format!("'{}' has invalid base pace {}", name, base_mph));
                        }
                        if !mph_increment.is_finite() || *mph_increment < 0.0 {
                            errors.push(format!(
                                "'{}' has invalid pace increment {}",
                                name, mph_increment
                            ));
                        }
                    }
                    ExerciseSpec::SprintIntervals { name, intervals, .. }
                    | ExerciseSpec::PoolIntervals { name, intervals, .. } => {
                        if *intervals == 0 {
                            errors.push(format!("'{}' has zero intervals", name));
                        }
                    }
                    ExerciseSpec::TimedHold {
                        name,
                        sets,
                        base_hold_secs,
                        ..
                    } => {
                        if *sets == 0 {
                            errors.push(format!("'{}' has zero sets", name));
                        }
                        if *base_hold_secs == 0 {
                            errors.push(format!("'{}' has zero base hold", name));
                        }
                    }
                    ExerciseSpec::Bodyweight { name, sets, reps } => {
                        if *sets == 0 || *reps == 0 {
                            errors.push(format!("'{}' has zero sets or reps", name));
                        }
                    }
                    ExerciseSpec::Steady { .. } | ExerciseSpec::Unspecified { .. } => {}
                }
            }
        }

        errors
    }
}
