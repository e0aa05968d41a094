//! Text rendering for prescriptions.
//!
//! The engine emits structured `Prescription` records; this module
//! flattens them into the fixed per-kind display templates. Keeping the
//! templates here means callers that want machine-readable output can
//! take the records and skip the text entirely.

use crate::types::{Dose, Prescription};
use std::fmt;

impl fmt::Display for Prescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.dose {
            Dose::Freeform { detail } => write!(f, "{}: {}", self.name, detail),
            Dose::Lift {
                sets,
                reps,
                load_lbs,
            } => write!(f, "{}: {}x{} @ {} lbs", self.name, sets, reps, load_lbs),
            Dose::Bodyweight { sets, reps } => {
                write!(f, "{}: {}x{}, Bodyweight", self.name, sets, reps)
            }
            Dose::PacedIntervals { count, pace_mph } => write!(
                f,
                "{}: {} x 1 min @ {} mph (1 min rest)",
                self.name, count, pace_mph
            ),
            Dose::EffortIntervals { count, effort } => {
                write!(f, "{}: {}x100m {}", self.name, count, effort)
            }
            Dose::RestedIntervals { count, rest_secs } => {
                write!(f, "{}: {}x25m (~{}s rest)", self.name, count, rest_secs)
            }
            Dose::Steady { minutes } => write!(f, "{}: {} min", self.name, minutes),
            Dose::TimedHold { sets, hold_secs } => {
                write!(f, "{}: {}x ~{}s", self.name, sets, hold_secs)
            }
            Dose::Unscored => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{Dose, Prescription};

    fn rendered(name: &str, dose: Dose) -> String {
        Prescription {
            name: name.into(),
            dose,
        }
        .to_string()
    }

    #[test]
    fn test_lift_template() {
        assert_eq!(
            rendered(
                "Snatch",
                Dose::Lift {
                    sets: 4,
                    reps: 3,
                    load_lbs: 103,
                }
            ),
            "Snatch: 4x3 @ 103 lbs"
        );
    }

    #[test]
    fn test_bodyweight_template() {
        assert_eq!(
            rendered("Ring Rows", Dose::Bodyweight { sets: 4, reps: 8 }),
            "Ring Rows: 4x8, Bodyweight"
        );
    }

    #[test]
    fn test_paced_interval_template() {
        assert_eq!(
            rendered(
                "Treadmill Intervals",
                Dose::PacedIntervals {
                    count: 5,
                    pace_mph: 7,
                }
            ),
            "Treadmill Intervals: 5 x 1 min @ 7 mph (1 min rest)"
        );
    }

    #[test]
    fn test_effort_interval_template() {
        assert_eq!(
            rendered(
                "Sprint Intervals",
                Dose::EffortIntervals {
                    count: 6,
                    effort: "~90% effort".into(),
                }
            ),
            "Sprint Intervals: 6x100m ~90% effort"
        );
    }

    #[test]
    fn test_rested_interval_template() {
        assert_eq!(
            rendered(
                "Pool Intervals",
                Dose::RestedIntervals {
                    count: 6,
                    rest_secs: 25,
                }
            ),
            "Pool Intervals: 6x25m (~25s rest)"
        );
    }

    #[test]
    fn test_steady_template() {
        assert_eq!(
            rendered("Zone 2 Cardio", Dose::Steady { minutes: 22 }),
            "Zone 2 Cardio: 22 min"
        );
    }

    #[test]
    fn test_timed_hold_template() {
        assert_eq!(
            rendered(
                "Core Plank Variations",
                Dose::TimedHold {
                    sets: 3,
                    hold_secs: 55,
                }
            ),
            "Core Plank Variations: 3x ~55s"
        );
    }

    #[test]
    fn test_freeform_template() {
        assert_eq!(
            rendered(
                "Extended Mobility",
                Dose::Freeform {
                    detail: "20 min stretch + foam roll".into(),
                }
            ),
            "Extended Mobility: 20 min stretch + foam roll"
        );
    }

    #[test]
    fn test_unscored_renders_bare_name() {
        assert_eq!(rendered("Farmer Carry", Dose::Unscored), "Farmer Carry");
    }
}
