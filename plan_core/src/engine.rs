//! Prescription engine: turns baseline exercise specs plus a program
//! week into the concrete doses for that day.
//!
//! Every computation is a pure function of `(week, spec, schedule)`.
//! There is no I/O and no failure path; entries with no recognized
//! programming fall through to a name-only prescription rather than
//! erroring.

use crate::config::ScheduleConfig;
use crate::progression;
use crate::schedule::ProgramPosition;
use crate::types::{Dose, ExerciseSpec, PrescribedDay, Prescription, Program};

/// Compute the dose for a single exercise on the given program week
pub fn prescribe(spec: &ExerciseSpec, week: u32, schedule: &ScheduleConfig) -> Prescription {
    let dose = match spec {
        ExerciseSpec::Descriptive { description, .. } => Dose::Freeform {
            detail: description.clone(),
        },

        ExerciseSpec::Loaded {
            sets,
            reps,
            base_load_lbs,
            weekly_increment_lbs,
            ..
        } => Dose::Lift {
            sets: progression::sets_for_week(week, *sets, schedule),
            reps: *reps,
            load_lbs: progression::load_for_week(
                week,
                *base_load_lbs,
                *weekly_increment_lbs,
                schedule,
            ),
        },

        ExerciseSpec::TreadmillIntervals {
            intervals,
            base_mph,
            mph_increment,
            ..
        } => Dose::PacedIntervals {
            count: progression::intervals_for_week(week, *intervals, schedule),
            pace_mph: progression::pace_for_week(week, *base_mph, *mph_increment),
        },

        ExerciseSpec::SprintIntervals {
            intervals, effort, ..
        } => Dose::EffortIntervals {
            count: progression::intervals_for_week(week, *intervals, schedule),
            effort: effort.clone(),
        },

        ExerciseSpec::PoolIntervals {
            intervals,
            base_rest_secs,
            rest_decrement_secs,
            ..
        } => Dose::RestedIntervals {
            count: progression::intervals_for_week(week, *intervals, schedule),
            rest_secs: progression::rest_for_week(
                week,
                *base_rest_secs,
                *rest_decrement_secs,
                schedule,
            ),
        },

        ExerciseSpec::Steady {
            base_minutes,
            minutes_increment,
            ..
        } => Dose::Steady {
            minutes: progression::minutes_for_week(
                week,
                *base_minutes,
                *minutes_increment,
                schedule,
            ),
        },

        ExerciseSpec::TimedHold {
            sets,
            base_hold_secs,
            hold_increment_secs,
            ..
        } => Dose::TimedHold {
            sets: progression::sets_for_week(week, *sets, schedule),
            hold_secs: progression::hold_secs_for_week(
                week,
                *base_hold_secs,
                *hold_increment_secs,
                schedule,
            ),
        },

        ExerciseSpec::Bodyweight { sets, reps, .. } => Dose::Bodyweight {
            sets: progression::sets_for_week(week, *sets, schedule),
            reps: *reps,
        },

        ExerciseSpec::Unspecified { .. } => Dose::Unscored,
    };

    Prescription {
        name: spec.name().to_string(),
        dose,
    }
}

/// Compute the full prescription list for a resolved program day
pub fn prescribe_day(
    program: &Program,
    position: &ProgramPosition,
    schedule: &ScheduleConfig,
) -> PrescribedDay {
    let day = program.day(position.day_of_week);
    let deload = schedule.is_deload(position.week);

    if deload {
        tracing::info!("Week {} runs at deload volume", position.week);
    }

    let prescriptions = day
        .exercises
        .iter()
        .map(|spec| prescribe(spec, position.week, schedule))
        .collect();

    PrescribedDay {
        title: day.title.clone(),
        week: position.week,
        deload,
        prescriptions,
    }
}
