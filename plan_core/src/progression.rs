//! Weekly progression and deload formulas.
//!
//! Every function here is a pure mapping of `(week, baseline, schedule)`
//! to a concrete number for that week. Weeks are 1-indexed; week 1
//! always returns the baseline unchanged.
//!
//! Deload rules:
//! - Loads and holds scale by the deload factor
//! - Set counts map 4 -> 3, 5 -> 4, 6 -> 4
//! - Interval counts of 5+ cap at 4
//! - Steady cardio scales by the duration deload factor
//! - Paces and rest targets are untouched

use crate::config::ScheduleConfig;

/// Round a computed value to the nearest whole unit
fn round_whole(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// Load for the given week: linear weekly ramp, scaled by the deload
/// factor on deload weeks
pub fn load_for_week(
    week: u32,
    base_load_lbs: f64,
    weekly_increment_lbs: f64,
    schedule: &ScheduleConfig,
) -> u32 {
    let normal = base_load_lbs + f64::from(week.saturating_sub(1)) * weekly_increment_lbs;
    if schedule.is_deload(week) {
        round_whole(normal * schedule.deload_factor)
    } else {
        round_whole(normal)
    }
}

/// Set count for the given week.
///
/// Deload weeks drop a set from the common prescriptions: 4 -> 3,
/// 5 -> 4, 6 -> 4. Any other count passes through unchanged.
pub fn sets_for_week(week: u32, base_sets: u32, schedule: &ScheduleConfig) -> u32 {
    if !schedule.is_deload(week) {
        return base_sets;
    }
    match base_sets {
        4 => 3,
        5 | 6 => 4,
        other => other,
    }
}

/// Interval count for the given week; deload caps counts of 5+ at 4
pub fn intervals_for_week(week: u32, base_intervals: u32, schedule: &ScheduleConfig) -> u32 {
    if schedule.is_deload(week) && base_intervals >= 5 {
        4
    } else {
        base_intervals
    }
}

/// Target pace for the given week.
///
/// Deload never slows the pace; only the interval count shrinks.
pub fn pace_for_week(week: u32, base_mph: f64, mph_increment: f64) -> u32 {
    round_whole(base_mph + f64::from(week.saturating_sub(1)) * mph_increment)
}

/// Steady-cardio minutes for the given week, scaled down on deload
pub fn minutes_for_week(
    week: u32,
    base_minutes: u32,
    minutes_increment: u32,
    schedule: &ScheduleConfig,
) -> u32 {
    let normal = base_minutes + week.saturating_sub(1) * minutes_increment;
    if schedule.is_deload(week) {
        round_whole(f64::from(normal) * schedule.duration_deload_factor)
    } else {
        normal
    }
}

/// Rest between repeats: shrinks by the decrement every other week,
/// never below the configured floor
pub fn rest_for_week(
    week: u32,
    base_rest_secs: u32,
    rest_decrement_secs: u32,
    schedule: &ScheduleConfig,
) -> u32 {
    let steps = i64::from(week.saturating_sub(1)) / 2;
    let rest = i64::from(base_rest_secs) - i64::from(rest_decrement_secs) * steps;
    rest.max(i64::from(schedule.rest_floor_secs)) as u32
}

/// Hold duration for the given week, scaled by the deload factor on
/// deload weeks
pub fn hold_secs_for_week(
    week: u32,
    base_hold_secs: u32,
    hold_increment_secs: u32,
    schedule: &ScheduleConfig,
) -> u32 {
    let normal = base_hold_secs + week.saturating_sub(1) * hold_increment_secs;
    if schedule.is_deload(week) {
        round_whole(f64::from(normal) * schedule.deload_factor)
    } else {
        normal
    }
}
