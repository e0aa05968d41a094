//! Calendar-to-program mapping.
//!
//! Resolves a calendar date to a 1-indexed program week and a day slot,
//! or to an out-of-window status when the date falls outside the cycle.

use crate::config::ScheduleConfig;
use chrono::NaiveDate;

/// Position of a date inside the program cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgramPosition {
    /// 1-indexed week within the cycle
    pub week: u32,
    /// Day slot 0-6; slot 0 is the start date's weekday
    pub day_of_week: usize,
}

/// Where a date falls relative to the program window
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgramStatus {
    /// Date precedes the program start
    NotStarted { starts_on: NaiveDate },
    /// Date lands inside the cycle
    InProgress(ProgramPosition),
    /// Date is past the final program day
    Completed,
}

/// Resolve a calendar date against the schedule
pub fn locate(date: NaiveDate, schedule: &ScheduleConfig) -> ProgramStatus {
    let day_offset = (date - schedule.start_date).num_days();

    if day_offset < 0 {
        return ProgramStatus::NotStarted {
            starts_on: schedule.start_date,
        };
    }
    if day_offset >= schedule.total_days() {
        return ProgramStatus::Completed;
    }

    let position = ProgramPosition {
        week: (day_offset / 7) as u32 + 1,
        day_of_week: (day_offset % 7) as usize,
    };

    tracing::debug!(
        "Resolved {} to week {}, day slot {}",
        date,
        position.week,
        position.day_of_week
    );

    ProgramStatus::InProgress(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_start_date_is_week_one_slot_zero() {
        let schedule = ScheduleConfig::default();

        let status = locate(date(2024, 12, 29), &schedule);
        assert_eq!(
            status,
            ProgramStatus::InProgress(ProgramPosition {
                week: 1,
                day_of_week: 0,
            })
        );
    }

    #[test]
    fn test_day_before_start_is_not_started() {
        let schedule = ScheduleConfig::default();

        let status = locate(date(2024, 12, 28), &schedule);
        assert_eq!(
            status,
            ProgramStatus::NotStarted {
                starts_on: date(2024, 12, 29),
            }
        );
    }

    #[test]
    fn test_last_day_is_week_twelve() {
        let schedule = ScheduleConfig::default();

        // Offset 83: the 84th and final program day
        let status = locate(date(2025, 3, 22), &schedule);
        assert_eq!(
            status,
            ProgramStatus::InProgress(ProgramPosition {
                week: 12,
                day_of_week: 6,
            })
        );
    }

    #[test]
    fn test_day_eighty_four_is_completed() {
        let schedule = ScheduleConfig::default();

        let status = locate(date(2025, 3, 23), &schedule);
        assert_eq!(status, ProgramStatus::Completed);
    }

    #[test]
    fn test_week_boundaries() {
        let schedule = ScheduleConfig::default();

        // Offset 6: last day of week 1
        assert_eq!(
            locate(date(2025, 1, 4), &schedule),
            ProgramStatus::InProgress(ProgramPosition {
                week: 1,
                day_of_week: 6,
            })
        );

        // Offset 7: first day of week 2
        assert_eq!(
            locate(date(2025, 1, 5), &schedule),
            ProgramStatus::InProgress(ProgramPosition {
                week: 2,
                day_of_week: 0,
            })
        );
    }

    #[test]
    fn test_deload_week_date_resolves_to_week_six() {
        let schedule = ScheduleConfig::default();

        // Offset 36: week 6, Monday slot
        let status = locate(date(2025, 2, 3), &schedule);
        assert_eq!(
            status,
            ProgramStatus::InProgress(ProgramPosition {
                week: 6,
                day_of_week: 1,
            })
        );
    }

    #[test]
    fn test_alternate_schedule_shifts_window() {
        let schedule = ScheduleConfig {
            start_date: date(2025, 6, 1),
            program_weeks: 4,
            ..ScheduleConfig::default()
        };

        assert_eq!(
            locate(date(2025, 5, 31), &schedule),
            ProgramStatus::NotStarted {
                starts_on: date(2025, 6, 1),
            }
        );
        assert_eq!(
            locate(date(2025, 6, 28), &schedule),
            ProgramStatus::InProgress(ProgramPosition {
                week: 4,
                day_of_week: 6,
            })
        );
        assert_eq!(locate(date(2025, 6, 29), &schedule), ProgramStatus::Completed);
    }
}
