//! Adaptive multi-granularity time-axis ticks.
//!
//! A strategy is picked from the total span, then ticks are generated by
//! stepping backward from a calendar-aligned point near the range end. All
//! calendar math is UTC so identical inputs always yield identical ticks.
//!
//! Ticks come out ordered most-recent to oldest (matching the backward
//! construction), strictly descending, every position inside `[begin, end]`.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::primitives::unix_seconds_to_datetime;

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const WEEKDAYS_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const SECONDS_PER_DAY: i64 = 86_400;

/// One axis mark. Minor ticks never carry labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub position: f64,
    pub major: bool,
    pub label: Option<String>,
}

impl Tick {
    fn minor(position: i64) -> Self {
        Self {
            position: position as f64,
            major: false,
            label: None,
        }
    }

    fn major(position: i64, label: String) -> Self {
        Self {
            position: position as f64,
            major: true,
            label: Some(label),
        }
    }
}

/// Time-axis granularity strategy, selected from the total range span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickScale {
    /// Under ten minutes: 30 s minors, minute majors.
    SecondMinuteFine,
    /// Under an hour: 60 s minors, 10-minute majors.
    SecondMinuteCoarse,
    /// Under 0.6 days: 30-minute minors, 3-hour majors.
    MinuteHour,
    /// Under 8 days: 3-hour minors, midnight majors.
    HourDay,
    /// Under 35 days: daily minors, Sunday majors.
    DayWeek,
    /// Under a year (35-day months): weekly minors, month-start majors.
    WeekMonth,
    /// Anything longer: monthly minors, year-start majors.
    MonthYear,
}

impl TickScale {
    #[must_use]
    pub fn for_span(span_seconds: i64) -> Self {
        if span_seconds < 600 {
            Self::SecondMinuteFine
        } else if span_seconds < 3_600 {
            Self::SecondMinuteCoarse
        } else if span_seconds < SECONDS_PER_DAY * 6 / 10 {
            Self::MinuteHour
        } else if span_seconds < SECONDS_PER_DAY * 8 {
            Self::HourDay
        } else if span_seconds < SECONDS_PER_DAY * 35 {
            Self::DayWeek
        } else if span_seconds < SECONDS_PER_DAY * 35 * 12 {
            Self::WeekMonth
        } else {
            Self::MonthYear
        }
    }
}

/// Generates calendar-aligned ticks covering `[begin, end]`.
///
/// A backwards range (`begin > end`) is swapped rather than rejected, since
/// interactive selections routinely arrive reversed.
#[must_use]
pub fn time_series_ticks(begin: i64, end: i64) -> Vec<Tick> {
    let (begin, end) = if begin > end { (end, begin) } else { (begin, end) };

    let scale = TickScale::for_span(end - begin);
    debug!(?scale, begin, end, "time tick strategy selected");

    match scale {
        TickScale::SecondMinuteFine => fixed_step_ticks(begin, end, 30, classify_second_minute),
        TickScale::SecondMinuteCoarse => {
            fixed_step_ticks(begin, end, 60, classify_second_minute_coarse)
        }
        TickScale::MinuteHour => fixed_step_ticks(begin, end, 1_800, classify_minute_hour),
        TickScale::HourDay => fixed_step_ticks(begin, end, 3 * 3_600, classify_hour_day),
        TickScale::DayWeek => fixed_step_ticks(begin, end, SECONDS_PER_DAY, classify_day_week),
        TickScale::WeekMonth => week_month_ticks(begin, end),
        TickScale::MonthYear => month_year_ticks(begin, end),
    }
}

/// Steps backward on a fixed-second grid aligned to the step size.
///
/// The grid anchor is the epoch, which in UTC coincides with every
/// second/minute/hour/day boundary the fixed-step strategies care about.
fn fixed_step_ticks(
    begin: i64,
    end: i64,
    step: i64,
    classify: fn(DateTime<Utc>) -> Option<String>,
) -> Vec<Tick> {
    let mut ticks = Vec::new();
    let mut position = end.div_euclid(step) * step;

    while position >= begin {
        if position <= end {
            let time = unix_seconds_to_datetime(position);
            match classify(time) {
                Some(label) => ticks.push(Tick::major(position, label)),
                None => ticks.push(Tick::minor(position)),
            }
        }
        position -= step;
    }

    ticks
}

fn label_hour_minute(time: DateTime<Utc>) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

fn label_day_month(time: DateTime<Utc>) -> String {
    format!(
        "{} {}",
        time.day(),
        MONTHS_SHORT[time.month0() as usize]
    )
}

fn label_weekday(time: DateTime<Utc>) -> String {
    WEEKDAYS_SHORT[time.weekday().num_days_from_sunday() as usize].to_owned()
}

fn classify_second_minute(time: DateTime<Utc>) -> Option<String> {
    (time.second() == 0).then(|| label_hour_minute(time))
}

fn classify_second_minute_coarse(time: DateTime<Utc>) -> Option<String> {
    (time.second() == 0 && time.minute() % 10 == 0).then(|| label_hour_minute(time))
}

fn classify_minute_hour(time: DateTime<Utc>) -> Option<String> {
    if time.minute() != 0 || time.hour() % 3 != 0 {
        return None;
    }
    if time.hour() == 0 {
        Some(label_weekday(time))
    } else {
        Some(label_hour_minute(time))
    }
}

fn classify_hour_day(time: DateTime<Utc>) -> Option<String> {
    (time.hour() == 0).then(|| label_weekday(time))
}

fn classify_day_week(time: DateTime<Utc>) -> Option<String> {
    (time.weekday().num_days_from_sunday() == 0).then(|| label_day_month(time))
}

/// Weekly minors plus an extra, off-grid major at every true month start.
///
/// Month boundaries do not sit on the 7-day grid (months run 28-31 days), so
/// the month tick is emitted as an unscheduled extra whenever a week crosses
/// into a new month. When a week tick lands exactly on the 1st, the tick
/// itself is promoted instead of duplicating the position.
fn week_month_ticks(begin: i64, end: i64) -> Vec<Tick> {
    const WEEK: i64 = 7 * SECONDS_PER_DAY;

    let mut ticks = Vec::new();

    let end_time = unix_seconds_to_datetime(end);
    let day_start = end.div_euclid(SECONDS_PER_DAY) * SECONDS_PER_DAY;
    let mut position =
        day_start - i64::from(end_time.weekday().num_days_from_sunday()) * SECONDS_PER_DAY;

    while position >= begin {
        if position <= end {
            let time = unix_seconds_to_datetime(position);
            let month_start = start_of_month(time);

            if month_start == position {
                ticks.push(Tick::major(
                    position,
                    MONTHS_SHORT[time.month0() as usize].to_owned(),
                ));
            } else {
                ticks.push(Tick::minor(position));

                // The 1st falls inside this week iff this tick is within the
                // first seven days of its month.
                if time.day() <= 7 && month_start >= begin && month_start <= end {
                    let month_time = unix_seconds_to_datetime(month_start);
                    ticks.push(Tick::major(
                        month_start,
                        MONTHS_SHORT[month_time.month0() as usize].to_owned(),
                    ));
                }
            }
        }
        position -= WEEK;
    }

    ticks
}

/// Calendar-month minors with year-start majors.
///
/// Steps by true calendar months (irregular 28-31 day increments) so year
/// labels always sit exactly on the 1st of January.
fn month_year_ticks(begin: i64, end: i64) -> Vec<Tick> {
    let mut ticks = Vec::new();
    let mut position = start_of_month(unix_seconds_to_datetime(end));

    while position >= begin {
        if position <= end {
            let time = unix_seconds_to_datetime(position);
            if time.month() == 1 {
                ticks.push(Tick::major(position, time.year().to_string()));
            } else {
                ticks.push(Tick::minor(position));
            }
        }
        position = previous_month_start(unix_seconds_to_datetime(position));
    }

    ticks
}

fn start_of_month(time: DateTime<Utc>) -> i64 {
    Utc.with_ymd_and_hms(time.year(), time.month(), 1, 0, 0, 0)
        .single()
        .map(|aligned| aligned.timestamp())
        .unwrap_or_default()
}

fn previous_month_start(time: DateTime<Utc>) -> i64 {
    let (year, month) = if time.month() == 1 {
        (time.year() - 1, 12)
    } else {
        (time.year(), time.month() - 1)
    };

    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .map(|aligned| aligned.timestamp())
        .unwrap_or_default()
}
