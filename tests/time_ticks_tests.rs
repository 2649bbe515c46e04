use chrono::{TimeZone, Utc};
use ledger_chart::core::{TickScale, time_series_ticks};

fn unix(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
        .expect("valid test timestamp")
        .timestamp()
}

#[test]
fn strategy_selection_follows_span_bands() {
    assert_eq!(TickScale::for_span(500), TickScale::SecondMinuteFine);
    assert_eq!(TickScale::for_span(600), TickScale::SecondMinuteCoarse);
    assert_eq!(TickScale::for_span(3_599), TickScale::SecondMinuteCoarse);
    assert_eq!(TickScale::for_span(3_600), TickScale::MinuteHour);
    assert_eq!(TickScale::for_span(86_400), TickScale::HourDay);
    assert_eq!(TickScale::for_span(86_400 * 10), TickScale::DayWeek);
    assert_eq!(TickScale::for_span(86_400 * 40), TickScale::WeekMonth);
    assert_eq!(TickScale::for_span(86_400 * 500), TickScale::MonthYear);
}

#[test]
fn fine_second_ticks_cover_a_short_range() {
    // Scenario: 500 s of data from the epoch.
    let ticks = time_series_ticks(0, 500);

    // 0, 30, 60, ... 480, most-recent first.
    assert_eq!(ticks.len(), 17);
    assert_eq!(ticks[0].position, 480.0);
    assert_eq!(ticks[ticks.len() - 1].position, 0.0);

    for tick in &ticks {
        assert_eq!(tick.position % 30.0, 0.0);
        assert_eq!(tick.major, tick.position % 60.0 == 0.0);
    }

    let at = |position: f64| {
        ticks
            .iter()
            .find(|tick| tick.position == position)
            .expect("tick at position")
    };
    assert_eq!(at(0.0).label.as_deref(), Some("00:00"));
    assert_eq!(at(60.0).label.as_deref(), Some("00:01"));
    assert_eq!(at(30.0).label, None);
}

#[test]
fn backwards_ranges_are_swapped() {
    assert_eq!(time_series_ticks(500, 0), time_series_ticks(0, 500));
}

#[test]
fn coarse_second_ticks_major_every_ten_minutes() {
    let begin = unix(2024, 3, 5, 10, 0, 0);
    let ticks = time_series_ticks(begin, begin + 1_800);

    for tick in &ticks {
        let offset_minutes = ((tick.position as i64 - begin) / 60) % 10;
        assert_eq!(tick.major, offset_minutes == 0);
    }
    assert!(ticks.iter().any(|tick| tick.label.as_deref() == Some("10:10")));
}

#[test]
fn hour_day_ticks_label_midnights_with_weekdays() {
    // 2024-03-04 is a Monday.
    let begin = unix(2024, 3, 4, 0, 0, 0);
    let end = unix(2024, 3, 7, 0, 0, 0);
    let ticks = time_series_ticks(begin, end);

    let majors: Vec<_> = ticks.iter().filter(|tick| tick.major).collect();
    assert_eq!(majors.len(), 4);
    assert_eq!(majors[0].label.as_deref(), Some("Thu"));
    assert_eq!(majors[3].label.as_deref(), Some("Mon"));

    // Minors sit on the three-hour grid.
    for tick in &ticks {
        assert_eq!(tick.position as i64 % (3 * 3_600), 0);
    }
}

#[test]
fn day_week_ticks_label_sundays() {
    // 2024-03-03 and 2024-03-10 are Sundays.
    let begin = unix(2024, 3, 1, 12, 0, 0);
    let end = unix(2024, 3, 14, 12, 0, 0);
    let ticks = time_series_ticks(begin, end);

    let majors: Vec<_> = ticks.iter().filter(|tick| tick.major).collect();
    assert_eq!(majors.len(), 2);
    assert_eq!(majors[0].label.as_deref(), Some("10 Mar"));
    assert_eq!(majors[1].label.as_deref(), Some("3 Mar"));
}

#[test]
fn week_month_ticks_insert_exact_month_boundaries() {
    let begin = unix(2024, 2, 15, 0, 0, 0);
    let end = unix(2024, 5, 20, 0, 0, 0);
    let ticks = time_series_ticks(begin, end);

    let majors: Vec<_> = ticks.iter().filter(|tick| tick.major).collect();
    let labels: Vec<_> = majors
        .iter()
        .map(|tick| tick.label.as_deref().expect("major label"))
        .collect();
    assert_eq!(labels, vec!["May", "Apr", "Mar"]);

    // Month ticks land exactly on the 1st even though weeks don't.
    assert_eq!(majors[0].position as i64, unix(2024, 5, 1, 0, 0, 0));
    assert_eq!(majors[1].position as i64, unix(2024, 4, 1, 0, 0, 0));
    assert_eq!(majors[2].position as i64, unix(2024, 3, 1, 0, 0, 0));
}

#[test]
fn month_year_ticks_label_year_boundaries() {
    let begin = unix(2015, 6, 10, 0, 0, 0);
    let end = unix(2019, 3, 5, 0, 0, 0);
    let ticks = time_series_ticks(begin, end);

    let majors: Vec<_> = ticks.iter().filter(|tick| tick.major).collect();
    let labels: Vec<_> = majors
        .iter()
        .map(|tick| tick.label.as_deref().expect("major label"))
        .collect();
    assert_eq!(labels, vec!["2019", "2018", "2017", "2016"]);
    assert_eq!(majors[0].position as i64, unix(2019, 1, 1, 0, 0, 0));

    // Every minor is a true month start.
    for tick in &ticks {
        let time = Utc
            .timestamp_opt(tick.position as i64, 0)
            .single()
            .expect("tick timestamp");
        assert_eq!(chrono::Datelike::day(&time), 1);
    }
}

#[test]
fn ticks_are_strictly_descending_without_duplicates() {
    for (begin, end) in [
        (0, 500),
        (unix(2024, 3, 5, 10, 0, 0), unix(2024, 3, 5, 10, 40, 0)),
        (unix(2024, 2, 15, 0, 0, 0), unix(2024, 5, 20, 0, 0, 0)),
        (unix(2015, 6, 10, 0, 0, 0), unix(2019, 3, 5, 0, 0, 0)),
    ] {
        let ticks = time_series_ticks(begin, end);
        assert!(!ticks.is_empty());
        for pair in ticks.windows(2) {
            assert!(
                pair[1].position < pair[0].position,
                "ticks must strictly descend for range ({begin}, {end})"
            );
        }
    }
}
