use ledger_chart::core::time_series_ticks;
use proptest::prelude::*;

proptest! {
    // Spans are drawn log-uniformly so every strategy band gets exercised,
    // from half-minute ranges up to multi-decade ones.
    #[test]
    fn ticks_cover_the_range_and_strictly_descend(
        begin in -2_000_000_000i64..2_000_000_000,
        span_exponent in 2.0f64..9.3
    ) {
        let span = 10.0f64.powf(span_exponent) as i64;
        let end = begin.saturating_add(span);

        let ticks = time_series_ticks(begin, end);

        for tick in &ticks {
            prop_assert!(
                tick.position >= begin as f64 && tick.position <= end as f64,
                "tick {} outside [{begin}, {end}]",
                tick.position
            );
        }

        for pair in ticks.windows(2) {
            prop_assert!(
                pair[1].position < pair[0].position,
                "ticks {} and {} not strictly descending",
                pair[0].position,
                pair[1].position
            );
        }
    }

    #[test]
    fn only_major_ticks_carry_labels(
        begin in -2_000_000_000i64..2_000_000_000,
        span_exponent in 2.0f64..9.3
    ) {
        let span = 10.0f64.powf(span_exponent) as i64;
        let ticks = time_series_ticks(begin, begin.saturating_add(span));

        for tick in &ticks {
            prop_assert_eq!(tick.major, tick.label.is_some());
            if let Some(label) = &tick.label {
                prop_assert!(!label.is_empty());
            }
        }
    }

    #[test]
    fn generation_is_deterministic_and_swap_insensitive(
        begin in -1_000_000_000i64..1_000_000_000,
        span in 60i64..100_000_000
    ) {
        let end = begin + span;
        let forward = time_series_ticks(begin, end);
        prop_assert_eq!(&forward, &time_series_ticks(begin, end));
        prop_assert_eq!(&forward, &time_series_ticks(end, begin));
    }
}
