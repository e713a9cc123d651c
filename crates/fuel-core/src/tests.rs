//! Unit tests for fuel-core primitives.

#[cfg(test)]
mod parse {
    use crate::{parse_duration, parse_pace};

    #[test]
    fn three_fields_are_hms() {
        assert_eq!(parse_duration("02:45:00"), 9_900);
        assert_eq!(parse_duration("1:00:01"), 3_601);
    }

    #[test]
    fn two_fields_are_ms() {
        assert_eq!(parse_duration("45:00"), 2_700);
        assert_eq!(parse_duration("00:30"), 30);
    }

    #[test]
    fn bare_integer_is_hours() {
        assert_eq!(parse_duration("3"), 10_800);
        assert_eq!(parse_duration("0"), 0);
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        assert_eq!(parse_duration("  01:00:00 "), 3_600);
    }

    #[test]
    fn malformed_input_is_zero() {
        assert_eq!(parse_duration(""), 0);
        assert_eq!(parse_duration("abc"), 0);
        assert_eq!(parse_duration("1:xx:00"), 0);
        assert_eq!(parse_duration("-1:00:00"), 0);
        assert_eq!(parse_duration("1::00"), 0);
        assert_eq!(parse_duration("1.5"), 0);
        assert_eq!(parse_duration("1:00:00:00"), 0);
    }

    #[test]
    fn overflow_is_zero() {
        assert_eq!(parse_duration(&u64::MAX.to_string()), 0);
    }

    #[test]
    fn pace_requires_minutes_and_seconds() {
        assert_eq!(parse_pace("05:00"), 300);
        assert_eq!(parse_pace("4:45"), 285);
        assert_eq!(parse_pace("5"), 0);
        assert_eq!(parse_pace("0:05:00"), 0);
        assert_eq!(parse_pace("five"), 0);
    }
}

#[cfg(test)]
mod format {
    use crate::{format_duration, format_duration_f64, format_range};

    #[test]
    fn zero_padded() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(9_900), "02:45:00");
        assert_eq!(format_duration(3_661), "01:01:01");
    }

    #[test]
    fn hours_not_truncated() {
        assert_eq!(format_duration(360_000), "100:00:00");
    }

    #[test]
    fn float_input_clamped_and_truncated() {
        assert_eq!(format_duration_f64(-5.0), "00:00:00");
        assert_eq!(format_duration_f64(f64::NAN), "00:00:00");
        assert_eq!(format_duration_f64(f64::INFINITY), "00:00:00");
        assert_eq!(format_duration_f64(59.9), "00:00:59");
    }

    #[test]
    fn range_label() {
        assert_eq!(format_range(0, 3_600), "00:00:00 → 01:00:00");
    }
}

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use crate::{format_duration, format_duration_f64, parse_duration};

    proptest! {
        #[test]
        fn format_then_parse_is_identity(secs in 0u64..10_000_000_000) {
            prop_assert_eq!(parse_duration(&format_duration(secs)), secs);
        }

        #[test]
        fn float_round_trip_floors(secs in 0.0f64..1.0e9) {
            prop_assert_eq!(parse_duration(&format_duration_f64(secs)), secs.floor() as u64);
        }
    }
}
