#[cfg(test)]
mod tests {
    use super::super::converter::{ConversionRequest, Converter};
    use crate::time::TimeUnit;
    use chrono::{DateTime, TimeZone, Utc};

    fn fixed_now() -> DateTime<Utc> {
        // 2023-11-14T22:13:20Z
        Utc.timestamp_opt(1700000000, 0).unwrap()
    }

    #[test]
    fn test_convert_seconds_in_utc() {
        let converter = Converter::new();
        let result = converter
            .convert(&ConversionRequest::new("1700000000"), &fixed_now())
            .unwrap();

        assert_eq!(result.detected_unit, TimeUnit::Seconds);
        assert_eq!(result.effective_unit, TimeUnit::Seconds);
        assert_eq!(result.millis, 1700000000000);
        assert_eq!(result.utc_iso, "2023-11-14T22:13:20.000Z");
        assert_eq!(result.utc_display, "2023-11-14 22:13:20.000 UTC");
        assert_eq!(result.relative, "less than a minute ago");
        assert_eq!(result.timezone, "UTC");
        assert_eq!(result.zoned, "2023-11-14 22:13:20");
        assert_eq!(result.detected_label(), "Seconds");
    }

    #[test]
    fn test_convert_detects_each_unit() {
        let converter = Converter::new();
        let cases = [
            ("1700000000000", TimeUnit::Milliseconds),
            ("1700000000000000", TimeUnit::Microseconds),
            ("1700000000000000000", TimeUnit::Nanoseconds),
        ];
        for (input, unit) in cases {
            let result = converter
                .convert(&ConversionRequest::new(input), &fixed_now())
                .unwrap();
            assert_eq!(result.detected_unit, unit, "input {}", input);
            assert_eq!(result.millis, 1700000000000, "input {}", input);
        }
    }

    #[test]
    fn test_manual_unit_overrides_detection() {
        let converter = Converter::new();
        let request = ConversionRequest::new("1700000000").with_unit(Some(TimeUnit::Milliseconds));
        let result = converter.convert(&request, &fixed_now()).unwrap();

        assert_eq!(result.detected_unit, TimeUnit::Seconds);
        assert_eq!(result.effective_unit, TimeUnit::Milliseconds);
        assert_eq!(result.utc_iso, "1970-01-20T16:13:20.000Z");
        assert_eq!(result.relative, "almost 54 years ago");
    }

    #[test]
    fn test_default_unit_applies_only_without_override() {
        let converter = Converter::with_default_unit(Some(TimeUnit::Milliseconds));

        let result = converter
            .convert(&ConversionRequest::new("1700000000000"), &fixed_now())
            .unwrap();
        assert_eq!(result.effective_unit, TimeUnit::Milliseconds);

        let request = ConversionRequest::new("1700000000").with_unit(Some(TimeUnit::Seconds));
        let result = converter.convert(&request, &fixed_now()).unwrap();
        assert_eq!(result.effective_unit, TimeUnit::Seconds);
    }

    #[test]
    fn test_convert_with_timezone() {
        let converter = Converter::new();
        let request =
            ConversionRequest::new("1672531200").with_timezone(chrono_tz::America::New_York);
        let result = converter.convert(&request, &fixed_now()).unwrap();

        assert_eq!(result.timezone, "America/New_York");
        assert_eq!(result.zoned, "2022-12-31 19:00:00");
        assert_eq!(result.utc_iso, "2023-01-01T00:00:00.000Z");
        assert_eq!(result.relative, "11 months ago");
    }

    #[test]
    fn test_convert_fractional_seconds() {
        let converter = Converter::new();
        let result = converter
            .convert(&ConversionRequest::new("1679876543.123"), &fixed_now())
            .unwrap();
        assert_eq!(result.millis, 1679876543123);
        assert_eq!(result.utc_iso, "2023-03-27T00:22:23.123Z");
    }

    #[test]
    fn test_convert_future_timestamp() {
        let converter = Converter::new();
        let result = converter
            .convert(&ConversionRequest::new("1700010800"), &fixed_now())
            .unwrap();
        assert_eq!(result.relative, "in about 3 hours");
    }

    #[test]
    fn test_non_numeric_input_produces_nothing() {
        let converter = Converter::new();
        for input in ["", "   ", "abc", "."] {
            assert!(
                converter
                    .convert(&ConversionRequest::new(input), &fixed_now())
                    .is_none(),
                "{:?} should not convert",
                input
            );
        }
    }

    #[test]
    fn test_out_of_range_produces_nothing() {
        let converter = Converter::new();
        let request = ConversionRequest::new("99999999999999999999").with_unit(Some(TimeUnit::Seconds));
        assert!(converter.convert(&request, &fixed_now()).is_none());
    }

    #[test]
    fn test_conversion_serializes_unit_codes() {
        let converter = Converter::new();
        let result = converter
            .convert(&ConversionRequest::new("1700000000000"), &fixed_now())
            .unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["detected_unit"], "ms");
        assert_eq!(json["effective_unit"], "ms");
        assert_eq!(json["millis"], 1700000000000i64);
    }
}
