use barakah_core::models::chart::ChartGeometry;
use barakah_core::models::nav::{NavPoint, NavValue};
use barakah_core::models::period::NavPeriod;
use barakah_core::models::settings::{GeneratorSettings, DEFAULT_FUND_NAME};
use barakah_core::models::summary::NavSummary;
use chrono::{TimeZone, Utc};

fn nav(v: f64) -> NavValue {
    NavValue::new(v).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  NavValue
// ═══════════════════════════════════════════════════════════════════

mod nav_value {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(nav(10.456).get(), 10.46);
        assert_eq!(nav(10.454).get(), 10.45);
    }

    #[test]
    fn display_always_has_two_fraction_digits() {
        assert_eq!(nav(10.0).to_string(), "10.00");
        assert_eq!(nav(12.5).to_string(), "12.50");
        assert_eq!(nav(7.125).to_string().len(), 4);
    }

    #[test]
    fn rejects_zero() {
        assert!(NavValue::new(0.0).is_err());
    }

    #[test]
    fn rejects_negative() {
        assert!(NavValue::new(-1.0).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(NavValue::new(f64::NAN).is_err());
        assert!(NavValue::new(f64::INFINITY).is_err());
    }

    #[test]
    fn rejects_value_rounding_to_zero() {
        assert!(NavValue::new(0.001).is_err());
    }

    #[test]
    fn parses_from_str() {
        let v: NavValue = "12.45".parse().unwrap();
        assert_eq!(v.get(), 12.45);
    }

    #[test]
    fn parse_trims_whitespace() {
        let v: NavValue = " 3.10 ".parse().unwrap();
        assert_eq!(v.to_string(), "3.10");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("abc".parse::<NavValue>().is_err());
        assert!("".parse::<NavValue>().is_err());
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&nav(10.0)).unwrap();
        assert_eq!(json, "\"10.00\"");
    }

    #[test]
    fn deserializes_from_string_or_number() {
        let a: NavValue = serde_json::from_str("\"11.20\"").unwrap();
        let b: NavValue = serde_json::from_str("11.2").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn deserialize_rejects_non_positive() {
        assert!(serde_json::from_str::<NavValue>("\"0.00\"").is_err());
        assert!(serde_json::from_str::<NavValue>("-3").is_err());
    }

    #[test]
    fn ordering_follows_value() {
        assert!(nav(10.01) > nav(10.0));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  NavPoint
// ═══════════════════════════════════════════════════════════════════

mod nav_point {
    use super::*;

    #[test]
    fn json_uses_camel_case_wire_names() {
        let date = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        let point = NavPoint::new(7, "Barakah Equity Fund", nav(12.45), date);
        let json: serde_json::Value = serde_json::to_value(&point).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["fundName"], "Barakah Equity Fund");
        assert_eq!(json["navValue"], "12.45");
        assert!(json["date"].as_str().unwrap().starts_with("2026-10-16T12:00:00"));
    }

    #[test]
    fn deserializes_wire_format() {
        let json = r#"{"id":1,"fundName":"Sukuk Income Fund","navValue":"10.80","date":"2026-09-01T00:00:00Z"}"#;
        let point: NavPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.id, 1);
        assert_eq!(point.fund_name, "Sukuk Income Fund");
        assert_eq!(point.value(), 10.8);
        assert_eq!(point.date, Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  NavPeriod
// ═══════════════════════════════════════════════════════════════════

mod nav_period {
    use super::*;

    #[test]
    fn known_tokens() {
        assert_eq!(NavPeriod::from_token(Some("1W")), NavPeriod::OneWeek);
        assert_eq!(NavPeriod::from_token(Some("1M")), NavPeriod::OneMonth);
        assert_eq!(NavPeriod::from_token(Some("3M")), NavPeriod::ThreeMonths);
        assert_eq!(NavPeriod::from_token(Some("1Y")), NavPeriod::OneYear);
    }

    #[test]
    fn row_limits() {
        assert_eq!(NavPeriod::OneWeek.row_limit(), 7);
        assert_eq!(NavPeriod::OneMonth.row_limit(), 30);
        assert_eq!(NavPeriod::ThreeMonths.row_limit(), 90);
        assert_eq!(NavPeriod::OneYear.row_limit(), 365);
    }

    #[test]
    fn missing_token_falls_back_to_one_month() {
        assert_eq!(NavPeriod::from_token(None), NavPeriod::OneMonth);
    }

    #[test]
    fn unknown_tokens_fall_back_to_one_month() {
        for token in ["6M", "", "1w", "ALL", "365"] {
            assert_eq!(NavPeriod::from_token(Some(token)).row_limit(), 30, "token {token:?}");
        }
    }

    #[test]
    fn token_round_trips() {
        for period in NavPeriod::ALL {
            assert_eq!(NavPeriod::from_token(Some(period.token())), period);
            assert_eq!(period.to_string(), period.token());
        }
    }

    #[test]
    fn serde_uses_tokens() {
        assert_eq!(serde_json::to_string(&NavPeriod::ThreeMonths).unwrap(), "\"3M\"");
        let p: NavPeriod = serde_json::from_str("\"1Y\"").unwrap();
        assert_eq!(p, NavPeriod::OneYear);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  GeneratorSettings
// ═══════════════════════════════════════════════════════════════════

mod generator_settings {
    use super::*;

    #[test]
    fn defaults_match_reference_series() {
        let s = GeneratorSettings::default();
        assert_eq!(s.fund_name, DEFAULT_FUND_NAME);
        assert_eq!(s.start_value, 10.0);
        assert_eq!(s.days, 365);
        assert_eq!(s.max_daily_change, 0.03);
        assert_eq!(s.trend_uplift, 0.003);
    }

    #[test]
    fn for_fund_keeps_default_shape() {
        let s = GeneratorSettings::for_fund("Halal Tech ETF");
        assert_eq!(s.fund_name, "Halal Tech ETF");
        assert_eq!(s.days, 365);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ChartGeometry
// ═══════════════════════════════════════════════════════════════════

mod chart_geometry {
    use super::*;

    #[test]
    fn default_canvas() {
        let g = ChartGeometry::default();
        assert_eq!((g.width, g.height, g.pad_x, g.pad_y), (300.0, 160.0, 20.0, 20.0));
        assert_eq!(g.inner_width(), 260.0);
        assert_eq!(g.inner_height(), 120.0);
        assert_eq!(g.baseline(), 140.0);
        assert_eq!(g.midline(), 80.0);
    }

    #[test]
    fn padding_larger_than_canvas_clamps_inner_size() {
        let g = ChartGeometry::new(30.0, 30.0, 20.0, 20.0);
        assert_eq!(g.inner_width(), 0.0);
        assert_eq!(g.inner_height(), 0.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  NavSummary
// ═══════════════════════════════════════════════════════════════════

mod nav_summary {
    use super::*;

    #[test]
    fn json_field_names() {
        let summary = NavSummary {
            fund_name: "Barakah Equity Fund".into(),
            current: nav(12.45),
            previous: None,
            change_percent: 0.0,
            high_52w: nav(13.2),
            as_of: Utc.with_ymd_and_hms(2026, 10, 16, 0, 0, 0).unwrap(),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["current"], "12.45");
        assert_eq!(json["high52w"], "13.20");
        assert!(json["previous"].is_null());
        assert_eq!(json["changePercent"], 0.0);
    }
}
