// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use barakah_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn invalid_settings() {
        let err = CoreError::InvalidSettings("fund name must not be empty".into());
        assert_eq!(
            err.to_string(),
            "Invalid generator settings: fund name must not be empty"
        );
    }

    #[test]
    fn invalid_nav_value() {
        let err = CoreError::InvalidNavValue("not a number: \"x\"".into());
        assert_eq!(err.to_string(), "Invalid NAV value: not a number: \"x\"");
    }

    #[test]
    fn network() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn api() {
        let err = CoreError::Api {
            source_name: "HTTP".into(),
            status: 404,
            message: "Fund not found".into(),
        };
        assert_eq!(err.to_string(), "API error (HTTP, HTTP 404): Fund not found");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("expected array".into());
        assert_eq!(err.to_string(), "Deserialization error: expected array");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("{not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn nav_value_parse_error_variant() {
        let err = "abc".parse::<barakah_core::models::nav::NavValue>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidNavValue(_)));
    }

    #[tokio::test]
    async fn from_reqwest_error_redacts_query() {
        // Nothing listens on port 9 of localhost
        let reqwest_err = reqwest::Client::new()
            .get("http://127.0.0.1:9/api/nav-data/Fund?period=1W")
            .send()
            .await
            .unwrap_err();
        let err: CoreError = reqwest_err.into();
        match err {
            CoreError::Network(msg) => assert!(!msg.contains("period=1W")),
            other => panic!("expected Network error, got {other:?}"),
        }
    }

    #[test]
    fn errors_are_debug() {
        let err = CoreError::Network("x".into());
        assert!(format!("{err:?}").contains("Network"));
    }
}
