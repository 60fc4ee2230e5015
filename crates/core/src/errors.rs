use thiserror::Error;

/// Unified error type for the entire barakah-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// An unknown fund or an empty period is never an error: queries return an
/// empty series instead.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Generation ──────────────────────────────────────────────────
    #[error("Invalid generator settings: {0}")]
    InvalidSettings(String),

    #[error("Invalid NAV value: {0}")]
    InvalidNavValue(String),

    // ── Sources / Network ───────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error ({source_name}, HTTP {status}): {message}")]
    Api {
        source_name: String,
        status: u16,
        message: String,
    },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Query strings carry fund names and periods; keep them out of logs.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
