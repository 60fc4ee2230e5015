use barakah_core::models::settings::{GeneratorSettings, DEFAULT_FUND_NAME};
use thiserror::Error;

const DEFAULT_ADDR: &str = "0.0.0.0:5000";

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a number, got {value:?}")]
    NotANumber { var: &'static str, value: String },

    #[error("{0} must list at least one fund")]
    NoFunds(&'static str),
}

/// Server settings, read from `BARAKAH_*` environment variables
/// (a `.env` file is honoured by the binary).
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// `BARAKAH_ADDR`: socket address to listen on
    pub bind_addr: String,
    /// `BARAKAH_FUNDS`: comma-separated fund names to seed
    pub funds: Vec<String>,
    /// `BARAKAH_NAV_START`: starting NAV of every seeded series
    pub start_value: f64,
    /// `BARAKAH_NAV_DAYS`: trailing window length in days
    pub days: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let shape = GeneratorSettings::default();
        Self {
            bind_addr: DEFAULT_ADDR.to_string(),
            funds: vec![DEFAULT_FUND_NAME.to_string()],
            start_value: shape.start_value,
            days: shape.days,
        }
    }
}

impl ServerConfig {
    /// Read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; missing keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("BARAKAH_ADDR") {
            config.bind_addr = addr;
        }
        if let Some(funds) = lookup("BARAKAH_FUNDS") {
            config.funds = funds
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(String::from)
                .collect();
            if config.funds.is_empty() {
                return Err(ConfigError::NoFunds("BARAKAH_FUNDS"));
            }
        }
        if let Some(start) = lookup("BARAKAH_NAV_START") {
            config.start_value = parse("BARAKAH_NAV_START", &start)?;
        }
        if let Some(days) = lookup("BARAKAH_NAV_DAYS") {
            config.days = parse("BARAKAH_NAV_DAYS", &days)?;
        }

        Ok(config)
    }

    /// One generator setting per configured fund.
    pub fn generator_settings(&self) -> Vec<GeneratorSettings> {
        self.funds
            .iter()
            .map(|fund| GeneratorSettings {
                start_value: self.start_value,
                days: self.days,
                ..GeneratorSettings::for_fund(fund.clone())
            })
            .collect()
    }
}

fn parse<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::NotANumber {
        var,
        value: value.to_string(),
    })
}
