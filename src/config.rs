//! Event configuration management.
//!
//! Consolidates all environment variable reads and provides validated defaults
//! for newly created events.

use std::time::Duration;

/// Round duration used when no override is configured
pub const DEFAULT_ROUND_DURATION: Duration = Duration::from_secs(10);

/// Participant cap used when no override is configured
pub const DEFAULT_MAX_PARTICIPANTS: usize = 64;

/// Defaults applied to every event at creation time
#[derive(Debug, Clone)]
pub struct EventDefaults {
    /// How long a round runs before pending participants are reminded
    pub round_duration: Duration,
    /// Maximum number of participants per event
    pub max_participants: usize,
}

impl Default for EventDefaults {
    fn default() -> Self {
        Self {
            round_duration: DEFAULT_ROUND_DURATION,
            max_participants: DEFAULT_MAX_PARTICIPANTS,
        }
    }
}

impl EventDefaults {
    /// Load defaults from environment variables
    ///
    /// Reads `SWISS_ROUND_DURATION_SECS` and `SWISS_MAX_PARTICIPANTS`,
    /// falling back to the built-in defaults when a variable is unset or
    /// fails to parse.
    ///
    /// # Returns
    ///
    /// * `Result<EventDefaults, ConfigError>` - Loaded defaults or error
    ///
    /// # Errors
    ///
    /// Returns error if a configured value is out of range
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = EventDefaults {
            round_duration: Duration::from_secs(parse_env_or(
                "SWISS_ROUND_DURATION_SECS",
                DEFAULT_ROUND_DURATION.as_secs(),
            )),
            max_participants: parse_env_or("SWISS_MAX_PARTICIPANTS", DEFAULT_MAX_PARTICIPANTS),
        };
        defaults.validate()?;
        Ok(defaults)
    }

    /// Validate defaults after loading
    ///
    /// # Returns
    ///
    /// * `Result<(), ConfigError>` - Success or validation error
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.round_duration.is_zero() {
            return Err(ConfigError::Invalid {
                var: "SWISS_ROUND_DURATION_SECS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.max_participants < 2 {
            return Err(ConfigError::Invalid {
                var: "SWISS_MAX_PARTICIPANTS".to_string(),
                reason: "Must be at least 2 (a round needs someone to pair)".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
