use super::errors::ConfigError;
use std::time::Duration;

/// A new assessment takes at least a minute per host endpoint, so shorter
/// probe timeouts can never succeed.
pub const MIN_PROBE_TIMEOUT: Duration = Duration::from_secs(60);

/// Parse a duration such as `30m`, `1h5m` or `90s`.
pub fn parse_duration(raw: &str) -> Result<Duration, ConfigError> {
    humantime::parse_duration(raw.trim()).map_err(|_| ConfigError::InvalidDuration(raw.to_string()))
}

/// Parse and bound-check the `--timeout` value.
pub fn validate_timeout(raw: &str) -> Result<Duration, ConfigError> {
    let timeout = parse_duration(raw)?;
    check_probe_timeout(timeout)?;
    Ok(timeout)
}

pub(crate) fn check_probe_timeout(timeout: Duration) -> Result<(), ConfigError> {
    if timeout < MIN_PROBE_TIMEOUT {
        return Err(ConfigError::Validation(
            "probe timeout must be at least 1 minute".to_string(),
        ));
    }
    Ok(())
}
