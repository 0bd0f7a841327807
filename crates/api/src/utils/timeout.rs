use axum::http::HeaderMap;
use std::time::Duration;

/// `X-Prometheus-Scrape-Timeout-Seconds`: the scrape timeout of the job, in seconds.
pub const SCRAPE_TIMEOUT_HEADER: &str = "x-prometheus-scrape-timeout-seconds";

/// Parse a scrape timeout such as `"10"` or `"9.5"`.
///
/// Negative, NaN and infinite values are rejected.
///
/// # Examples
/// ```
/// use ssllabs_exporter_api::utils::parse_scrape_timeout;
/// use std::time::Duration;
///
/// assert_eq!(parse_scrape_timeout("1"), Some(Duration::from_secs(1)));
/// assert_eq!(parse_scrape_timeout("0.5"), Some(Duration::from_millis(500)));
/// assert_eq!(parse_scrape_timeout("soon"), None);
/// ```
pub fn parse_scrape_timeout(raw: &str) -> Option<Duration> {
    let secs: f64 = raw.trim().parse().ok()?;
    Duration::try_from_secs_f64(secs).ok()
}

/// Effective probe timeout: the configured one, lowered to the scraper's
/// timeout when it sends a parseable one.
pub fn get_timeout(headers: &HeaderMap, configured: Duration) -> Duration {
    headers
        .get(SCRAPE_TIMEOUT_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_scrape_timeout)
        .map_or(configured, |scrape| scrape.min(configured))
}
