pub mod cache;
pub mod duration;
pub mod errors;
pub mod logging;
pub mod probe;
pub mod root;
pub mod server;
pub mod upstream;

pub use cache::CacheConfig;
pub use duration::{parse_duration, validate_timeout, MIN_PROBE_TIMEOUT};
pub use errors::ConfigError;
pub use logging::{LogLevel, LoggingConfig};
pub use probe::ProbeConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
