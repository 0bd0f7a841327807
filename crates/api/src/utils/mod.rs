pub mod timeout;

pub use timeout::{get_timeout, parse_scrape_timeout, SCRAPE_TIMEOUT_HEADER};
