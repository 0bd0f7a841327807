pub mod index;
pub mod metrics;
pub mod probe;

pub use index::index;
pub use metrics::metrics;
pub use probe::probe;
