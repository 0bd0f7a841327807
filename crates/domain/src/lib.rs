//! SSLLabs Exporter Domain Layer
pub mod assessment;
pub mod config;
pub mod errors;
pub mod grade;
pub mod target;

pub use assessment::{ApiInfo, AssessmentResult, AssessmentStatus, EndpointResult};
pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use grade::{endpoints_lowest_grade, AggregatedGrade, Grade};
pub use target::Target;
