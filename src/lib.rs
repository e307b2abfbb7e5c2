pub mod config;
pub mod detection;
pub mod error;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod report;

pub use config::{TableConfig, TableFilter};
pub use detection::TableDetector;
pub use error::{MapError, Result};
pub use models::{BoundingBox, Candidate, Classification, Contour};
pub use pipeline::{CandidateSink, DebugConfig, Pipeline, PipelineOutput};
pub use report::ConsoleReport;
