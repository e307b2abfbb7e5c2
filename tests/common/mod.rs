#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from tablefeet for tests
pub use tablefeet::{
    BoundingBox, Candidate, CandidateSink, Classification, MapError, Pipeline, PipelineOutput,
    TableConfig, TableDetector, TableFilter,
};
