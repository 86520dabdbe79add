pub mod params;

pub use params::{AssessmentRequest, CompareRequest, UrlRequest, ViewParams};
