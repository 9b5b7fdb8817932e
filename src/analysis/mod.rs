pub mod comment;
pub mod metrics;
pub mod scoring;
