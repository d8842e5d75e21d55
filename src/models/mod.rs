//! Shared data models for bizdir
//!
//! The same records feed both the build-time generator and the browsing engine,
//! so they live here rather than in either consumer.

mod business;
mod dataset;

pub use business::{BusinessRecord, non_blank};
pub use dataset::{Dataset, RejectedRecord};
