//! Streaming statistics library - shared modules for the stream-stats binary.
//!
//! Pipeline: raw rows -> `normalize` -> `filter` -> {`aggregate` -> `ranking`,
//! `compare`}. `dashboard` runs the whole pipeline for one filter spec.

pub mod aggregate;
pub mod compare;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod load;
pub mod models;
pub mod normalize;
pub mod progress;
pub mod ranking;
pub mod report;
pub mod safety;
#[cfg(test)]
pub mod test_utils;
