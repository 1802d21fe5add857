//! Explainable college recommendations.
//!
//! The [`recommendation`] module holds the scoring engine; [`catalog`] supplies the
//! institution snapshot it ranks. Configuration, error and telemetry plumbing is shared
//! with the API service in `services/api`.

pub mod catalog;
pub mod config;
pub mod error;
pub mod recommendation;
pub mod telemetry;
