//! Insurance risk profiling for auto, home, life and disability lines.
//!
//! [`profiles::RiskScorer`] is the deterministic rule engine. The rest of the crate wraps it
//! in request validation, an axum router, configuration and tracing setup so the
//! `origin-risk-api` binary stays thin.

pub mod config;
pub mod error;
pub mod profiles;
pub mod telemetry;
