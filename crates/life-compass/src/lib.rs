//! Self-assessment diagnosis engine, localized report assembly, and the HTTP
//! surface that persists sessions and gates the detailed report.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
