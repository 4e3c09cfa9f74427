//! Integration tests for the rotasim simulation engine
//!
//! Tests are organized by topic:
//! - `latency` - Distribution parameterization and day draws
//! - `progression` - The per-day infection state machine
//! - `rotation` - Attendance policies across the four modes
//! - `sweep` - Monte Carlo aggregation, normalization, determinism

mod latency;
mod sweep;
