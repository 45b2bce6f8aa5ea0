//! Education path recommendation engine.
//!
//! A student profile is matched against a read-only catalog of universities,
//! scholarships, and countries. The engine filters, scores, selects, and
//! annotates candidates, returning at most three explained paths.

pub mod catalog;
pub mod config;
pub mod error;
pub mod recommend;
pub mod telemetry;
