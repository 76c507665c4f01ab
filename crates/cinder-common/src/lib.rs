//! Common utilities for the Cinder selector crates.
//!
//! This crate provides shared infrastructure used by every Cinder component:
//! - **Warning System** - deduplicated, colored stderr output for inputs that
//!   are accepted but indicate an upstream anomaly

pub mod warning;
