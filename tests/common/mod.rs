//! Common test utilities for kafka-compose CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated working and home directories plus a CLI runner
//! - YAML helpers for inspecting generated descriptors

pub mod env;

pub use env::*;
