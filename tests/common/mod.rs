//! Common test utilities for circle-lab CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp project and config dirs
//! - `TestResult`: Captured output of one CLI run

pub mod env;

pub use env::*;
