//! Common test utilities for Conkie integration tests.
//!
//! This module provides:
//! - `TestEnv`: isolated theme tree and home directory, plus CLI helpers
//! - Fixtures: reusable theme markup and package contents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
