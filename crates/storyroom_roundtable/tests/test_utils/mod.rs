//! Test utilities for roundtable tests.
//!
//! This module provides a scripted mock driver and input helpers.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockRoundtableDriver, RecordedCall, SYNTHESIS_REPLY, gift_input};
