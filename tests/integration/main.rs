//! Integration test driver for `tests/integration/` submodules.
//!
//! Each `mod` below maps to a file exercising one layer through the public
//! crate API only.

mod fixtures;
mod reference_values_tests;
