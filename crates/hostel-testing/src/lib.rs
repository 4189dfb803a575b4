//! Test utilities for the hostel services.
//!
//! Import from tests and `#[cfg(test)]` blocks only, never from production code.

pub mod session;
