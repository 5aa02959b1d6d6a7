//! Common definitions shared across the engine.
//!
//! This module hosts the binary32 layout constants used by the format model,
//! the rounding unit, and operation dispatch.

/// IEEE 754 binary32 layout constants.
pub mod constants;
