//! Unit tests for the floating-point unit.



/// Exception flag reporting tests.
pub mod exception_flags;


/// Rounding mode decoding and direction tests.
pub mod rounding_modes;
