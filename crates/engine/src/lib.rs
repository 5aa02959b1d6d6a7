//! Software-emulated IEEE 754 binary32 arithmetic engine.
//!
//! This crate implements a self-contained soft-FPU for single-precision
//! floating-point arithmetic with the following:
//! 1. **Bit-level model:** Decode/encode between raw `u32` bit patterns and a
//!    classified value representation (zero, subnormal, normal, infinity, NaN).
//! 2. **Rounding unit:** Guard/round/sticky rounding under four explicit
//!    rounding modes, with overflow/underflow/inexact detection.
//! 3. **Operations:** Add, subtract, multiply, divide, and int32/float32
//!    conversion, each computed over exact integer intermediates.
//! 4. **Exception flags:** Per-call IEEE exception reporting (DZ, NV, OF, UF,
//!    NX) returned alongside every result, never raised as errors.
//!
//! The engine never touches the host floating-point unit: every result is
//! produced by integer arithmetic and a single explicit rounding step, so
//! results are bit-for-bit reproducible on any platform. All operations are
//! pure functions of their arguments; there is no rounding-mode register and
//! no accrued flag state.

/// Common constants for the binary32 layout (field widths, bias, masks).
pub mod common;
/// The floating-point engine (format model, rounding unit, operations).
pub mod fpu;

/// Operation dispatch surface; all six operations are associated functions.
pub use crate::fpu::Fpu;
/// Per-operation result records.
pub use crate::fpu::{CvtResult, FpResult};
/// Exception flag bitmask returned by every operation.
pub use crate::fpu::exception_flags::FpFlags;
/// Classified value model for binary32 bit patterns.
pub use crate::fpu::format::{Float32, FpClass};
/// Caller-selected rounding mode; passed explicitly to every operation.
pub use crate::fpu::rounding_modes::{InvalidRoundingMode, RoundingMode};
