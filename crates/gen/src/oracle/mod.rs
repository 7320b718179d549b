//! Reference oracle adapter.
//!
//! This module wraps the Berkeley SoftFloat binary16 implementation, the
//! trusted arithmetic authority for every emitted result, behind a safe
//! session type. It handles:
//! 1. **Configuration:** Rounding mode and tininess detection, applied to the library's mode state.
//! 2. **Flag Attribution:** The library accumulates exception flags globally; each call clears before and reads after so flags belong to exactly one case.
//! 3. **Auxiliary Queries:** Magnitude comparison and decimal conversion for classification and printing.
//!
//! Operations are organized into submodules:
//! - [`rounding_modes`]: Opcode rounding-mode encoding and oracle mapping.
//! - [`exception_flags`]: Five-flag readout and the 4-bit record packing.

/// Opcode rounding-mode encoding and tininess-detection modes.
pub mod rounding_modes;

/// Exception flag readout and record packing.
pub mod exception_flags;

use std::marker::PhantomData;

use crate::encoding::Fp16;

use self::exception_flags::RaisedFlags;
use self::rounding_modes::{RoundingMode, TininessMode};

/// Result of one oracle multiply-add: the rounded encoding and the raw
/// flag readout attributed to that call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OracleOutcome {
    /// The correctly-rounded binary16 result.
    pub result: Fp16,
    /// The five exception flags raised by the computation.
    pub flags: RaisedFlags,
}

/// A configured handle on the reference oracle.
///
/// SoftFloat keeps its rounding mode, tininess mode, and exception-flag
/// accumulator in library-owned state rather than taking them per call.
/// The session owns that state for the duration of a generation run:
/// constructing a session configures the library, [`set_rounding`]
/// reconfigures it between suites, and [`mul_add`] brackets every
/// computation with the clear-before/read-after flag protocol.
///
/// The library state is thread-local in the C build, so a session must
/// stay on the thread that configured it; the `PhantomData<*mut ()>`
/// member keeps the type `!Send` and `!Sync`. Parallel generation needs
/// one session per thread.
///
/// [`set_rounding`]: Self::set_rounding
/// [`mul_add`]: Self::mul_add
#[derive(Debug)]
pub struct OracleSession {
    rounding: RoundingMode,
    tininess: TininessMode,
    _thread_bound: PhantomData<*mut ()>,
}

impl OracleSession {
    /// Creates a session and configures the oracle's mode state.
    pub fn new(rounding: RoundingMode, tininess: TininessMode) -> Self {
        let session = Self {
            rounding,
            tininess,
            _thread_bound: PhantomData,
        };
        session.apply_modes();
        session
    }

    /// Returns the currently configured rounding mode.
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Reconfigures the rounding mode for subsequent computations.
    pub fn set_rounding(&mut self, rounding: RoundingMode) {
        self.rounding = rounding;
        self.apply_modes();
    }

    /// Writes the session's modes into the library state.
    fn apply_modes(&self) {
        // SAFETY: plain writes to SoftFloat's thread-local mode bytes; the
        // session is confined to this thread, so no other configuration can
        // be clobbered.
        unsafe {
            softfloat_sys::softfloat_roundingMode_write_helper(self.rounding.to_oracle());
            softfloat_sys::softfloat_detectTininess_write_helper(self.tininess.to_oracle());
        }
    }

    /// Computes `x * y + z` with a single rounding step.
    ///
    /// The exception-flag accumulator is cleared immediately before the
    /// computation and read immediately after, so the returned flags are
    /// attributable to this call alone. Takes `&mut self` because the
    /// clear/compute/read sequence is not reentrant.
    pub fn mul_add(&mut self, x: Fp16, y: Fp16, z: Fp16) -> OracleOutcome {
        // SAFETY: clear/compute/read on thread-local SoftFloat state; the
        // &mut receiver prevents interleaving another call between the
        // clear and the read on this session.
        let (result, raw_flags) = unsafe {
            softfloat_sys::softfloat_exceptionFlags_write_helper(0);
            let result = softfloat_sys::f16_mulAdd(to_oracle(x), to_oracle(y), to_oracle(z));
            (result, softfloat_sys::softfloat_exceptionFlags_read_helper())
        };
        OracleOutcome {
            result: Fp16::from_bits(result.v),
            flags: RaisedFlags::from_bits(raw_flags),
        }
    }

    /// Returns true if `a < b` under the oracle's ordering.
    ///
    /// Signaling comparison, used only for magnitude classification; a NaN
    /// operand compares false and may raise flags in the accumulator,
    /// which the next [`mul_add`](Self::mul_add) discards with its clear.
    pub fn less_than(&self, a: Fp16, b: Fp16) -> bool {
        // SAFETY: pure comparison call; only touches the thread-local flag
        // accumulator, whose contents are not attributed between mul_add
        // calls.
        unsafe { softfloat_sys::f16_lt(to_oracle(a), to_oracle(b)) }
    }

    /// Converts an encoding to a 64-bit host float for printing.
    ///
    /// The conversion is exact for every finite binary16 value.
    pub fn to_decimal(&self, a: Fp16) -> f64 {
        // SAFETY: pure conversion call on an owned value.
        let wide = unsafe { softfloat_sys::f16_to_f64(to_oracle(a)) };
        f64::from_bits(wide.v)
    }
}

/// Repacks an encoding into the oracle's FFI operand type.
#[inline]
fn to_oracle(value: Fp16) -> softfloat_sys::float16_t {
    softfloat_sys::float16_t { v: value.to_bits() }
}
