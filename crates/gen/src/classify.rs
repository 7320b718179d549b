//! Result classification and filtering.
//!
//! Every computed case is classified against the result classes the target
//! hardware does not cover or a suite chooses to exclude. Classification
//! never discards a case: a matching rule turns the emitted line into a
//! comment-prefixed skip, leaving the downstream consumer to decide whether
//! commented lines count.
//!
//! Denormal and underflow suppression are unconditional. Zero, infinity,
//! and NaN suppression are gated by the suite's [`FilterPolicy`]. The rules
//! are independent; one line can carry several skip markers.

use crate::encoding::Fp16;
use crate::oracle::exception_flags::RaisedFlags;
use crate::oracle::{OracleOutcome, OracleSession};

/// Which special result classes a suite emits as first-class cases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterPolicy {
    /// Emit exact-zero results without a skip marker.
    pub zero_allowed: bool,
    /// Emit infinite (and boundary, see [`classify`]) results without a
    /// skip marker.
    pub inf_allowed: bool,
    /// Emit NaN results without a skip marker.
    pub nan_allowed: bool,
}

impl FilterPolicy {
    /// Marks every special result class as a skip.
    pub const STRICT: Self = Self {
        zero_allowed: false,
        inf_allowed: false,
        nan_allowed: false,
    };

    /// Emits every special result class as a first-class case.
    pub const ALLOW_SPECIALS: Self = Self {
        zero_allowed: true,
        inf_allowed: true,
        nan_allowed: true,
    };
}

/// The skip rules one case matched, in marker emission order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    /// Result magnitude is nonzero and below the smallest normal.
    pub denormal: bool,
    /// The computation raised the underflow flag.
    pub underflow: bool,
    /// Result magnitude is exactly zero (policy-gated).
    pub zero: bool,
    /// Result magnitude is at the infinity boundary (policy-gated).
    pub infinity: bool,
    /// Result magnitude is above infinity, i.e. NaN (policy-gated).
    pub nan: bool,
}

impl Classification {
    /// Returns true if any rule matched and the line will be emitted as a
    /// comment-prefixed skip.
    pub const fn is_skipped(&self) -> bool {
        self.denormal || self.underflow || self.zero || self.infinity || self.nan
    }
}

/// Classifies one oracle outcome against the suite's policy.
///
/// The magnitude checks are bitwise on the sign-cleared result encoding.
/// The infinity rule also matches the largest finite magnitude (0x7BFF):
/// results saturating at the finite maximum are filtered together with
/// genuine overflows to infinity.
pub fn classify(
    session: &OracleSession,
    outcome: &OracleOutcome,
    policy: FilterPolicy,
) -> Classification {
    let magnitude = outcome.result.magnitude();

    let denormal =
        magnitude.to_bits() != 0 && session.less_than(magnitude, Fp16::MIN_NORMAL);
    let underflow = outcome.flags.contains(RaisedFlags::UF);
    let zero = magnitude.to_bits() == 0 && !policy.zero_allowed;
    let infinity =
        (magnitude == Fp16::INFINITY || magnitude == Fp16::MAX_FINITE) && !policy.inf_allowed;
    let nan = magnitude.to_bits() > Fp16::INFINITY.to_bits() && !policy.nan_allowed;

    Classification {
        denormal,
        underflow,
        zero,
        infinity,
        nan,
    }
}
