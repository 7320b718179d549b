//! Binary16 FMA test-vector generator library.
//!
//! This crate produces compliance test vectors for a 16-bit fused
//! multiply-add unit, with the following parts:
//! 1. **Encoding:** Strongly typed binary16 bit patterns and landmark constants.
//! 2. **Tables:** Cross-product operand enumeration from sentinel-terminated code lists.
//! 3. **Shaping:** Identity forcing and sign injection per operation shape.
//! 4. **Oracle:** A safe session over Berkeley SoftFloat for correctly-rounded results and exception flags.
//! 5. **Classification:** Denormal/underflow/zero/infinity/NaN detection and policy-driven skip marking.
//! 6. **Serialization:** The fixed-width text line format consumed as golden test data.
//! 7. **Suites:** The runner that turns one suite definition into one artifact.

/// Result classification and policy-driven skip marking.
pub mod classify;
/// Run-level configuration (output directory, tininess semantics).
pub mod config;
/// Binary16 encoding type and landmark constants.
pub mod encoding;
/// Generator error definitions.
pub mod error;
/// Reference oracle session, rounding modes, and exception flags.
pub mod oracle;
/// Test-case record and line serialization.
pub mod serialize;
/// Operation shapes and per-case operand shaping.
pub mod shape;
/// Suite definitions and the suite runner.
pub mod suite;
/// Operand table construction from sentinel-terminated lists.
pub mod table;

/// Run-level configuration; use `GenConfig::default()` or deserialize.
pub use crate::config::GenConfig;
/// The binary16 encoding type every component operates on.
pub use crate::encoding::Fp16;
/// Generator error type (artifact I/O, operand-list contract).
pub use crate::error::GenError;
/// Configured oracle handle; one per thread of generation.
pub use crate::oracle::OracleSession;
/// Suite runner entry points.
pub use crate::suite::{SuiteKind, SuiteSpec, ensure_output_dir, run_suite};
