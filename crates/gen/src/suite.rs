//! Suite orchestration.
//!
//! A suite is one named batch of cases sharing an operand table, an
//! operation-shape family, a rounding mode, and a filter policy,
//! materialized as one output artifact. This module runs a suite to
//! completion:
//! 1. **Setup:** Build the operand table, reconfigure the oracle to the suite's rounding mode, open `<out_dir>/<name>.tv`, write the description line.
//! 2. **Enumeration:** Nested loops over the table per suite kind (pairs for multiply-only and add-only, triples for full FMA), with sign variation where requested.
//! 3. **Emission:** Shape, compute, classify, and serialize one case per combination. No case is computed twice within one invocation.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::classify::{FilterPolicy, classify};
use crate::config::GenConfig;
use crate::encoding::Fp16;
use crate::error::GenError;
use crate::oracle::OracleSession;
use crate::oracle::rounding_modes::RoundingMode;
use crate::serialize::{TestRecord, render_line};
use crate::shape::{OperationShape, shape_operands};
use crate::table::OperandTable;

/// The enumeration family a suite runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuiteKind {
    /// `x * y` over all table pairs. When `signed`, each pair is emitted
    /// twice, the second time with the multiplier's sign flipped.
    Multiply {
        /// Also emit the sign-flipped variant of each pair.
        signed: bool,
    },
    /// `x + z` over all table pairs. When `signed`, each pair is emitted
    /// twice, the second time with the addend's sign flipped.
    Add {
        /// Also emit the sign-flipped variant of each pair.
        signed: bool,
    },
    /// `x * y + z` over all table triples. Unsigned emits the plain shape
    /// only; signed emits the negated-product, negated-addend, and
    /// both-negated shapes.
    FusedMultiplyAdd {
        /// Emit the three negated shapes instead of the plain one.
        signed: bool,
    },
    /// The special-case sweep: full FMA under all four negation shapes,
    /// then multiply-only pairs, then add-only pairs, each pair emitted
    /// plain and with the relevant operand sign-flipped, all in one
    /// artifact.
    SpecialSweep,
}

/// A build-time suite definition.
///
/// Specs are const-constructible so a driver can hold its whole suite list
/// in a static table.
#[derive(Clone, Copy, Debug)]
pub struct SuiteSpec {
    /// Suite name; the artifact is written to `<out_dir>/<name>.tv`.
    pub name: &'static str,
    /// Description comment emitted as the artifact's first line.
    pub description: &'static str,
    /// Exponent code list, terminated by [`LIST_END`](crate::table::LIST_END).
    pub exponents: &'static [u16],
    /// Fraction code list, terminated by [`LIST_END`](crate::table::LIST_END).
    pub fractions: &'static [u16],
    /// Enumeration family.
    pub kind: SuiteKind,
    /// Rounding mode, recorded in every opcode and applied to the oracle.
    pub rounding: RoundingMode,
    /// Which special result classes are emitted unmarked.
    pub policy: FilterPolicy,
}

/// Creates the configured output directory if it does not exist.
///
/// # Errors
///
/// Returns [`GenError::CreateDir`] if the directory cannot be created.
pub fn ensure_output_dir(config: &GenConfig) -> Result<(), GenError> {
    fs::create_dir_all(&config.out_dir).map_err(|e| GenError::create_dir(&config.out_dir, e))
}

/// Generates one suite into its artifact and returns the emitted case
/// count (skip-marked lines included).
///
/// The oracle session is reconfigured to the suite's rounding mode before
/// any case is computed, so recorded opcodes always describe the mode the
/// results were produced under.
///
/// # Errors
///
/// Returns a [`GenError`] if the operand lists violate the terminator
/// contract or the artifact cannot be created or written.
pub fn run_suite(
    session: &mut OracleSession,
    config: &GenConfig,
    spec: &SuiteSpec,
) -> Result<usize, GenError> {
    let table = OperandTable::from_lists(spec.exponents, spec.fractions)?;
    session.set_rounding(spec.rounding);

    let mut artifact = Artifact::create(&config.out_dir, spec.name)?;
    artifact.line(spec.description)?;

    let mut emitted = 0usize;
    match spec.kind {
        SuiteKind::Multiply { signed } => {
            let shape = OperationShape::multiply_only(spec.rounding);
            for &x in &table {
                for &y in &table {
                    for &flip in sign_variants(signed) {
                        let y = y.with_sign_flipped(flip);
                        emit_case(session, &mut artifact, &shape, spec.policy, x, y, Fp16::POS_ZERO)?;
                        emitted += 1;
                    }
                }
            }
        }
        SuiteKind::Add { signed } => {
            let shape = OperationShape::add_only(spec.rounding);
            for &x in &table {
                for &z in &table {
                    for &flip in sign_variants(signed) {
                        let z = z.with_sign_flipped(flip);
                        emit_case(session, &mut artifact, &shape, spec.policy, x, Fp16::POS_ZERO, z)?;
                        emitted += 1;
                    }
                }
            }
        }
        SuiteKind::FusedMultiplyAdd { signed } => {
            let negations: &[(bool, bool)] = if signed {
                &[(true, false), (false, true), (true, true)]
            } else {
                &[(false, false)]
            };
            for &x in &table {
                for &y in &table {
                    for &z in &table {
                        for &(negp, negz) in negations {
                            let shape = OperationShape::fused(negp, negz, spec.rounding);
                            emit_case(session, &mut artifact, &shape, spec.policy, x, y, z)?;
                            emitted += 1;
                        }
                    }
                }
            }
        }
        SuiteKind::SpecialSweep => {
            emitted = run_special_sweep(session, &mut artifact, spec, &table)?;
        }
    }

    artifact.finish()?;
    debug!(suite = spec.name, cases = emitted, "suite generated");
    Ok(emitted)
}

/// Runs the three sections of the special-case sweep.
fn run_special_sweep(
    session: &mut OracleSession,
    artifact: &mut Artifact,
    spec: &SuiteSpec,
    table: &OperandTable,
) -> Result<usize, GenError> {
    let mut emitted = 0usize;

    // Full FMA under every negation shape.
    for &x in table {
        for &y in table {
            for &z in table {
                for (negp, negz) in [(false, false), (true, false), (false, true), (true, true)] {
                    let shape = OperationShape::fused(negp, negz, spec.rounding);
                    emit_case(session, artifact, &shape, spec.policy, x, y, z)?;
                    emitted += 1;
                }
            }
        }
    }

    // Multiply-only pairs, each emitted plain and with the multiplier
    // negated.
    let shape = OperationShape::multiply_only(spec.rounding);
    for &x in table {
        for &y in table {
            emit_case(session, artifact, &shape, spec.policy, x, y, Fp16::POS_ZERO)?;
            emit_case(session, artifact, &shape, spec.policy, x, y.negated(), Fp16::POS_ZERO)?;
            emitted += 2;
        }
    }

    // Add-only pairs, each emitted plain and with the addend negated.
    let shape = OperationShape::add_only(spec.rounding);
    for &x in table {
        for &z in table {
            emit_case(session, artifact, &shape, spec.policy, x, Fp16::POS_ZERO, z)?;
            emit_case(session, artifact, &shape, spec.policy, x, Fp16::POS_ZERO, z.negated())?;
            emitted += 2;
        }
    }

    Ok(emitted)
}

/// Shapes, computes, classifies, and writes a single case.
fn emit_case(
    session: &mut OracleSession,
    artifact: &mut Artifact,
    shape: &OperationShape,
    policy: FilterPolicy,
    x: Fp16,
    y: Fp16,
    z: Fp16,
) -> Result<(), GenError> {
    let operands = shape_operands(shape, x, y, z);
    let outcome = session.mul_add(operands.oracle_x, operands.y, operands.oracle_z);
    let record = TestRecord {
        x: operands.x,
        y: operands.y,
        z: operands.z,
        opcode: shape.opcode(),
        result: outcome.result,
        flags: outcome.flags.pack(),
    };
    let class = classify(session, &outcome, policy);
    artifact.line(&render_line(session, &record, &class))
}

/// Returns the sign-flip enumeration for a pair loop.
const fn sign_variants(signed: bool) -> &'static [bool] {
    if signed { &[false, true] } else { &[false] }
}

/// A buffered artifact file that attaches its path to every I/O error.
struct Artifact {
    out: BufWriter<File>,
    path: PathBuf,
}

impl Artifact {
    /// Creates `<dir>/<name>.tv` for writing.
    fn create(dir: &Path, name: &str) -> Result<Self, GenError> {
        let path = dir.join(format!("{name}.tv"));
        let file = File::create(&path).map_err(|e| GenError::open_artifact(&path, e))?;
        Ok(Self {
            out: BufWriter::new(file),
            path,
        })
    }

    /// Writes one line, appending the newline.
    fn line(&mut self, text: &str) -> Result<(), GenError> {
        writeln!(self.out, "{text}").map_err(|e| GenError::write_artifact(&self.path, e))
    }

    /// Flushes the buffer; call once after the last line.
    fn finish(mut self) -> Result<(), GenError> {
        self.out
            .flush()
            .map_err(|e| GenError::write_artifact(&self.path, e))
    }
}
