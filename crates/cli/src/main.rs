//! Binary16 FMA test-vector generator driver.
//!
//! This binary materializes the fixed set of compliance suites. It performs:
//! 1. **Setup:** Create the output directory and configure the oracle session.
//! 2. **Generation:** Run every suite in the build-time table, one `.tv` artifact each.
//! 3. **Reporting:** Print a per-suite case count; exit nonzero with a diagnostic on any I/O failure.
//!
//! There are no command-line arguments: the suites, their operand lists,
//! rounding modes, and filter policies are defined below and only change
//! with a rebuild.

use std::process;

use tracing_subscriber::EnvFilter;

use fmagen_core::classify::FilterPolicy;
use fmagen_core::oracle::rounding_modes::RoundingMode;
use fmagen_core::table::LIST_END;
use fmagen_core::{GenConfig, GenError, OracleSession, SuiteKind, SuiteSpec};
use fmagen_core::{ensure_output_dir, run_suite};

/// Exponent codes exercising only the zero-bias point.
const EASY_EXPONENTS: &[u16] = &[15, LIST_END];
/// Fraction codes for 1.0 and 1.1 significands.
const EASY_FRACTIONS: &[u16] = &[0, 0x200, LIST_END];

/// Exponent codes spanning below, at, and above the bias.
const MED_EXPONENTS: &[u16] = &[8, 15, 20, LIST_END];
/// Fraction codes mixing exact and fully populated significands.
const MED_FRACTIONS: &[u16] = &[0, 0x200, 0x300, 0x345, LIST_END];

/// Exponent codes reaching overflow range, infinity/NaN, and denormals.
const SPECIAL_EXPONENTS: &[u16] = &[25, 31, 0, 15, 20, LIST_END];
/// Fraction codes for the special-case sweeps.
const SPECIAL_FRACTIONS: &[u16] = &[0x300, 0, 0x399, LIST_END];

/// Every suite this driver generates, in emission order.
const SUITES: &[SuiteSpec] = &[
    SuiteSpec {
        name: "fmul_0",
        description: "// Multiply with exponent of 0, significand of 1.0 and 1.1, RZ",
        exponents: EASY_EXPONENTS,
        fractions: EASY_FRACTIONS,
        kind: SuiteKind::Multiply { signed: false },
        rounding: RoundingMode::TowardZero,
        policy: FilterPolicy::STRICT,
    },
    SuiteSpec {
        name: "fmul_1",
        description: "// Multiply with exponent of -7:5, significand of 1.0 to 0x345, RZ",
        exponents: MED_EXPONENTS,
        fractions: MED_FRACTIONS,
        kind: SuiteKind::Multiply { signed: false },
        rounding: RoundingMode::TowardZero,
        policy: FilterPolicy::STRICT,
    },
    SuiteSpec {
        name: "fmul_2",
        description: "// Multiply with exponent of -7:5, significand of 1.0 to 0x345, RZ",
        exponents: MED_EXPONENTS,
        fractions: MED_FRACTIONS,
        kind: SuiteKind::Multiply { signed: true },
        rounding: RoundingMode::TowardZero,
        policy: FilterPolicy::STRICT,
    },
    SuiteSpec {
        name: "fadd_0",
        description: "// Add with exponent of 0, RZ",
        exponents: EASY_EXPONENTS,
        fractions: EASY_FRACTIONS,
        kind: SuiteKind::Add { signed: false },
        rounding: RoundingMode::TowardZero,
        policy: FilterPolicy::STRICT,
    },
    SuiteSpec {
        name: "fadd_1",
        description: "// Add with positive normalized numbers, RZ",
        exponents: MED_EXPONENTS,
        fractions: MED_FRACTIONS,
        kind: SuiteKind::Add { signed: false },
        rounding: RoundingMode::TowardZero,
        policy: FilterPolicy::STRICT,
    },
    SuiteSpec {
        name: "fadd_2",
        description: "// Add with signed normalized numbers, RZ",
        exponents: MED_EXPONENTS,
        fractions: MED_FRACTIONS,
        kind: SuiteKind::Add { signed: true },
        rounding: RoundingMode::TowardZero,
        policy: FilterPolicy::STRICT,
    },
    SuiteSpec {
        name: "fma_0",
        description: "// FMA with exponent of 0, RZ",
        exponents: EASY_EXPONENTS,
        fractions: EASY_FRACTIONS,
        kind: SuiteKind::FusedMultiplyAdd { signed: false },
        rounding: RoundingMode::TowardZero,
        policy: FilterPolicy::STRICT,
    },
    SuiteSpec {
        name: "fma_1",
        description: "// FMA with positive normalized numbers, RZ",
        exponents: MED_EXPONENTS,
        fractions: MED_FRACTIONS,
        kind: SuiteKind::FusedMultiplyAdd { signed: false },
        rounding: RoundingMode::TowardZero,
        policy: FilterPolicy::STRICT,
    },
    SuiteSpec {
        name: "fma_2",
        description: "// FMA with signed normalized numbers, RZ",
        exponents: MED_EXPONENTS,
        fractions: MED_FRACTIONS,
        kind: SuiteKind::FusedMultiplyAdd { signed: true },
        rounding: RoundingMode::TowardZero,
        policy: FilterPolicy::STRICT,
    },
    SuiteSpec {
        name: "fma_special_rz",
        description: "// Special Cases, positive, RZ",
        exponents: SPECIAL_EXPONENTS,
        fractions: SPECIAL_FRACTIONS,
        kind: SuiteKind::SpecialSweep,
        rounding: RoundingMode::TowardZero,
        policy: FilterPolicy::ALLOW_SPECIALS,
    },
    SuiteSpec {
        name: "fma_special_rne",
        description: "// Special Cases, positive, RNE",
        exponents: SPECIAL_EXPONENTS,
        fractions: SPECIAL_FRACTIONS,
        kind: SuiteKind::SpecialSweep,
        rounding: RoundingMode::NearEven,
        policy: FilterPolicy::ALLOW_SPECIALS,
    },
    SuiteSpec {
        name: "fma_special_rp",
        description: "// Special Cases, positive, RP",
        exponents: SPECIAL_EXPONENTS,
        fractions: SPECIAL_FRACTIONS,
        kind: SuiteKind::SpecialSweep,
        rounding: RoundingMode::TowardPositive,
        policy: FilterPolicy::ALLOW_SPECIALS,
    },
    SuiteSpec {
        name: "fma_special_rm",
        description: "// Special Cases, positive, RM",
        exponents: SPECIAL_EXPONENTS,
        fractions: SPECIAL_FRACTIONS,
        kind: SuiteKind::SpecialSweep,
        rounding: RoundingMode::TowardNegative,
        policy: FilterPolicy::ALLOW_SPECIALS,
    },
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = GenConfig::default();
    if let Err(e) = generate(&config) {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    }
}

/// Runs every suite in [`SUITES`] against a fresh oracle session.
fn generate(config: &GenConfig) -> Result<(), GenError> {
    ensure_output_dir(config)?;

    let mut session = OracleSession::new(RoundingMode::TowardZero, config.tininess);
    for spec in SUITES {
        let cases = run_suite(&mut session, config, spec)?;
        println!(
            "[*] {}: {} cases -> {}",
            spec.name,
            cases,
            config.out_dir.join(format!("{}.tv", spec.name)).display()
        );
    }
    Ok(())
}
