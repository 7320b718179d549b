//! Suite runner tests.
//!
//! These tests drive full suites into temporary directories and check the
//! artifact contents: header line, enumeration counts per suite kind,
//! identity forcing in emitted records, in-situ skip marking, and
//! byte-for-byte determinism across runs.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use fmagen_core::classify::FilterPolicy;
use fmagen_core::oracle::rounding_modes::{RoundingMode, TininessMode};
use fmagen_core::table::LIST_END;
use fmagen_core::{GenConfig, GenError, OracleSession, SuiteKind, SuiteSpec};
use fmagen_core::{ensure_output_dir, run_suite};

const EASY_EXPONENTS: &[u16] = &[15, LIST_END];
const EASY_FRACTIONS: &[u16] = &[0, 0x200, LIST_END];

/// A spec over the easy operand lists with the given kind.
const fn easy_spec(name: &'static str, kind: SuiteKind) -> SuiteSpec {
    SuiteSpec {
        name,
        description: "// test suite",
        exponents: EASY_EXPONENTS,
        fractions: EASY_FRACTIONS,
        kind,
        rounding: RoundingMode::TowardZero,
        policy: FilterPolicy::STRICT,
    }
}

/// Runs one spec into a fresh temp dir, returning the artifact text and
/// the reported case count.
fn generate(spec: &SuiteSpec) -> (String, usize) {
    let dir = TempDir::new().unwrap_or_else(|e| panic!("temp dir: {e}"));
    let (text, cases) = generate_into(spec, dir.path());
    drop(dir);
    (text, cases)
}

fn generate_into(spec: &SuiteSpec, dir: &Path) -> (String, usize) {
    let config = GenConfig {
        out_dir: dir.to_path_buf(),
        tininess: TininessMode::BeforeRounding,
    };
    ensure_output_dir(&config).unwrap_or_else(|e| panic!("out dir: {e}"));

    let mut session = OracleSession::new(spec.rounding, config.tininess);
    let cases =
        run_suite(&mut session, &config, spec).unwrap_or_else(|e| panic!("suite failed: {e}"));

    let text = fs::read_to_string(dir.join(format!("{}.tv", spec.name)))
        .unwrap_or_else(|e| panic!("artifact read: {e}"));
    (text, cases)
}

#[test]
fn test_multiply_suite_emits_the_full_cross_product() {
    let spec = easy_spec("fmul_easy", SuiteKind::Multiply { signed: false });
    let (text, cases) = generate(&spec);

    assert_eq!(cases, 4, "2 x-entries × 2 y-entries, no sign variants");
    assert_eq!(
        text,
        "// test suite\n\
         3c00_3c00_0000_08_3c00_0 // 1.000000 * 1.000000 = 1.000000 NV: 0 OF: 0 UF: 0 NX: 0\n\
         3c00_3e00_0000_08_3e00_0 // 1.000000 * 1.500000 = 1.500000 NV: 0 OF: 0 UF: 0 NX: 0\n\
         3e00_3c00_0000_08_3e00_0 // 1.500000 * 1.000000 = 1.500000 NV: 0 OF: 0 UF: 0 NX: 0\n\
         3e00_3e00_0000_08_4080_0 // 1.500000 * 1.500000 = 2.250000 NV: 0 OF: 0 UF: 0 NX: 0\n"
    );
}

#[test]
fn test_signed_multiply_doubles_each_pair() {
    let unsigned = easy_spec("fmul_unsigned", SuiteKind::Multiply { signed: false });
    let signed = easy_spec("fmul_signed", SuiteKind::Multiply { signed: true });

    let (_, unsigned_cases) = generate(&unsigned);
    let (text, signed_cases) = generate(&signed);
    assert_eq!(signed_cases, unsigned_cases * 2);

    // The second emission of the first pair flips the multiplier's sign.
    let second_line = text.lines().nth(2).unwrap_or_else(|| panic!("missing line"));
    assert_eq!(
        second_line,
        "3c00_bc00_0000_08_bc00_0 // 1.000000 * -1.000000 = -1.000000 NV: 0 OF: 0 UF: 0 NX: 0"
    );
}

#[test]
fn test_add_suite_forces_the_multiplier_to_one() {
    let spec = easy_spec("fadd_easy", SuiteKind::Add { signed: false });
    let (text, cases) = generate(&spec);

    assert_eq!(cases, 4);
    for line in text.lines().skip(1) {
        let fields: Vec<&str> = line.trim_start_matches("// skip zero: ").split('_').collect();
        assert_eq!(fields[1], "3c00", "y must be the forced identity: {line}");
        assert_eq!(fields[3], "04", "add-only opcode: {line}");
    }
}

#[test]
fn test_signed_add_marks_cancellation_as_zero_skip() {
    let spec = easy_spec("fadd_signed", SuiteKind::Add { signed: true });
    let (text, cases) = generate(&spec);

    assert_eq!(cases, 8, "2 × 2 pairs, each with two sign variants");
    // x = 1.0, z = -1.0 cancels exactly; the case is computed and printed
    // behind the zero marker.
    assert!(
        text.contains(
            "// skip zero: 3c00_3c00_bc00_04_0000_0 // 1.000000 + -1.000000 = 0.000000 NV: 0 OF: 0 UF: 0 NX: 0"
        ),
        "cancellation must stay in the artifact as a marked line:\n{text}"
    );
}

#[test]
fn test_fused_suite_counts() {
    let unsigned = easy_spec("fma_unsigned", SuiteKind::FusedMultiplyAdd { signed: false });
    let (text, cases) = generate(&unsigned);
    assert_eq!(cases, 8, "2³ triples, one shape each");
    assert!(text.lines().skip(1).all(|l| l.contains("_0c_")));

    let signed = easy_spec("fma_signed", SuiteKind::FusedMultiplyAdd { signed: true });
    let (text, cases) = generate(&signed);
    assert_eq!(cases, 24, "2³ triples, three negation shapes each");

    // The first triple appears under the negated-product, negated-addend,
    // and both-negated opcodes, in that order.
    let opcodes: Vec<&str> = text
        .lines()
        .skip(1)
        .take(3)
        .map(|l| l.split('_').nth(3).unwrap_or_else(|| panic!("bad line: {l}")))
        .collect();
    assert_eq!(opcodes, vec!["0e", "0d", "0f"]);
}

#[test]
fn test_special_sweep_sections_and_count() {
    let spec = SuiteSpec {
        policy: FilterPolicy::ALLOW_SPECIALS,
        ..easy_spec("fma_special", SuiteKind::SpecialSweep)
    };
    let (text, cases) = generate(&spec);

    // 4·n³ fused cases, then 2·n² multiply-only, then 2·n² add-only.
    assert_eq!(cases, 4 * 8 + 2 * 4 + 2 * 4);
    assert_eq!(text.lines().count(), cases + 1, "one line per case plus the header");

    // Fused section first, with all four negation shapes for a triple.
    let opcodes: Vec<&str> = text
        .lines()
        .skip(1)
        .take(4)
        .map(|l| l.split('_').nth(3).unwrap_or_else(|| panic!("bad line: {l}")))
        .collect();
    assert_eq!(opcodes, vec!["0c", "0e", "0d", "0f"]);

    // The multiply-only section emits each pair plain, then negated.
    let mul_first = text
        .lines()
        .nth(1 + 32)
        .unwrap_or_else(|| panic!("missing multiply section"));
    let mul_second = text
        .lines()
        .nth(2 + 32)
        .unwrap_or_else(|| panic!("missing multiply section"));
    assert!(mul_first.contains("3c00_3c00_0000_08_"));
    assert!(mul_second.contains("3c00_bc00_0000_08_"));

    // The add-only section follows the same plain-then-negated pattern.
    let add_first = text
        .lines()
        .nth(1 + 32 + 8)
        .unwrap_or_else(|| panic!("missing add section"));
    let add_second = text
        .lines()
        .nth(2 + 32 + 8)
        .unwrap_or_else(|| panic!("missing add section"));
    assert!(add_first.contains("3c00_3c00_3c00_04_"));
    assert!(add_second.contains("3c00_3c00_bc00_04_"));
}

#[test]
fn test_malformed_lists_fail_before_any_output() {
    let dir = TempDir::new().unwrap_or_else(|e| panic!("temp dir: {e}"));
    let config = GenConfig {
        out_dir: dir.path().to_path_buf(),
        tininess: TininessMode::BeforeRounding,
    };
    let mut session = OracleSession::new(RoundingMode::TowardZero, config.tininess);

    let spec = SuiteSpec {
        exponents: &[15],
        ..easy_spec("unterminated", SuiteKind::Multiply { signed: false })
    };
    let result = run_suite(&mut session, &config, &spec);
    assert!(matches!(result, Err(GenError::MissingTerminator)));
    assert!(
        !dir.path().join("unterminated.tv").exists(),
        "no artifact may be created for a rejected suite"
    );

    let spec = SuiteSpec {
        fractions: &[LIST_END],
        ..easy_spec("empty", SuiteKind::Multiply { signed: false })
    };
    let result = run_suite(&mut session, &config, &spec);
    assert!(matches!(result, Err(GenError::EmptyOperandList)));
}

#[test]
fn test_runs_are_byte_identical() {
    let spec = SuiteSpec {
        policy: FilterPolicy::ALLOW_SPECIALS,
        ..easy_spec("determinism", SuiteKind::SpecialSweep)
    };

    let (first, _) = generate(&spec);
    let (second, _) = generate(&spec);
    assert_eq!(first, second);
}
