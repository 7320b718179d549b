//! Test-case serialization.
//!
//! One case becomes exactly one text line, and the line layout is the wire
//! contract consumed by downstream golden-test tooling:
//!
//! ```text
//! <x:4hex>_<y:4hex>_<z:4hex>_<opcode:2hex>_<result:4hex>_<flags:1hex> // <calc> NV: n OF: n UF: n NX: n
//! ```
//!
//! Skipped cases keep the identical layout behind one comment marker per
//! matched rule. Hex field widths, the underscore joins, the marker
//! strings, and the decimal trailer must be reproduced exactly.

use crate::classify::Classification;
use crate::encoding::Fp16;
use crate::oracle::OracleSession;
use crate::oracle::exception_flags::PackedFlags;

/// One serialized test case.
///
/// `x`, `y`, and `z` are the shaped record operands (identity-forced, signs
/// not injected; the injections live in the opcode). Records are built per
/// enumeration step, rendered immediately, and never retained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestRecord {
    /// Multiplicand encoding.
    pub x: Fp16,
    /// Multiplier encoding.
    pub y: Fp16,
    /// Addend encoding.
    pub z: Fp16,
    /// Packed 6-bit operation code.
    pub opcode: u8,
    /// The oracle's rounded result encoding.
    pub result: Fp16,
    /// Packed 4-bit exception flags.
    pub flags: PackedFlags,
}

/// Skip markers in emission order, paired with their rule.
const MARKERS: [(&str, fn(&Classification) -> bool); 5] = [
    ("// skip denorm: ", |c| c.denormal),
    ("// skip underflow: ", |c| c.underflow),
    ("// skip zero: ", |c| c.zero),
    ("// Skip inf: ", |c| c.infinity),
    ("// Skip NaN: ", |c| c.nan),
];

/// Renders one case as a complete output line, without the newline.
///
/// Marker prefixes are emitted first, in fixed rule order; a line may carry
/// several. The human-readable trailer decodes the operation from the
/// opcode: `X * Y + Z = R` when both halves participate, `X * Y = R` for
/// multiply-only, `X + Z = R` for add-only.
pub fn render_line(
    session: &OracleSession,
    record: &TestRecord,
    class: &Classification,
) -> String {
    let mut line = String::new();
    for (marker, matched) in MARKERS {
        if matched(class) {
            line.push_str(marker);
        }
    }

    let multiply = record.opcode & 0x08 != 0;
    let add = record.opcode & 0x04 != 0;

    let x = decimal(session, record.x);
    let y = decimal(session, record.y);
    let z = decimal(session, record.z);
    let result = decimal(session, record.result);
    let calc = if multiply {
        if add {
            format!("{x} * {y} + {z} = {result}")
        } else {
            format!("{x} * {y} = {result}")
        }
    } else {
        format!("{x} + {z} = {result}")
    };

    line.push_str(&format!(
        "{:04x}_{:04x}_{:04x}_{:02x}_{:04x}_{:01x} // {} NV: {} OF: {} UF: {} NX: {}",
        record.x.to_bits(),
        record.y.to_bits(),
        record.z.to_bits(),
        record.opcode,
        record.result.to_bits(),
        record.flags.bits(),
        calc,
        record.flags.invalid() as u8,
        record.flags.overflow() as u8,
        record.flags.underflow() as u8,
        record.flags.inexact() as u8,
    ));
    line
}

/// Renders an encoding as the trailer's decimal text.
///
/// Finite values print with six fractional digits; infinities print as
/// `inf`/`-inf` and NaNs as `nan`/`-nan`, the sign taken from the binary16
/// encoding itself since the widening conversion canonicalizes NaNs.
fn decimal(session: &OracleSession, value: Fp16) -> String {
    let wide = session.to_decimal(value);
    if wide.is_nan() {
        return if value.is_negative() {
            "-nan".to_owned()
        } else {
            "nan".to_owned()
        };
    }
    format!("{wide:.6}")
}
