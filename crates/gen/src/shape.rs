//! Case shaping.
//!
//! A raw operand triple drawn from a table never reaches the oracle
//! directly. This module applies the per-case shaping rules:
//! 1. **Identity Forcing:** An operand whose half of the operation is disabled is overwritten with the neutral value (y → +1.0, z → +0.0).
//! 2. **Sign Injection:** Product negation flips the sign of x (never y), addend negation flips the sign of z, exercising a unit's sign handling independently of its multiplier.
//! 3. **Opcode Packing:** The shape serializes into the record's 6-bit opcode.

use crate::encoding::Fp16;
use crate::oracle::rounding_modes::RoundingMode;

/// Which operands participate in a case and which signs are injected.
///
/// The record's opcode byte is the packed form of this shape:
/// `rounding[1:0] << 4 | multiply << 3 | add << 2 | negate_product << 1 |
/// negate_addend`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperationShape {
    /// Whether the product `x * y` participates; when false, y is forced
    /// to the multiplicative identity.
    pub multiply: bool,
    /// Whether the addend z participates; when false, z is forced to the
    /// additive identity.
    pub add: bool,
    /// Flip the sign of x before the oracle call to negate the product.
    pub negate_product: bool,
    /// Flip the sign of z before the oracle call to negate the addend.
    pub negate_addend: bool,
    /// Rounding mode recorded in the opcode and used for the computation.
    pub rounding: RoundingMode,
}

impl OperationShape {
    /// A multiply-only shape: `x * y`, no addend, no sign injection.
    pub const fn multiply_only(rounding: RoundingMode) -> Self {
        Self {
            multiply: true,
            add: false,
            negate_product: false,
            negate_addend: false,
            rounding,
        }
    }

    /// An add-only shape: `x + z`, no product, no sign injection.
    pub const fn add_only(rounding: RoundingMode) -> Self {
        Self {
            multiply: false,
            add: true,
            negate_product: false,
            negate_addend: false,
            rounding,
        }
    }

    /// A full fused multiply-add shape with the given sign injections.
    pub const fn fused(negate_product: bool, negate_addend: bool, rounding: RoundingMode) -> Self {
        Self {
            multiply: true,
            add: true,
            negate_product,
            negate_addend,
            rounding,
        }
    }

    /// Packs the shape into the record's 6-bit opcode.
    pub const fn opcode(&self) -> u8 {
        self.rounding.bits() << 4
            | (self.multiply as u8) << 3
            | (self.add as u8) << 2
            | (self.negate_product as u8) << 1
            | (self.negate_addend as u8)
    }
}

/// The operands of one shaped case.
///
/// `x`, `y`, and `z` are the record operands after identity forcing, i.e.
/// what a serialized line shows. `oracle_x` and `oracle_z` additionally carry
/// the injected signs and are what the oracle computes with; `y` is passed
/// to the oracle unmodified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapedOperands {
    /// Multiplicand, as recorded.
    pub x: Fp16,
    /// Multiplier, after identity forcing.
    pub y: Fp16,
    /// Addend, after identity forcing.
    pub z: Fp16,
    /// Multiplicand as computed: x with the product negation applied.
    pub oracle_x: Fp16,
    /// Addend as computed: z with the addend negation applied.
    pub oracle_z: Fp16,
}

/// Applies identity forcing and sign injection to a raw operand triple.
///
/// Forcing happens first: a disabled multiply replaces y with
/// [`Fp16::ONE`], a disabled add replaces z with [`Fp16::POS_ZERO`].
/// The sign injections then derive the oracle operands; the record
/// operands keep their pre-injection signs, since the injections are
/// already encoded in the opcode.
pub fn shape_operands(shape: &OperationShape, x: Fp16, y: Fp16, z: Fp16) -> ShapedOperands {
    let y = if shape.multiply { y } else { Fp16::ONE };
    let z = if shape.add { z } else { Fp16::POS_ZERO };

    ShapedOperands {
        x,
        y,
        z,
        oracle_x: x.with_sign_flipped(shape.negate_product),
        oracle_z: z.with_sign_flipped(shape.negate_addend),
    }
}
