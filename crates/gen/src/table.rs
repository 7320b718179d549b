//! Operand table construction.
//!
//! This module expands two sparse code lists into the full operand set a
//! suite enumerates over. It provides:
//! 1. **Sentinel Contract:** Input lists are terminated by [`LIST_END`]; the terminator is validated, never emitted.
//! 2. **Cross Product:** Every exponent code is combined with every fraction code, exponent-major.
//! 3. **Fail-Fast Validation:** Empty or unterminated lists are rejected at construction time.

use crate::encoding::Fp16;
use crate::error::GenError;

/// Terminator value for exponent and fraction lists.
///
/// The value is reserved: it is never a valid exponent or fraction code and
/// is never emitted into a table.
pub const LIST_END: u16 = 0x8000;

/// An ordered set of operand encodings for one suite.
///
/// Built once per suite from an exponent list and a fraction list. The
/// entry order is exponent-major, fraction-minor; suite enumeration relies
/// on this positional order, so entries are immutable after construction.
#[derive(Clone, Debug)]
pub struct OperandTable {
    entries: Vec<Fp16>,
}

impl OperandTable {
    /// Builds the cross product of two [`LIST_END`]-terminated code lists.
    ///
    /// Each produced encoding is `fraction | (exponent << 10)`. The table
    /// holds exactly `|exponents| × |fractions|` entries, counting only the
    /// codes that precede each terminator.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::MissingTerminator`] if either list lacks the
    /// terminator, and [`GenError::EmptyOperandList`] if either list has no
    /// entries before it. Both are caller bugs in the suite definition, not
    /// runtime conditions.
    pub fn from_lists(exponents: &[u16], fractions: &[u16]) -> Result<Self, GenError> {
        let exponents = take_until_terminator(exponents)?;
        let fractions = take_until_terminator(fractions)?;

        let mut entries = Vec::with_capacity(exponents.len() * fractions.len());
        for &exponent in exponents {
            for &fraction in fractions {
                entries.push(Fp16::from_fields(exponent, fraction));
            }
        }
        Ok(Self { entries })
    }

    /// Returns the number of encodings in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table holds no encodings.
    ///
    /// Construction guarantees this is never the case; provided for
    /// completeness alongside [`len`](Self::len).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the encodings in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, Fp16> {
        self.entries.iter()
    }

    /// Returns the encodings as a slice in table order.
    pub fn as_slice(&self) -> &[Fp16] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a OperandTable {
    type Item = &'a Fp16;
    type IntoIter = std::slice::Iter<'a, Fp16>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Returns the prefix of `list` before the [`LIST_END`] terminator.
fn take_until_terminator(list: &[u16]) -> Result<&[u16], GenError> {
    let end = list
        .iter()
        .position(|&code| code == LIST_END)
        .ok_or(GenError::MissingTerminator)?;
    if end == 0 {
        return Err(GenError::EmptyOperandList);
    }
    Ok(&list[..end])
}
