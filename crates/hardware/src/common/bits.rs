//! Fixed-width bit vector.
//!
//! `BitVector` is the value type every other part of the simulator is built on.
//! It provides:
//! 1. **Construction:** Zeroed vectors, integer encodings (two's complement for negatives), and digit-string parsing.
//! 2. **Derivation:** Slicing, zero padding, sign extension, inversion, AND, and 32-bit two's-complement addition.
//! 3. **Interpretation:** Unsigned and signed integer readings, chosen by the caller.
//!
//! Digit 0 is the most significant digit. Every derivation returns a new vector;
//! only [`BitVector::assign`] and [`BitVector::assign_bits`] mutate in place.

use std::fmt;
use std::str::FromStr;

use crate::common::constants::WORD_BITS;
use crate::common::error::{SimError, SimResult};

/// A fixed-length, big-endian sequence of binary digits.
///
/// The length is set at construction and never changes. Whether the digits
/// denote an unsigned or a two's-complement value is decided by the operation
/// reading them, not stored.
///
/// Equality compares the denoted unsigned value, so vectors of different
/// widths are equal when they differ only by leading zeros.
#[derive(Clone, Debug, Default)]
pub struct BitVector {
    bits: Vec<bool>,
}

impl BitVector {
    /// Creates a vector of `len` zero digits.
    pub fn new(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    /// Creates a zero-length vector.
    pub const fn empty() -> Self {
        Self { bits: Vec::new() }
    }

    /// Creates a vector of `len` digits encoding `value`.
    ///
    /// Non-negative values are stored modulo `2^len`; negative values are stored
    /// in two's complement, sign-filled when `len` exceeds 64.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::common::BitVector;
    ///
    /// assert_eq!(BitVector::from_value(3, 7).to_string(), "111");
    /// assert_eq!(BitVector::from_value(4, -1).to_string(), "1111");
    /// assert_eq!(BitVector::from_value(3, 9).to_integer(), 1);
    /// ```
    pub fn from_value(len: usize, value: i64) -> Self {
        let bits = (0..len)
            .map(|i| {
                let position = len - 1 - i;
                if position < 64 {
                    (value >> position) & 1 == 1
                } else {
                    value < 0
                }
            })
            .collect();
        Self { bits }
    }

    /// Creates a vector from explicit digits, most significant first.
    pub const fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` for a zero-length vector.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The digits, most significant first.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Digit at `index` (0 is the most significant), if in range.
    pub fn bit(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Overwrites the vector with the encoding of `value`, keeping its width.
    pub fn assign(&mut self, value: i64) {
        *self = Self::from_value(self.len(), value);
    }

    /// Overwrites the digits from a `0`/`1` string (whitespace ignored).
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MalformedBitPattern`] if the string holds a character
    /// other than `0`, `1` or whitespace, or if its digit count differs from
    /// this vector's length. The vector is left unchanged in both cases.
    pub fn assign_bits(&mut self, digits: &str) -> SimResult<()> {
        let parsed: Self = digits.parse()?;
        if parsed.len() != self.len() {
            return Err(SimError::MalformedBitPattern {
                reason: format!("expected {} digits, got {}", self.len(), parsed.len()),
            });
        }
        self.bits = parsed.bits;
        Ok(())
    }

    /// Extracts digits `start..=end` into a new vector.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidRange`] if `end < start` or `end >= len`.
    pub fn try_slice(&self, start: usize, end: usize) -> SimResult<Self> {
        if end < start || end >= self.len() {
            return Err(SimError::InvalidRange {
                start,
                end,
                len: self.len(),
            });
        }
        Ok(Self {
            bits: self.bits[start..=end].to_vec(),
        })
    }

    /// Extracts digits `start..=end` into a new vector.
    ///
    /// An invalid range is reported and yields an empty vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::common::BitVector;
    ///
    /// let twelve = BitVector::from_value(32, 12);
    /// assert_eq!(twelve.slice(28, 31).to_string(), "1100");
    /// assert!(twelve.slice(5, 2).is_empty());
    /// ```
    pub fn slice(&self, start: usize, end: usize) -> Self {
        self.try_slice(start, end).unwrap_or_else(|err| {
            tracing::warn!(%err, "slice rejected");
            Self::empty()
        })
    }

    /// Left-extends with zero digits to `target` digits.
    ///
    /// A `target` no greater than the current length returns an unchanged copy.
    pub fn pad(&self, target: usize) -> Self {
        self.extend_with(target, false)
    }

    /// Left-extends by replicating the most significant digit to `target` digits.
    ///
    /// A `target` no greater than the current length returns an unchanged copy;
    /// no truncation is ever performed.
    pub fn sign_extend(&self, target: usize) -> Self {
        let sign = self.bits.first().copied().unwrap_or(false);
        self.extend_with(target, sign)
    }

    /// Zero-extends or truncates to exactly `width` digits, keeping the low-order digits.
    pub fn fit(&self, width: usize) -> Self {
        if self.len() > width {
            Self {
                bits: self.bits[self.len() - width..].to_vec(),
            }
        } else {
            self.pad(width)
        }
    }

    fn extend_with(&self, target: usize, fill: bool) -> Self {
        if target <= self.len() {
            return self.clone();
        }
        let mut bits = vec![fill; target - self.len()];
        bits.extend_from_slice(&self.bits);
        Self { bits }
    }

    /// Bitwise complement.
    pub fn invert(&self) -> Self {
        Self {
            bits: self.bits.iter().map(|b| !b).collect(),
        }
    }

    /// Bitwise AND; the shorter operand is zero-padded to the longer width.
    pub fn and(&self, other: &Self) -> Self {
        let width = self.len().max(other.len());
        let lhs = self.pad(width);
        let rhs = other.pad(width);
        Self {
            bits: lhs
                .bits
                .iter()
                .zip(rhs.bits.iter())
                .map(|(a, b)| *a && *b)
                .collect(),
        }
    }

    /// Two's-complement addition at a fixed 32-digit width.
    ///
    /// Both operands are sign-extended to 32 digits first (wider operands
    /// contribute their low-order 32 digits). The carry out of the top digit
    /// is discarded; overflow is not signalled.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::common::BitVector;
    ///
    /// let max = BitVector::from_value(32, i64::from(i32::MAX));
    /// let one = BitVector::from_value(32, 1);
    /// assert_eq!(max.add(&one).to_signed(), i64::from(i32::MIN));
    /// ```
    pub fn add(&self, other: &Self) -> Self {
        let sum = self.word_value().wrapping_add(other.word_value());
        Self::from_value(WORD_BITS, i64::from(sum))
    }

    fn word_value(&self) -> u32 {
        if self.len() > WORD_BITS {
            self.bits[self.len() - WORD_BITS..]
                .iter()
                .fold(0u32, |acc, b| (acc << 1) | u32::from(*b))
        } else {
            self.sign_extend(WORD_BITS).to_integer() as u32
        }
    }

    /// Unsigned reading of the digits (the low-order 64 digits for wider vectors).
    pub fn to_integer(&self) -> u64 {
        self.bits
            .iter()
            .fold(0u64, |acc, b| (acc << 1) | u64::from(*b))
    }

    /// Two's-complement reading of the digits.
    ///
    /// Vectors of 64 digits or more are read through their low-order 64 digits.
    pub fn to_signed(&self) -> i64 {
        let len = self.len();
        let raw = self.to_integer();
        if len == 0 || len >= 64 {
            return raw as i64;
        }
        let shift = 64 - len as u32;
        ((raw << shift) as i64) >> shift
    }

    /// Returns `true` if every digit is zero (including the zero-length vector).
    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|b| !b)
    }

    fn significant(&self) -> &[bool] {
        let first_one = self.bits.iter().position(|b| *b).unwrap_or(self.len());
        &self.bits[first_one..]
    }
}

impl PartialEq for BitVector {
    fn eq(&self, other: &Self) -> bool {
        self.significant() == other.significant()
    }
}

impl Eq for BitVector {}

impl FromStr for BitVector {
    type Err = SimError;

    /// Parses a `0`/`1` digit string, ignoring whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = Vec::with_capacity(s.len());
        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            match ch {
                '0' => bits.push(false),
                '1' => bits.push(true),
                other => {
                    return Err(SimError::MalformedBitPattern {
                        reason: format!("unexpected character {other:?}"),
                    });
                }
            }
        }
        if bits.is_empty() {
            return Err(SimError::MalformedBitPattern {
                reason: "no digits".to_string(),
            });
        }
        Ok(Self { bits })
    }
}

impl fmt::Display for BitVector {
    /// Writes the digits; `{:#}` groups them into bytes separated by two spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bit) in self.bits.iter().enumerate() {
            if f.alternate() && i > 0 && i % 8 == 0 {
                f.write_str("  ")?;
            }
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
