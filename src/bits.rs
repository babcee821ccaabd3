//! Bit-range extraction over byte buffers
//!
//! This module provides the big-endian bit slicing that underpins mnemonic
//! encoding and decoding: reading arbitrary-width unsigned integers from a
//! byte buffer at offsets that need not be byte aligned.

use crate::error::{Error, Result};

/// Widest value a single extraction may return, in bits
pub const MAX_BITS: usize = 16;

/// A read-only view of a byte buffer as one contiguous big-endian bit string
#[derive(Debug, Clone, Copy)]
pub struct BitView<'a> {
    bytes: &'a [u8],
}

impl<'a> BitView<'a> {
    /// Create a view over the given bytes
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Total number of bits in the underlying buffer
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Read `bit_len` bits starting at `bit_offset`, most significant bit
    /// first, returning the value right-aligned in a `u16`.
    ///
    /// The covering bytes are folded into a `u32` scratch and reduced with
    /// shift/mask arithmetic only, so the result does not depend on host
    /// byte order. A 16-bit read misaligned by up to 7 bits covers at most
    /// 3 bytes, which the scratch holds with room to spare.
    pub fn extract(&self, bit_offset: usize, bit_len: usize) -> Result<u16> {
        if bit_len == 0 || bit_len > MAX_BITS {
            return Err(Error::InvalidBitRange(format!(
                "unsupported bit width {bit_len}, expected 1..={MAX_BITS}"
            )));
        }
        let end = bit_offset
            .checked_add(bit_len)
            .filter(|&end| end <= self.bit_len())
            .ok_or_else(|| {
                Error::InvalidBitRange(format!(
                    "{bit_len} bits at offset {bit_offset} exceeds buffer of {} bits",
                    self.bit_len()
                ))
            })?;

        let first = bit_offset / 8;
        let last = end.div_ceil(8);
        let mut scratch: u32 = 0;
        for &byte in &self.bytes[first..last] {
            scratch = (scratch << 8) | u32::from(byte);
        }
        // Drop the bits past the requested range, then mask off the leading
        // bits before the requested offset.
        let trailing = last * 8 - end;
        let value = (scratch >> trailing) & ((1u32 << bit_len) - 1);
        Ok(value as u16)
    }

    /// Slice the buffer into consecutive non-overlapping `bit_len`-bit
    /// groups starting at offset 0, stopping once fewer than `bit_len`
    /// bits remain.
    pub fn values_by_bits(&self, bit_len: usize) -> Result<Vec<u16>> {
        if bit_len == 0 || bit_len > MAX_BITS {
            return Err(Error::InvalidBitRange(format!(
                "unsupported bit width {bit_len}, expected 1..={MAX_BITS}"
            )));
        }
        let mut values = Vec::with_capacity(self.bit_len() / bit_len);
        let mut offset = 0;
        while offset + bit_len <= self.bit_len() {
            values.push(self.extract(offset, bit_len)?);
            offset += bit_len;
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_aligned() {
        let view = BitView::new(&[0xAB, 0xCD]);
        assert_eq!(view.extract(0, 8).unwrap(), 0xAB);
        assert_eq!(view.extract(8, 8).unwrap(), 0xCD);
        assert_eq!(view.extract(0, 16).unwrap(), 0xABCD);
    }

    #[test]
    fn test_extract_misaligned() {
        // 1010_1011 1100_1101
        let view = BitView::new(&[0xAB, 0xCD]);
        assert_eq!(view.extract(0, 1).unwrap(), 1);
        assert_eq!(view.extract(1, 1).unwrap(), 0);
        assert_eq!(view.extract(4, 8).unwrap(), 0xBC);
        assert_eq!(view.extract(3, 11).unwrap(), 0b0_1011_1100_11);
        assert_eq!(view.extract(15, 1).unwrap(), 1);
    }

    #[test]
    fn test_extract_spans_three_bytes() {
        let view = BitView::new(&[0xFF, 0x00, 0xFF]);
        // 7 leading set bits are skipped; the next 16 bits cross all
        // three bytes: 1 0000_0000 1111111
        assert_eq!(view.extract(7, 16).unwrap(), 0b1_0000_0000_1111111);
    }

    #[test]
    fn test_extract_rejects_bad_width() {
        let view = BitView::new(&[0x00; 4]);
        assert!(matches!(
            view.extract(0, 0),
            Err(Error::InvalidBitRange(_))
        ));
        assert!(matches!(
            view.extract(0, 17),
            Err(Error::InvalidBitRange(_))
        ));
    }

    #[test]
    fn test_extract_rejects_overrun() {
        let view = BitView::new(&[0x00; 2]);
        assert!(view.extract(8, 9).is_err());
        assert!(view.extract(16, 1).is_err());
        assert!(view.extract(usize::MAX, 2).is_err());
    }

    #[test]
    fn test_values_by_bits_discards_remainder() {
        // 17 bytes = 136 bits = 12 groups of 11 with 4 bits left over
        let view = BitView::new(&[0xFF; 17]);
        let values = view.values_by_bits(11).unwrap();
        assert_eq!(values.len(), 12);
        assert!(values.iter().all(|&v| v == 0x7FF));
    }

    #[test]
    fn test_values_by_bits_empty_buffer() {
        let view = BitView::new(&[]);
        assert!(view.values_by_bits(11).unwrap().is_empty());
        assert!(view.values_by_bits(0).is_err());
    }
}
