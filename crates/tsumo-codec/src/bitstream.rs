//! MSB-first bit streams with fixed-width and variable-length integers.
//!
//! A varlen integer is split into `partition` bit chunks, most significant
//! chunk first. Each chunk is preceded by a continuation bit: `1` when more
//! chunks follow, `0` on the last one. Leading all-zero chunks are omitted,
//! but at least one chunk is always written.
//!
//! ```text
//! 17 = 0b1_00_01, partition 2
//!
//!   1 01   1 00   0 01
//!   ^ more ^ more ^ last
//! ```
//!
//! # Example
//!
//! ```
//! use tsumo_codec::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write(0b101, 3).unwrap();
//! writer.write_varlen(17, 2).unwrap();
//! let bytes = writer.finish();
//!
//! let mut reader = BitReader::new(&bytes);
//! assert_eq!(reader.read(3).unwrap(), 0b101);
//! assert_eq!(reader.read_variable_length(2).unwrap(), 17);
//! ```

use crate::error::CodecError;
use crate::transport;

const MAX_BITS: u32 = u64::BITS;

fn low_mask(bits: u32) -> u64 {
    if bits >= MAX_BITS {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

fn check_partition(partition_bits: u32) -> Result<(), CodecError> {
    if partition_bits == 0 || partition_bits > MAX_BITS {
        return Err(CodecError::InvalidBitCount {
            count: partition_bits,
        });
    }
    Ok(())
}

/// Accumulates bits MSB-first into a byte buffer.
///
/// The last partial byte is zero-padded by [`finish`](Self::finish).
#[derive(Clone, Debug, Default)]
pub struct BitWriter {
    /// Completed bytes.
    bytes: Vec<u8>,
    /// Partial byte, MSB-aligned.
    bit_buffer: u8,
    /// Bits held in `bit_buffer` (0-7).
    bit_count: u8,
}

impl BitWriter {
    /// An empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the low `bit_count` bits of `value`, most significant first.
    ///
    /// Writing zero bits is a no-op.
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidBitCount`] if `bit_count > 64`.
    pub fn write(&mut self, value: u64, bit_count: u32) -> Result<(), CodecError> {
        if bit_count > MAX_BITS {
            return Err(CodecError::InvalidBitCount { count: bit_count });
        }
        let mut remaining = bit_count;
        while remaining > 0 {
            let room = 8 - u32::from(self.bit_count);
            let take = remaining.min(room);
            let shift = remaining - take;
            let bits = ((value >> shift) & low_mask(take)) as u8;
            self.bit_buffer |= bits << (room - take);
            self.bit_count += take as u8;
            if self.bit_count == 8 {
                self.bytes.push(self.bit_buffer);
                self.bit_buffer = 0;
                self.bit_count = 0;
            }
            remaining = shift;
        }
        Ok(())
    }

    /// Write a single bit.
    pub fn write_bit(&mut self, bit: bool) {
        self.bit_buffer |= u8::from(bit) << (7 - self.bit_count);
        self.bit_count += 1;
        if self.bit_count == 8 {
            self.bytes.push(self.bit_buffer);
            self.bit_buffer = 0;
            self.bit_count = 0;
        }
    }

    /// Write `value` as a varlen integer with `partition_bits` per chunk.
    ///
    /// # Errors
    ///
    /// - [`CodecError::InvalidBitCount`] if `partition_bits` is 0 or above
    ///   64, or `max_bit_count` is above 64.
    /// - [`CodecError::ValueTooWide`] if `value` needs more than
    ///   `max_bit_count` bits.
    pub fn write_variable_length(
        &mut self,
        value: u64,
        max_bit_count: u32,
        partition_bits: u32,
    ) -> Result<(), CodecError> {
        check_partition(partition_bits)?;
        if max_bit_count > MAX_BITS {
            return Err(CodecError::InvalidBitCount {
                count: max_bit_count,
            });
        }
        let width = MAX_BITS - value.leading_zeros();
        if width > max_bit_count {
            return Err(CodecError::ValueTooWide {
                value,
                max_bit_count,
            });
        }
        let chunks = width.div_ceil(partition_bits).max(1);
        for i in (0..chunks).rev() {
            self.write_bit(i > 0);
            self.write(value >> (i * partition_bits), partition_bits)?;
        }
        Ok(())
    }

    /// Write `value` as a varlen integer with no width limit beyond 64 bits.
    pub fn write_varlen(&mut self, value: u64, partition_bits: u32) -> Result<(), CodecError> {
        self.write_variable_length(value, MAX_BITS, partition_bits)
    }

    /// Total bits written, including the partial byte.
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + usize::from(self.bit_count)
    }

    /// Flush the partial byte (zero-padded) and return the bytes.
    pub fn finish(mut self) -> Vec<u8> {
        if self.bit_count > 0 {
            self.bytes.push(self.bit_buffer);
        }
        self.bytes
    }

    /// Flush and render the bytes as a transport string.
    pub fn finalize(self) -> String {
        transport::encode(&self.finish())
    }
}

/// Reads bits MSB-first from a byte slice.
///
/// Trailing padding bits are indistinguishable from data; callers read
/// exactly what they wrote.
#[derive(Clone, Debug)]
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Next bit to read; 0 is the MSB of the first byte.
    bit_position: usize,
}

impl<'a> BitReader<'a> {
    /// A reader positioned at the first bit of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            bit_position: 0,
        }
    }

    /// Bits consumed so far.
    pub fn bit_position(&self) -> usize {
        self.bit_position
    }

    /// Bits left in the source, padding included.
    pub fn bits_remaining(&self) -> usize {
        self.data.len() * 8 - self.bit_position
    }

    /// Read the next `bit_count` bits as an integer, MSB first.
    ///
    /// Reading zero bits returns 0 and consumes nothing.
    ///
    /// # Errors
    ///
    /// - [`CodecError::InvalidBitCount`] if `bit_count > 64`.
    /// - [`CodecError::UnexpectedEof`] if fewer than `bit_count` bits are
    ///   left; nothing is consumed in that case.
    pub fn read(&mut self, bit_count: u32) -> Result<u64, CodecError> {
        if bit_count > MAX_BITS {
            return Err(CodecError::InvalidBitCount { count: bit_count });
        }
        let remaining = self.bits_remaining();
        if (bit_count as usize) > remaining {
            return Err(CodecError::UnexpectedEof {
                needed: bit_count,
                remaining,
            });
        }
        let mut value = 0u64;
        let mut left = bit_count;
        while left > 0 {
            let byte = self.data[self.bit_position / 8];
            let offset = (self.bit_position % 8) as u32;
            let take = left.min(8 - offset);
            let bits = (u64::from(byte) >> (8 - offset - take)) & low_mask(take);
            value = (value << take) | bits;
            self.bit_position += take as usize;
            left -= take;
        }
        Ok(value)
    }

    /// Read one bit.
    pub fn read_bit(&mut self) -> Result<bool, CodecError> {
        Ok(self.read(1)? == 1)
    }

    /// Read a varlen integer written with `partition_bits` per chunk.
    ///
    /// # Errors
    ///
    /// - [`CodecError::InvalidBitCount`] for a zero or over-wide partition.
    /// - [`CodecError::UnexpectedEof`] on a truncated value.
    /// - [`CodecError::VarlenOverflow`] if the chunks exceed 64 bits.
    pub fn read_variable_length(&mut self, partition_bits: u32) -> Result<u64, CodecError> {
        check_partition(partition_bits)?;
        let mut value = 0u64;
        loop {
            let more = self.read_bit()?;
            let chunk = self.read(partition_bits)?;
            if value >> (MAX_BITS - partition_bits) != 0 {
                return Err(CodecError::VarlenOverflow { partition_bits });
            }
            value = if partition_bits == MAX_BITS {
                chunk
            } else {
                (value << partition_bits) | chunk
            };
            if !more {
                return Ok(value);
            }
        }
    }
}
