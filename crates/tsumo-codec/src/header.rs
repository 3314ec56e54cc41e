//! Delta-from-default parameter headers.
//!
//! Each parameter is written as:
//!
//! ```text
//! differs:1 [null:1 [value:varlen(partition)]]
//! ```
//!
//! A parameter equal to its default costs one bit. The null bit is only
//! present when the value differs, and the varlen value only when it is
//! not null.

use crate::bitstream::{BitReader, BitWriter};
use crate::error::CodecError;

/// Default and varlen partition size of one header parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParameterSpec {
    /// Value assumed when the "differs" bit is clear.
    pub default: Option<u64>,
    /// Varlen chunk size in bits.
    pub partition_bits: u32,
}

impl ParameterSpec {
    /// A parameter with the given default and partition size.
    pub const fn new(default: Option<u64>, partition_bits: u32) -> Self {
        Self {
            default,
            partition_bits,
        }
    }
}

/// Write `values` against `specs`, one entry per parameter.
///
/// # Errors
///
/// - [`CodecError::ParameterCountMismatch`] if the slices differ in length.
/// - Any varlen error from the partition sizes.
pub fn write_header(
    writer: &mut BitWriter,
    specs: &[ParameterSpec],
    values: &[Option<u64>],
) -> Result<(), CodecError> {
    if specs.len() != values.len() {
        return Err(CodecError::ParameterCountMismatch {
            expected: specs.len(),
            found: values.len(),
        });
    }
    for (param, &value) in specs.iter().zip(values) {
        let differs = value != param.default;
        writer.write_bit(differs);
        if !differs {
            continue;
        }
        writer.write_bit(value.is_none());
        if let Some(v) = value {
            writer.write_varlen(v, param.partition_bits)?;
        }
    }
    Ok(())
}

/// Read one value per parameter, falling back to each default.
pub fn read_header(
    reader: &mut BitReader<'_>,
    specs: &[ParameterSpec],
) -> Result<Vec<Option<u64>>, CodecError> {
    specs
        .iter()
        .map(|param| {
            if !reader.read_bit()? {
                return Ok(param.default);
            }
            if reader.read_bit()? {
                return Ok(None);
            }
            reader.read_variable_length(param.partition_bits).map(Some)
        })
        .collect()
}
