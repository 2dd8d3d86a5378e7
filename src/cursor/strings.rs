// src/cursor/strings.rs
//! String decoding under the five framing conventions.

use super::EndianCursor;
use crate::error::{CursorError, Result};
use std::io::{Read, Seek};

/// How a string's byte length is framed in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringFormat {
    /// Bytes until a zero byte; the zero is consumed but not kept.
    NullTerminated,
    /// Exactly `fixed_length` bytes. Every zero byte inside the window is
    /// dropped and the non-zero bytes are concatenated — packed fixed-width
    /// fields embed padding zeros anywhere, not just at the tail.
    FixedLength,
    /// An unsigned 8-bit length, then that many bytes verbatim.
    PrefixedLength8,
    /// An endian-aware unsigned 16-bit length, then that many bytes verbatim.
    PrefixedLength16,
    /// An endian-aware unsigned 32-bit length, then that many bytes verbatim.
    PrefixedLength32,
}

impl<S: Read + Seek> EndianCursor<S> {
    /// Read one string framed per `format` and decode it with the cursor's
    /// text encoding.
    ///
    /// `fixed_length` is required for [`StringFormat::FixedLength`] and
    /// ignored for every other format; omitting it there is
    /// `InvalidArgument`.
    pub fn read_string(
        &mut self,
        format: StringFormat,
        fixed_length: Option<usize>,
    ) -> Result<String> {
        self.scratch.clear();

        match format {
            StringFormat::NullTerminated => loop {
                let b = self.read_u8()?;
                if b == 0 {
                    break;
                }
                self.scratch.push(b);
            },

            StringFormat::FixedLength => {
                let length = fixed_length.ok_or_else(|| {
                    CursorError::InvalidArgument(
                        "FixedLength string requires a fixed_length".to_string(),
                    )
                })?;
                for _ in 0..length {
                    let b = self.read_u8()?;
                    if b != 0 {
                        self.scratch.push(b);
                    }
                }
            }

            StringFormat::PrefixedLength8 => {
                let length = self.read_u8()? as usize;
                self.read_into_scratch(length)?;
            }

            StringFormat::PrefixedLength16 => {
                let length = self.read_u16()? as usize;
                self.read_into_scratch(length)?;
            }

            StringFormat::PrefixedLength32 => {
                let length = self.read_u32()? as usize;
                self.read_into_scratch(length)?;
            }
        }

        Ok(self.decode_scratch())
    }

    /// Read `count` strings, all framed the same way.
    pub fn read_strings(
        &mut self,
        count: usize,
        format: StringFormat,
        fixed_length: Option<usize>,
    ) -> Result<Vec<String>> {
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(self.read_string(format, fixed_length)?);
        }
        Ok(values)
    }

    fn read_into_scratch(&mut self, length: usize) -> Result<()> {
        self.scratch.resize(length, 0);
        self.stream.read_exact(&mut self.scratch)?;
        Ok(())
    }
}
