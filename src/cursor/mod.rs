// src/cursor/mod.rs
//! The endian-aware stream cursor.

mod records;
mod scalars;
mod strings;

pub use strings::StringFormat;

use crate::encoding::TextEncoding;
use crate::endian::Endianness;
use crate::error::{CursorError, Result};
use smallvec::SmallVec;
use std::io::{Read, Seek, SeekFrom};

/// An endian-aware reader over any seekable byte source.
///
/// Wraps a stream plus a declared byte order and decodes scalars, strings,
/// and fixed-layout records, reversing multi-byte values whenever the
/// declared order differs from the host's. The cursor owns only its position
/// stack and a scratch buffer; pass `&mut stream` to keep ownership of the
/// stream itself (`Read + Seek` are implemented for mutable references).
///
/// Not safe for concurrent use over one stream: seeks and the scratch buffer
/// are unsynchronized, and stream position is shared mutable state. Use
/// independent cursors over independent streams instead.
///
/// ```
/// use endian_cursor::{EndianCursor, Endianness};
/// use std::io::Cursor;
///
/// let data = [0x00u8, 0x2a, 0x12, 0x34];
/// let mut cursor = EndianCursor::new(Cursor::new(data), Endianness::Big);
/// assert_eq!(cursor.read_u16().unwrap(), 0x002a);
/// assert_eq!(cursor.read_u16().unwrap(), 0x1234);
/// ```
pub struct EndianCursor<S: Read + Seek> {
    pub(crate) stream: S,
    endianness: Endianness,
    pub(crate) swap: bool,
    pos_stack: SmallVec<[u64; 8]>,
    pub(crate) scratch: Vec<u8>,
    encoding: TextEncoding,
}

impl<S: Read + Seek> EndianCursor<S> {
    /// Create a cursor with the ASCII text encoding.
    pub fn new(stream: S, endianness: Endianness) -> Self {
        Self::with_encoding(stream, TextEncoding::Ascii, endianness)
    }

    pub fn with_encoding(stream: S, encoding: TextEncoding, endianness: Endianness) -> Self {
        EndianCursor {
            stream,
            endianness,
            swap: endianness.needs_swap(),
            pos_stack: SmallVec::new(),
            scratch: Vec::with_capacity(128),
            encoding,
        }
    }

    /// Give the wrapped stream back.
    pub fn into_inner(self) -> S {
        self.stream
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Re-declare the stream's byte order; the swap flag follows.
    pub fn set_endianness(&mut self, endianness: Endianness) {
        self.endianness = endianness;
        self.swap = endianness.needs_swap();
    }

    /// Whether reads currently reverse multi-byte values.
    pub fn swap_needed(&self) -> bool {
        self.swap
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    pub fn set_encoding(&mut self, encoding: TextEncoding) {
        self.encoding = encoding;
    }

    pub(crate) fn decode_scratch(&self) -> String {
        self.encoding.decode(&self.scratch)
    }

    // --- seeking ---

    /// Reposition the stream. No bounds checks beyond the stream's own.
    pub fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        Ok(self.stream.seek(pos)?)
    }

    pub fn seek_begin(&mut self, offset: u64) -> Result<u64> {
        self.seek(SeekFrom::Start(offset))
    }

    pub fn seek_current(&mut self, offset: i64) -> Result<u64> {
        self.seek(SeekFrom::Current(offset))
    }

    pub fn seek_end(&mut self, offset: i64) -> Result<u64> {
        self.seek(SeekFrom::End(offset))
    }

    pub fn position(&mut self) -> Result<u64> {
        Ok(self.stream.stream_position()?)
    }

    pub fn set_position(&mut self, offset: u64) -> Result<()> {
        self.seek_begin(offset)?;
        Ok(())
    }

    /// Total stream length, restoring the current position afterwards.
    pub fn stream_length(&mut self) -> Result<u64> {
        let saved = self.position()?;
        let len = self.seek(SeekFrom::End(0))?;
        self.seek_begin(saved)?;
        Ok(len)
    }

    // --- position stack ---

    /// Record the current offset for a later return.
    pub fn push_position(&mut self) -> Result<()> {
        let pos = self.position()?;
        self.pos_stack.push(pos);
        Ok(())
    }

    /// Record the current offset, then jump to an absolute one.
    pub fn push_position_and_seek_begin(&mut self, offset: u64) -> Result<()> {
        self.push_position()?;
        self.seek_begin(offset)?;
        Ok(())
    }

    /// Remove and return the top saved offset without seeking.
    pub fn pop_position(&mut self) -> Result<u64> {
        self.pos_stack.pop().ok_or(CursorError::StackUnderflow)
    }

    /// Pop the top saved offset and seek back to it.
    pub fn seek_begin_to_popped_position(&mut self) -> Result<()> {
        let offset = self.pop_position()?;
        self.seek_begin(offset)?;
        Ok(())
    }

    /// Read the top saved offset without removing it.
    pub fn peek_position_stack(&self) -> Result<u64> {
        self.pos_stack.last().copied().ok_or(CursorError::StackUnderflow)
    }

    /// Run `f` with the stream positioned at `offset`, then restore the
    /// position the cursor had before the jump — on success and on failure
    /// alike. Prefer this over raw push/pop for excursion reads.
    ///
    /// ```
    /// use endian_cursor::{EndianCursor, Endianness};
    /// use std::io::Cursor;
    ///
    /// let data = [1u8, 0, 0, 0, 0x2a];
    /// let mut cursor = EndianCursor::new(Cursor::new(data), Endianness::Little);
    /// let flag = cursor.at_offset(4, |c| c.read_u8()).unwrap();
    /// assert_eq!(flag, 0x2a);
    /// assert_eq!(cursor.read_u32().unwrap(), 1); // back at the start
    /// ```
    pub fn at_offset<T, F>(&mut self, offset: u64, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let saved = self.position()?;
        self.seek_begin(offset)?;
        let result = f(self);
        let restored = self.seek_begin(saved);
        match result {
            Ok(value) => {
                restored?;
                Ok(value)
            }
            // The closure's failure wins over a failed restore.
            Err(err) => Err(err),
        }
    }
}
