// src/cursor/scalars.rs
//! Scalar and array readers.
//!
//! Multi-byte values are read in the stream's transmission order and then
//! byte-swapped iff the cursor's declared endianness differs from the host's.
//! Width-1 types (u8, i8, bool) are never swapped.

use super::EndianCursor;
use crate::endian::ByteSwap;
use crate::error::Result;
use byteorder::{NativeEndian, ReadBytesExt};
use std::io::{Read, Seek};

macro_rules! scalar_readers {
    ($(($ty:ty, $read:ident, $read_many:ident, $bo_read:ident)),* $(,)?) => {
        $(
            #[doc = concat!("Read one `", stringify!($ty), "`, swapping if needed.")]
            pub fn $read(&mut self) -> Result<$ty> {
                let raw = self.stream.$bo_read::<NativeEndian>()?;
                Ok(if self.swap { raw.swapped() } else { raw })
            }

            #[doc = concat!("Read `count` `", stringify!($ty), "` values in stream order.")]
            pub fn $read_many(&mut self, count: usize) -> Result<Vec<$ty>> {
                let mut values = Vec::with_capacity(count);
                for _ in 0..count {
                    values.push(self.$read()?);
                }
                Ok(values)
            }
        )*
    };
}

impl<S: Read + Seek> EndianCursor<S> {
    /// Read one unsigned byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.stream.read_u8()?)
    }

    /// Read one signed byte.
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.stream.read_i8()?)
    }

    /// Read one byte as a boolean (non-zero is true).
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Read exactly `count` raw bytes.
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let mut bytes = vec![0u8; count];
        self.stream.read_exact(&mut bytes)?;
        Ok(bytes)
    }

    pub fn read_i8s(&mut self, count: usize) -> Result<Vec<i8>> {
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(self.read_i8()?);
        }
        Ok(values)
    }

    pub fn read_bools(&mut self, count: usize) -> Result<Vec<bool>> {
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(self.read_bool()?);
        }
        Ok(values)
    }

    scalar_readers!(
        (u16, read_u16, read_u16s, read_u16),
        (i16, read_i16, read_i16s, read_i16),
        (u32, read_u32, read_u32s, read_u32),
        (i32, read_i32, read_i32s, read_i32),
        (u64, read_u64, read_u64s, read_u64),
        (i64, read_i64, read_i64s, read_i64),
        (u128, read_u128, read_u128s, read_u128),
        (i128, read_i128, read_i128s, read_i128),
        (f32, read_f32, read_f32s, read_f32),
        (f64, read_f64, read_f64s, read_f64),
    );
}
