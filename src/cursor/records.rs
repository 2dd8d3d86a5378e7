// src/cursor/records.rs
//! Fixed-layout composite decoding.
//!
//! A record is read as one raw window of `T::SCHEMA.size` bytes, byte-swapped
//! field-by-field per its schema when the stream order is foreign, and only
//! then reinterpreted as `T`. The schema — not the swap — is what knows where
//! field boundaries lie, so a record never gets reversed as one opaque blob.

use super::EndianCursor;
use crate::error::Result;
use crate::schema::Record;
use crate::swap::swap_record;
use std::io::{Read, Seek};

impl<S: Read + Seek> EndianCursor<S> {
    /// Read one `T` from the stream.
    ///
    /// `T::SCHEMA.size` must equal `size_of::<T>()`; a mismatch is a bug in
    /// the `Record` impl, not a stream condition.
    pub fn read_record<T: Record>(&mut self) -> Result<T> {
        debug_assert_eq!(T::SCHEMA.size, std::mem::size_of::<T>());

        let mut window = vec![0u8; T::SCHEMA.size];
        self.stream.read_exact(&mut window)?;
        if self.swap {
            swap_record(&mut window, T::SCHEMA)?;
        }
        Ok(bytemuck::pod_read_unaligned(&window))
    }

    /// Read `count` consecutive `T` instances in stream order.
    pub fn read_records<T: Record>(&mut self, count: usize) -> Result<Vec<T>> {
        debug_assert_eq!(T::SCHEMA.size, std::mem::size_of::<T>());

        let size = T::SCHEMA.size;
        let mut bytes = vec![0u8; size * count];
        self.stream.read_exact(&mut bytes)?;

        let mut records = Vec::with_capacity(count);
        for window in bytes.chunks_exact_mut(size) {
            if self.swap {
                swap_record(window, T::SCHEMA)?;
            }
            records.push(bytemuck::pod_read_unaligned(window));
        }
        Ok(records)
    }
}
