// src/lib.rs
//! # endian-cursor
//!
//! An endian-aware binary decoding layer: read scalar numbers, strings, and
//! fixed-layout composite records from any seekable byte stream, with
//! multi-byte values transparently reordered when the stream's declared byte
//! order differs from the host's. Built for higher-level format parsers that
//! should not each re-implement byte-swap logic.
//!
//! ## Features
//!
//! - **Typed reads**: 8/16/32/64/128-bit integers, 32/64-bit floats,
//!   booleans, and array variants of each
//! - **Five string framings**: null-terminated, fixed-window (with embedded
//!   zero stripping), and 8/16/32-bit length prefixes
//! - **Schema-driven records**: composite layouts declared as static field
//!   schemas, byte-swapped field-by-field — never as one opaque blob
//! - **Position stack**: push/pop saved offsets, plus a scoped
//!   [`at_offset`](EndianCursor::at_offset) guard that restores on every
//!   exit path
//! - **Stream-agnostic**: anything `Read + Seek` works, owned or `&mut`
//!
//! ## Quick Start
//!
//! ```rust
//! use endian_cursor::{EndianCursor, Endianness, StringFormat};
//! use std::io::Cursor;
//!
//! fn main() -> endian_cursor::Result<()> {
//!     let data = [
//!         0x00, 0x00, 0x00, 0x2a,       // u32, big-endian
//!         0x03, b'a', b'b', b'c',       // length-prefixed string
//!     ];
//!     let mut cursor = EndianCursor::new(Cursor::new(data), Endianness::Big);
//!
//!     assert_eq!(cursor.read_u32()?, 42);
//!     assert_eq!(cursor.read_string(StringFormat::PrefixedLength8, None)?, "abc");
//!     Ok(())
//! }
//! ```
//!
//! ## Decoding records
//!
//! ```rust
//! use bytemuck::{Pod, Zeroable};
//! use endian_cursor::{
//!     EndianCursor, Endianness, Field, FieldShape, Record, RecordSchema,
//! };
//! use std::io::Cursor;
//!
//! #[derive(Clone, Copy, Pod, Zeroable)]
//! #[repr(C)]
//! struct Entry {
//!     offset: u32,
//!     size: u16,
//!     kind: u16,
//! }
//!
//! impl Record for Entry {
//!     const SCHEMA: &'static RecordSchema = &RecordSchema {
//!         size: 8,
//!         fields: &[
//!             Field::new(0, FieldShape::Scalar(4)),
//!             Field::new(4, FieldShape::Scalar(2)),
//!             Field::new(6, FieldShape::Scalar(2)),
//!         ],
//!     };
//! }
//!
//! fn main() -> endian_cursor::Result<()> {
//!     let data = [0x00, 0x00, 0x01, 0x00, 0x00, 0x40, 0x00, 0x07];
//!     let mut cursor = EndianCursor::new(Cursor::new(data), Endianness::Big);
//!     let entry: Entry = cursor.read_record()?;
//!     assert_eq!(entry.offset, 0x100);
//!     assert_eq!(entry.size, 0x40);
//!     assert_eq!(entry.kind, 7);
//!     Ok(())
//! }
//! ```

// Modules
pub mod cursor;
pub mod encoding;
pub mod endian;
pub mod error;
pub mod schema;
pub mod swap;

// Re-export commonly used types at the crate root for convenience
pub use error::{CursorError, Result};

pub use cursor::{EndianCursor, StringFormat};
pub use encoding::TextEncoding;
pub use endian::{ByteSwap, Endianness};
pub use schema::{Field, FieldShape, Record, RecordSchema};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use endian_cursor::prelude::*;
    //! ```

    pub use crate::cursor::{EndianCursor, StringFormat};
    pub use crate::encoding::TextEncoding;
    pub use crate::endian::Endianness;
    pub use crate::error::{CursorError, Result};
    pub use crate::schema::{Field, FieldShape, Record, RecordSchema};
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
