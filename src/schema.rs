// src/schema.rs
//! Declarative fixed-layout descriptions for composite records.
//!
//! Every composite type the cursor decodes declares its layout once, as a
//! `static` [`RecordSchema`] listing each field's byte offset and shape. The
//! schema is plain data: byte swapping walks it recursively instead of
//! inspecting the type at runtime, and it is the caller's single source of
//! truth for where field boundaries lie.

use bytemuck::Pod;

/// The shape of one field within a fixed-layout record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// A single scalar of the given byte width (1, 2, 4, 8, or 16).
    Scalar(usize),
    /// A fixed-length array of `len` scalars, each `width` bytes wide.
    Array { width: usize, len: usize },
    /// A nested composite with its own layout.
    Record(&'static RecordSchema),
}

impl FieldShape {
    /// Total number of bytes this shape occupies.
    pub const fn byte_len(&self) -> usize {
        match *self {
            FieldShape::Scalar(width) => width,
            FieldShape::Array { width, len } => width * len,
            FieldShape::Record(schema) => schema.size,
        }
    }
}

/// One field of a record: where it starts and what it looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub offset: usize,
    pub shape: FieldShape,
}

impl Field {
    pub const fn new(offset: usize, shape: FieldShape) -> Self {
        Field { offset, shape }
    }
}

/// The complete fixed layout of a composite record.
#[derive(Debug, PartialEq, Eq)]
pub struct RecordSchema {
    /// Total record size in bytes, including any declared padding fields.
    pub size: usize,
    /// Fields in offset order. Offsets plus shapes must stay within `size`
    /// and must not overlap; the schema author owns that invariant.
    pub fields: &'static [Field],
}

/// A type decodable from a fixed-size byte window.
///
/// `SCHEMA` must describe exactly the in-memory layout of `Self`: same total
/// size, same field offsets and widths. Implementors therefore want an
/// explicit `#[repr(C)]` (packed where the on-disk layout is unpadded) so the
/// compiler cannot insert padding the schema does not declare. The `Pod`
/// bound is what makes reinterpreting the (already byte-swapped) window as
/// `Self` sound.
///
/// ```
/// use bytemuck::{Pod, Zeroable};
/// use endian_cursor::{Field, FieldShape, Record, RecordSchema};
///
/// #[derive(Clone, Copy, Pod, Zeroable)]
/// #[repr(C)]
/// struct Header {
///     magic: u32,
///     version: u16,
///     flags: u16,
/// }
///
/// impl Record for Header {
///     const SCHEMA: &'static RecordSchema = &RecordSchema {
///         size: 8,
///         fields: &[
///             Field::new(0, FieldShape::Scalar(4)),
///             Field::new(4, FieldShape::Scalar(2)),
///             Field::new(6, FieldShape::Scalar(2)),
///         ],
///     };
/// }
/// ```
pub trait Record: Pod {
    const SCHEMA: &'static RecordSchema;
}
