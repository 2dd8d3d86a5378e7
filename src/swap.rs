// src/swap.rs
//! Schema-driven byte-order reversal over raw buffers.
//!
//! Pure functions, no state: given a byte window and the layout that
//! describes it, reverse each multi-byte field in place. A field is always
//! swapped within its own boundaries — a record of one 4-byte field followed
//! by two 2-byte fields swaps three independent windows, never one 8-byte
//! block.

use crate::error::{CursorError, Result};
use crate::schema::{FieldShape, RecordSchema};

/// Widths [`swap_scalar`] accepts (besides 1, which is a no-op).
pub const SUPPORTED_WIDTHS: [usize; 4] = [2, 4, 8, 16];

/// Reverse a single scalar field in place.
///
/// Width 1 is untouched; widths 2, 4, 8, and 16 are reversed; anything else
/// is `UnsupportedWidth`.
pub fn swap_scalar(bytes: &mut [u8]) -> Result<()> {
    match bytes.len() {
        1 => Ok(()),
        2 | 4 | 8 | 16 => {
            bytes.reverse();
            Ok(())
        }
        width => Err(CursorError::UnsupportedWidth(width)),
    }
}

/// Reverse every field of a record window in place, per its schema.
///
/// Scalars swap by their own width, fixed arrays swap elementwise, nested
/// records recurse into their sub-schema. Bytes the schema does not cover
/// (declared padding) are left as read.
pub fn swap_record(bytes: &mut [u8], schema: &RecordSchema) -> Result<()> {
    debug_assert_eq!(bytes.len(), schema.size);
    for field in schema.fields {
        let window = &mut bytes[field.offset..field.offset + field.shape.byte_len()];
        swap_field(window, &field.shape)?;
    }
    Ok(())
}

fn swap_field(window: &mut [u8], shape: &FieldShape) -> Result<()> {
    match *shape {
        FieldShape::Scalar(_) => swap_scalar(window),
        FieldShape::Array { width, len: _ } => {
            if width == 1 {
                return Ok(());
            }
            if !SUPPORTED_WIDTHS.contains(&width) {
                return Err(CursorError::UnsupportedWidth(width));
            }
            for element in window.chunks_exact_mut(width) {
                element.reverse();
            }
            Ok(())
        }
        FieldShape::Record(sub) => swap_record(window, sub),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Field;

    #[test]
    fn test_swap_scalar_widths() {
        let mut two = [0x12, 0x34];
        swap_scalar(&mut two).unwrap();
        assert_eq!(two, [0x34, 0x12]);

        let mut four = [1, 2, 3, 4];
        swap_scalar(&mut four).unwrap();
        assert_eq!(four, [4, 3, 2, 1]);

        let mut one = [0x7f];
        swap_scalar(&mut one).unwrap();
        assert_eq!(one, [0x7f]);
    }

    #[test]
    fn test_swap_scalar_rejects_odd_widths() {
        let mut three = [1, 2, 3];
        assert!(matches!(
            swap_scalar(&mut three),
            Err(CursorError::UnsupportedWidth(3))
        ));

        let mut five = [0u8; 5];
        assert!(matches!(
            swap_scalar(&mut five),
            Err(CursorError::UnsupportedWidth(5))
        ));
    }

    #[test]
    fn test_record_swap_respects_field_boundaries() {
        // One u32 followed by two u16s.
        static SCHEMA: RecordSchema = RecordSchema {
            size: 8,
            fields: &[
                Field::new(0, FieldShape::Scalar(4)),
                Field::new(4, FieldShape::Scalar(2)),
                Field::new(6, FieldShape::Scalar(2)),
            ],
        };

        let mut bytes = [1, 2, 3, 4, 5, 6, 7, 8];
        swap_record(&mut bytes, &SCHEMA).unwrap();
        assert_eq!(bytes, [4, 3, 2, 1, 6, 5, 8, 7]);

        // A naive whole-record reversal would give [8,7,6,5,4,3,2,1].
        let mut naive = [1, 2, 3, 4, 5, 6, 7, 8];
        naive.reverse();
        assert_ne!(bytes, naive);
    }

    #[test]
    fn test_array_field_swaps_elementwise() {
        static SCHEMA: RecordSchema = RecordSchema {
            size: 6,
            fields: &[Field::new(0, FieldShape::Array { width: 2, len: 3 })],
        };

        let mut bytes = [1, 2, 3, 4, 5, 6];
        swap_record(&mut bytes, &SCHEMA).unwrap();
        assert_eq!(bytes, [2, 1, 4, 3, 6, 5]);
    }

    #[test]
    fn test_byte_array_field_untouched() {
        static SCHEMA: RecordSchema = RecordSchema {
            size: 4,
            fields: &[Field::new(0, FieldShape::Array { width: 1, len: 4 })],
        };

        let mut bytes = [b'T', b'a', b'g', b'!'];
        swap_record(&mut bytes, &SCHEMA).unwrap();
        assert_eq!(bytes, [b'T', b'a', b'g', b'!']);
    }

    #[test]
    fn test_nested_record_recurses() {
        static INNER: RecordSchema = RecordSchema {
            size: 4,
            fields: &[
                Field::new(0, FieldShape::Scalar(2)),
                Field::new(2, FieldShape::Scalar(2)),
            ],
        };
        static OUTER: RecordSchema = RecordSchema {
            size: 8,
            fields: &[
                Field::new(0, FieldShape::Scalar(4)),
                Field::new(4, FieldShape::Record(&INNER)),
            ],
        };

        let mut bytes = [1, 2, 3, 4, 5, 6, 7, 8];
        swap_record(&mut bytes, &OUTER).unwrap();
        assert_eq!(bytes, [4, 3, 2, 1, 6, 5, 8, 7]);
    }

    #[test]
    fn test_record_swap_is_involutive() {
        static SCHEMA: RecordSchema = RecordSchema {
            size: 12,
            fields: &[
                Field::new(0, FieldShape::Scalar(8)),
                Field::new(8, FieldShape::Array { width: 2, len: 2 }),
            ],
        };

        let original: [u8; 12] = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 0xff, 0xee];
        let mut bytes = original;
        swap_record(&mut bytes, &SCHEMA).unwrap();
        swap_record(&mut bytes, &SCHEMA).unwrap();
        assert_eq!(bytes, original);
    }

    #[test]
    fn test_unsupported_width_in_array() {
        static SCHEMA: RecordSchema = RecordSchema {
            size: 6,
            fields: &[Field::new(0, FieldShape::Array { width: 3, len: 2 })],
        };

        let mut bytes = [0u8; 6];
        assert!(matches!(
            swap_record(&mut bytes, &SCHEMA),
            Err(CursorError::UnsupportedWidth(3))
        ));
    }

    #[test]
    fn test_padding_bytes_left_alone() {
        // 2-byte field, 2 bytes of undeclared padding.
        static SCHEMA: RecordSchema = RecordSchema {
            size: 4,
            fields: &[Field::new(0, FieldShape::Scalar(2))],
        };

        let mut bytes = [1, 2, 0xaa, 0xbb];
        swap_record(&mut bytes, &SCHEMA).unwrap();
        assert_eq!(bytes, [2, 1, 0xaa, 0xbb]);
    }
}
