// src/endian.rs

/// Byte order of multi-byte scalars in a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    Big,
    Little,
}

impl Endianness {
    /// The host's native byte order.
    pub const fn native() -> Self {
        #[cfg(target_endian = "big")]
        {
            Endianness::Big
        }
        #[cfg(target_endian = "little")]
        {
            Endianness::Little
        }
    }

    /// Whether values declared in this byte order need swapping on this host.
    pub const fn needs_swap(self) -> bool {
        !matches!(
            (self, Endianness::native()),
            (Endianness::Big, Endianness::Big) | (Endianness::Little, Endianness::Little)
        )
    }
}

/// Byte-order reversal for fixed-width scalars.
///
/// Involutive: `x.swapped().swapped() == x` for every bit pattern. Floats
/// swap through their bit representation so NaN payloads survive the trip.
pub trait ByteSwap: Copy {
    fn swapped(self) -> Self;
}

macro_rules! impl_byte_swap_int {
    ($($t:ty),*) => {
        $(
            impl ByteSwap for $t {
                #[inline]
                fn swapped(self) -> Self {
                    self.swap_bytes()
                }
            }
        )*
    };
}

impl_byte_swap_int!(u16, i16, u32, i32, u64, i64, u128, i128);

impl ByteSwap for f32 {
    #[inline]
    fn swapped(self) -> Self {
        f32::from_bits(self.to_bits().swap_bytes())
    }
}

impl ByteSwap for f64 {
    #[inline]
    fn swapped(self) -> Self {
        f64::from_bits(self.to_bits().swap_bytes())
    }
}
