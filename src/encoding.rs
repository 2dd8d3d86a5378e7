// src/encoding.rs

/// Byte-to-text conventions the cursor can decode collected string bytes with.
///
/// Decoding is total: bytes that are not valid in the encoding come back as
/// U+FFFD rather than an error, so a malformed name field never aborts a
/// parse that only cares about the surrounding structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// 7-bit ASCII; bytes with the high bit set are replaced.
    #[default]
    Ascii,
    Utf8,
    /// ISO-8859-1: every byte maps 1:1 to U+0000..=U+00FF.
    Latin1,
}

impl TextEncoding {
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Ascii => bytes
                .iter()
                .map(|&b| if b.is_ascii() { b as char } else { char::REPLACEMENT_CHARACTER })
                .collect(),
            TextEncoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            TextEncoding::Latin1 => bytes.iter().map(|&b| b as char).collect(),
        }
    }
}
