use encoding_rs::Encoding;

use crate::error::{Result, ScnError};

/// Windows code page used by the Simplified Chinese release (GBK).
pub const CODEPAGE_GBK: u16 = 936;
/// Windows code page used by the Traditional Chinese release (Big5).
pub const CODEPAGE_BIG5: u16 = 950;

/// Text decoding table selected by a Windows code page number.
#[derive(Debug, Clone, Copy)]
pub struct TextCodec {
    codepage: u16,
    encoding: &'static Encoding,
}

impl TextCodec {
    pub fn for_codepage(codepage: u16) -> Result<Self> {
        let encoding =
            codepage::to_encoding(codepage).ok_or(ScnError::UnsupportedCodepage(codepage))?;
        Ok(Self { codepage, encoding })
    }

    pub fn codepage(&self) -> u16 {
        self.codepage
    }

    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Decode a fixed-width field: bytes from the first NUL onwards are dropped
    /// before decoding.
    ///
    /// The decoder is never told that the input ended, so a multi-byte
    /// sequence left incomplete by the terminator yields no character at all.
    /// Malformed sequences elsewhere decode to U+FFFD.
    pub fn decode_fixed(&self, raw: &[u8]) -> String {
        let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
        let bytes = &raw[..end];
        if bytes.is_empty() {
            return String::new();
        }

        let mut decoder = self.encoding.new_decoder_without_bom_handling();
        let capacity = decoder
            .max_utf8_buffer_length(bytes.len())
            .unwrap_or(bytes.len() * 3);
        let mut text = String::with_capacity(capacity);
        let _ = decoder.decode_to_string(bytes, &mut text, false);
        text
    }
}
