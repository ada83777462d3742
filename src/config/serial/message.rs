use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

const STX: u8 = 0x02;
const ETX: u8 = 0x03;

/// Character encoding applied to messages sent to the sorter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
pub enum EncodeType {
    /// 7-bit ASCII; any other character is rejected.
    #[default]
    #[serde(rename = "ascii")]
    Ascii,

    /// UTF-8.
    #[serde(rename = "utf-8")]
    Utf8,

    /// UTF-16, little-endian with a leading byte order mark.
    #[serde(rename = "utf-16")]
    Utf16,

    /// Latin-1; characters above U+00FF are rejected.
    #[serde(rename = "iso-8859-1")]
    Iso8859_1,

    /// UTF-32, little-endian with a leading byte order mark.
    #[serde(rename = "utf-32")]
    Utf32,
}

impl EncodeType {
    /// Name of the encoding as it appears in the configuration file.
    pub fn as_str(self) -> &'static str {
        match self {
            EncodeType::Ascii => "ascii",
            EncodeType::Utf8 => "utf-8",
            EncodeType::Utf16 => "utf-16",
            EncodeType::Iso8859_1 => "iso-8859-1",
            EncodeType::Utf32 => "utf-32",
        }
    }

    /// Encodes `text`, or returns the first character the encoding cannot represent.
    pub fn encode(self, text: &str) -> Result<Vec<u8>, char> {
        match self {
            EncodeType::Ascii => match text.chars().find(|c| !c.is_ascii()) {
                Some(c) => Err(c),
                None => Ok(text.as_bytes().to_vec()),
            },
            EncodeType::Utf8 => Ok(text.as_bytes().to_vec()),
            EncodeType::Utf16 => {
                let mut bytes = vec![0xFF, 0xFE];
                bytes.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
                Ok(bytes)
            }
            EncodeType::Iso8859_1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).map_err(|_| c))
                .collect(),
            EncodeType::Utf32 => {
                let mut bytes = vec![0xFF, 0xFE, 0x00, 0x00];
                bytes.extend(text.chars().flat_map(|c| u32::from(c).to_le_bytes()));
                Ok(bytes)
            }
        }
    }
}

impl fmt::Display for EncodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Framing that delimits one message on the serial line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
pub enum FormatType {
    /// Message enclosed between STX (0x02) and ETX (0x03).
    #[default]
    #[serde(rename = "STX/ETX")]
    StxEtx,

    /// Message terminated by carriage return and line feed.
    #[serde(rename = "CRLF")]
    Crlf,

    /// Message terminated by a line feed.
    #[serde(rename = "LF")]
    Lf,

    /// Message terminated by a carriage return.
    #[serde(rename = "CR")]
    Cr,
}

impl FormatType {
    /// Name of the framing as it appears in the configuration file.
    pub fn as_str(self) -> &'static str {
        match self {
            FormatType::StxEtx => "STX/ETX",
            FormatType::Crlf => "CRLF",
            FormatType::Lf => "LF",
            FormatType::Cr => "CR",
        }
    }

    /// Wraps an encoded payload in this framing.
    pub fn frame(self, payload: &[u8]) -> Vec<u8> {
        let mut framed = Vec::with_capacity(payload.len() + 2);

        match self {
            FormatType::StxEtx => {
                framed.push(STX);
                framed.extend_from_slice(payload);
                framed.push(ETX);
            }
            FormatType::Crlf => {
                framed.extend_from_slice(payload);
                framed.extend_from_slice(b"\r\n");
            }
            FormatType::Lf => {
                framed.extend_from_slice(payload);
                framed.push(b'\n');
            }
            FormatType::Cr => {
                framed.extend_from_slice(payload);
                framed.push(b'\r');
            }
        }

        framed
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
