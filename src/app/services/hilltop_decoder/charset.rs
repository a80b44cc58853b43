//! Charset normalization for Hilltop exports
//!
//! Hilltop servers commonly declare `ISO-8859-1`. The decoder itself only
//! understands UTF-8, so any other declared encoding is handed to a
//! caller-supplied [`CharsetReader`] before the markup is scanned.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::constants::{LATIN1_ENCODING_LABELS, NATIVE_ENCODING_LABELS};
use crate::error::DecodeError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Strategy translating a declared source encoding into UTF-8 text
pub trait CharsetReader {
    /// Transcode `bytes`, declared as `label`, into UTF-8
    fn transcode(&self, label: &str, bytes: &[u8]) -> Result<String, DecodeError>;
}

impl<F> CharsetReader for F
where
    F: Fn(&str, &[u8]) -> Result<String, DecodeError>,
{
    fn transcode(&self, label: &str, bytes: &[u8]) -> Result<String, DecodeError> {
        self(label, bytes)
    }
}

/// ISO-8859-1 charset reader
///
/// Every byte maps to the Unicode code point of the same value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Latin1;

impl CharsetReader for Latin1 {
    fn transcode(&self, label: &str, bytes: &[u8]) -> Result<String, DecodeError> {
        if !matches_label(LATIN1_ENCODING_LABELS, label) {
            return Err(DecodeError::Charset {
                label: label.to_string(),
                reason: "not a Latin-1 encoding".to_string(),
            });
        }
        Ok(bytes.iter().map(|&b| char::from(b)).collect())
    }
}

/// Convert raw document bytes into UTF-8 text
pub(crate) fn to_native_text(
    mut bytes: Vec<u8>,
    charset: Option<&dyn CharsetReader>,
) -> Result<String, DecodeError> {
    if bytes.starts_with(UTF8_BOM) {
        bytes.drain(..UTF8_BOM.len());
    }

    match declared_encoding(&bytes)? {
        Some(label) if !matches_label(NATIVE_ENCODING_LABELS, &label) => match charset {
            Some(reader) => reader.transcode(&label, &bytes),
            None => Err(DecodeError::UnsupportedCharset { label }),
        },
        _ => Ok(String::from_utf8(bytes)?),
    }
}

/// Encoding named by the XML declaration, if the document starts with one
pub fn declared_encoding(bytes: &[u8]) -> Result<Option<String>, DecodeError> {
    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();

    match reader.read_event_into(&mut buf)? {
        Event::Decl(decl) => match decl.encoding() {
            Some(label) => Ok(Some(String::from_utf8_lossy(&label?).into_owned())),
            None => Ok(None),
        },
        _ => Ok(None),
    }
}

fn matches_label(labels: &[&str], label: &str) -> bool {
    labels.iter().any(|known| known.eq_ignore_ascii_case(label))
}
