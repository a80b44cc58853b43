//! Component-level error types for the Hilltop pipeline.
//!
//! Decoding and value parsing fail in different ways and with different
//! blast radius: a [`DecodeError`] means the file could not be turned into a
//! document at all, a [`ParseError`] means a value line inside an otherwise
//! readable document is not trustworthy. Both abort the current file.

use thiserror::Error;

/// Failure to turn a byte stream into a Hilltop document
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("unable to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("encoding \"{label}\" declared but no charset reader was supplied")]
    UnsupportedCharset { label: String },

    #[error("charset reader failed for encoding \"{label}\": {reason}")]
    Charset { label: String, reason: String },

    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("malformed xml: {0}")]
    Xml(String),

    #[error("expected element type <Hilltop> but have <{found}>")]
    UnexpectedRoot { found: String },

    #[error("unexpected end of file inside <{element}>")]
    UnexpectedEof { element: String },
}

impl From<quick_xml::Error> for DecodeError {
    fn from(error: quick_xml::Error) -> Self {
        Self::Xml(error.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for DecodeError {
    fn from(error: quick_xml::events::attributes::AttrError) -> Self {
        Self::Xml(error.to_string())
    }
}

/// A value line that passed the token-count filter but could not be parsed
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("line {line}: invalid timestamp \"{text}\": {source}")]
    Timestamp {
        line: usize,
        text: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("line {line}: timestamp \"{text}\" is not in DD-Mon-YY HH:MM:SS form")]
    TimestampShape { line: usize, text: String },

    #[error("line {line}: invalid reading \"{text}\": {source}")]
    Value {
        line: usize,
        text: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("line {line}: reading \"{text}\" is not a finite number")]
    NonFiniteValue { line: usize, text: String },
}

impl ParseError {
    /// Index (1-based) of the offending line within its measurement
    pub fn line(&self) -> usize {
        match self {
            Self::Timestamp { line, .. }
            | Self::TimestampShape { line, .. }
            | Self::Value { line, .. }
            | Self::NonFiniteValue { line, .. } => *line,
        }
    }
}
