use std::io;
use thiserror::Error;

/// Error type for VCF extraction. Any of these fails the whole file.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The buffer could not be decoded as UTF-8 text.
    #[error("VCF content is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// A `##INFO` meta line could not be understood.
    #[error("Malformed ##INFO header on line {line}: {reason}")]
    MalformedHeader { line: usize, reason: String },

    /// A data line had fewer columns than CHROM..INFO.
    #[error("Line {line}: expected at least 8 tab-delimited columns, found {found}")]
    MissingColumns { line: usize, found: usize },

    /// POS was not a positive integer.
    #[error("Line {line}: invalid POS value '{value}'")]
    InvalidPosition { line: usize, value: String },

    /// An INFO entry with an empty key, e.g. `=value`.
    #[error("Line {line}: malformed INFO entry '{entry}'")]
    MalformedInfo { line: usize, entry: String },

    /// IO error while loading a VCF from disk.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for pharmaguard-vcf operations.
pub type Result<T> = std::result::Result<T, ParseError>;
