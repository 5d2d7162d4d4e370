//! In-memory sequence text formats.
//!
//! Supports:
//! - Plain base strings (`ACGTU`, case-insensitive)
//! - FASTQ, a single record body with an optional `@id` header
//!
//! Format detection priority:
//! 1. Explicit format specification
//! 2. Content-based detection

pub mod fastq;

use thiserror::Error;

use crate::error::SequenceError;
use crate::sequence::NucleotideSequence;

/// Text format of an in-memory sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceFormat {
    Plain,
    Fastq,
}

impl std::fmt::Display for SequenceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceFormat::Plain => write!(f, "plain"),
            SequenceFormat::Fastq => write!(f, "FASTQ"),
        }
    }
}

/// Errors that can occur while parsing sequence text.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Plain sequence error: {0}")]
    PlainError(#[from] SequenceError),

    #[error("FASTQ error: {0}")]
    FastqError(#[from] fastq::FastqError),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Detects the format by examining the content.
///
/// FASTQ is recognised by an `@` header line or a `+` separator on the
/// second line; anything else is treated as plain bases.
pub fn detect_format_from_content(content: &str) -> SequenceFormat {
    let mut lines = content.lines();
    match (lines.next(), lines.next()) {
        (Some(first), _) if first.starts_with('@') => SequenceFormat::Fastq,
        (_, Some(second)) if second.starts_with('+') => SequenceFormat::Fastq,
        _ => SequenceFormat::Plain,
    }
}

/// Parses content with a specific format.
fn parse_content(content: &str, format: SequenceFormat) -> ParseResult<NucleotideSequence> {
    match format {
        SequenceFormat::Plain => {
            let bases = content.trim_end_matches(['\n', '\r']);
            NucleotideSequence::from_string(bases).map_err(ParseError::PlainError)
        }
        SequenceFormat::Fastq => fastq::parse_fastq(content).map_err(ParseError::FastqError),
    }
}

/// Parses sequence text with optional format specification.
pub fn parse_str_with_options(
    content: &str,
    forced_format: Option<SequenceFormat>,
) -> ParseResult<NucleotideSequence> {
    let format = forced_format.unwrap_or_else(|| detect_format_from_content(content));
    log::debug!("Parsing {} bytes as {}", content.len(), format);
    parse_content(content, format)
}

/// Parses sequence text, automatically detecting the format.
pub fn parse_str(content: &str) -> ParseResult<NucleotideSequence> {
    parse_str_with_options(content, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_plain() {
        assert_eq!(detect_format_from_content("ACGT"), SequenceFormat::Plain);
        assert_eq!(detect_format_from_content("ACGT\n"), SequenceFormat::Plain);
        assert_eq!(detect_format_from_content(""), SequenceFormat::Plain);
    }

    #[test]
    fn test_detect_fastq() {
        assert_eq!(detect_format_from_content("ACGT\n+\n!!!!"), SequenceFormat::Fastq);
        assert_eq!(detect_format_from_content("@r1\nACGT\n+\n!!!!\n"), SequenceFormat::Fastq);
    }

    #[test]
    fn test_parse_plain() {
        let seq = parse_str("acgu\r\n").unwrap();
        assert_eq!(seq.to_string(), "ACGU");
        assert!(matches!(
            parse_str("AC GT"),
            Err(ParseError::PlainError(SequenceError::InvalidBase(' ')))
        ));
    }

    #[test]
    fn test_parse_fastq_detected() {
        let seq = parse_str("TTA\n+\nII!").unwrap();
        assert_eq!(seq.to_string(), "TTA");
        assert_eq!(seq[2].quality(), 33);
    }

    #[test]
    fn test_forced_format() {
        // Forcing FASTQ on plain text fails on the missing separator
        let result = parse_str_with_options("ACGT", Some(SequenceFormat::Fastq));
        assert!(matches!(
            result,
            Err(ParseError::FastqError(fastq::FastqError::MissingSeparator(2)))
        ));

        // Forcing plain on FASTQ text fails on the newline
        let result = parse_str_with_options("A\n+\nI", Some(SequenceFormat::Plain));
        assert!(matches!(
            result,
            Err(ParseError::PlainError(SequenceError::InvalidBase('\n')))
        ));
    }
}
