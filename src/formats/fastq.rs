//! FASTQ rendering and single-record parsing.
//!
//! Qualities use a single linear mapping: the score is the ASCII code of
//! its character, from `'!'` (33) to `'~'` (126).
//!
//! ## FASTQ Body
//!
//! ```text
//! ACGT
//! +
//! !!I~
//! ```
//!
//! A full record adds an `@identifier` line in front of the body.

use thiserror::Error;

use crate::error::SequenceError;
use crate::nucleobase::Nucleobase;
use crate::sequence::NucleotideSequence;

/// Errors that can occur while parsing FASTQ text.
#[derive(Error, Debug)]
pub enum FastqError {
    #[error("Empty FASTQ input")]
    EmptyInput,

    #[error("Expected '+' separator at line {0}")]
    MissingSeparator(usize),

    #[error("Sequence has {bases} bases but {qualities} quality characters")]
    LengthMismatch { bases: usize, qualities: usize },

    #[error("Unexpected data after the record at line {0}")]
    TrailingData(usize),

    #[error("Invalid FASTQ record: {0}")]
    Sequence(#[from] SequenceError),
}

/// Result type for FASTQ operations.
pub type FastqResult<T> = Result<T, FastqError>;

/// Renders the three-line body of a FASTQ record, without a header line and
/// without a trailing newline.
pub fn fastq_body(sequence: &NucleotideSequence) -> String {
    let mut out = String::with_capacity(sequence.len() * 2 + 3);
    for nucleotide in sequence {
        out.push(nucleotide.base().symbol());
    }
    out.push_str("\n+\n");
    for nucleotide in sequence {
        out.push(nucleotide.quality_char());
    }
    out
}

/// Renders a complete record: `@id`, the body and a final newline.
pub fn fastq_record(id: &str, sequence: &NucleotideSequence) -> String {
    format!("@{}\n{}\n", id, fastq_body(sequence))
}

/// Parses one FASTQ body, optionally preceded by an `@id` header line.
///
/// Positions are assigned from zero. Only a single record is accepted.
pub fn parse_fastq(content: &str) -> FastqResult<NucleotideSequence> {
    let mut lines = content
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .enumerate()
        .map(|(i, line)| (i + 1, line));

    let (mut line_number, mut bases_line) = lines.next().ok_or(FastqError::EmptyInput)?;
    if bases_line.starts_with('@') {
        (line_number, bases_line) = lines
            .next()
            .ok_or(FastqError::MissingSeparator(line_number + 1))?;
    }

    match lines.next() {
        Some((_, separator)) if separator.starts_with('+') => {}
        Some((n, _)) => return Err(FastqError::MissingSeparator(n)),
        None => return Err(FastqError::MissingSeparator(line_number + 1)),
    }

    // An empty record has no quality line left after the separator
    let quality_line = lines.next().map(|(_, line)| line).unwrap_or("");

    if let Some((n, _)) = lines.find(|(_, line)| !line.trim().is_empty()) {
        return Err(FastqError::TrailingData(n));
    }

    let bases = bases_line.chars().count();
    let qualities = quality_line.chars().count();
    if bases != qualities {
        return Err(FastqError::LengthMismatch { bases, qualities });
    }

    let pairs = bases_line
        .chars()
        .zip(quality_line.chars())
        .map(|(b, q)| {
            let base = Nucleobase::from_char(b)?;
            let quality = u8::try_from(u32::from(q))
                .map_err(|_| SequenceError::InvalidQuality(i64::from(u32::from(q))))?;
            Ok((base, quality))
        })
        .collect::<Result<Vec<_>, SequenceError>>()?;

    Ok(NucleotideSequence::from_bases(&pairs)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nucleobase::Nucleobase::{A, C, G, T};

    #[test]
    fn test_body_format() {
        let seq = NucleotideSequence::from_string("ACGT").unwrap();
        assert_eq!(fastq_body(&seq), "ACGT\n+\n!!!!");
    }

    #[test]
    fn test_body_of_empty_sequence() {
        let seq = NucleotideSequence::new(Vec::new());
        assert_eq!(fastq_body(&seq), "\n+\n");
    }

    #[test]
    fn test_record_has_header() {
        let seq = NucleotideSequence::from_bases(&[(A, 40), (C, 73)]).unwrap();
        assert_eq!(fastq_record("read1", &seq), "@read1\nAC\n+\n(I\n");
    }

    #[test]
    fn test_parse_body() {
        let seq = parse_fastq("GATC\n+\n!I5~").unwrap();
        assert_eq!(seq.to_string(), "GATC");
        let qualities: Vec<u8> = seq.iter().map(|n| n.quality()).collect();
        assert_eq!(qualities, vec![33, 73, 53, 126]);
        let positions: Vec<usize> = seq.iter().map(|n| n.position()).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_parse_record_with_header_and_crlf() {
        let seq = parse_fastq("@read1 sample\r\nacgt\r\n+read1\r\nIIII\r\n").unwrap();
        assert_eq!(seq.to_string(), "ACGT");
        assert!(seq.iter().all(|n| n.quality() == 73));
    }

    #[test]
    fn test_parse_rendered_output() {
        let seq = NucleotideSequence::from_bases(&[(G, 34), (T, 100)]).unwrap();
        assert_eq!(parse_fastq(&seq.fastq()).unwrap(), seq);
        assert_eq!(parse_fastq(&fastq_record("x", &seq)).unwrap(), seq);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_fastq(""), Err(FastqError::EmptyInput)));
        assert!(matches!(
            parse_fastq("ACGT\nIIII\n"),
            Err(FastqError::MissingSeparator(2))
        ));
        assert!(matches!(
            parse_fastq("@id\n"),
            Err(FastqError::MissingSeparator(2))
        ));
        assert!(matches!(
            parse_fastq("ACGT\n+\nIII"),
            Err(FastqError::LengthMismatch { bases: 4, qualities: 3 })
        ));
        assert!(matches!(
            parse_fastq("ACGT\n+\nIIII\n@second\nA\n+\nI\n"),
            Err(FastqError::TrailingData(4))
        ));
        assert!(matches!(
            parse_fastq("ANGT\n+\nIIII"),
            Err(FastqError::Sequence(SequenceError::InvalidBase('N')))
        ));
        assert!(matches!(
            parse_fastq("AC\n+\nI "),
            Err(FastqError::Sequence(SequenceError::InvalidQuality(32)))
        ));
    }
}
