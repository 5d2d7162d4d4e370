//! # nucleoseq - Nucleotide Sequence Model
//!
//! Typed DNA/RNA sequences with per-base quality scores, composition
//! statistics and FASTQ text conversion.
//!
//! ## Architecture
//!
//! - `nucleobase`: The five base symbols, names and complements
//! - `nucleotide`: A base with its position and quality score
//! - `sequence`: Ordered nucleotides with cached base/quality counts
//! - `formats`: Plain and FASTQ text parsing and rendering
//! - `report`: Printable composition summary
//! - `error`: Errors shared by the model
//!
//! ## Example
//!
//! ```
//! use nucleoseq::sequence::NucleotideSequence;
//!
//! let mut seq = NucleotideSequence::from_string("AACG").unwrap();
//! assert_eq!(seq.complementary_sequence().to_string(), "TTGC");
//! assert_eq!(seq.fastq(), "AACG\n+\n!!!!");
//! assert_eq!(seq.distribution().unwrap().values().sum::<usize>(), 4);
//! ```

pub mod error;
pub mod formats;
pub mod nucleobase;
pub mod nucleotide;
pub mod report;
pub mod sequence;

pub use error::{SequenceError, SequenceResult};
pub use nucleobase::Nucleobase;
pub use nucleotide::Nucleotide;
pub use sequence::NucleotideSequence;
