//! A single base call: nucleobase, position and quality score.

use std::fmt;

use rand::Rng;

use crate::error::{SequenceError, SequenceResult};
use crate::nucleobase::Nucleobase;

/// Lowest accepted quality score (`'!'`).
pub const QUALITY_MIN: u8 = 0x21;
/// Highest accepted quality score (`'~'`).
pub const QUALITY_MAX: u8 = 0x7E;

/// One nucleotide within a sequence.
///
/// The quality is stored as its printable ASCII code, so it maps directly
/// onto a FASTQ quality character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nucleotide {
    base: Nucleobase,
    position: usize,
    quality: u8,
}

impl Nucleotide {
    /// Creates a nucleotide, rejecting qualities outside `0x21..=0x7E`.
    pub fn new(base: Nucleobase, position: usize, quality: u8) -> SequenceResult<Self> {
        if !(QUALITY_MIN..=QUALITY_MAX).contains(&quality) {
            return Err(SequenceError::InvalidQuality(quality.into()));
        }
        Ok(Self {
            base,
            position,
            quality,
        })
    }

    /// Creates a nucleotide from unchecked integer input.
    ///
    /// Quality is checked before position.
    pub fn try_from_raw(base: Nucleobase, position: i64, quality: i64) -> SequenceResult<Self> {
        let quality = u8::try_from(quality).map_err(|_| SequenceError::InvalidQuality(quality))?;
        if !(QUALITY_MIN..=QUALITY_MAX).contains(&quality) {
            return Err(SequenceError::InvalidQuality(quality.into()));
        }
        let position =
            usize::try_from(position).map_err(|_| SequenceError::InvalidPosition(position))?;
        Self::new(base, position, quality)
    }

    /// Creates a nucleotide with a random DNA base and a uniform random quality.
    pub fn random_nucleotide<R: Rng + ?Sized>(position: usize, rng: &mut R) -> Self {
        Self {
            base: Nucleobase::random_base(rng),
            position,
            quality: rng.random_range(QUALITY_MIN..=QUALITY_MAX),
        }
    }

    /// Parses a nucleotide from one character, at position 0 with minimum quality.
    pub fn from_char(c: char) -> SequenceResult<Self> {
        Ok(Self {
            base: Nucleobase::from_char(c)?,
            position: 0,
            quality: QUALITY_MIN,
        })
    }

    pub fn base(&self) -> Nucleobase {
        self.base
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Returns the quality as its FASTQ character.
    pub fn quality_char(&self) -> char {
        self.quality as char
    }

    /// Moves the nucleotide to another index. Base and quality never change.
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Returns a copy carrying the complementary base.
    pub fn complement(&self) -> Self {
        Self {
            base: self.base.complement(),
            ..*self
        }
    }
}

/// Formats as `Nucleotide(base=A, position=0, quality=33)`.
impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Nucleotide(base={}, position={}, quality={})",
            self.base, self.position, self.quality
        )
    }
}
