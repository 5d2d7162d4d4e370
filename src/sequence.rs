//! Ordered nucleotide sequences with cached composition statistics.
//!
//! A [`NucleotideSequence`] counts its bases and quality scores once, when it
//! is built, and remembers a single length alongside both counts. A read
//! through [`NucleotideSequence::distribution`] or
//! [`NucleotideSequence::quality_distribution`] compares the current length
//! with that remembered length. On a match the stored counts are returned.
//! On a mismatch fresh counts are computed and returned, and the remembered
//! length is updated, but the stored counts are left as they were.
//!
//! Both getters share the remembered length, so after one of them has seen a
//! length change the other one (and any later read of the first) returns the
//! counts taken at construction. Editing a nucleotide in place through
//! [`NucleotideSequence::nucleotides_mut`] without changing the length is
//! never detected.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::{self, Write};
use std::ops::Index;
use std::str::FromStr;

use rand::Rng;

use crate::error::{SequenceError, SequenceResult};
use crate::formats::fastq;
use crate::nucleobase::Nucleobase;
use crate::nucleotide::Nucleotide;

/// Number of nucleotides per base.
pub type BaseDistribution = BTreeMap<Nucleobase, usize>;

/// Number of nucleotides per quality score.
pub type QualityDistribution = BTreeMap<u8, usize>;

fn count<K: Ord>(keys: impl Iterator<Item = K>) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// A sequence of DNA or RNA nucleotides.
#[derive(Debug, Clone)]
pub struct NucleotideSequence {
    nucleotides: Vec<Nucleotide>,
    distribution: BaseDistribution,
    quality_distribution: QualityDistribution,
    remembered_len: usize,
}

impl NucleotideSequence {
    /// Wraps a list of nucleotides and counts its bases and qualities.
    pub fn new(nucleotides: Vec<Nucleotide>) -> Self {
        let distribution = count(nucleotides.iter().map(Nucleotide::base));
        let quality_distribution = count(nucleotides.iter().map(Nucleotide::quality));
        log::trace!("Built sequence of {} nucleotides", nucleotides.len());
        Self {
            remembered_len: nucleotides.len(),
            nucleotides,
            distribution,
            quality_distribution,
        }
    }

    /// Records the current length if it differs from the remembered one.
    ///
    /// Returns true when the stored counts no longer match the length.
    fn take_length_change(&mut self) -> bool {
        let current = self.nucleotides.len();
        if current == self.remembered_len {
            return false;
        }
        log::debug!(
            "Length changed from {} to {}, recomputing counts",
            self.remembered_len,
            current
        );
        self.remembered_len = current;
        true
    }

    /// Builds `length` random nucleotides at positions `0..length`.
    ///
    /// Only A, C, G and T are drawn; qualities are uniform over the valid range.
    pub fn random_sequence<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Self {
        let nucleotides = (0..length)
            .map(|i| Nucleotide::random_nucleotide(i, rng))
            .collect();
        Self::new(nucleotides)
    }

    /// Builds a sequence from `(base, quality)` pairs, numbering positions
    /// from zero.
    pub fn from_bases(bases: &[(Nucleobase, u8)]) -> SequenceResult<Self> {
        let nucleotides = bases
            .iter()
            .enumerate()
            .map(|(i, &(base, quality))| Nucleotide::new(base, i, quality))
            .collect::<SequenceResult<Vec<_>>>()?;
        Ok(Self::new(nucleotides))
    }

    /// Parses a string of base symbols (case-insensitive).
    ///
    /// Every nucleotide gets the minimum quality. The first invalid
    /// character aborts the whole parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use nucleoseq::sequence::NucleotideSequence;
    ///
    /// let seq = NucleotideSequence::from_string("acgu").unwrap();
    /// assert_eq!(seq.to_string(), "ACGU");
    /// assert!(NucleotideSequence::from_string("ACNG").is_err());
    /// ```
    pub fn from_string(s: &str) -> SequenceResult<Self> {
        let nucleotides = s
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let mut nucleotide = Nucleotide::from_char(c)?;
                nucleotide.set_position(i);
                Ok(nucleotide)
            })
            .collect::<SequenceResult<Vec<_>>>()?;
        Ok(Self::new(nucleotides))
    }

    /// Returns a new sequence with every base complemented.
    ///
    /// Positions and qualities are kept.
    pub fn complementary_sequence(&self) -> Self {
        Self::new(self.nucleotides.iter().map(Nucleotide::complement).collect())
    }

    /// Returns the count of each base.
    ///
    /// Fresh counts are returned (not stored) when the length changed since
    /// the last check; otherwise the stored counts are borrowed.
    pub fn distribution(&mut self) -> SequenceResult<Cow<'_, BaseDistribution>> {
        if self.nucleotides.is_empty() {
            return Err(SequenceError::EmptySequence);
        }
        if self.take_length_change() {
            return Ok(Cow::Owned(count(self.nucleotides.iter().map(Nucleotide::base))));
        }
        Ok(Cow::Borrowed(&self.distribution))
    }

    /// Returns the count of each quality score, with the same length check
    /// as [`NucleotideSequence::distribution`].
    pub fn quality_distribution(&mut self) -> SequenceResult<Cow<'_, QualityDistribution>> {
        if self.nucleotides.is_empty() {
            return Err(SequenceError::EmptySequence);
        }
        if self.take_length_change() {
            return Ok(Cow::Owned(count(self.nucleotides.iter().map(Nucleotide::quality))));
        }
        Ok(Cow::Borrowed(&self.quality_distribution))
    }

    /// Returns the share of each base, in percent of the current length.
    ///
    /// Reads the cached base counts without refreshing them. An empty
    /// sequence yields an empty list.
    pub fn percentages(&self) -> Vec<(Nucleobase, f64)> {
        let total = self.nucleotides.len();
        if total == 0 {
            return Vec::new();
        }
        self.distribution
            .iter()
            .map(|(&base, &count)| (base, count as f64 / total as f64 * 100.0))
            .collect()
    }

    /// Renders the FASTQ body: bases, a `+` line, then quality characters.
    pub fn fastq(&self) -> String {
        fastq::fastq_body(self)
    }

    /// Writes the base string followed by a newline.
    pub fn write_nucleobases<W: Write>(&self, writer: &mut W) -> SequenceResult<()> {
        if self.nucleotides.is_empty() {
            return Err(SequenceError::EmptySequence);
        }
        writeln!(writer, "{}", self)?;
        Ok(())
    }

    /// Prints the base string to standard output.
    pub fn print_nucleobases(&self) -> SequenceResult<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_nucleobases(&mut handle)
    }

    pub fn len(&self) -> usize {
        self.nucleotides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nucleotides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Nucleotide> {
        self.nucleotides.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Nucleotide> {
        self.nucleotides.iter()
    }

    pub fn contains(&self, nucleotide: &Nucleotide) -> bool {
        self.nucleotides.contains(nucleotide)
    }

    pub fn nucleotides(&self) -> &[Nucleotide] {
        &self.nucleotides
    }

    /// Gives direct access to the backing list.
    ///
    /// Stored counts are not updated here. The next distribution read
    /// returns fresh counts only if the length changed.
    pub fn nucleotides_mut(&mut self) -> &mut Vec<Nucleotide> {
        &mut self.nucleotides
    }

    /// Appends a nucleotide without touching the cached counts.
    pub fn push(&mut self, nucleotide: Nucleotide) {
        self.nucleotides.push(nucleotide);
    }

    /// Removes the last nucleotide without touching the cached counts.
    pub fn pop(&mut self) -> Option<Nucleotide> {
        self.nucleotides.pop()
    }
}

impl FromStr for NucleotideSequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl From<Vec<Nucleotide>> for NucleotideSequence {
    fn from(nucleotides: Vec<Nucleotide>) -> Self {
        Self::new(nucleotides)
    }
}

impl PartialEq for NucleotideSequence {
    fn eq(&self, other: &Self) -> bool {
        self.nucleotides == other.nucleotides
    }
}

impl Eq for NucleotideSequence {}

impl Hash for NucleotideSequence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.nucleotides.hash(state);
    }
}

impl Index<usize> for NucleotideSequence {
    type Output = Nucleotide;

    fn index(&self, index: usize) -> &Nucleotide {
        &self.nucleotides[index]
    }
}

impl<'a> IntoIterator for &'a NucleotideSequence {
    type Item = &'a Nucleotide;
    type IntoIter = std::slice::Iter<'a, Nucleotide>;

    fn into_iter(self) -> Self::IntoIter {
        self.nucleotides.iter()
    }
}

impl IntoIterator for NucleotideSequence {
    type Item = Nucleotide;
    type IntoIter = std::vec::IntoIter<Nucleotide>;

    fn into_iter(self) -> Self::IntoIter {
        self.nucleotides.into_iter()
    }
}

impl fmt::Display for NucleotideSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for nucleotide in &self.nucleotides {
            write!(f, "{}", nucleotide.base())?;
        }
        Ok(())
    }
}
