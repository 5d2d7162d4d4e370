//! Printable composition summary of a sequence.

use std::fmt;

use crate::error::SequenceResult;
use crate::nucleobase::Nucleobase;
use crate::sequence::{BaseDistribution, NucleotideSequence, QualityDistribution};

/// Base counts, base percentages and quality counts of one sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceReport {
    pub length: usize,
    pub distribution: BaseDistribution,
    pub percentages: Vec<(Nucleobase, f64)>,
    pub quality_distribution: QualityDistribution,
}

impl SequenceReport {
    /// Collects the statistics of `sequence` through its distribution getters.
    pub fn from_sequence(sequence: &mut NucleotideSequence) -> SequenceResult<Self> {
        let distribution = sequence.distribution()?.into_owned();
        let quality_distribution = sequence.quality_distribution()?.into_owned();
        Ok(Self {
            length: sequence.len(),
            distribution,
            percentages: sequence.percentages(),
            quality_distribution,
        })
    }

    /// Returns the most frequent quality score, the lowest one on ties.
    pub fn modal_quality(&self) -> Option<u8> {
        self.quality_distribution
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
            .map(|(&q, _)| q)
    }
}

impl fmt::Display for SequenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Length: {}", self.length)?;

        writeln!(f, "Base distribution:")?;
        for (base, count) in &self.distribution {
            writeln!(f, "  {} ({:<8}) {}", base, base.name(), count)?;
        }

        writeln!(f, "Base percentages:")?;
        for (base, pct) in &self.percentages {
            writeln!(f, "  {} ({:<8}) {:.2}%", base, base.name(), pct)?;
        }

        writeln!(f, "Quality distribution:")?;
        for (quality, count) in &self.quality_distribution {
            writeln!(f, "  {:>3} '{}' {}", quality, *quality as char, count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SequenceError;
    use crate::nucleobase::Nucleobase::{A, C, G, T};

    #[test]
    fn test_report_values() {
        let mut seq = NucleotideSequence::from_bases(&[(A, 40), (A, 40), (G, 50), (T, 40)]).unwrap();
        let report = SequenceReport::from_sequence(&mut seq).unwrap();

        assert_eq!(report.length, 4);
        assert_eq!(report.distribution[&A], 2);
        assert_eq!(report.distribution.get(&C), None);
        assert_eq!(report.percentages, vec![(A, 50.0), (G, 25.0), (T, 25.0)]);
        assert_eq!(report.quality_distribution[&40], 3);
        assert_eq!(report.modal_quality(), Some(40));
    }

    #[test]
    fn test_modal_quality_tie_takes_lowest() {
        let mut seq = NucleotideSequence::from_bases(&[(A, 90), (C, 35)]).unwrap();
        let report = SequenceReport::from_sequence(&mut seq).unwrap();
        assert_eq!(report.modal_quality(), Some(35));
    }

    #[test]
    fn test_report_empty() {
        let mut seq = NucleotideSequence::new(Vec::new());
        assert!(matches!(
            SequenceReport::from_sequence(&mut seq),
            Err(SequenceError::EmptySequence)
        ));
    }

    #[test]
    fn test_report_display() {
        let mut seq = NucleotideSequence::from_string("AATT").unwrap();
        let text = SequenceReport::from_sequence(&mut seq).unwrap().to_string();

        assert!(text.starts_with("Length: 4\n"));
        assert!(text.contains("  A (Adenine ) 2\n"));
        assert!(text.contains("  T (Thymine ) 50.00%\n"));
        assert!(text.contains("   33 '!' 4\n"));
    }
}
