//! The five nucleobases found in DNA and RNA.
//!
//! `Nucleobase` is a closed set: A, C, G and T for DNA, plus U for RNA.
//! Complementing U yields A, but A complements to T, so applying the
//! complement twice to U gives T rather than U.

use std::fmt;

use rand::Rng;

use crate::error::{SequenceError, SequenceResult};

/// A single nucleobase symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nucleobase {
    A,
    C,
    G,
    T,
    U,
}

/// Every valid nucleobase, in symbol order.
pub const ALL_BASES: [Nucleobase; 5] = [
    Nucleobase::A,
    Nucleobase::C,
    Nucleobase::G,
    Nucleobase::T,
    Nucleobase::U,
];

/// Bases drawn by [`Nucleobase::random_base`]. Uracil is never sampled.
pub const DNA_BASES: [Nucleobase; 4] = [
    Nucleobase::A,
    Nucleobase::C,
    Nucleobase::G,
    Nucleobase::T,
];

impl Nucleobase {
    /// Parses a base from a single character, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use nucleoseq::nucleobase::Nucleobase;
    ///
    /// assert_eq!(Nucleobase::from_char('g').unwrap(), Nucleobase::G);
    /// assert!(Nucleobase::from_char('N').is_err());
    /// ```
    pub fn from_char(c: char) -> SequenceResult<Self> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Self::A),
            'C' => Ok(Self::C),
            'G' => Ok(Self::G),
            'T' => Ok(Self::T),
            'U' => Ok(Self::U),
            _ => Err(SequenceError::InvalidBase(c)),
        }
    }

    /// Returns the uppercase symbol of this base.
    pub const fn symbol(self) -> char {
        match self {
            Self::A => 'A',
            Self::C => 'C',
            Self::G => 'G',
            Self::T => 'T',
            Self::U => 'U',
        }
    }

    /// Returns the chemical name of this base.
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "Adenine",
            Self::C => "Cytosine",
            Self::G => "Guanine",
            Self::T => "Thymine",
            Self::U => "Uracil",
        }
    }

    /// Returns the pairing partner of this base (A <-> T, C <-> G, U -> A).
    pub const fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::C => Self::G,
            Self::G => Self::C,
            Self::U => Self::A,
        }
    }

    /// Draws a base uniformly from A, C, G and T.
    pub fn random_base<R: Rng + ?Sized>(rng: &mut R) -> Self {
        DNA_BASES[rng.random_range(0..DNA_BASES.len())]
    }
}

impl TryFrom<char> for Nucleobase {
    type Error = SequenceError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c)
    }
}

impl TryFrom<u8> for Nucleobase {
    type Error = SequenceError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_char(byte as char)
    }
}

impl From<Nucleobase> for char {
    fn from(base: Nucleobase) -> char {
        base.symbol()
    }
}

impl fmt::Display for Nucleobase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_from_char_valid() {
        for (c, base) in "ACGTU".chars().zip(ALL_BASES) {
            assert_eq!(Nucleobase::from_char(c).unwrap(), base);
            assert_eq!(Nucleobase::from_char(c.to_ascii_lowercase()).unwrap(), base);
        }
    }

    #[test]
    fn test_from_char_invalid() {
        for c in ['N', 'n', 'X', '5', ' ', '-', '>', 'é'] {
            assert!(matches!(
                Nucleobase::from_char(c),
                Err(SequenceError::InvalidBase(bad)) if bad == c
            ));
        }
    }

    #[test]
    fn test_try_from_byte() {
        assert_eq!(Nucleobase::try_from(b'u').unwrap(), Nucleobase::U);
        assert!(Nucleobase::try_from(b'*').is_err());
    }

    #[test]
    fn test_names() {
        assert_eq!(Nucleobase::A.name(), "Adenine");
        assert_eq!(Nucleobase::C.name(), "Cytosine");
        assert_eq!(Nucleobase::G.name(), "Guanine");
        assert_eq!(Nucleobase::T.name(), "Thymine");
        assert_eq!(Nucleobase::U.name(), "Uracil");
    }

    #[test]
    fn test_complement() {
        assert_eq!(Nucleobase::A.complement(), Nucleobase::T);
        assert_eq!(Nucleobase::T.complement(), Nucleobase::A);
        assert_eq!(Nucleobase::C.complement(), Nucleobase::G);
        assert_eq!(Nucleobase::G.complement(), Nucleobase::C);
        assert_eq!(Nucleobase::U.complement(), Nucleobase::A);

        // Involutive for DNA bases only
        for base in DNA_BASES {
            assert_eq!(base.complement().complement(), base);
        }
        assert_eq!(Nucleobase::U.complement().complement(), Nucleobase::T);
    }

    #[test]
    fn test_random_base_excludes_uracil() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..2_000 {
            let base = Nucleobase::random_base(&mut rng);
            assert_ne!(base, Nucleobase::U);
            let idx = DNA_BASES.iter().position(|&b| b == base).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_display() {
        let s: String = ALL_BASES.iter().map(|b| b.to_string()).collect();
        assert_eq!(s, "ACGTU");
        assert_eq!(char::from(Nucleobase::G), 'G');
    }
}
