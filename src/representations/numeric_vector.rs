//! Canonical numeric representation for genetic algorithms.
//!
//! A [`NumericVector`] is an ordered sequence of codons whose order is the
//! gene order. In an archive it does not write one field per gene; the whole
//! genome is packed into a single whitespace-delimited string under the tag
//! `genome`:
//!
//! ```text
//! <count> <v0> <v1> ... <v(count-1)>
//! ```
//!
//! Genomes are often large and archives are written many times per run, so the
//! compact form keeps checkpoints small and fast to parse.
//!
//! # Example
//!
//! ```rust
//! use symbios_archive::Intstring;
//!
//! let genome = Intstring::from(vec![3, -1, 0, 42]);
//! assert_eq!(genome.encode_genome(), "4 3 -1 0 42");
//!
//! let back = Intstring::decode_genome("4 3 -1 0 42").unwrap();
//! assert_eq!(back, genome);
//! ```

use crate::Representation;
use crate::error::GenomeError;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

/// Element type of a [`NumericVector`]: anything with a canonical one-token
/// text form that `FromStr` reads back exactly.
pub trait Codon: Clone + FromStr {
    /// Append this codon's token to `out`. Must not emit whitespace or a leading `+`.
    fn write_codon(&self, out: &mut String);
}

macro_rules! integer_codon {
    ($($t:ty),*) => {
        $(impl Codon for $t {
            fn write_codon(&self, out: &mut String) {
                // Writing into a String cannot fail
                let _ = write!(out, "{self}");
            }
        })*
    };
}

integer_codon!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! real_codon {
    ($($t:ty),*) => {
        $(impl Codon for $t {
            /// Shortest round-tripping digits; very small or very large
            /// magnitudes switch to exponent form (`5e-324`, `1.7976931348623157e308`).
            fn write_codon(&self, out: &mut String) {
                let magnitude = self.abs();
                let _ = if magnitude != 0.0
                    && magnitude.is_finite()
                    && !(1e-5..1e16).contains(&magnitude)
                {
                    write!(out, "{self:e}")
                } else {
                    write!(out, "{self}")
                };
            }
        })*
    };
}

real_codon!(f32, f64);

/// Signed tokens are only ever written with `-`; `FromStr` would also take `+`.
fn parse_token<T: FromStr>(token: &str) -> Option<T> {
    if token.starts_with('+') {
        None
    } else {
        token.parse().ok()
    }
}

/// Archive shape of a numeric vector: a single string field.
#[derive(Serialize, Deserialize)]
#[serde(rename = "NumericVector", deny_unknown_fields)]
struct GenomeField {
    genome: String,
}

/// Ordered, resizable sequence of numeric codons.
///
/// Dereferences to `Vec<T>`, so indexing, iteration, `push`, `len`, `resize`
/// and friends are all available directly.
#[derive(Clone, Debug, PartialEq)]
pub struct NumericVector<T> {
    codons: Vec<T>,
}

impl<T> Default for NumericVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Bitstring representation; codons are expected to be 0 or 1 but are stored as integers.
pub type Bitstring = NumericVector<i32>;

/// Integer-string representation.
pub type Intstring = NumericVector<i32>;

/// Real-string representation.
pub type Realstring = NumericVector<f64>;

impl<T> NumericVector<T> {
    pub fn new() -> Self {
        Self { codons: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<T> {
        self.codons
    }
}

impl<T: Clone + Default> NumericVector<T> {
    /// Pre-sized genome of `len` default-valued codons.
    pub fn with_len(len: usize) -> Self {
        Self {
            codons: vec![T::default(); len],
        }
    }
}

impl<T: Codon> NumericVector<T> {
    /// Render the genome token stream: the codon count followed by each codon.
    pub fn encode_genome(&self) -> String {
        let mut out = self.codons.len().to_string();
        for codon in &self.codons {
            out.push(' ');
            codon.write_codon(&mut out);
        }
        out
    }

    /// Parse a genome token stream produced by [`encode_genome`](Self::encode_genome).
    ///
    /// The stream must hold exactly as many codons as its leading count
    /// declares; anything else is rejected rather than truncated or padded.
    /// Tokens with a leading `+` are rejected since the encoder never writes them.
    pub fn decode_genome(genome: &str) -> Result<Self, GenomeError> {
        let mut tokens = genome.split_whitespace();
        let count_token = tokens.next().ok_or(GenomeError::MissingCount)?;
        let declared: usize =
            parse_token(count_token).ok_or_else(|| GenomeError::InvalidCount {
                token: count_token.to_owned(),
            })?;

        let rest: Vec<&str> = tokens.collect();
        if rest.len() != declared {
            return Err(GenomeError::CountMismatch {
                declared,
                found: rest.len(),
            });
        }

        let mut codons = Vec::with_capacity(declared);
        for (index, token) in rest.into_iter().enumerate() {
            let codon = parse_token(token).ok_or_else(|| GenomeError::InvalidCodon {
                index,
                token: token.to_owned(),
            })?;
            codons.push(codon);
        }
        log::trace!("decoded genome of {declared} codons");
        Ok(Self { codons })
    }
}

impl<T> Deref for NumericVector<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.codons
    }
}

impl<T> DerefMut for NumericVector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.codons
    }
}

impl<T> From<Vec<T>> for NumericVector<T> {
    fn from(codons: Vec<T>) -> Self {
        Self { codons }
    }
}

impl<T> FromIterator<T> for NumericVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            codons: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for NumericVector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.codons.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NumericVector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.codons.iter()
    }
}

impl<T: Codon> Serialize for NumericVector<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        GenomeField {
            genome: self.encode_genome(),
        }
        .serialize(serializer)
    }
}

impl<'de, T: Codon> Deserialize<'de> for NumericVector<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let field = GenomeField::deserialize(deserializer)?;
        Self::decode_genome(&field.genome).map_err(de::Error::custom)
    }
}

impl<T: Codon> Representation for NumericVector<T> {}
