//! The unit value of an evolutionary computation.
//!
//! An [`Individual`] is three things:
//! 1. a container for a representation,
//! 2. a container for a fitness,
//! 3. a container for metadata (location, lineage, ...).
//!
//! It also carries an identity (`name`) and two lineage markers
//! (`generation` and the `update` at which it was born).
//!
//! # Archive layout
//!
//! Individuals serialize their fields in a fixed order, and the order is part
//! of the format:
//!
//! | tag              | content                                   |
//! |------------------|-------------------------------------------|
//! | `name`           | integer                                   |
//! | `generation`     | float                                     |
//! | `null_fitness`   | bool                                      |
//! | `fitness`        | only present when `null_fitness` is false |
//! | `representation` | the representation's own encoding         |
//! | `meta_data`      | key/value map                             |
//! | `update`         | integer                                   |
//!
//! Unevaluated fitness is often NaN, which text archives cannot round-trip,
//! so a null fitness is written as a flag and nothing else. Other non-finite
//! floats (an infinite fitness or `generation`) are written as the strings
//! `"inf"`, `"-inf"` or `"NaN"`.
//!
//! # Example
//!
//! ```rust
//! use symbios_archive::{Individual, Realstring};
//!
//! let mut ind: Individual<Realstring, f64> = Individual::new(vec![1.0, 2.5].into());
//! assert!(!ind.is_evaluated());
//!
//! ind.set_fitness(0.75);
//! *ind.name_mut() = 7;
//! ind.md_mut().put("location", 3);
//!
//! let json = serde_json::to_string(&ind).unwrap();
//! let back: Individual<Realstring, f64> = serde_json::from_str(&json).unwrap();
//! assert_eq!(back, ind);
//! ```

use crate::meta_data::MetaData;
use crate::real::Real;
use crate::{Fitness, Representation};
use serde::de::{self, DeserializeSeed, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

const FIELDS: &[&str] = &[
    "name",
    "generation",
    "null_fitness",
    "fitness",
    "representation",
    "meta_data",
    "update",
];

/// A representation, its fitness, and its metadata.
///
/// # Type Parameters
///
/// * `R` - The genetic encoding, must implement [`Representation`]
/// * `F` - The fitness value, must implement [`Fitness`]
///
/// # Value semantics
///
/// Every field is owned. `clone()` produces a fully independent individual;
/// there is no shared storage between copies.
///
/// # Ordering
///
/// `a < b` exactly when `a.fitness() < b.fitness()`. No other field takes part,
/// and null fitness compares however `F` says it does. Equality (`==`) on the
/// other hand is structural over every field, so two individuals with equal
/// fitness compare as `Ordering::Equal` without being `==`.
#[derive(Clone, Debug, PartialEq)]
pub struct Individual<R: Representation, F: Fitness> {
    name: i64,
    generation: f64,
    update: i64,
    fitness: F,
    repr: R,
    md: MetaData,
}

impl<R: Representation, F: Fitness> Default for Individual<R, F> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R: Representation, F: Fitness> Individual<R, F> {
    /// Builds an unevaluated individual around `repr`.
    pub fn new(repr: R) -> Self {
        Self {
            name: 0,
            generation: 0.0,
            update: 0,
            fitness: F::null(),
            repr,
            md: MetaData::new(),
        }
    }

    /// An individual with every field defaulted and a null fitness.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Name (id number) of this individual. Uniqueness is up to the caller.
    pub fn name(&self) -> i64 {
        self.name
    }

    pub fn name_mut(&mut self) -> &mut i64 {
        &mut self.name
    }

    pub fn generation(&self) -> f64 {
        self.generation
    }

    pub fn generation_mut(&mut self) -> &mut f64 {
        &mut self.generation
    }

    /// Update at which this individual was born.
    pub fn update(&self) -> i64 {
        self.update
    }

    pub fn update_mut(&mut self) -> &mut i64 {
        &mut self.update
    }

    pub fn fitness(&self) -> &F {
        &self.fitness
    }

    pub fn fitness_mut(&mut self) -> &mut F {
        &mut self.fitness
    }

    pub fn set_fitness(&mut self, fitness: F) {
        self.fitness = fitness;
    }

    /// True once the fitness has left its null state.
    pub fn is_evaluated(&self) -> bool {
        !self.fitness.is_null()
    }

    pub fn into_fitness(self) -> F {
        self.fitness
    }

    pub fn repr(&self) -> &R {
        &self.repr
    }

    pub fn repr_mut(&mut self) -> &mut R {
        &mut self.repr
    }

    pub fn into_repr(self) -> R {
        self.repr
    }

    pub fn md(&self) -> &MetaData {
        &self.md
    }

    pub fn md_mut(&mut self) -> &mut MetaData {
        &mut self.md
    }
}

impl<R: Representation, F: Fitness> AsRef<F> for Individual<R, F> {
    fn as_ref(&self) -> &F {
        &self.fitness
    }
}

impl<R, F> PartialOrd for Individual<R, F>
where
    R: Representation + PartialEq,
    F: Fitness,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.fitness.partial_cmp(&other.fitness)
    }

    fn lt(&self, other: &Self) -> bool {
        self.fitness < other.fitness
    }

    fn le(&self, other: &Self) -> bool {
        self.fitness <= other.fitness
    }

    fn gt(&self, other: &Self) -> bool {
        self.fitness > other.fitness
    }

    fn ge(&self, other: &Self) -> bool {
        self.fitness >= other.fitness
    }
}

impl<R: Representation, F: Fitness> Serialize for Individual<R, F> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let null_fitness = self.fitness.is_null();
        let len = if null_fitness { 6 } else { 7 };
        let mut state = serializer.serialize_struct("Individual", len)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("generation", &Real(self.generation))?;
        state.serialize_field("null_fitness", &null_fitness)?;
        if null_fitness {
            state.skip_field("fitness")?;
        } else {
            state.serialize_field("fitness", &Payload(&self.fitness))?;
        }
        state.serialize_field("representation", &self.repr)?;
        state.serialize_field("meta_data", &self.md)?;
        state.serialize_field("update", &self.update)?;
        state.end()
    }
}

impl<'de, R: Representation, F: Fitness> Deserialize<'de> for Individual<R, F> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct("Individual", FIELDS, IndividualVisitor(PhantomData))
    }
}

/// Routes a non-null fitness through [`Fitness::serialize_payload`].
struct Payload<'a, F>(&'a F);

impl<F: Fitness> Serialize for Payload<'_, F> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize_payload(serializer)
    }
}

struct PayloadSeed<F>(PhantomData<F>);

impl<'de, F: Fitness> DeserializeSeed<'de> for PayloadSeed<F> {
    type Value = F;

    fn deserialize<D>(self, deserializer: D) -> Result<F, D::Error>
    where
        D: Deserializer<'de>,
    {
        F::deserialize_payload(deserializer)
    }
}

struct IndividualVisitor<R, F>(PhantomData<(R, F)>);

/// Reads the next key of a map and requires it to be `tag`.
fn expect_tag<'de, A>(map: &mut A, tag: &'static str) -> Result<(), A::Error>
where
    A: MapAccess<'de>,
{
    match map.next_key::<String>()? {
        Some(key) if key == tag => Ok(()),
        Some(key) => Err(de::Error::custom(format_args!(
            "expected tag `{tag}`, found `{key}`"
        ))),
        None => Err(de::Error::missing_field(tag)),
    }
}

impl<'de, R: Representation, F: Fitness> Visitor<'de> for IndividualVisitor<R, F> {
    type Value = Individual<R, F>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an individual")
    }

    // Self-describing formats: tags must appear in archive order.
    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        expect_tag(&mut map, "name")?;
        let name: i64 = map.next_value()?;
        expect_tag(&mut map, "generation")?;
        let Real(generation) = map.next_value()?;
        expect_tag(&mut map, "null_fitness")?;
        let null_fitness: bool = map.next_value()?;
        let fitness = if null_fitness {
            F::null()
        } else {
            expect_tag(&mut map, "fitness")?;
            map.next_value_seed(PayloadSeed(PhantomData))?
        };
        expect_tag(&mut map, "representation")?;
        let repr: R = map.next_value()?;
        expect_tag(&mut map, "meta_data")?;
        let md: MetaData = map.next_value()?;
        expect_tag(&mut map, "update")?;
        let update: i64 = map.next_value()?;

        if let Some(key) = map.next_key::<String>()? {
            return Err(de::Error::unknown_field(&key, FIELDS));
        }

        Ok(Individual {
            name,
            generation,
            update,
            fitness,
            repr,
            md,
        })
    }

    // Positional formats: the fitness slot is only present when the flag is false.
    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let name: i64 = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let Real(generation) = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        let null_fitness: bool = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(2, &self))?;
        let (fitness, at) = if null_fitness {
            (F::null(), 3)
        } else {
            let fitness = seq
                .next_element_seed(PayloadSeed::<F>(PhantomData))?
                .ok_or_else(|| de::Error::invalid_length(3, &self))?;
            (fitness, 4)
        };
        let repr: R = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(at, &self))?;
        let md: MetaData = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(at + 1, &self))?;
        let update: i64 = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(at + 2, &self))?;

        Ok(Individual {
            name,
            generation,
            update,
            fitness,
            repr,
            md,
        })
    }
}
