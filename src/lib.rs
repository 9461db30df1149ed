use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The genetic encoding carried by an individual.
/// Must know how to write itself into, and read itself back from, an archive.
pub trait Representation: Clone + Default + Serialize + for<'de> Deserialize<'de> {}

/// A comparable measure of quality with a distinguished "null" state
/// meaning the individual has not been evaluated yet.
pub trait Fitness: Clone + PartialOrd + Serialize + for<'de> Deserialize<'de> {
    fn is_null(&self) -> bool;
    fn nullify(&mut self);

    /// Construct a value already in the null state.
    fn null() -> Self;

    /// Write a non-null value as the `fitness` payload of an archive.
    /// Defaults to the type's own `Serialize`.
    fn serialize_payload<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serialize(serializer)
    }

    fn deserialize_payload<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::deserialize(deserializer)
    }
}

pub mod archive;
pub mod error;
pub mod fitness;
pub mod individual;
pub mod meta_data;
mod real;

pub mod representations {
    pub mod numeric_vector;
}

pub use archive::ArchiveOptions;
pub use error::{ArchiveError, GenomeError};
pub use fitness::FitnessScalar;
pub use individual::Individual;
pub use meta_data::{MetaData, MetaValue};
pub use representations::numeric_vector::{
    Bitstring, Codon, Intstring, NumericVector, Realstring,
};
