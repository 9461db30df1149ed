//! [`Fitness`] implementations for the common scalar cases.
//!
//! Floating point fitness uses NaN as its null state. Since NaN cannot be
//! written to most text archives, individuals never serialize a null fitness
//! directly; see [`Individual`](crate::Individual) for the flag that replaces it.
//! Infinite fitness is an ordinary evaluated value and is archived as
//! `"inf"` / `"-inf"`.

use crate::Fitness;
use crate::real::Real;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Plain values that can sit inside an `Option<T>` fitness.
pub trait FitnessScalar: Clone + PartialOrd + Serialize + for<'de> Deserialize<'de> {
    fn serialize_scalar<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serialize(serializer)
    }

    fn deserialize_scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::deserialize(deserializer)
    }
}

macro_rules! integer_scalar {
    ($($t:ty),*) => {
        $(impl FitnessScalar for $t {})*
    };
}

integer_scalar!(i8, i16, i32, i64, u8, u16, u32, u64);

impl FitnessScalar for f64 {
    fn serialize_scalar<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Real(*self).serialize(serializer)
    }

    fn deserialize_scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Real::deserialize(deserializer).map(|r| r.0)
    }
}

impl FitnessScalar for f32 {
    fn serialize_scalar<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() && !self.is_finite() {
            serializer.collect_str(self)
        } else {
            serializer.serialize_f32(*self)
        }
    }

    fn deserialize_scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            Real::deserialize(deserializer).map(|r| r.0 as f32)
        } else {
            f32::deserialize(deserializer)
        }
    }
}

impl Fitness for f64 {
    fn is_null(&self) -> bool {
        self.is_nan()
    }

    fn nullify(&mut self) {
        *self = f64::NAN;
    }

    fn null() -> Self {
        f64::NAN
    }

    fn serialize_payload<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serialize_scalar(serializer)
    }

    fn deserialize_payload<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::deserialize_scalar(deserializer)
    }
}

impl Fitness for f32 {
    fn is_null(&self) -> bool {
        self.is_nan()
    }

    fn nullify(&mut self) {
        *self = f32::NAN;
    }

    fn null() -> Self {
        f32::NAN
    }

    fn serialize_payload<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serialize_scalar(serializer)
    }

    fn deserialize_payload<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::deserialize_scalar(deserializer)
    }
}

/// `None` is the null state. Unlike NaN, `None` sorts below every evaluated value.
/// The payload of `Some(v)` is `v` alone.
impl<T: FitnessScalar> Fitness for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }

    fn nullify(&mut self) {
        *self = None;
    }

    fn null() -> Self {
        None
    }

    fn serialize_payload<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Some(v) => v.serialize_scalar(serializer),
            None => serializer.serialize_none(),
        }
    }

    fn deserialize_payload<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize_scalar(deserializer).map(Some)
    }
}
