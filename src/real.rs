//! Archive encoding for floating point fields.
//!
//! JSON has no spelling for infinities or NaN; `serde_json` quietly writes them
//! as `null` and then refuses to read them back. In human-readable formats a
//! non-finite value is therefore written as the string Rust itself prints for
//! it (`"inf"`, `"-inf"`, `"NaN"`), and every finite value stays a plain number.
//! Binary formats get the raw `f64`.
//!
//! NaN payload bits are not preserved, only NaN-ness.

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An `f64` with a lossless archive form.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub(crate) struct Real(pub(crate) f64);

impl Serialize for Real {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() && !self.0.is_finite() {
            serializer.collect_str(&self.0)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

struct RealVisitor;

impl Visitor<'_> for RealVisitor {
    type Value = Real;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(r#"a number or one of "inf", "-inf", "NaN""#)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Real, E> {
        Ok(Real(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Real, E> {
        Ok(Real(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Real, E> {
        Ok(Real(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Real, E> {
        match v.parse::<f64>() {
            Ok(parsed) if !parsed.is_finite() => Ok(Real(parsed)),
            _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for Real {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(RealVisitor)
        } else {
            deserializer.deserialize_f64(RealVisitor)
        }
    }
}

/// `#[serde(with = "crate::real")]` adapter for plain `f64` fields.
pub(crate) fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    Real(*value).serialize(serializer)
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Real::deserialize(deserializer).map(|r| r.0)
}
