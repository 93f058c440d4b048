//! Lenient Integer Fields
//!
//! Ordering keys are typed by hand in the Firestore console, so the same
//! field may arrive as an integer, a double or a numeric string.

use std::fmt;

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::Serializer;
use serde_with::{DeserializeAs, SerializeAs};

/// `serde_with` adapter: accepts `3`, `3.0` or `"3"` as `3_i64`
///
/// Fractional and non-finite doubles are rejected rather than truncated.
pub struct IntegralNumber;

fn integral(v: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    let in_range = v >= i64::MIN as f64 && v < i64::MAX as f64;
    (v.is_finite() && v.fract() == 0.0 && in_range).then_some(v as i64)
}

struct IntegralVisitor;

impl<'de> Visitor<'de> for IntegralVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer, a whole-number double or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
        integral(v).ok_or_else(|| E::invalid_value(Unexpected::Float(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
        let trimmed = v.trim();
        trimmed
            .parse::<i64>()
            .ok()
            .or_else(|| trimmed.parse::<f64>().ok().and_then(integral))
            .ok_or_else(|| E::invalid_value(Unexpected::Str(v), &self))
    }
}

impl<'de> DeserializeAs<'de, i64> for IntegralNumber {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        deserializer.deserialize_any(IntegralVisitor)
    }
}

impl SerializeAs<i64> for IntegralNumber {
    fn serialize_as<S: Serializer>(source: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(*source)
    }
}
