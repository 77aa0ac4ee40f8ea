//! Serde helpers for `f64` fields in JSON output.
//!
//! JSON has no representation for infinities or NaN and `serde_json` writes
//! them as `null`. These helpers write finite values as numbers and
//! non-finite ones as the strings `"inf"`, `"-inf"` and `"NaN"`.

use serde::Serializer;

pub fn serialize_f64<S>(v: &f64, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if v.is_finite() {
        s.serialize_f64(*v)
    } else {
        s.serialize_str(&v.to_string())
    }
}
