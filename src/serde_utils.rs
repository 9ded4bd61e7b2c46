//! Serde helpers for expense payloads coming from the front end.
//!
//! Amounts arrive either as JSON numbers (`100`, `12.5`) or as formatted
//! strings (`"12,50"`). Ids are opaque and may be numbers or strings.

use serde::{Deserialize, Deserializer, Serializer};

use crate::money::{cents_from_f64, format_cents, parse_amount_cents};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Int(i64),
    Float(f64),
    Text(String),
}

pub fn deserialize_amount_cents<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Int(v) => v
            .checked_mul(100)
            .ok_or_else(|| serde::de::Error::custom(format!("amount out of range: {}", v))),
        NumberOrString::Float(v) => cents_from_f64(v)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid amount: {}", v))),
        NumberOrString::Text(s) => parse_amount_cents(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid amount: '{}'", s))),
    }
}

/// Writes cents back as a decimal string so the output reads back unchanged.
pub fn serialize_amount_cents<S>(cents: &i64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_cents(*cents))
}

pub fn deserialize_opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<NumberOrString> = Option::deserialize(deserializer)?;
    Ok(match value {
        None => String::new(),
        Some(NumberOrString::Int(v)) => v.to_string(),
        Some(NumberOrString::Float(v)) => v.to_string(),
        Some(NumberOrString::Text(s)) => s,
    })
}
