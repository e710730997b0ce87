use serde::{de::IgnoredAny, Deserialize, Deserializer};

pub mod book;
pub mod edition;
pub mod id;
pub mod isbn;
pub mod rating;
pub mod review;

/// Shown in place of a missing or empty value.
pub const PLACEHOLDER: &str = "-";

pub(crate) fn or_placeholder(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Any JSON value, with numbers and strings told apart from the rest.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Numbers and strings as text; anything else as `None`.
pub(crate) fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Scalar::deserialize(d)? {
        Scalar::Integer(n) => Some(n.to_string()),
        Scalar::Float(n) => Some(n.to_string()),
        Scalar::Text(s) => Some(s),
        Scalar::Other(_) => None,
    })
}

/// Non-negative whole numbers, also when sent as text; anything else as `None`.
pub(crate) fn lenient_count<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
    Ok(match Scalar::deserialize(d)? {
        Scalar::Integer(n) => u32::try_from(n).ok(),
        Scalar::Float(n) if n.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&n) => {
            Some(n as u32)
        }
        Scalar::Text(s) => s.trim().parse().ok(),
        _ => None,
    })
}
