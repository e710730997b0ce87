use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of a book, author or reviewer.
///
/// The review service hands out integer keys, but identifiers taken from a URL
/// are plain text, so both JSON numbers and strings are accepted and kept in
/// their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "NumberOrString", into = "String")]
pub struct Id(pub String);

#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum NumberOrString {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<NumberOrString> for String {
    fn from(value: NumberOrString) -> Self {
        match value {
            NumberOrString::Integer(n) => n.to_string(),
            NumberOrString::Float(n) => n.to_string(),
            NumberOrString::Text(s) => s,
        }
    }
}

impl From<NumberOrString> for Id {
    fn from(value: NumberOrString) -> Self {
        Id(value.into())
    }
}

impl From<Id> for String {
    fn from(value: Id) -> Self {
        value.0
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Id(value.to_string())
    }
}

impl From<u64> for Id {
    fn from(value: u64) -> Self {
        Id(value.to_string())
    }
}

impl Id {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_numbers_and_strings() {
        let ids: Vec<Id> = serde_json::from_str(r#"[7, "42", "abc"]"#).unwrap();
        assert_eq!(ids, vec![Id::from(7), Id::from("42"), Id::from("abc")]);
    }

    #[test]
    fn rejects_null() {
        assert!(serde_json::from_str::<Id>("null").is_err());
    }
}
