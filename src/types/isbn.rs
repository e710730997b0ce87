use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::id::NumberOrString;

/// ISBN as sent by the server.
///
/// Stored verbatim; [Display] hyphenates it when it is a valid ISBN-10/13.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NumberOrString", into = "String")]
pub struct Isbn(pub String);

impl From<NumberOrString> for Isbn {
    fn from(value: NumberOrString) -> Self {
        Isbn(value.into())
    }
}

impl From<Isbn> for String {
    fn from(value: Isbn) -> Self {
        value.0
    }
}

impl Isbn {
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Display for Isbn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let raw = self.0.trim();
        match raw.parse::<isbn2::Isbn>().ok().and_then(|x| x.hyphenate().ok()) {
            Some(hyphenated) => write!(f, "{hyphenated}"),
            None => write!(f, "{raw}"),
        }
    }
}
