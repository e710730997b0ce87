use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{isbn::Isbn, lenient_count, lenient_text, or_placeholder, PLACEHOLDER};

pub const EDITION_COLUMNS: [&str; 6] = [
    "ISBN",
    "Format",
    "Language",
    "Pages",
    "Publication Date",
    "Publisher",
];

/// A published version of a book. Every field may be missing.
///
/// The backing store does not enforce column types, so fields are read
/// leniently: a value of the wrong kind drops that field, not the edition.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Edition {
    #[serde(rename = "ISBN", deserialize_with = "lenient_isbn")]
    pub isbn:             Option<Isbn>,
    #[serde(deserialize_with = "lenient_text")]
    pub format:           Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub language:         Option<String>,
    #[serde(deserialize_with = "lenient_count")]
    pub pages:            Option<u32>,
    #[serde(deserialize_with = "lenient_text")]
    pub publication_date: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub publisher:        Option<String>,
}

fn lenient_isbn<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Isbn>, D::Error> {
    Ok(lenient_text(d)?.map(Isbn))
}

impl Edition {
    /// Display values in [EDITION_COLUMNS] order.
    pub fn cells(&self) -> Vec<String> {
        let isbn = match &self.isbn {
            Some(isbn) if !isbn.is_empty() => isbn.to_string(),
            _ => PLACEHOLDER.to_string(),
        };
        let pages = match self.pages {
            Some(n) if n > 0 => n.to_string(),
            _ => PLACEHOLDER.to_string(),
        };
        vec![
            isbn,
            or_placeholder(self.format.as_deref()),
            or_placeholder(self.language.as_deref()),
            pages,
            or_placeholder(self.publication_date.as_deref()),
            or_placeholder(self.publisher.as_deref()),
        ]
    }
}
