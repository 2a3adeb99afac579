//! # Automobile Record
//!
//! The sole persisted entity plus the collection wrapper used by list and
//! search responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single automobile record.
///
/// `id` is the surrogate identifier assigned by the store on first save;
/// it is `None` for records that have not been persisted yet. `vin` is the
/// external lookup key for get/update/delete. Null-valued fields are
/// omitted from JSON output, not emitted as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Automobile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub year: i32,
    pub make: String,
    pub model: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    pub vin: String,

    /// Formatted as `MM/DD/YYYY` on the wire.
    #[serde(
        default,
        with = "purchase_date_format",
        skip_serializing_if = "Option::is_none"
    )]
    pub purchase_date: Option<NaiveDate>,
}

impl Automobile {
    /// Create an unpersisted record with the required fields.
    pub fn new(
        year: i32,
        make: impl Into<String>,
        model: impl Into<String>,
        vin: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            year,
            make: make.into(),
            model: model.into(),
            color: None,
            owner: None,
            vin: vin.into(),
            purchase_date: None,
        }
    }
}

/// Ordered collection of automobiles returned from list and search.
///
/// Serializes as a named array field: `{"automobiles": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutosList {
    pub automobiles: Vec<Automobile>,
}

impl AutosList {
    pub fn new(automobiles: Vec<Automobile>) -> Self {
        Self { automobiles }
    }

    pub fn is_empty(&self) -> bool {
        self.automobiles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.automobiles.len()
    }
}

/// Serde adapter for the `MM/DD/YYYY` purchase date format.
mod purchase_date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%m/%d/%Y";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => NaiveDate::parse_from_str(&s, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
