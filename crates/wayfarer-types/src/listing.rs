//! Listing records returned by the search backend.
//!
//! The backend exports rows from a pandas frame with `fillna("")`, so any
//! field may arrive as its natural type, a numeric string, or an empty
//! string standing in for a missing value. The wire record tolerates all of
//! these; [`Listing`] is the normalized domain shape the rest of the client
//! works with.

use serde::de::Deserializer;
use serde::Deserialize;

/// A price cell as the backend sent it.
///
/// Numbers and numeric strings are kept as numeric values so the card
/// renderer can group-format them; any other non-empty string is preserved
/// raw and rendered unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PriceValue {
    #[default]
    Missing,
    Numeric(f64),
    Raw(String),
}

impl PriceValue {
    /// Numeric amount, if the cell held one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PriceValue::Numeric(n) => Some(*n),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for PriceValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::Null => PriceValue::Missing,
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => PriceValue::Numeric(f),
                None => PriceValue::Missing,
            },
            serde_json::Value::String(s) => {
                if s.is_empty() {
                    PriceValue::Missing
                } else if let Ok(f) = s.parse::<f64>() {
                    PriceValue::Numeric(f)
                } else {
                    PriceValue::Raw(s)
                }
            }
            other => PriceValue::Raw(other.to_string()),
        })
    }
}

/// One search result describing a rental property.
///
/// Ephemeral: the whole set is replaced on every search, never merged or
/// diffed against the previous results.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: String,
    pub image_url: Option<String>,
    pub listing_url: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub stars: Option<f64>,
    pub price: PriceValue,
    pub bedrooms: Option<f64>,
    pub bathrooms: Option<f64>,
    pub beds: Option<f64>,
    pub guests: Option<f64>,
    pub review_count: Option<f64>,
    pub city: Option<String>,
    pub room_type: Option<String>,
}

/// Wire shape of a listing row, with the backend's column names.
#[derive(Debug, Deserialize)]
pub struct ListingRecord {
    #[serde(rename = "idStr", default, deserialize_with = "lenient_id")]
    pub id_str: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub image_url: Option<String>,
    #[serde(rename = "url", default, deserialize_with = "empty_as_none")]
    pub listing_url: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub stars: Option<f64>,
    #[serde(default)]
    pub price: PriceValue,
    #[serde(rename = "bedroom_count", default, deserialize_with = "lenient_f64")]
    pub bedrooms: Option<f64>,
    #[serde(rename = "bathroom_count", default, deserialize_with = "lenient_f64")]
    pub bathrooms: Option<f64>,
    #[serde(rename = "bed_count", default, deserialize_with = "lenient_f64")]
    pub beds: Option<f64>,
    #[serde(rename = "guest_capacity", default, deserialize_with = "lenient_f64")]
    pub guests: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub review_count: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub room_type: Option<String>,
}

impl From<ListingRecord> for Listing {
    fn from(record: ListingRecord) -> Self {
        Listing {
            id: record.id_str,
            image_url: record.image_url,
            listing_url: record.listing_url,
            name: record.name,
            description: record.description,
            stars: record.stars,
            price: record.price,
            bedrooms: record.bedrooms,
            bathrooms: record.bathrooms,
            beds: record.beds,
            guests: record.guests,
            review_count: record.review_count,
            city: record.city,
            room_type: record.room_type,
        }
    }
}

/// Accept a number, a numeric string, or `""`/null for a missing value.
///
/// Anything unparseable degrades to missing instead of failing the whole
/// listing; one odd cell should not take down a reply of fifty rows.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.parse::<f64>().ok(),
        _ => None,
    })
}

/// Listing identifiers arrive as numbers (pandas coerces the column) or
/// strings; normalize to a display string, dropping a float's `.0` tail.
fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(f) = n.as_f64() {
                if f.fract() == 0.0 {
                    format!("{}", f as i64)
                } else {
                    f.to_string()
                }
            } else {
                n.to_string()
            }
        }
        serde_json::Value::String(s) => s,
        _ => String::new(),
    })
}

/// Treat `""` and null as a missing string field.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
