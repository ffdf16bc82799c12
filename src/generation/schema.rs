//! Per-category infobox schemas and the records that conform to them.
//!
//! The schema is a fixed field list chosen by an exhaustive `match` over
//! [`Category`]. Generated records are coerced into schema shape with
//! [`Infobox::conform`], which is how an empty knowledge base degrades to
//! placeholder values instead of an error.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use wikigen_research::Category;

/// Value used for fields the generator could not fill.
pub const UNKNOWN_VALUE: &str = "unknown";

/// The ordered field set an infobox must provide for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoboxSchema {
    category: Category,
    fields: &'static [&'static str],
}

impl InfoboxSchema {
    /// Returns the schema for `category`.
    pub fn for_category(category: Category) -> Self {
        let fields: &'static [&'static str] = match category {
            Category::Place => &[
                "name",
                "country",
                "region",
                "population",
                "area",
                "founded",
                "leader",
                "timezone",
            ],
            Category::Organization => &[
                "name",
                "type",
                "founded",
                "founders",
                "headquarters",
                "industry",
                "key_people",
                "products",
                "website",
            ],
            Category::Person => &[
                "full_name",
                "born",
                "birthplace",
                "nationality",
                "occupation",
                "known_for",
                "awards",
            ],
        };
        Self { category, fields }
    }

    /// The category this schema describes.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Field names in display order.
    pub fn fields(&self) -> &'static [&'static str] {
        self.fields
    }

    /// JSON Schema for structured generation: every field is a required string.
    pub fn to_json_schema(&self) -> serde_json::Value {
        let properties: serde_json::Map<String, serde_json::Value> = self
            .fields
            .iter()
            .map(|f| ((*f).to_string(), serde_json::json!({ "type": "string" })))
            .collect();
        serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": self.fields,
            "additionalProperties": false,
        })
    }
}

/// A structured fact table: field name → string value, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Infobox {
    entries: Vec<(String, String)>,
}

impl Infobox {
    /// Build from raw `(field, value)` pairs, keeping their order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// A record with every schema field set to [`UNKNOWN_VALUE`].
    pub fn placeholder(schema: &InfoboxSchema) -> Self {
        Self::default().conform(schema)
    }

    /// Reshape to exactly the schema's fields, in schema order.
    ///
    /// Unknown fields are dropped. Missing or blank fields become
    /// [`UNKNOWN_VALUE`]. The first value wins when a field repeats.
    pub fn conform(self, schema: &InfoboxSchema) -> Self {
        let entries = schema
            .fields()
            .iter()
            .map(|field| {
                let value = self
                    .entries
                    .iter()
                    .find(|(k, _)| k == field)
                    .map(|(_, v)| v.trim())
                    .filter(|v| !v.is_empty())
                    .unwrap_or(UNKNOWN_VALUE);
                ((*field).to_string(), value.to_string())
            })
            .collect();
        Self { entries }
    }

    /// Look up a field value.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == field)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate `(field, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Infobox {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
