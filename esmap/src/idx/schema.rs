use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::error::Error::InvalidTypeOverride;

/// Elasticsearch field types the generator can emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaType {
    Boolean,
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
    Keyword,
    Text,
    Date,
    Ip,
    Nested,
}

impl SchemaType {
    pub const PRIMITIVES: [SchemaType; 11] = [
        SchemaType::Boolean,
        SchemaType::Byte,
        SchemaType::Short,
        SchemaType::Integer,
        SchemaType::Long,
        SchemaType::Float,
        SchemaType::Double,
        SchemaType::Keyword,
        SchemaType::Text,
        SchemaType::Date,
        SchemaType::Ip,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SchemaType::Boolean => "boolean",
            SchemaType::Byte => "byte",
            SchemaType::Short => "short",
            SchemaType::Integer => "integer",
            SchemaType::Long => "long",
            SchemaType::Float => "float",
            SchemaType::Double => "double",
            SchemaType::Keyword => "keyword",
            SchemaType::Text => "text",
            SchemaType::Date => "date",
            SchemaType::Ip => "ip",
            SchemaType::Nested => "nested",
        }
    }

    pub fn is_primitive(self) -> bool {
        self != SchemaType::Nested
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a type override. `nested` is not accepted, it is only ever derived
/// from a struct.
impl FromStr for SchemaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchemaType::PRIMITIVES
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| InvalidTypeOverride(s.to_string()))
    }
}

/// A single mapping node: either a leaf field or a nested object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Mapping {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<SchemaType>,

    /// Field name to its mapping.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Mapping>,

    /// Whether the field is searchable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<bool>,

    /// Date parsing format, only set on `date` fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Builds global ordinals at refresh time to speed up terms aggregations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eager_global_ordinals: Option<bool>,
}

impl Mapping {
    pub fn leaf(type_: SchemaType) -> Self {
        Mapping {
            type_: Some(type_),
            ..Mapping::default()
        }
    }

    pub fn nested(properties: BTreeMap<String, Mapping>) -> Self {
        Mapping {
            type_: Some(SchemaType::Nested),
            properties,
            ..Mapping::default()
        }
    }

    pub fn to_json(&self) -> Result<serde_json::Value, Error> {
        Ok(serde_json::to_value(self)?)
    }
}
