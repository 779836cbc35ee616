use std::collections::BTreeSet;

use crate::core::error::Error;
use crate::core::error::Error::IncompatibleModifier;
use crate::idx::schema::{Mapping, SchemaType};

pub const INDEX_IGNORE: &str = "indexignore";
pub const EPOCH_SECOND: &str = "epoch_second";
pub const EPOCH_MS: &str = "epoch_ms";
pub const EAGER_GLOBAL_ORDINALS: &str = "eager_global_ordinals";

const EPOCH_MILLIS_FORMAT: &str = "epoch_millis";

const DATE_TYPES: &[SchemaType] = &[SchemaType::Date];
const STRING_TYPES: &[SchemaType] = &[SchemaType::Keyword, SchemaType::Text];

/// Flag tokens that follow the type in a schema tag.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    IndexIgnore,
    EpochSecond,
    EpochMillis,
    EagerGlobalOrdinals,
    /// Kept so newer flags round-trip; has no effect.
    Other(String),
}

impl Modifier {
    pub fn parse(token: &str) -> Self {
        match token {
            INDEX_IGNORE => Modifier::IndexIgnore,
            EPOCH_SECOND => Modifier::EpochSecond,
            EPOCH_MS => Modifier::EpochMillis,
            EAGER_GLOBAL_ORDINALS => Modifier::EagerGlobalOrdinals,
            other => Modifier::Other(other.to_string()),
        }
    }

    pub fn token(&self) -> &str {
        match self {
            Modifier::IndexIgnore => INDEX_IGNORE,
            Modifier::EpochSecond => EPOCH_SECOND,
            Modifier::EpochMillis => EPOCH_MS,
            Modifier::EagerGlobalOrdinals => EAGER_GLOBAL_ORDINALS,
            Modifier::Other(token) => token,
        }
    }

    /// Schema types the flag may be applied to. `None` means any type.
    pub fn requires(&self) -> Option<&'static [SchemaType]> {
        match self {
            Modifier::EpochSecond | Modifier::EpochMillis => Some(DATE_TYPES),
            Modifier::EagerGlobalOrdinals => Some(STRING_TYPES),
            Modifier::IndexIgnore | Modifier::Other(_) => None,
        }
    }

    /// Checks the type precondition, then sets the flag's attribute on `mapping`.
    pub fn apply(&self, field: &str, mapping: &mut Mapping) -> Result<(), Error> {
        if let Some(allowed) = self.requires() {
            let fits = mapping.type_.map_or(false, |t| allowed.contains(&t));
            if !fits {
                return Err(IncompatibleModifier {
                    field: field.to_string(),
                    modifier: self.token().to_string(),
                    found: mapping.type_.map_or("none", |t| t.as_str()).to_string(),
                });
            }
        }

        match self {
            Modifier::IndexIgnore => mapping.index = Some(false),
            Modifier::EpochSecond => mapping.format = Some(EPOCH_SECOND.to_string()),
            Modifier::EpochMillis => mapping.format = Some(EPOCH_MILLIS_FORMAT.to_string()),
            Modifier::EagerGlobalOrdinals => mapping.eager_global_ordinals = Some(true),
            Modifier::Other(_) => {}
        }
        Ok(())
    }
}

/// The parsed schema tag of a field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchemaOverride {
    pub type_override: Option<String>,
    pub modifiers: BTreeSet<Modifier>,
}

impl SchemaOverride {
    /// Modifiers in the order they get applied. Only the first date format
    /// found is kept.
    pub fn ordered(&self) -> Vec<&Modifier> {
        let find = |m: Modifier| self.modifiers.get(&m);
        let format = find(Modifier::EpochSecond).or_else(|| find(Modifier::EpochMillis));

        vec![
            find(Modifier::IndexIgnore),
            format,
            find(Modifier::EagerGlobalOrdinals),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Splits a raw tag into its comma-separated values.
pub fn tag_values(tag: Option<&str>) -> Vec<&str> {
    match tag {
        Some(values) if !values.is_empty() => values.split(',').collect(),
        _ => Vec::new(),
    }
}

/// First value of the name tag; the remaining values are serialization hints
/// such as `omitempty`. Empty when there is no tag.
pub fn external_name(tag: Option<&str>) -> &str {
    tag_values(tag).first().copied().unwrap_or("")
}

pub fn schema_override(tag: Option<&str>) -> SchemaOverride {
    let values = tag_values(tag);
    let (first, rest) = match values.split_first() {
        Some(split) => split,
        None => return SchemaOverride::default(),
    };

    SchemaOverride {
        type_override: Some(first.to_string()).filter(|t| !t.is_empty()),
        modifiers: rest.iter().map(|token| Modifier::parse(token)).collect(),
    }
}
