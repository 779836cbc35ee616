use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::IndexConfig;
use crate::core::error::Error;
use crate::idx::schema::Mapping;

fn is_zero(n: &i32) -> bool {
    *n == 0
}

/// Term filter of an alias, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default)]
    pub term: BTreeMap<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Alias {
    #[serde(default)]
    pub filter: Filter,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "number_of_shards", default, skip_serializing_if = "is_zero")]
    pub num_shards: i32,
    #[serde(rename = "number_of_replicas", default, skip_serializing_if = "is_zero")]
    pub num_replicas: i32,
}

/// Body of an index creation request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexSettings {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub aliases: BTreeMap<String, Alias>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub mappings: BTreeMap<String, Mapping>,
    #[serde(default)]
    pub settings: Settings,
}

impl IndexSettings {
    /// Zero counts are left out of the document, so the engine applies its
    /// own default (one replica) instead.
    pub fn from_config(cfg: &IndexConfig) -> Self {
        if cfg.shards == 0 {
            warn!("shards=0 is omitted, the engine default applies");
        }
        if cfg.replicas == 0 {
            warn!("replicas=0 is omitted, the engine default applies");
        }
        let mut index_settings = IndexSettings::default();
        index_settings.set_shards(cfg.shards);
        index_settings.set_replicas(cfg.replicas);
        index_settings
    }

    pub fn set_shards(&mut self, num_shards: i32) {
        self.settings.num_shards = num_shards;
    }

    pub fn set_replicas(&mut self, num_replicas: i32) {
        self.settings.num_replicas = num_replicas;
    }

    pub fn add_mapping(&mut self, name: impl Into<String>, mapping: Mapping) {
        self.mappings.insert(name.into(), mapping);
    }

    pub fn add_alias(&mut self, name: impl Into<String>, alias: Alias) {
        self.aliases.insert(name.into(), alias);
    }

    pub fn to_json(&self) -> Result<Value, Error> {
        Ok(serde_json::to_value(self)?)
    }
}
