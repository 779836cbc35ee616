//! Generates Elasticsearch mappings from Rust record types.
//!
//! ```
//! use esmap::Mappable;
//!
//! #[derive(Mappable)]
//! #[serde(rename_all = "camelCase")]
//! struct Movie {
//!     title: String,
//!     #[es("date,epoch_second")]
//!     release_date: i64,
//! }
//!
//! let mapping = esmap::mapping_for::<Movie>().unwrap();
//! assert_eq!(mapping.properties["releaseDate"].format.as_deref(), Some("epoch_second"));
//! ```

pub mod config;
pub mod core;
pub mod idx;

pub use crate::config::IndexConfig;
pub use crate::core::action::{generate_mapping, index_settings, mapping_for};
pub use crate::core::error::Error;
pub use crate::core::mappable::Mappable;
pub use crate::core::tag::{Modifier, SchemaOverride};
pub use crate::core::{Field, NativeKind, StructDescriptor, TypeDescriptor};
pub use crate::idx::schema::{Mapping, SchemaType};
pub use crate::idx::settings::{Alias, Filter, IndexSettings, Settings};

#[cfg(feature = "derive")]
pub use esmap_derive::Mappable;
