use std::collections::BTreeMap;

use log::{debug, warn};

use crate::core::error::Error;
use crate::core::error::Error::{ProgrammerMisuse, UnsupportedNativeKind};
use crate::core::fields::extract_fields;
use crate::core::tag::{external_name, schema_override};
use crate::core::{NativeKind, TypeDescriptor};
use crate::idx::schema::{Mapping, SchemaType};

pub mod schema;
pub mod settings;

/// Type used for a primitive field when its schema tag names none.
pub fn default_type(kind: NativeKind) -> Option<SchemaType> {
    match kind {
        NativeKind::Bool => Some(SchemaType::Boolean),
        NativeKind::Int | NativeKind::Int32 => Some(SchemaType::Integer),
        NativeKind::Int8 => Some(SchemaType::Byte),
        NativeKind::Int16 => Some(SchemaType::Short),
        NativeKind::Int64 => Some(SchemaType::Long),
        NativeKind::Float32 => Some(SchemaType::Float),
        NativeKind::Float64 => Some(SchemaType::Double),
        NativeKind::String => Some(SchemaType::Keyword),
        _ => None,
    }
}

/// Generates the mapping of a record type. The root describes the whole
/// document, so it carries properties but no type of its own.
pub fn generate_mapping(ty: &TypeDescriptor) -> Result<Mapping, Error> {
    let mut mapping = generate_recur(ty, None, &ty.unwrap().name())?;
    mapping.type_ = None;
    Ok(mapping)
}

fn generate_recur(
    ty: &TypeDescriptor,
    type_override: Option<&str>,
    path: &str,
) -> Result<Mapping, Error> {
    if let Some(kind) = ty.kind() {
        let type_ = match type_override {
            Some(custom) => custom.parse::<SchemaType>()?,
            None => default_type(kind).ok_or_else(|| UnsupportedNativeKind(kind, path.to_string()))?,
        };
        return Ok(Mapping::leaf(type_));
    }

    let mut properties = BTreeMap::new();
    for field in extract_fields(ty) {
        let name = match external_name(field.name_tag) {
            "" => field.name,
            tagged => tagged,
        };
        if name.is_empty() {
            return Err(ProgrammerMisuse(format!("unnamed field in {}", path)));
        }
        let field_path = format!("{}.{}", path, name);

        let schema = schema_override(field.schema_tag);
        debug!("field name: {} type: {}", field_path, field.ty);
        if let Some(custom) = schema.type_override.as_deref().filter(|_| !field.ty.is_primitive()) {
            warn!("ignoring type {} on struct field {}", custom, field_path);
        }

        let mut inner = generate_recur(field.ty, schema.type_override.as_deref(), &field_path)?;
        for modifier in schema.ordered() {
            modifier.apply(&field_path, &mut inner)?;
        }

        if properties.insert(name.to_string(), inner).is_some() {
            warn!("{} replaces an earlier field with the same name", field_path);
        }
    }

    Ok(Mapping::nested(properties))
}
