use std::collections::HashMap;

use esmap::{mapping_for, Error, IndexConfig, Mappable, SchemaType, TypeDescriptor};
use serde::Serialize;
use serde_json::json;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Mappable)]
struct MyInnerStruct {
    #[serde(rename = "bar")]
    #[es("text")]
    bar: String,
}

#[derive(Mappable)]
struct MyStruct {
    foo: isize,
    inner: MyInnerStruct,
}

#[test]
fn nested_struct_becomes_nested_mapping() {
    init();
    let mapping = mapping_for::<MyStruct>().unwrap();

    assert_eq!(
        mapping.to_json().unwrap(),
        json!({
            "properties": {
                "foo": { "type": "integer" },
                "inner": {
                    "type": "nested",
                    "properties": { "bar": { "type": "text" } }
                }
            }
        })
    );
}

#[derive(Serialize, Mappable)]
struct Dog {
    #[es(",eager_global_ordinals")]
    name: String,
    #[serde(rename = "unique_id")]
    #[es(",indexignore")]
    unique: String,
}

#[test]
fn custom_es_props() {
    let mapping = mapping_for::<Dog>().unwrap();

    assert_eq!(
        mapping.to_json().unwrap(),
        json!({
            "properties": {
                "name": { "type": "keyword", "eager_global_ordinals": true },
                "unique_id": { "type": "keyword", "index": false }
            }
        })
    );
}

#[derive(Serialize, Mappable)]
#[serde(rename_all = "camelCase")]
struct Audit {
    #[es("date,epoch_second")]
    created_at: i64,
    #[es("date,epoch_ms")]
    updated_at: Option<i64>,
}

#[derive(Serialize, Mappable)]
#[serde(rename_all = "camelCase")]
struct Movie {
    #[es("keyword,eager_global_ordinals")]
    id: String,
    #[es("text")]
    title: String,
    tags: Vec<String>,
    rating: Option<f32>,
    #[es("ip,indexignore")]
    source_ip: Option<String>,
    #[serde(flatten)]
    audit: Audit,
    #[serde(skip)]
    #[allow(dead_code)]
    cache: HashMap<String, String>,
    genres: Vec<Genre>,
}

#[derive(Serialize, Mappable)]
struct Genre {
    id: i64,
    #[serde(rename = "label", skip_serializing_if = "String::is_empty")]
    name: String,
}

#[test]
fn flattens_renames_and_skips() {
    init();
    let mapping = mapping_for::<Movie>().unwrap();

    assert_eq!(
        mapping.to_json().unwrap(),
        json!({
            "properties": {
                "id": { "type": "keyword", "eager_global_ordinals": true },
                "title": { "type": "text" },
                "tags": { "type": "keyword" },
                "rating": { "type": "float" },
                "sourceIp": { "type": "ip", "index": false },
                "createdAt": { "type": "date", "format": "epoch_second" },
                "updatedAt": { "type": "date", "format": "epoch_millis" },
                "genres": {
                    "type": "nested",
                    "properties": {
                        "id": { "type": "long" },
                        "label": { "type": "keyword" }
                    }
                }
            }
        })
    );
}

#[derive(Serialize, Mappable, Default)]
#[serde(rename_all = "camelCase")]
struct Hashes {
    sha256sum: String,
    v2x_ratio: f64,
    ip_v4_addr: String,
    #[allow(non_snake_case)]
    UniqueID: String,
}

#[derive(Serialize, Mappable, Default)]
#[serde(rename_all = "PascalCase")]
struct Checksums {
    md5_v2: String,
    crc32c: i64,
}

fn serde_keys<T: Serialize>(value: &T) -> Vec<String> {
    let mut keys: Vec<String> = serde_json::to_value(value)
        .unwrap()
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    keys.sort();
    keys
}

fn mapping_keys<T: Mappable>() -> Vec<String> {
    mapping_for::<T>().unwrap().properties.keys().cloned().collect()
}

#[test]
fn renamed_properties_match_serialized_keys() {
    assert_eq!(mapping_keys::<Hashes>(), serde_keys(&Hashes::default()));
    assert_eq!(mapping_keys::<Checksums>(), serde_keys(&Checksums::default()));
    assert!(mapping_keys::<Hashes>().contains(&"v2xRatio".to_string()));
}

#[derive(Mappable)]
struct Page<T> {
    total: i64,
    items: Vec<T>,
}

#[test]
fn generic_struct_maps_its_parameter() {
    let mapping = mapping_for::<Page<Genre>>().unwrap();

    assert_eq!(mapping.properties["total"].type_, Some(SchemaType::Long));
    assert_eq!(mapping.properties["items"].type_, Some(SchemaType::Nested));
    assert!(mapping.properties["items"].properties.contains_key("label"));
}

#[derive(Mappable)]
struct Counter {
    hits: u64,
}

#[test]
fn unsigned_field_is_an_error() {
    assert!(matches!(mapping_for::<Counter>(), Err(Error::UnsupportedNativeKind(..))));
}

#[derive(Mappable)]
struct Tagged {
    #[es("integer,eager_global_ordinals")]
    count: i32,
}

#[test]
fn incompatible_flag_is_an_error() {
    let err = mapping_for::<Tagged>().unwrap_err();

    assert!(matches!(err, Error::IncompatibleModifier { .. }));
    assert!(err.to_string().contains("eager_global_ordinals"));
}

#[derive(Mappable)]
struct Located {
    #[es("geo_point")]
    location: String,
}

#[test]
fn unknown_override_is_an_error() {
    assert!(matches!(mapping_for::<Located>(), Err(Error::InvalidTypeOverride(_))));
}

#[test]
fn derived_descriptor_names_struct() {
    match Dog::type_descriptor() {
        TypeDescriptor::Struct(s) => {
            assert_eq!(s.name, "Dog");
            assert_eq!(s.fields.len(), 2);
            assert_eq!(s.fields[1].name, "unique");
            assert_eq!(s.fields[1].name_tag.as_deref(), Some("unique_id"));
        }
        other => panic!("expected a struct, got {}", other),
    }
}

#[test]
fn index_settings_document() {
    let cfg = IndexConfig { shards: 2, replicas: 0 };

    let doc = esmap::index_settings::<Dog>("_doc", &cfg).unwrap().to_json().unwrap();

    assert_eq!(
        doc,
        json!({
            "mappings": {
                "_doc": {
                    "properties": {
                        "name": { "type": "keyword", "eager_global_ordinals": true },
                        "unique_id": { "type": "keyword", "index": false }
                    }
                }
            },
            "settings": { "number_of_shards": 2 }
        })
    );
}
