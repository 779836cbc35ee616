use log::info;

use crate::config::IndexConfig;
use crate::core::error::Error;
use crate::core::mappable::Mappable;
use crate::core::TypeDescriptor;
use crate::idx;
use crate::idx::schema::Mapping;
use crate::idx::settings::IndexSettings;

pub fn generate_mapping(ty: &TypeDescriptor) -> Result<Mapping, Error> {
    info!("generating mapping for {}", ty);
    idx::generate_mapping(ty)
}

pub fn mapping_for<T: Mappable + ?Sized>() -> Result<Mapping, Error> {
    generate_mapping(&T::type_descriptor())
}

/// Index creation body holding the mapping of `T` under `name`.
pub fn index_settings<T: Mappable + ?Sized>(
    name: &str,
    cfg: &IndexConfig,
) -> Result<IndexSettings, Error> {
    info!("building index settings mapping={} {:?}", name, cfg);
    let mut index_settings = IndexSettings::from_config(cfg);
    index_settings.add_mapping(name, mapping_for::<T>()?);
    Ok(index_settings)
}
