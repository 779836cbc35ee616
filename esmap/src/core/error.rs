use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0} is an invalid Elasticsearch type")]
    InvalidTypeOverride(String),
    #[error("no default Elasticsearch type for native kind {0:?} (field {1})")]
    UnsupportedNativeKind(crate::core::NativeKind, String),
    #[error("{modifier} not valid for field {field} of Elasticsearch type {found}")]
    IncompatibleModifier {
        field: String,
        modifier: String,
        found: String,
    },
    #[error("misuse: {0}")]
    ProgrammerMisuse(String),
    #[error("error reading config {key}: {reason}")]
    ConfigError { key: String, reason: String },
    #[error("error serializing/deserializing json: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}
