use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown series key '{0}' (expected one of: {known})", known = crate::SeriesKey::known_keys())]
    UnknownSeriesKey(String),
    #[error("unknown contiguity mode '{0}' (expected ignore, warn or strict)")]
    UnknownContiguityMode(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
