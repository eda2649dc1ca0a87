use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown property type: {0}")]
    UnknownPropertyType(String),
}
