use thiserror::Error;

#[derive(Error, Debug)]
pub enum DdnaError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type DdnaResult<T> = std::result::Result<T, DdnaError>;
