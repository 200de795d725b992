use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("config error: {0}")]
    ConfigLoad(String),

    #[error("secrets manager error: {0}")]
    Service(String),
}

pub type Result<T> = std::result::Result<T, Error>;
