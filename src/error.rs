use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Error {
    Unspecified(String),
    ConfigError(String),
    SerializationError(String),
    NetworkError(String),
    ApiError(u16, String),
    Throttling,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Unspecified(g) => write!(f, "{}", g),
            Error::ConfigError(g) => write!(f, "{}", g),
            Error::SerializationError(g) => write!(f, "{}", g),
            Error::NetworkError(g) => write!(f, "{}", g),
            Error::ApiError(status, g) => write!(f, "API responded with {} ({}).", status, g),
            Error::Throttling => write!(f, "Throttling."),
        }
    }
}

impl std::error::Error for Error {}
