use std::error::Error as StdError;
use std::fmt;

/// Everything that can go wrong while assembling a combined record.
#[derive(Debug)]
pub enum Error {
    /// The upstream API doesn't know this pokemon.
    NotFound(String),
    /// No generation dump contains this pokemon.
    LocalDataMissing(String),
    /// Transport failure talking to an endpoint.
    Http(reqwest::Error),
    /// A document that downloaded fine but doesn't decode.
    Malformed(serde_json::Error),
    /// The environment configuration doesn't deserialize.
    Config(lib_config::ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotFound(name) => write!(f, "cannot find the pokemon `{}`", name),
            Error::LocalDataMissing(name) => write!(
                f,
                "no set data for the pokemon `{}` in any generation",
                name
            ),
            Error::Http(why) => write!(f, "request failed: {}", why),
            Error::Malformed(why) => write!(f, "malformed document: {}", why),
            Error::Config(why) => write!(f, "invalid configuration: {}", why),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Http(why) => Some(why),
            Error::Malformed(why) => Some(why),
            Error::Config(why) => Some(why),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(why: reqwest::Error) -> Self {
        Error::Http(why)
    }
}

impl From<serde_json::Error> for Error {
    fn from(why: serde_json::Error) -> Self {
        Error::Malformed(why)
    }
}

impl From<lib_config::ConfigError> for Error {
    fn from(why: lib_config::ConfigError) -> Self {
        Error::Config(why)
    }
}
