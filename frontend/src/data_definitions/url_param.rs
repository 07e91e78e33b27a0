//! URL parameter helpers and types.

use std::{fmt::Display, str::FromStr};

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// State carried in a URL segment or query value as base64url-encoded CBOR.
///
/// An empty value parses as `T::default()`, so a bare route still resolves.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl<T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

impl<T> std::ops::Deref for UrlParam<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

// Display the state in a way that can be parsed by FromStr
impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serialized = Vec::new();
        if ciborium::into_writer(&self.0, &mut serialized).is_ok() {
            write!(f, "{}", URL_SAFE.encode(serialized))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum StateParseError {
    DecodeError(base64::DecodeError),
    CiboriumError(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for StateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecodeError(err) => write!(f, "Failed to decode base64: {}", err),
            Self::CiboriumError(err) => write!(f, "Failed to deserialize: {}", err),
        }
    }
}

impl std::error::Error for StateParseError {}

impl<T: for<'de> Deserialize<'de> + Default> FromStr for UrlParam<T> {
    type Err = StateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(UrlParam(T::default()));
        }
        let decoded = URL_SAFE
            .decode(s.as_bytes())
            .map_err(StateParseError::DecodeError)?;
        let parsed = ciborium::from_reader(std::io::Cursor::new(decoded))
            .map_err(StateParseError::CiboriumError)?;
        Ok(UrlParam(parsed))
    }
}
