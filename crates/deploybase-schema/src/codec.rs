//! Keyed record form of a [`Base`] for persistence.
//!
//! The record is `{ name, channel: { track, risk } }`. Architectures are not
//! part of it. Decoding checks shape only: a record naming an unknown OS
//! decodes fine, since it is assumed to come from an already-validated base.

use crate::base::Base;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("base record JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to decode base record: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("failed to encode base record: {0}")]
    TomlEncode(#[from] toml::ser::Error),
}

impl Base {
    pub fn to_json(&self) -> Result<String, CodecError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, CodecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(input: &str) -> Result<Self, CodecError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn to_toml(&self) -> Result<String, CodecError> {
        Ok(toml::to_string(self)?)
    }

    pub fn from_toml(input: &str) -> Result<Self, CodecError> {
        Ok(toml::from_str(input)?)
    }
}
