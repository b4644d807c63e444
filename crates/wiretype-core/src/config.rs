use crate::{DEFAULT_TAG_KEY, DEFAULT_TYPE_KEY};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use thiserror::Error as ThisError;

///
/// ConfigError
/// Errors related to wire configuration parsing and validation.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum ConfigError {
    /// TOML could not be parsed into the expected structure.
    #[error("toml error: {0}")]
    CannotParseToml(String),

    #[error("toml render error: {0}")]
    CannotRenderToml(String),

    #[error("{key} must not be empty")]
    EmptyKey { key: &'static str },

    #[error("tag_key and type_key must differ (both '{0}')")]
    SameKeys(String),
}

///
/// WireConfig
///
/// Wire-level policy shared by the serializer and the deserializer.
/// Field wire names may never equal `tag_key` or `type_key`; declaration
/// checks enforce this, so discriminator entries cannot collide with fields.
///
/// ```toml
/// tag_key = "_tag"
/// type_key = "_type"
/// emit_type_names = true
/// ```
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct WireConfig {
    /// Key of the union tag discriminator.
    pub tag_key: Cow<'static, str>,

    /// Key of the declared type name.
    pub type_key: Cow<'static, str>,

    /// Emit `type_key` on records and unions.
    pub emit_type_names: bool,

    /// Reject documents whose `type_key` entry names a different type.
    pub check_type_names: bool,

    /// Reject documents carrying keys that are neither fields nor
    /// discriminators.
    pub deny_unknown_fields: bool,
}

impl WireConfig {
    pub const DEFAULT: Self = Self {
        tag_key: Cow::Borrowed(DEFAULT_TAG_KEY),
        type_key: Cow::Borrowed(DEFAULT_TYPE_KEY),
        emit_type_names: false,
        check_type_names: true,
        deny_unknown_fields: false,
    };

    /// Parse and validate a configuration from TOML text.
    pub fn from_toml(config_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(config_str).map_err(|e| ConfigError::CannotParseToml(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Return the configuration as TOML text.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::CannotRenderToml(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tag_key.is_empty() {
            return Err(ConfigError::EmptyKey { key: "tag_key" });
        }
        if self.type_key.is_empty() {
            return Err(ConfigError::EmptyKey { key: "type_key" });
        }
        if self.tag_key == self.type_key {
            return Err(ConfigError::SameKeys(self.tag_key.to_string()));
        }

        Ok(())
    }

    /// Whether `key` is one of the discriminator keys.
    #[must_use]
    pub fn is_reserved(&self, key: &str) -> bool {
        key == self.tag_key || key == self.type_key
    }
}

impl Default for WireConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

///
/// TESTS
///
