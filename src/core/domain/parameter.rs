//! Parameter types.
//!
//! A parameter is a named value in the remote store plus its type tag.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Type of a stored parameter.
///
/// Serialized with the remote service's own tags (`String`, `StringList`,
/// `SecureString`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParameterType {
    /// Plaintext string.
    #[default]
    Plain,
    /// Comma-separated list of strings.
    List,
    /// Encrypted at rest, decrypted on read.
    Secret,
}

impl ParameterType {
    /// The remote service's tag for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "String",
            Self::List => "StringList",
            Self::Secret => "SecureString",
        }
    }

    /// Map a type tag to a type, case-insensitively.
    ///
    /// Unrecognized tags fall back to [`ParameterType::Plain`].
    pub fn from_tag(tag: &str) -> Self {
        Self::parse(tag).unwrap_or_default()
    }

    /// Strictly parse a type name (`string`, `stringlist`, `securestring`,
    /// any case). Returns `None` for anything else.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "string" => Some(Self::Plain),
            "stringlist" => Some(Self::List),
            "securestring" => Some(Self::Secret),
            _ => None,
        }
    }

    /// Whether values of this type are encrypted at rest.
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Secret)
    }
}

impl std::fmt::Display for ParameterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ParameterType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ParameterType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// A parameter as read from or written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Slash-delimited path, e.g. `/prod/app/DB_HOST`.
    pub name: String,
    pub value: String,
    pub kind: ParameterType,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>, kind: ParameterType) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind,
        }
    }
}
