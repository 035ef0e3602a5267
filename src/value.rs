//! The dynamically typed color value passed through the conversion table.

use crate::error::ConvertError;
use crate::model::Model;
use crate::Component;
use std::fmt;

/// A color value without a model tag. The caller supplies the model context;
/// the table checks that the value's kind and arity agree with it before any
/// formula runs.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Numeric channels in the source model's canonical ranges.
    Channels(Vec<Component>),
    /// A hex string (the hex model).
    Hex(String),
    /// A color keyword (the keyword model).
    Keyword(String),
}

/// The kind of payload a [`Value`] carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    /// Numeric channels.
    Channels,
    /// A hex string.
    Hex,
    /// A color keyword.
    Keyword,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Channels => "channels",
            ValueKind::Hex => "a hex string",
            ValueKind::Keyword => "a keyword",
        })
    }
}

impl Value {
    /// The kind of payload this value carries.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Channels(_) => ValueKind::Channels,
            Value::Hex(_) => ValueKind::Hex,
            Value::Keyword(_) => ValueKind::Keyword,
        }
    }

    /// Extract exactly `N` channels for the given source model.
    pub(crate) fn channels_array<const N: usize>(
        &self,
        model: Model,
    ) -> Result<[Component; N], ConvertError> {
        match self {
            Value::Channels(channels) => {
                if channels.len() != N {
                    return Err(ConvertError::Arity {
                        model,
                        expected: N,
                        actual: channels.len(),
                    });
                }
                let mut out = [0.0; N];
                out.copy_from_slice(channels);
                Ok(out)
            }
            other => Err(ConvertError::Kind {
                model,
                expected: ValueKind::Channels,
                actual: other.kind(),
            }),
        }
    }

    /// Extract the hex string for the given source model.
    pub(crate) fn hex_str(&self, model: Model) -> Result<&str, ConvertError> {
        match self {
            Value::Hex(hex) => Ok(hex),
            other => Err(ConvertError::Kind {
                model,
                expected: ValueKind::Hex,
                actual: other.kind(),
            }),
        }
    }

    /// Extract the keyword for the given source model.
    pub(crate) fn keyword_str(&self, model: Model) -> Result<&str, ConvertError> {
        match self {
            Value::Keyword(keyword) => Ok(keyword),
            other => Err(ConvertError::Kind {
                model,
                expected: ValueKind::Keyword,
                actual: other.kind(),
            }),
        }
    }
}

impl From<Vec<Component>> for Value {
    fn from(channels: Vec<Component>) -> Self {
        Value::Channels(channels)
    }
}
