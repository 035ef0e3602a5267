//! The error types raised by registry construction, model parsing, keyword
//! lookups and the dynamic conversion table.

use crate::{model::Model, value::ValueKind};
use thiserror::Error;

/// Malformed model metadata detected while freezing the registry. This is
/// fatal for the registry being built; no partially validated registry is
/// ever handed out.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The builder never declared a channel count.
    #[error("missing channels property: {0}")]
    MissingChannels(Model),

    /// The builder never declared channel labels.
    #[error("missing channel labels property: {0}")]
    MissingLabels(Model),

    /// The declared channel count is zero.
    #[error("channel count must be positive: {0}")]
    ZeroChannels(Model),

    /// The label list length disagrees with the channel count.
    #[error("channel and label counts mismatch: {0}")]
    LabelCountMismatch(Model),
}

/// A model name outside the registered set.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown color model: {0}")]
pub struct UnknownModelError(pub String);

/// A keyword not present in the named-color table.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown color keyword: {0}")]
pub struct UnknownKeywordError(pub String);

/// A single conversion request was rejected. The input is never partially
/// converted; the table validates before running any formula.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConvertError {
    /// No direct conversion function is registered for the ordered pair.
    /// A router can still reach `to` from `from` by chaining direct
    /// conversions through intermediate models.
    #[error("no direct conversion from {from} to {to}")]
    UnsupportedPair {
        /// The requested source model.
        from: Model,
        /// The requested destination model.
        to: Model,
    },

    /// The input channel count does not match the source model's arity.
    #[error("{model} takes {expected} channels, got {actual}")]
    Arity {
        /// The source model the input was checked against.
        model: Model,
        /// The arity the source model declares.
        expected: usize,
        /// The channel count of the value that was passed in.
        actual: usize,
    },

    /// The input value kind does not match the source model's kind.
    #[error("{model} values are {expected}, got {actual}")]
    Kind {
        /// The source model the input was checked against.
        model: Model,
        /// The value kind the source model expects.
        expected: ValueKind,
        /// The kind of the value that was passed in.
        actual: ValueKind,
    },

    /// The keyword input is not in the named-color table.
    #[error(transparent)]
    UnknownKeyword(#[from] UnknownKeywordError),
}
