//! Per-model channel metadata, built in two phases: a mutable
//! [`ModelSpecBuilder`] that is validated and frozen into an immutable
//! [`ModelSpec`]. The [`Registry`] only ever holds frozen specs, so metadata
//! can never change after construction.

use crate::error::ConfigError;
use crate::model::Model;

/// Mutable metadata for one model, prior to validation.
#[derive(Clone, Debug)]
pub struct ModelSpecBuilder {
    model: Model,
    channels: Option<usize>,
    labels: Option<&'static [&'static str]>,
}

impl ModelSpecBuilder {
    /// Start an empty builder for the given model.
    pub fn new(model: Model) -> Self {
        Self {
            model,
            channels: None,
            labels: None,
        }
    }

    /// Declare the channel count.
    pub fn channels(mut self, count: usize) -> Self {
        self.channels = Some(count);
        self
    }

    /// Declare the ordered channel labels.
    pub fn labels(mut self, labels: &'static [&'static str]) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Validate the declared metadata and freeze it into a [`ModelSpec`].
    pub fn freeze(self) -> Result<ModelSpec, ConfigError> {
        let channels = self
            .channels
            .ok_or(ConfigError::MissingChannels(self.model))?;
        if channels == 0 {
            return Err(ConfigError::ZeroChannels(self.model));
        }

        let labels = self.labels.ok_or(ConfigError::MissingLabels(self.model))?;
        if labels.len() != channels {
            return Err(ConfigError::LabelCountMismatch(self.model));
        }

        Ok(ModelSpec {
            model: self.model,
            channels,
            labels,
        })
    }

    fn for_model(model: Model) -> Self {
        let builder = Self::new(model);
        match model {
            Model::Rgb => builder.channels(3).labels(&["r", "g", "b"]),
            Model::Hsl => builder.channels(3).labels(&["h", "s", "l"]),
            Model::Hsv => builder.channels(3).labels(&["h", "s", "v"]),
            Model::Hwb => builder.channels(3).labels(&["h", "w", "b"]),
            Model::Cmyk => builder.channels(4).labels(&["c", "m", "y", "k"]),
            Model::Xyz => builder.channels(3).labels(&["x", "y", "z"]),
            Model::Lab => builder.channels(3).labels(&["l", "a", "b"]),
            Model::Lch => builder.channels(3).labels(&["l", "c", "h"]),
            Model::Hex => builder.channels(1).labels(&["hex"]),
            Model::Keyword => builder.channels(1).labels(&["keyword"]),
            Model::Ansi16 => builder.channels(1).labels(&["ansi16"]),
            Model::Ansi256 => builder.channels(1).labels(&["ansi256"]),
            Model::Hcg => builder.channels(3).labels(&["h", "c", "g"]),
            Model::Apple => builder.channels(3).labels(&["r16", "g16", "b16"]),
            Model::Gray => builder.channels(1).labels(&["gray"]),
        }
    }
}

/// Frozen, validated metadata for one model.
#[derive(Clone, Debug)]
pub struct ModelSpec {
    model: Model,
    channels: usize,
    labels: &'static [&'static str],
}

impl ModelSpec {
    /// The model this spec describes.
    pub fn model(&self) -> Model {
        self.model
    }

    /// The channel arity of the model.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// The ordered channel labels of the model.
    pub fn labels(&self) -> &'static [&'static str] {
        self.labels
    }
}

/// The registry of frozen model metadata, constructed once and immutable
/// thereafter.
#[derive(Clone, Debug)]
pub struct Registry {
    specs: [ModelSpec; Model::COUNT],
}

impl Registry {
    /// Validate and freeze the metadata of every registered model. Fails
    /// with a [`ConfigError`] naming the offending model if any declaration
    /// is incoherent.
    pub fn new() -> Result<Self, ConfigError> {
        let specs = [
            ModelSpecBuilder::for_model(Model::Rgb).freeze()?,
            ModelSpecBuilder::for_model(Model::Hsl).freeze()?,
            ModelSpecBuilder::for_model(Model::Hsv).freeze()?,
            ModelSpecBuilder::for_model(Model::Hwb).freeze()?,
            ModelSpecBuilder::for_model(Model::Cmyk).freeze()?,
            ModelSpecBuilder::for_model(Model::Xyz).freeze()?,
            ModelSpecBuilder::for_model(Model::Lab).freeze()?,
            ModelSpecBuilder::for_model(Model::Lch).freeze()?,
            ModelSpecBuilder::for_model(Model::Hex).freeze()?,
            ModelSpecBuilder::for_model(Model::Keyword).freeze()?,
            ModelSpecBuilder::for_model(Model::Ansi16).freeze()?,
            ModelSpecBuilder::for_model(Model::Ansi256).freeze()?,
            ModelSpecBuilder::for_model(Model::Hcg).freeze()?,
            ModelSpecBuilder::for_model(Model::Apple).freeze()?,
            ModelSpecBuilder::for_model(Model::Gray).freeze()?,
        ];

        Ok(Self { specs })
    }

    /// The channel arity of the given model.
    pub fn channels_of(&self, model: Model) -> usize {
        self.spec(model).channels
    }

    /// The ordered channel labels of the given model.
    pub fn labels_of(&self, model: Model) -> &'static [&'static str] {
        self.spec(model).labels
    }

    /// The frozen spec of the given model.
    pub fn spec(&self, model: Model) -> &ModelSpec {
        &self.specs[model as usize]
    }
}
