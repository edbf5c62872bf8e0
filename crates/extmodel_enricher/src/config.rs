//! Configuration for the enrichment pipeline.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What to do when the type catalog cannot resolve a type or a
/// cross-extension element.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnresolvedTypePolicy {
    /// Log a warning and leave the type out.
    #[default]
    Skip,
    /// Abort loading the extension.
    Fail,
}

/// Configuration for the enrichment pipeline.
///
/// Controls how strictly cross-module lookups are treated and which
/// synthetic parameters are generated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PipelineConfig {
    /// Policy for types and elements the catalog cannot resolve.
    pub unresolved_types: UnresolvedTypePolicy,

    /// Add `mimeType` and `encoding` parameters to content producers.
    pub data_type_parameters: bool,

    /// Add `target` and `targetValue` parameters to operations with output.
    pub target_parameters: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            unresolved_types: UnresolvedTypePolicy::Skip,
            data_type_parameters: true,
            target_parameters: true,
        }
    }
}

impl PipelineConfig {
    /// Creates a configuration that fails on anything the catalog cannot
    /// resolve.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            unresolved_types: UnresolvedTypePolicy::Fail,
            ..Self::default()
        }
    }

    /// Creates a configuration that skips unresolvable types.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            unresolved_types: UnresolvedTypePolicy::Skip,
            ..Self::default()
        }
    }

    /// Builder method to set the unresolved-type policy.
    #[must_use]
    pub fn with_unresolved_types(mut self, policy: UnresolvedTypePolicy) -> Self {
        self.unresolved_types = policy;
        self
    }

    /// Builder method to enable/disable `mimeType`/`encoding` synthesis.
    #[must_use]
    pub fn with_data_type_parameters(mut self, enabled: bool) -> Self {
        self.data_type_parameters = enabled;
        self
    }

    /// Builder method to enable/disable `target`/`targetValue` synthesis.
    #[must_use]
    pub fn with_target_parameters(mut self, enabled: bool) -> Self {
        self.target_parameters = enabled;
        self
    }
}
