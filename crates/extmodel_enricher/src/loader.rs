//! Loading an extension: run the pipeline, then freeze the result.

use std::sync::Arc;

use extmodel_declaration::{DeclarationGraph, ExtensionModel, LoadingContext};
use extmodel_foundation::{Result, TypeCatalog};
use tracing::{info, warn};

use crate::config::PipelineConfig;
use crate::pipeline::Pipeline;

/// Turns declaration graphs into frozen extension models.
///
/// A loader holds no per-load state, so one instance may serve concurrent
/// loads of different extensions sharing a type catalog.
#[derive(Debug)]
pub struct ExtensionLoader {
    pipeline: Pipeline,
}

impl ExtensionLoader {
    /// Creates a loader running the standard pipeline.
    #[must_use]
    pub fn new(config: &PipelineConfig) -> Self {
        Self::with_pipeline(Pipeline::standard(config))
    }

    /// Creates a loader running a custom pipeline.
    #[must_use]
    pub fn with_pipeline(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }

    /// Returns the pipeline.
    #[must_use]
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Enriches a declaration graph and freezes it.
    ///
    /// # Errors
    /// Returns the first model definition error raised by an enricher.
    pub fn load(
        &self,
        graph: DeclarationGraph,
        catalog: Arc<TypeCatalog>,
    ) -> Result<ExtensionModel> {
        let mut ctx = LoadingContext::new(graph, catalog);
        let extension = ctx.extension_name().to_string();

        if let Err(err) = self.pipeline.run(&mut ctx) {
            warn!(extension = %extension, error = %err, "extension model rejected");
            return Err(err);
        }

        let model = ctx.into_model();
        info!(
            extension = %extension,
            components = model.graph().component_count(),
            errors = model.errors().len(),
            "extension model loaded"
        );
        Ok(model)
    }
}

impl Default for ExtensionLoader {
    fn default() -> Self {
        Self::new(&PipelineConfig::default())
    }
}
