//! Ordered enricher pipeline.
//!
//! The pipeline owns its enrichers and runs them one after another over a
//! single loading context. The first failure aborts the run; the error is
//! tagged with the extension and the enricher that raised it.

use std::fmt;

use extmodel_declaration::LoadingContext;
use extmodel_foundation::{ErrorContext, Result};
use tracing::debug;

use crate::config::PipelineConfig;
use crate::enricher::Enricher;
use crate::enrichers::{
    ConnectivityEnricher, DataTypeEnricher, DeprecationEnricher, ElementReferencesEnricher,
    ErrorsEnricher, ExecutionTypeEnricher, ImportedTypesEnricher, LayoutEnricher,
    RefNameEnricher, RequiredForMetadataEnricher, StaticSchemaEnricher, StereotypesEnricher,
    TargetParameterEnricher, TransactionalActionEnricher,
};

// =============================================================================
// Pipeline
// =============================================================================

/// An ordered list of enrichers.
#[derive(Default)]
pub struct Pipeline {
    enrichers: Vec<Box<dyn Enricher>>,
}

impl Pipeline {
    /// Creates a pipeline with no enrichers.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the standard pipeline.
    ///
    /// Connectivity runs before execution type and errors, which both read
    /// its result. Synthetic parameters are added before layout so they
    /// take part in ordering.
    #[must_use]
    pub fn standard(config: &PipelineConfig) -> Self {
        let mut pipeline = Self::empty()
            .with(DeprecationEnricher)
            .with(ConnectivityEnricher)
            .with(ExecutionTypeEnricher)
            .with(ImportedTypesEnricher::new(config.unresolved_types))
            .with(StaticSchemaEnricher);
        if config.data_type_parameters {
            pipeline = pipeline.with(DataTypeEnricher);
        }
        if config.target_parameters {
            pipeline = pipeline.with(TargetParameterEnricher);
        }
        pipeline
            .with(TransactionalActionEnricher)
            .with(ErrorsEnricher)
            .with(StereotypesEnricher)
            .with(ElementReferencesEnricher::new(config.unresolved_types))
            .with(RefNameEnricher)
            .with(RequiredForMetadataEnricher)
            .with(LayoutEnricher)
    }

    /// Appends an enricher.
    #[must_use]
    pub fn with(mut self, enricher: impl Enricher + 'static) -> Self {
        self.enrichers.push(Box::new(enricher));
        self
    }

    /// Returns the enricher names in run order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.enrichers.iter().map(|e| e.name()).collect()
    }

    /// Returns the number of enrichers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.enrichers.len()
    }

    /// Returns true if the pipeline has no enrichers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enrichers.is_empty()
    }

    /// Runs every enricher in order.
    ///
    /// # Errors
    /// Returns the first enricher error, with the extension and enricher
    /// names attached.
    pub fn run(&self, ctx: &mut LoadingContext) -> Result<()> {
        let extension = ctx.extension_name().to_string();
        for enricher in &self.enrichers {
            debug!(extension = %extension, enricher = enricher.name(), "running enricher");
            enricher.enrich(ctx).map_err(|err| {
                err.with_context(
                    ErrorContext::new()
                        .with_extension(extension.clone())
                        .with_enricher(enricher.name()),
                )
            })?;
        }
        debug!(extension = %extension, enrichers = self.enrichers.len(), "pipeline finished");
        Ok(())
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("enrichers", &self.names())
            .finish()
    }
}
