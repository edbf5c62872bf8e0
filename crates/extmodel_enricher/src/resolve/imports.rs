//! Cross-module import decisions.

use extmodel_declaration::{ExtensionDeclaration, ImportedType};
use extmodel_foundation::{Error, Result, TypeCatalog, TypeId};
use tracing::{trace, warn};

use crate::config::UnresolvedTypePolicy;

/// How an extension relates to a type it mentions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImportDecision {
    /// Declared by the extension's own module, or by a shared library loaded
    /// into every consumer.
    Local,
    /// Declared by another module and exported by an already-loaded
    /// extension.
    Import(ImportedType),
    /// Declared by another module but exported by nobody; not visible.
    Private,
}

/// Decides imports for one extension against the catalog.
#[derive(Debug)]
pub struct ImportResolver<'a> {
    extension: &'a ExtensionDeclaration,
    catalog: &'a TypeCatalog,
    policy: UnresolvedTypePolicy,
}

impl<'a> ImportResolver<'a> {
    /// Creates a resolver.
    #[must_use]
    pub fn new(
        extension: &'a ExtensionDeclaration,
        catalog: &'a TypeCatalog,
        policy: UnresolvedTypePolicy,
    ) -> Self {
        Self {
            extension,
            catalog,
            policy,
        }
    }

    /// Decides how a type relates to the extension.
    ///
    /// Returns `Ok(None)` for an unresolvable type under the skip policy.
    ///
    /// # Errors
    /// Returns an error for an unresolvable type under the fail policy.
    pub fn decide(&self, id: &TypeId) -> Result<Option<ImportDecision>> {
        if self.extension.types.contains(id) {
            return Ok(Some(ImportDecision::Local));
        }

        let Some(descriptor) = self.catalog.resolve(id) else {
            return match self.policy {
                UnresolvedTypePolicy::Fail => Err(Error::unresolved_type(id.clone())),
                UnresolvedTypePolicy::Skip => {
                    warn!(
                        extension = %self.extension.name,
                        ty = %id,
                        "skipping type the catalog cannot resolve"
                    );
                    Ok(None)
                }
            };
        };

        let decision = if descriptor.origin == self.extension.origin || descriptor.origin.is_shared()
        {
            ImportDecision::Local
        } else {
            match (descriptor.origin.module_id(), self.catalog.exporter_of(id)) {
                (Some(module), Some(exporter)) => ImportDecision::Import(ImportedType {
                    id: id.clone(),
                    origin: module.clone(),
                    exporter: exporter.name.clone(),
                }),
                _ => ImportDecision::Private,
            }
        };

        trace!(ty = %id, decision = ?decision, "import decision");
        Ok(Some(decision))
    }
}
