//! Error type hierarchy resolution.
//!
//! Turns an extension's error type definitions into [`ErrorModel`] chains
//! that all terminate at the platform `ANY` root. Parents are resolved depth
//! first; a definition met again while still on the visiting stack is a cycle.

use std::collections::HashMap;

use extmodel_declaration::{ErrorParent, ErrorTypeDefinition};
use extmodel_foundation::{Error, ErrorKind, ErrorModel, Result, platform_errors};

// =============================================================================
// ErrorTypeResolver
// =============================================================================

/// Resolves the error type definitions of one extension.
#[derive(Debug)]
pub struct ErrorTypeResolver<'a> {
    namespace: String,
    definitions: HashMap<&'a str, &'a ErrorTypeDefinition>,
    resolved: HashMap<&'a str, ErrorModel>,
    visiting: Vec<&'a str>,
}

impl<'a> ErrorTypeResolver<'a> {
    /// Creates a resolver for definitions living in `namespace`.
    ///
    /// # Errors
    /// Returns an error if two definitions share an identifier.
    pub fn new(
        namespace: impl Into<String>,
        definitions: &'a [ErrorTypeDefinition],
    ) -> Result<Self> {
        let namespace = namespace.into();
        let mut by_identifier = HashMap::with_capacity(definitions.len());
        for definition in definitions {
            let identifier = definition.identifier.as_str();
            if by_identifier.insert(identifier, definition).is_some() {
                return Err(Error::duplicate_declaration("error type", identifier, namespace));
            }
        }
        Ok(Self {
            namespace,
            definitions: by_identifier,
            resolved: HashMap::new(),
            visiting: Vec::new(),
        })
    }

    /// Resolves every definition, in declaration order of `definitions`.
    ///
    /// # Errors
    /// Returns an error on a duplicate identifier, a parent cycle, an unknown
    /// extension parent or an unknown platform parent.
    pub fn resolve_all(
        namespace: impl Into<String>,
        definitions: &'a [ErrorTypeDefinition],
    ) -> Result<Vec<ErrorModel>> {
        let mut resolver = Self::new(namespace, definitions)?;
        definitions
            .iter()
            .map(|d| resolver.resolve(&d.identifier))
            .collect()
    }

    /// Resolves one definition and, transitively, its parents.
    ///
    /// # Errors
    /// See [`ErrorTypeResolver::resolve_all`].
    pub fn resolve(&mut self, identifier: &str) -> Result<ErrorModel> {
        let Some(&definition) = self.definitions.get(identifier) else {
            return Err(Error::new(ErrorKind::Internal(format!(
                "error type {identifier} is not defined"
            ))));
        };
        let key = definition.identifier.as_str();

        if let Some(model) = self.resolved.get(key) {
            return Ok(model.clone());
        }
        if let Some(start) = self.visiting.iter().position(|&v| v == key) {
            let cycle = self.visiting[start..]
                .iter()
                .map(|v| (*v).to_string())
                .collect();
            return Err(Error::cyclic_error_type(cycle));
        }

        self.visiting.push(key);
        let parent = self.parent_of(definition);
        self.visiting.pop();

        let model = ErrorModel::child(self.namespace.clone(), key, parent?);
        self.resolved.insert(key, model.clone());
        Ok(model)
    }

    fn parent_of(&mut self, definition: &ErrorTypeDefinition) -> Result<ErrorModel> {
        match &definition.parent {
            ErrorParent::Default => Ok(platform_counterpart(&definition.identifier)),
            ErrorParent::Platform(parent) if parent == platform_errors::ANY => {
                Ok(platform_counterpart(&definition.identifier))
            }
            ErrorParent::Platform(parent) => platform_errors::get(parent)
                .ok_or_else(|| Error::new(ErrorKind::UnknownPlatformError(parent.clone()))),
            ErrorParent::Extension(parent) => {
                if self.definitions.contains_key(parent.as_str()) {
                    self.resolve(parent)
                } else {
                    Err(Error::new(ErrorKind::UnknownErrorParent {
                        error: definition.identifier.clone(),
                        parent: parent.clone(),
                    }))
                }
            }
        }
    }
}

/// The platform error an extension error hangs off when it names no
/// specific parent: the platform error of the same identifier, else `ANY`.
#[must_use]
pub fn platform_counterpart(identifier: &str) -> ErrorModel {
    platform_errors::get(identifier).unwrap_or_else(platform_errors::any)
}
