//! Stereotype and element reference resolution.

use extmodel_declaration::{
    ComponentKind, DeclarationGraph, ElementKind, ElementReference, ReferenceTarget,
    StereotypeDefinition,
};
use extmodel_foundation::{
    Error, ErrorKind, Result, StereotypeModel, TypeCatalog, platform_stereotypes,
};
use tracing::warn;

use crate::config::UnresolvedTypePolicy;

/// Platform base stereotype of a component kind; functions have none.
#[must_use]
pub fn kind_base(kind: ComponentKind) -> Option<StereotypeModel> {
    match kind {
        ComponentKind::Configuration => Some(platform_stereotypes::config()),
        ComponentKind::ConnectionProvider => Some(platform_stereotypes::connection()),
        ComponentKind::Operation | ComponentKind::Construct => {
            Some(platform_stereotypes::processor())
        }
        ComponentKind::Source => Some(platform_stereotypes::source()),
        ComponentKind::Function => None,
    }
}

/// Stereotype name derived from a declaration name: `my-config` → `MY_CONFIG`.
#[must_use]
pub fn stereotype_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect()
}

// =============================================================================
// Component stereotypes
// =============================================================================

/// Resolves component stereotypes within one extension namespace.
#[derive(Clone, Debug)]
pub struct StereotypeResolver {
    namespace: String,
}

impl StereotypeResolver {
    /// Creates a resolver for the extension's stereotype namespace.
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Resolves the stereotype of a component.
    #[must_use]
    pub fn resolve(
        &self,
        kind: ComponentKind,
        name: &str,
        definition: Option<&StereotypeDefinition>,
    ) -> Option<StereotypeModel> {
        if let Some(definition) = definition {
            return Some(self.from_definition(definition, kind_base(kind)));
        }
        match kind {
            ComponentKind::Configuration | ComponentKind::ConnectionProvider => {
                let base = kind_base(kind)?;
                Some(
                    StereotypeModel::new(self.namespace.clone(), stereotype_name(name))
                        .with_parent(base),
                )
            }
            other => kind_base(other),
        }
    }

    fn from_definition(
        &self,
        definition: &StereotypeDefinition,
        base: Option<StereotypeModel>,
    ) -> StereotypeModel {
        let namespace = definition
            .namespace
            .as_deref()
            .map_or_else(|| self.namespace.clone(), str::to_uppercase);
        let model = StereotypeModel::new(namespace, stereotype_name(&definition.name));
        let parent = match &definition.parent {
            Some(parent) => Some(self.from_definition(parent, base)),
            None => base,
        };
        match parent {
            Some(parent) => model.with_parent(parent),
            None => model,
        }
    }
}

// =============================================================================
// Element references
// =============================================================================

/// What one reference target resolved to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedTarget {
    /// Allowed stereotypes, in order.
    pub stereotypes: Vec<StereotypeModel>,
    /// Element references, in order.
    pub references: Vec<ElementReference>,
}

/// Resolves reference targets of parameters against the declaring
/// extension and the catalog.
#[derive(Debug)]
pub struct ReferenceResolver<'a> {
    graph: &'a DeclarationGraph,
    catalog: &'a TypeCatalog,
    policy: UnresolvedTypePolicy,
}

impl<'a> ReferenceResolver<'a> {
    /// Creates a resolver. Component stereotypes must already be resolved.
    #[must_use]
    pub fn new(
        graph: &'a DeclarationGraph,
        catalog: &'a TypeCatalog,
        policy: UnresolvedTypePolicy,
    ) -> Self {
        Self {
            graph,
            catalog,
            policy,
        }
    }

    /// Resolves every target of a parameter, appending in declaration order.
    ///
    /// # Errors
    /// Returns an error for an unknown own construct or named config. A
    /// construct or named config of a cataloged extension that the catalog
    /// does not list is an error under the fail policy and skipped otherwise.
    pub fn resolve_all(
        &self,
        parameter: &str,
        targets: &[ReferenceTarget],
    ) -> Result<ResolvedTarget> {
        let mut out = ResolvedTarget::default();
        for target in targets {
            let resolved = self.resolve(parameter, target)?;
            out.stereotypes.extend(resolved.stereotypes);
            out.references.extend(resolved.references);
        }
        Ok(out)
    }

    /// Resolves one target.
    ///
    /// # Errors
    /// See [`ReferenceResolver::resolve_all`].
    pub fn resolve(&self, parameter: &str, target: &ReferenceTarget) -> Result<ResolvedTarget> {
        let extension = self.graph.extension();
        match target {
            ReferenceTarget::Flow => Ok(single(
                platform_stereotypes::flow(),
                ElementReference::new("core", "flow", ElementKind::Flow),
            )),
            ReferenceTarget::ObjectStore => Ok(single(
                platform_stereotypes::object_store(),
                ElementReference::new("os", "objectStore", ElementKind::ObjectStore),
            )),
            ReferenceTarget::Config {
                extension: other,
                name,
            } => match other.as_deref() {
                None => self.own_configs(parameter, name.as_deref()),
                Some(other) if other == extension.name => {
                    self.own_configs(parameter, name.as_deref())
                }
                Some(other) => self.foreign_configs(parameter, other, name.as_deref()),
            },
            ReferenceTarget::Construct {
                extension: other,
                name,
            } => match other.as_deref() {
                None => self.own_construct(parameter, name),
                Some(other) if other == extension.name => self.own_construct(parameter, name),
                Some(other) => self.foreign_construct(parameter, other, name),
            },
        }
    }

    fn own_configs(&self, parameter: &str, name: Option<&str>) -> Result<ResolvedTarget> {
        let namespace = &self.graph.extension().namespace;
        let mut out = ResolvedTarget::default();
        for id in self.graph.components_of_kind(ComponentKind::Configuration) {
            let config = self.graph.component(id);
            if name.is_some_and(|n| n != config.name) {
                continue;
            }
            if let Some(stereotype) = &config.stereotype {
                out.stereotypes.push(stereotype.clone());
            }
            out.references.push(ElementReference::new(
                namespace.clone(),
                config.name.clone(),
                ElementKind::Config,
            ));
        }
        match name {
            Some(name) if out.references.is_empty() => {
                Err(unknown_reference(parameter, ElementKind::Config, name))
            }
            _ => Ok(out),
        }
    }

    fn foreign_configs(
        &self,
        parameter: &str,
        other: &str,
        name: Option<&str>,
    ) -> Result<ResolvedTarget> {
        if let Some(summary) = self.catalog.extension(other) {
            let mut out = ResolvedTarget::default();
            for (config, stereotype) in &summary.config_stereotypes {
                if name.is_some_and(|n| n != config.as_str()) {
                    continue;
                }
                out.stereotypes.push(stereotype.clone());
                out.references.push(ElementReference::new(
                    summary.namespace.clone(),
                    config.clone(),
                    ElementKind::Config,
                ));
            }
            return match name {
                Some(name) if out.references.is_empty() => {
                    self.unresolved(parameter, other, ElementKind::Config, name)
                }
                _ => Ok(out),
            };
        }

        let identifier = name.map_or_else(|| String::from("CONFIG"), stereotype_name);
        Ok(single(
            StereotypeModel::new(stereotype_name(other), identifier)
                .with_parent(platform_stereotypes::config()),
            ElementReference::new(other, name.unwrap_or("config"), ElementKind::Config),
        ))
    }

    fn own_construct(&self, parameter: &str, name: &str) -> Result<ResolvedTarget> {
        let construct = self
            .graph
            .find(ComponentKind::Construct, name)
            .map(|id| self.graph.component(id))
            .ok_or_else(|| unknown_reference(parameter, ElementKind::Construct, name))?;
        let stereotype = construct
            .stereotype
            .clone()
            .unwrap_or_else(platform_stereotypes::processor);
        Ok(single(
            stereotype,
            ElementReference::new(
                self.graph.extension().namespace.clone(),
                name,
                ElementKind::Construct,
            ),
        ))
    }

    fn foreign_construct(
        &self,
        parameter: &str,
        other: &str,
        name: &str,
    ) -> Result<ResolvedTarget> {
        let found = self
            .catalog
            .extension(other)
            .and_then(|summary| summary.construct(name).map(|s| (summary, s)));
        match found {
            Some((summary, stereotype)) => Ok(single(
                stereotype.clone(),
                ElementReference::new(summary.namespace.clone(), name, ElementKind::Construct),
            )),
            None => self.unresolved(parameter, other, ElementKind::Construct, name),
        }
    }

    fn unresolved(
        &self,
        parameter: &str,
        other: &str,
        kind: ElementKind,
        name: &str,
    ) -> Result<ResolvedTarget> {
        match self.policy {
            UnresolvedTypePolicy::Fail => Err(unknown_reference(parameter, kind, name)),
            UnresolvedTypePolicy::Skip => {
                warn!(
                    parameter,
                    extension = other,
                    kind = %kind,
                    element = name,
                    "skipping element the catalog cannot resolve"
                );
                Ok(ResolvedTarget::default())
            }
        }
    }
}

fn single(stereotype: StereotypeModel, reference: ElementReference) -> ResolvedTarget {
    ResolvedTarget {
        stereotypes: vec![stereotype],
        references: vec![reference],
    }
}

fn unknown_reference(parameter: &str, kind: ElementKind, name: &str) -> Error {
    Error::new(ErrorKind::UnknownReference {
        parameter: parameter.to_string(),
        kind: kind.to_string(),
        name: name.to_string(),
    })
}
