//! The mutable declaration graph.
//!
//! Components and parameter groups live in arenas owned by the graph and are
//! linked by handle. Attaching one component handle to several parents
//! yields a flyweight: a single instance reachable along several paths.
//!
//! The graph is the builder API front-ends populate:
//!
//! ```
//! use extmodel_declaration::{
//!     ComponentDeclaration, DeclarationGraph, ExtensionDeclaration, Parent,
//!     ParameterDeclaration, ParameterGroupDeclaration,
//! };
//! use extmodel_foundation::{DataType, ModuleOrigin};
//!
//! let mut graph = DeclarationGraph::new(ExtensionDeclaration::new(
//!     "heisenberg",
//!     "heisenberg",
//!     ModuleOrigin::module("org.acme:heisenberg"),
//! ));
//! let group = graph.declare_group(
//!     ParameterGroupDeclaration::default_group()
//!         .with_parameter(ParameterDeclaration::new("victim", DataType::String)),
//! );
//! let kill = graph.declare(ComponentDeclaration::operation("kill").with_group(group));
//! let config = graph.declare(ComponentDeclaration::configuration("config"));
//! graph.attach(Parent::Extension, config).unwrap();
//! graph.attach(Parent::Component(config), kill).unwrap();
//! graph.attach(Parent::Extension, kill).unwrap();
//!
//! assert_eq!(graph.references().len(), 3);
//! assert_eq!(graph.components().len(), 2);
//! ```

use std::collections::HashSet;

use extmodel_foundation::{Error, ErrorKind, Result};

use crate::component::{ComponentDeclaration, ComponentKind};
use crate::extension::ExtensionDeclaration;
use crate::id::{ComponentId, GroupId};
use crate::parameter::{ParameterDeclaration, ParameterGroupDeclaration};

/// Where a component is attached.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Parent {
    /// The extension root.
    Extension,
    /// Another component.
    Component(ComponentId),
}

/// One parent → child edge of the graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    /// The owning declaration.
    pub parent: Parent,
    /// The referenced component.
    pub id: ComponentId,
}

/// Arena-backed declaration graph rooted at an extension.
#[derive(Clone, Debug)]
pub struct DeclarationGraph {
    extension: ExtensionDeclaration,
    components: Vec<ComponentDeclaration>,
    groups: Vec<ParameterGroupDeclaration>,
}

impl DeclarationGraph {
    /// Creates a graph with no components.
    #[must_use]
    pub fn new(extension: ExtensionDeclaration) -> Self {
        Self {
            extension,
            components: Vec::new(),
            groups: Vec::new(),
        }
    }

    // =========================================================================
    // Building
    // =========================================================================

    /// Adds a component to the arena without attaching it anywhere.
    ///
    /// # Panics
    ///
    /// Panics if the number of declared components exceeds `u32::MAX`.
    pub fn declare(&mut self, component: ComponentDeclaration) -> ComponentId {
        let id = ComponentId(u32::try_from(self.components.len()).expect("too many components"));
        self.components.push(component);
        id
    }

    /// Adds a parameter group to the arena.
    ///
    /// # Panics
    ///
    /// Panics if the number of declared groups exceeds `u32::MAX`.
    pub fn declare_group(&mut self, group: ParameterGroupDeclaration) -> GroupId {
        let id = GroupId(u32::try_from(self.groups.len()).expect("too many parameter groups"));
        self.groups.push(group);
        id
    }

    /// Attaches a declared component under a parent.
    ///
    /// Attaching the same handle twice to one parent is a no-op.
    ///
    /// # Errors
    /// Returns an error if the parent cannot own the child's kind, if a
    /// different sibling of the same kind already has the child's name, or if
    /// two of the child's parameters share a name.
    pub fn attach(&mut self, parent: Parent, child: ComponentId) -> Result<()> {
        self.check_parameter_names(child)?;
        let child_decl = self.component(child);
        if let Parent::Component(owner) = parent {
            let owner_decl = self.component(owner);
            if !owner_decl.kind.accepts(child_decl.kind) {
                return Err(Error::new(ErrorKind::InvalidPlacement {
                    kind: child_decl.kind.to_string(),
                    name: child_decl.name.clone(),
                    parent: owner_decl.name.clone(),
                }));
            }
        }

        let siblings = self.children(parent);
        if siblings.contains(&child) {
            return Ok(());
        }
        let duplicate = siblings.iter().any(|&sibling| {
            let s = self.component(sibling);
            s.kind == child_decl.kind && s.name == child_decl.name
        });
        if duplicate {
            return Err(Error::duplicate_declaration(
                child_decl.kind.to_string(),
                child_decl.name.clone(),
                self.parent_name(parent),
            ));
        }

        match parent {
            Parent::Extension => self.extension.components.push(child),
            Parent::Component(owner) => self.component_mut(owner).children.push(child),
        }
        Ok(())
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Returns the extension root.
    #[must_use]
    pub fn extension(&self) -> &ExtensionDeclaration {
        &self.extension
    }

    /// Returns the extension root for mutation.
    pub fn extension_mut(&mut self) -> &mut ExtensionDeclaration {
        &mut self.extension
    }

    /// Returns a component by handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle was issued by another graph.
    #[must_use]
    pub fn component(&self, id: ComponentId) -> &ComponentDeclaration {
        &self.components[id.index()]
    }

    /// Returns a component by handle for mutation.
    ///
    /// # Panics
    ///
    /// Panics if the handle was issued by another graph.
    pub fn component_mut(&mut self, id: ComponentId) -> &mut ComponentDeclaration {
        &mut self.components[id.index()]
    }

    /// Returns a group by handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle was issued by another graph.
    #[must_use]
    pub fn group(&self, id: GroupId) -> &ParameterGroupDeclaration {
        &self.groups[id.index()]
    }

    /// Returns a group by handle for mutation.
    ///
    /// # Panics
    ///
    /// Panics if the handle was issued by another graph.
    pub fn group_mut(&mut self, id: GroupId) -> &mut ParameterGroupDeclaration {
        &mut self.groups[id.index()]
    }

    /// Returns the children attached under a parent.
    #[must_use]
    pub fn children(&self, parent: Parent) -> &[ComponentId] {
        match parent {
            Parent::Extension => &self.extension.components,
            Parent::Component(owner) => &self.component(owner).children,
        }
    }

    /// Returns the display name of a parent.
    #[must_use]
    pub fn parent_name(&self, parent: Parent) -> String {
        match parent {
            Parent::Extension => self.extension.name.clone(),
            Parent::Component(owner) => self.component(owner).name.clone(),
        }
    }

    /// Number of declared components, attached or not.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Number of declared groups.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Every parent → child edge reachable from the root, depth first in
    /// declaration order. A flyweight appears once per parent.
    #[must_use]
    pub fn references(&self) -> Vec<Reference> {
        let mut out = Vec::new();
        for &id in &self.extension.components {
            out.push(Reference {
                parent: Parent::Extension,
                id,
            });
            for &child in &self.component(id).children {
                out.push(Reference {
                    parent: Parent::Component(id),
                    id: child,
                });
            }
        }
        out
    }

    /// Every reachable component once, in first-seen order.
    #[must_use]
    pub fn components(&self) -> Vec<ComponentId> {
        let mut seen = HashSet::new();
        self.references()
            .into_iter()
            .map(|r| r.id)
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Every reachable component of a kind once, in first-seen order.
    #[must_use]
    pub fn components_of_kind(&self, kind: ComponentKind) -> Vec<ComponentId> {
        self.components()
            .into_iter()
            .filter(|&id| self.component(id).kind == kind)
            .collect()
    }

    /// Finds a reachable component by kind and name.
    #[must_use]
    pub fn find(&self, kind: ComponentKind, name: &str) -> Option<ComponentId> {
        self.components().into_iter().find(|&id| {
            let c = self.component(id);
            c.kind == kind && c.name == name
        })
    }

    // =========================================================================
    // Parameters
    // =========================================================================

    /// Iterates a component's groups in declaration order.
    pub fn groups_of(
        &self,
        id: ComponentId,
    ) -> impl Iterator<Item = (GroupId, &ParameterGroupDeclaration)> {
        self.component(id)
            .groups
            .iter()
            .map(move |&gid| (gid, self.group(gid)))
    }

    /// Iterates a component's parameters across groups.
    pub fn parameters_of(&self, id: ComponentId) -> impl Iterator<Item = &ParameterDeclaration> {
        self.groups_of(id).flat_map(|(_, g)| g.parameters.iter())
    }

    /// Looks up a component's parameter by name across groups.
    #[must_use]
    pub fn find_parameter(&self, id: ComponentId, name: &str) -> Option<&ParameterDeclaration> {
        self.parameters_of(id).find(|p| p.name == name)
    }

    /// Checks that no two parameters of a component share a name, across
    /// all of its groups.
    ///
    /// # Errors
    /// Returns [`ErrorKind::DuplicateParameter`] naming the first repeat.
    pub fn check_parameter_names(&self, id: ComponentId) -> Result<()> {
        let mut seen = HashSet::new();
        match self.parameters_of(id).find(|p| !seen.insert(p.name.as_str())) {
            Some(repeat) => Err(Error::duplicate_parameter(
                self.component(id).name.clone(),
                repeat.name.clone(),
            )),
            None => Ok(()),
        }
    }

    /// Returns true if the component has a parameter with this name.
    #[must_use]
    pub fn has_parameter(&self, id: ComponentId, name: &str) -> bool {
        self.find_parameter(id, name).is_some()
    }

    /// Returns the component's default group, creating it or un-sharing it
    /// as needed so that parameters added to it affect only this component.
    pub fn owned_default_group(&mut self, id: ComponentId) -> GroupId {
        let existing = self
            .component(id)
            .groups
            .iter()
            .position(|&gid| self.group(gid).is_default());

        match existing {
            Some(slot) => {
                let gid = self.component(id).groups[slot];
                if !self.is_group_shared(gid, id) {
                    return gid;
                }
                let copy = self.group(gid).clone();
                let owned = self.declare_group(copy);
                self.component_mut(id).groups[slot] = owned;
                owned
            }
            None => {
                let owned = self.declare_group(ParameterGroupDeclaration::default_group());
                self.component_mut(id).groups.insert(0, owned);
                owned
            }
        }
    }

    fn is_group_shared(&self, gid: GroupId, owner: ComponentId) -> bool {
        self.components
            .iter()
            .enumerate()
            .any(|(index, c)| index != owner.index() && c.groups.contains(&gid))
    }
}
