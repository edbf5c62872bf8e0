//! Records which field of a configuration or connection provider receives
//! the element's reference name.

use extmodel_declaration::{ComponentKind, FieldInfo, LoadingContext, ModelProperty};
use extmodel_foundation::{DataType, Error, ErrorContext, ErrorKind, Result};

use crate::enricher::{Enricher, distinct_components_of};

/// Finds the ref-name field of implementing types.
#[derive(Debug, Default)]
pub struct RefNameEnricher;

impl Enricher for RefNameEnricher {
    fn name(&self) -> &'static str {
        "ref-name"
    }

    fn enrich(&self, ctx: &mut LoadingContext) -> Result<()> {
        let graph = ctx.graph_mut();
        let kinds = [ComponentKind::Configuration, ComponentKind::ConnectionProvider];
        for id in distinct_components_of(graph, &kinds) {
            let component = graph.component(id);
            let Some(source) = component.properties.implementing_source() else {
                continue;
            };

            let marked: Vec<&FieldInfo> = source.fields.iter().filter(|f| f.ref_name).collect();
            let context = || ErrorContext::new().with_component(component.name.clone());
            let field = match marked.as_slice() {
                [] => continue,
                [field] => *field,
                many => {
                    return Err(Error::new(ErrorKind::MultipleRefNameFields {
                        type_name: source.type_name.clone(),
                        fields: many.iter().map(|f| f.name.clone()).collect(),
                    })
                    .with_context(context()));
                }
            };
            if field.ty != DataType::String {
                return Err(Error::new(ErrorKind::InvalidRefNameField {
                    type_name: source.type_name.clone(),
                    field: field.name.clone(),
                    found: field.ty.to_string(),
                })
                .with_context(context()));
            }

            let name = field.name.clone();
            graph
                .component_mut(id)
                .properties
                .insert(ModelProperty::RefName(name));
        }
        Ok(())
    }
}
