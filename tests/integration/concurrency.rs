//! Concurrent loads sharing one catalog
//!
//! Each load owns its own context; only the catalog and the loader are
//! shared.

use std::sync::Arc;
use std::thread;

use extmodel_declaration::{
    ComponentDeclaration, DeclarationGraph, ErrorTypeDefinition, ExtensionDeclaration,
    OutputDeclaration, Parent,
};
use extmodel_enricher::{ExtensionLoader, PipelineConfig};
use extmodel_foundation::{DataType, ModuleOrigin, TypeCatalog};

fn extension(name: &str) -> DeclarationGraph {
    let mut graph = DeclarationGraph::new(
        ExtensionDeclaration::new(name, name, ModuleOrigin::module(format!("org.acme:{name}")))
            .with_error(ErrorTypeDefinition::new("TIMEOUT")),
    );
    let config = graph.declare(ComponentDeclaration::configuration("config"));
    let op = graph.declare(
        ComponentDeclaration::operation("fetch")
            .with_output(OutputDeclaration::new(DataType::String))
            .with_throws(["TIMEOUT"])
            .with_connection(),
    );
    graph.attach(Parent::Extension, config).unwrap();
    graph.attach(Parent::Component(config), op).unwrap();
    graph
}

#[test]
fn concurrent_loads_are_independent() {
    let loader = ExtensionLoader::new(&PipelineConfig::default());
    let catalog = Arc::new(TypeCatalog::new());
    let names = ["alpha", "beta", "gamma", "delta"];

    let models = thread::scope(|scope| {
        let handles: Vec<_> = names
            .iter()
            .map(|&name| {
                let loader = &loader;
                let catalog = Arc::clone(&catalog);
                scope.spawn(move || loader.load(extension(name), catalog))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect::<Vec<_>>()
    });

    for (model, name) in models.iter().zip(names) {
        assert_eq!(model.name(), name);
        let fetch = model.operation("fetch").unwrap().executable().unwrap();
        let namespace = name.to_uppercase();
        assert!(fetch.errors.iter().all(|e| e.namespace == namespace));
        assert_eq!(fetch.errors.len(), 3);
        assert_eq!(
            model
                .configuration("config")
                .and_then(|c| c.stereotype.as_ref())
                .map(ToString::to_string),
            Some(format!("{namespace}:CONFIG"))
        );
    }
}

#[test]
fn models_can_be_shared_across_threads() {
    let model = ExtensionLoader::default()
        .load(extension("alpha"), Arc::new(TypeCatalog::new()))
        .unwrap();
    thread::scope(|scope| {
        for _ in 0..4 {
            let model = model.clone();
            scope.spawn(move || {
                assert!(model.operation("fetch").is_some());
            });
        }
    });
}
