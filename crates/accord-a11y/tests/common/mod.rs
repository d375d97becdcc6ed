//! Shared fixtures for the integration tests

use std::sync::Once;

use accord_a11y::{DocumentId, ElementId, Engine, EngineConfig, NodeModel};
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a test-writer subscriber honoring `RUST_LOG`
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
            .with_test_writer()
            .try_init();
    });
}

pub fn evaluate(html: &str) -> NodeModel {
    evaluate_with(html, EngineConfig::default())
}

pub fn evaluate_with(html: &str, config: EngineConfig) -> NodeModel {
    init_logging();
    let document = accord_html::parse_document(html).expect("fixture parses");
    Engine::new(config).evaluate_document(&document)
}

pub fn by_id(model: &NodeModel, id: &str) -> ElementId {
    model
        .element_by_id(DocumentId::TOP, id)
        .unwrap_or_else(|| panic!("no element with id {id}"))
}
