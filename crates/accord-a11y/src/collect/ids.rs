use std::collections::BTreeMap;

use serde::Serialize;

use crate::tree::{DocumentId, Tree};

/// Id usage of one document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IdIndex {
    pub document: DocumentId,
    pub counts: BTreeMap<String, usize>,
    pub duplicates: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Ids {
    /// Indexed by document
    pub documents: Vec<IdIndex>,
}

impl Ids {
    pub fn collect(tree: &Tree) -> Self {
        let documents = tree
            .documents()
            .iter()
            .map(|scope| IdIndex {
                document: scope.id,
                counts: scope.ids().map(|(id, els)| (id.to_string(), els.len())).collect(),
                duplicates: scope.duplicate_ids().into_iter().map(str::to_string).collect(),
            })
            .collect();
        Self { documents }
    }

    pub fn duplicates(&self, document: DocumentId) -> &[String] {
        self.documents
            .get(document.index())
            .map(|index| index.duplicates.as_slice())
            .unwrap_or_default()
    }
}
