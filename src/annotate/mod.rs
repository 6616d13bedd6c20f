//! Response annotation: turns a raw character reply into display text plus
//! an emotion and an optional motion cue for the renderer.

pub mod classifier;
pub mod tags;
pub mod types;

#[cfg(test)]
mod tests;

pub use classifier::{classify, KeywordRule};
pub use tags::{
    contains_directive, extract_directives, parse_response, safe_emit_boundary, sanitize, Directives,
};
pub use types::{Emotion, Motion, ParsedResponse, UnknownVariant};

use crate::locale::KeywordTable;
use std::sync::Arc;

/// Annotates replies against one keyword table.
///
/// Cloning is cheap; clones share the table. Replacing the table only
/// affects calls made afterwards.
#[derive(Debug, Clone)]
pub struct Annotator {
    table: Arc<KeywordTable>,
}

impl Annotator {
    pub fn new(table: KeywordTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    pub fn table(&self) -> &KeywordTable {
        &self.table
    }

    pub fn set_table(&mut self, table: KeywordTable) {
        self.table = Arc::new(table);
    }

    pub fn annotate(&self, raw: Option<&str>) -> ParsedResponse {
        parse_response(raw, self.table.rules())
    }
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new(KeywordTable::default())
    }
}
