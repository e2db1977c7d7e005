//! Table query configuration.
//!
//! A query can come from a TOML file, from command line flags, or both; flags
//! win over file values field by field.
//!
//! ```toml
//! filter = "Навыки: Git, SQL"
//! sort = "Оклад"
//! reverse = "Да"
//! range = "1 20"
//! columns = "Название, Оклад, Название региона"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use vacancy_transform::QueryInput;

/// Query values given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOverrides {
    pub filter: Option<String>,
    pub sort: Option<String>,
    pub reverse: Option<String>,
    pub range: Option<String>,
    pub columns: Option<String>,
}

impl QueryOverrides {
    /// Replaces every field of `base` that has an override.
    pub fn apply(self, mut base: QueryInput) -> QueryInput {
        if let Some(filter) = self.filter {
            base.filter = filter;
        }
        if let Some(sort) = self.sort {
            base.sort = sort;
        }
        if let Some(reverse) = self.reverse {
            base.reverse = reverse;
        }
        if let Some(range) = self.range {
            base.range = range;
        }
        if let Some(columns) = self.columns {
            base.columns = columns;
        }
        base
    }
}

/// Loads a query file. Missing keys stay blank.
pub fn load_query_file(path: &Path) -> Result<QueryInput> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read query file: {}", path.display()))?;
    let input: QueryInput = toml::from_str(&content)
        .with_context(|| format!("parse query file: {}", path.display()))?;
    debug!(path = %path.display(), "loaded query file");
    Ok(input)
}

/// Combines an optional query file with command line overrides.
pub fn resolve_query(file: Option<&Path>, overrides: QueryOverrides) -> Result<QueryInput> {
    let base = match file {
        Some(path) => load_query_file(path)?,
        None => QueryInput::default(),
    };
    Ok(overrides.apply(base))
}
