//! Writing catalogs to disk and checking files read back.
//!
//! Exports are pretty-printed JSON with a trailing newline and keep every
//! collection in authored order, so exporting a reloaded file reproduces the
//! original bytes.

use crate::catalog::{CatalogIndex, RecordKind, WeldCatalog};
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Serialize a catalog in the export layout.
pub fn catalog_to_json(catalog: &WeldCatalog) -> Result<String> {
    let mut text = serde_json::to_string_pretty(catalog).context("serializing catalog")?;
    text.push('\n');
    Ok(text)
}

/// Write `catalog` to `path`, replacing any existing file.
pub fn write_catalog_to_path(catalog: &WeldCatalog, path: &Path) -> Result<()> {
    let text = catalog_to_json(catalog)?;
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "exported catalog");
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
/// Summary of a catalog file that passed every check.
pub struct CatalogReport {
    pub schema_version: String,
    pub counts: BTreeMap<RecordKind, usize>,
    pub primary_parameters: Vec<String>,
}

impl CatalogReport {
    pub fn from_index(index: &CatalogIndex) -> Self {
        let catalog = index.catalog();
        let mut counts = BTreeMap::new();
        for record in catalog.records() {
            *counts.entry(record.kind()).or_insert(0) += 1;
        }
        Self {
            schema_version: catalog.schema_version.clone(),
            counts,
            primary_parameters: catalog
                .primary_parameters()
                .map(|parameter| parameter.symbol.clone())
                .collect(),
        }
    }
}

/// Schema-validate, parse and index a file, then summarize it.
pub fn check_catalog_file(path: &Path) -> Result<CatalogReport> {
    let index = CatalogIndex::load(path)?;
    Ok(CatalogReport::from_index(&index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use tempfile::TempDir;

    #[test]
    fn export_ends_with_newline_and_keeps_authored_order() {
        let text = catalog_to_json(catalog::catalog()).unwrap();
        assert!(text.ends_with("}\n"));
        let standard = text.find("\"name\": \"Standard\"").unwrap();
        let cmt = text.find("\"name\": \"CMT (Cold Metal Transfer)\"").unwrap();
        assert!(standard < cmt);
    }

    #[test]
    fn check_reports_counts_for_exported_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        write_catalog_to_path(catalog::catalog(), &path).unwrap();
        let report = check_catalog_file(&path).unwrap();
        assert_eq!(report.counts[&RecordKind::Process], 5);
        assert_eq!(report.counts[&RecordKind::TipSection], 5);
        assert_eq!(
            report.primary_parameters,
            vec!["Thickness", "Arc Length", "Dynamics"]
        );
    }

    #[test]
    fn check_rejects_unknown_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        let mut value = serde_json::to_value(catalog::catalog()).unwrap();
        value["processes"][0]["colour"] = serde_json::json!("blue");
        fs::write(&path, value.to_string()).unwrap();
        let err = check_catalog_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed schema validation"));
    }
}
