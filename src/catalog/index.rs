//! Indexed view of a welding catalog instance.
//!
//! The index enforces the expected schema version and the per-family key
//! invariants, then offers ordered-map lookup by key. It is strict about
//! duplicates so a hand-edited export cannot silently shadow a record.

use crate::catalog::identity::{RecordKind, RecordRef};
use crate::catalog::data;
use crate::catalog::model::{
    CATALOG_SCHEMA_VERSION, Parameter, WeldCatalog, load_catalog_from_path,
};
use crate::schema_loader::{CatalogSchema, default_catalog_schema_path};
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug)]
/// Catalog plus one key map per record family.
pub struct CatalogIndex {
    catalog: WeldCatalog,
    by_key: BTreeMap<RecordKind, BTreeMap<String, usize>>,
}

impl CatalogIndex {
    /// Index the compiled-in table.
    pub fn builtin() -> Result<Self> {
        Self::from_catalog(data::catalog().clone()).context("indexing built-in catalog")
    }

    /// Load, schema-validate and index a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        validate_against_schema(path)?;
        let catalog =
            load_catalog_from_path(path).with_context(|| format!("loading {}", path.display()))?;
        let index = Self::from_catalog(catalog)
            .with_context(|| format!("indexing {}", path.display()))?;
        tracing::debug!(path = %path.display(), records = index.len(), "loaded catalog");
        Ok(index)
    }

    /// Validate key invariants and build lookup maps for an in-memory catalog.
    pub fn from_catalog(catalog: WeldCatalog) -> Result<Self> {
        validate_schema_version(&catalog.schema_version)?;
        validate_parameter_order(&catalog.parameters)?;
        let by_key = build_index(&catalog)?;
        Ok(Self { catalog, by_key })
    }

    /// Resolve a record by its family key.
    ///
    /// Scenario situations are not required to be unique; the first authored
    /// scenario wins.
    pub fn get(&self, kind: RecordKind, key: &str) -> Option<RecordRef<'_>> {
        let position = *self.by_key.get(&kind)?.get(key)?;
        let catalog = &self.catalog;
        let record = match kind {
            RecordKind::Process => RecordRef::Process(catalog.processes.get(position)?),
            RecordKind::Characteristic => {
                RecordRef::Characteristic(catalog.characteristics.get(position)?)
            }
            RecordKind::Scenario => RecordRef::Scenario(catalog.scenarios.get(position)?),
            RecordKind::Parameter => RecordRef::Parameter(catalog.parameters.get(position)?),
            RecordKind::TipSection => RecordRef::TipSection(catalog.tip_sections.get(position)?),
        };
        Some(record)
    }

    /// Keys of one family in sorted order.
    pub fn keys(&self, kind: RecordKind) -> impl Iterator<Item = &str> {
        self.by_key
            .get(&kind)
            .into_iter()
            .flat_map(|keys| keys.keys().map(String::as_str))
    }

    /// Total record count across every family.
    pub fn len(&self) -> usize {
        self.catalog.records().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Access the underlying catalog in authored order.
    pub fn catalog(&self) -> &WeldCatalog {
        &self.catalog
    }
}

fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version.trim().is_empty() {
        bail!("schema_version must not be empty");
    }
    if schema_version != CATALOG_SCHEMA_VERSION {
        bail!(
            "schema_version '{}' is not supported (expected '{}')",
            schema_version,
            CATALOG_SCHEMA_VERSION
        );
    }
    Ok(())
}

fn validate_parameter_order(parameters: &[Parameter]) -> Result<()> {
    let misplaced = parameters
        .windows(2)
        .find(|pair| !pair[0].is_primary && pair[1].is_primary);
    if let Some(pair) = misplaced {
        bail!(
            "primary parameter '{}' is listed after secondary parameter '{}'",
            pair[1].symbol,
            pair[0].symbol
        );
    }
    Ok(())
}

fn build_index(catalog: &WeldCatalog) -> Result<BTreeMap<RecordKind, BTreeMap<String, usize>>> {
    let mut by_key = BTreeMap::new();
    by_key.insert(
        RecordKind::Process,
        unique_keys(RecordKind::Process, catalog.processes.iter().map(|p| &p.name))?,
    );
    by_key.insert(
        RecordKind::Characteristic,
        unique_keys(
            RecordKind::Characteristic,
            catalog.characteristics.iter().map(|c| &c.name),
        )?,
    );
    by_key.insert(
        RecordKind::Parameter,
        unique_keys(
            RecordKind::Parameter,
            catalog.parameters.iter().map(|p| &p.symbol),
        )?,
    );
    by_key.insert(
        RecordKind::TipSection,
        unique_keys(
            RecordKind::TipSection,
            catalog.tip_sections.iter().map(|t| &t.title),
        )?,
    );

    let mut situations = BTreeMap::new();
    for (position, scenario) in catalog.scenarios.iter().enumerate() {
        if scenario.situation.trim().is_empty() {
            bail!("encountered scenario with no situation");
        }
        situations
            .entry(scenario.situation.clone())
            .or_insert(position);
    }
    by_key.insert(RecordKind::Scenario, situations);

    Ok(by_key)
}

fn unique_keys<'a>(
    kind: RecordKind,
    keys: impl Iterator<Item = &'a String>,
) -> Result<BTreeMap<String, usize>> {
    let mut map = BTreeMap::new();
    for (position, key) in keys.enumerate() {
        if key.trim().is_empty() {
            bail!("encountered {} with no {}", kind, kind.key_field());
        }
        if map.insert(key.clone(), position).is_some() {
            bail!("duplicate {} {} '{}'", kind, kind.key_field(), key);
        }
    }
    Ok(map)
}

fn validate_against_schema(catalog_path: &Path) -> Result<()> {
    let catalog_file = File::open(catalog_path)
        .with_context(|| format!("opening catalog {}", catalog_path.display()))?;
    let catalog_value: Value = serde_json::from_reader(BufReader::new(catalog_file))
        .with_context(|| format!("parsing catalog {}", catalog_path.display()))?;

    let schema_path = default_catalog_schema_path();
    let schema = CatalogSchema::resolve(&schema_path)
        .with_context(|| format!("loading catalog schema {}", schema_path.display()))?;
    schema.validate(&catalog_value).with_context(|| {
        format!(
            "weld catalog {} failed schema validation",
            catalog_path.display()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_indexes_cleanly() {
        let index = CatalogIndex::builtin().expect("builtin index");
        let record = index
            .get(RecordKind::Parameter, "I-S")
            .expect("starting current present");
        assert_eq!(record.key(), "I-S");
        assert_eq!(index.keys(RecordKind::Process).count(), 5);
        assert!(index.get(RecordKind::Process, "cmt").is_none());
    }

    #[test]
    fn duplicate_parameter_symbol_is_rejected() {
        let mut catalog = data::catalog().clone();
        catalog.parameters.push(Parameter {
            symbol: "GPr".to_string(),
            name: "Gas Pre-flow again".to_string(),
            description: "duplicate".to_string(),
            is_primary: false,
        });
        let err = CatalogIndex::from_catalog(catalog).expect_err("duplicate must fail");
        assert!(err.to_string().contains("duplicate parameter symbol 'GPr'"));
    }

    #[test]
    fn primary_parameters_must_come_first() {
        let mut catalog = data::catalog().clone();
        catalog.parameters.reverse();
        let err = CatalogIndex::from_catalog(catalog).expect_err("order must be enforced");
        assert!(
            err.to_string()
                .contains("primary parameter 'Dynamics' is listed after secondary parameter 'GPr'"),
            "{err}"
        );

        let mut catalog = data::catalog().clone();
        let moved = catalog.parameters.remove(1);
        catalog.parameters.push(moved);
        assert!(CatalogIndex::from_catalog(catalog).is_err());
    }

    #[test]
    fn duplicate_situations_are_allowed() {
        let mut catalog = data::catalog().clone();
        let mut repeat = catalog.scenarios[0].clone();
        repeat.notes = "second copy".to_string();
        catalog.scenarios.push(repeat);
        let index = CatalogIndex::from_catalog(catalog).expect("scenarios may repeat");
        let first = index
            .get(RecordKind::Scenario, "General steel fabrication")
            .and_then(|record| record.as_scenario())
            .unwrap();
        assert_eq!(first.notes, "Your bread and butter - works for most steel jobs");
    }

    #[test]
    fn unknown_schema_version_is_rejected() {
        let mut catalog = data::catalog().clone();
        catalog.schema_version = "weld_catalog_v0".to_string();
        let err = CatalogIndex::from_catalog(catalog).unwrap_err();
        assert!(err.to_string().contains("weld_catalog_v0"));
    }
}
