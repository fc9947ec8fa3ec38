//! Serializable representation of the welding catalog.
//!
//! The types mirror `schema/weld_catalog.schema.json` so the compiled-in table,
//! exported files and reloaded files all share one shape. Use `CatalogIndex`
//! when a catalog arrives from disk and its keys need checking; use these
//! structs directly when the full record surface is required.

use crate::catalog::identity::CatalogRecord;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Version tag written into every exported catalog.
pub const CATALOG_SCHEMA_VERSION: &str = "weld_catalog_v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Full catalog: five record families in authored order.
pub struct WeldCatalog {
    pub schema_version: String,
    pub processes: Vec<WeldingProcess>,
    pub characteristics: Vec<Characteristic>,
    pub scenarios: Vec<Scenario>,
    pub parameters: Vec<Parameter>,
    pub tip_sections: Vec<TipSection>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Arc-transfer mode implemented by the machine (Standard, Pulsed, LSC, ...).
pub struct WeldingProcess {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub how_it_works: String,
    #[serde(default)]
    pub best_for: Vec<String>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Synergic line preset.
///
/// `processes` is descriptive text, not a relation: entries such as
/// "LSC Advanced" or "CC/CV" have no matching `WeldingProcess` and are kept
/// verbatim.
pub struct Characteristic {
    pub name: String,
    #[serde(default)]
    pub processes: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Situation-to-recommendation mapping for operators.
pub struct Scenario {
    pub situation: String,
    pub recommended_process: String,
    pub recommended_characteristic: String,
    pub notes: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// User-adjustable machine setting.
pub struct Parameter {
    pub symbol: String,
    pub name: String,
    pub description: String,
    pub is_primary: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Grouped operator advice. `icon` is an opaque glyph name.
pub struct TipSection {
    pub title: String,
    pub icon: String,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl CatalogRecord for WeldingProcess {
    fn key(&self) -> &str {
        &self.name
    }

    fn text_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.short_name.as_str(),
            self.description.as_str(),
            self.how_it_works.as_str(),
        ];
        fields.extend(self.best_for.iter().map(String::as_str));
        fields.extend(self.pros.iter().map(String::as_str));
        fields.extend(self.cons.iter().map(String::as_str));
        fields
    }
}

impl CatalogRecord for Characteristic {
    fn key(&self) -> &str {
        &self.name
    }

    fn text_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.description.as_str()];
        fields.extend(self.processes.iter().map(String::as_str));
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl CatalogRecord for Scenario {
    fn key(&self) -> &str {
        &self.situation
    }

    fn text_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.situation.as_str(),
            self.recommended_process.as_str(),
            self.recommended_characteristic.as_str(),
            self.notes.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields.extend(self.tips.iter().map(String::as_str));
        fields
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl CatalogRecord for Parameter {
    fn key(&self) -> &str {
        &self.symbol
    }

    fn text_fields(&self) -> Vec<&str> {
        vec![
            self.symbol.as_str(),
            self.name.as_str(),
            self.description.as_str(),
        ]
    }
}

impl CatalogRecord for TipSection {
    fn key(&self) -> &str {
        &self.title
    }

    // `icon` names a glyph and is not searchable.
    fn text_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        fields.extend(self.tips.iter().map(String::as_str));
        fields
    }
}

/// Read and parse a catalog from disk without schema or key validation.
pub fn load_catalog_from_path(path: &Path) -> Result<WeldCatalog> {
    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let catalog: WeldCatalog =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(catalog)
}
