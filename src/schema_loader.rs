//! JSON Schema loading for exported catalog files.
//!
//! The schema lives at `schema/weld_catalog.schema.json`. A copy is compiled
//! into the binary so installed builds can validate files without the source
//! tree; the on-disk file wins when present so the two cannot drift unnoticed
//! during development (see the `embedded_schema_matches_disk` test).

use crate::catalog::CATALOG_SCHEMA_VERSION;
use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Repository-relative location of the catalog schema.
pub const CANONICAL_CATALOG_SCHEMA_PATH: &str = "schema/weld_catalog.schema.json";

const SCHEMA_VERSION_POINTER: &str = "/properties/schema_version/const";

const EMBEDDED_SCHEMA: &str = include_str!("../schema/weld_catalog.schema.json");

/// Compiled catalog schema plus the version its `schema_version` const pins.
pub struct CatalogSchema {
    pub schema_version: String,
    compiled: JSONSchema,
}

impl CatalogSchema {
    /// Load and compile a schema file.
    pub fn load(path: &Path) -> Result<Self> {
        let value: Value = serde_json::from_reader(
            File::open(path).with_context(|| format!("opening schema {}", path.display()))?,
        )
        .with_context(|| format!("parsing schema {}", path.display()))?;
        Self::compile(&value).with_context(|| format!("compiling schema {}", path.display()))
    }

    /// The copy built into the binary.
    pub fn embedded() -> Result<Self> {
        let value: Value =
            serde_json::from_str(EMBEDDED_SCHEMA).context("parsing embedded catalog schema")?;
        Self::compile(&value).context("compiling embedded catalog schema")
    }

    /// Prefer the schema at `path`, falling back to the embedded copy.
    pub fn resolve(path: &Path) -> Result<Self> {
        if path.is_file() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "schema not on disk, using embedded copy");
            Self::embedded()
        }
    }

    fn compile(schema: &Value) -> Result<Self> {
        let schema_version = extract_schema_version(schema)
            .ok_or_else(|| anyhow!("schema missing schema_version const"))?;
        if schema_version != CATALOG_SCHEMA_VERSION {
            bail!(
                "schema_version '{}' does not match catalog version '{}'",
                schema_version,
                CATALOG_SCHEMA_VERSION
            );
        }
        let compiled = JSONSchema::compile(schema).map_err(|err| anyhow!("{err}"))?;
        Ok(Self {
            schema_version,
            compiled,
        })
    }

    /// Validate a parsed catalog document, joining every violation.
    pub fn validate(&self, instance: &Value) -> Result<()> {
        if let Err(errors) = self.compiled.validate(instance) {
            let details = errors
                .map(|err| format!("{}: {}", err.instance_path, err))
                .collect::<Vec<_>>()
                .join("\n");
            bail!("{details}");
        }
        Ok(())
    }
}

/// Schema path inside the source tree this crate was built from.
pub fn default_catalog_schema_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(CANONICAL_CATALOG_SCHEMA_PATH)
}

fn extract_schema_version(schema: &Value) -> Option<String> {
    let version = schema.pointer(SCHEMA_VERSION_POINTER).and_then(Value::as_str)?;
    if version
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        Some(version.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn embedded_schema_matches_disk() {
        let on_disk: Value = serde_json::from_reader(
            File::open(default_catalog_schema_path()).expect("schema file present"),
        )
        .unwrap();
        let embedded: Value = serde_json::from_str(EMBEDDED_SCHEMA).unwrap();
        assert_eq!(on_disk, embedded);
    }

    #[test]
    fn schema_rejects_missing_collections() {
        let schema = CatalogSchema::embedded().unwrap();
        assert_eq!(schema.schema_version, CATALOG_SCHEMA_VERSION);
        let err = schema
            .validate(&json!({"schema_version": CATALOG_SCHEMA_VERSION, "processes": []}))
            .unwrap_err();
        assert!(err.to_string().contains("characteristics"));
    }

    #[test]
    fn schema_with_foreign_version_is_refused() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            json!({
                "type": "object",
                "properties": {"schema_version": {"const": "other_catalog_v9"}}
            })
        )
        .unwrap();
        let err = CatalogSchema::load(file.path()).err().expect("version mismatch");
        assert!(format!("{err:#}").contains("other_catalog_v9"));
    }
}
