//! Shared library for the welding cheat sheet.
//!
//! The crate holds one compiled-in catalog of welding processes, synergic
//! characteristics, usage scenarios, machine parameters and tip sections. The
//! public surface is what the binaries depend on: catalog accessors, the query
//! methods on [`WeldCatalog`], page and text rendering, export/check helpers,
//! and the HTTP router.

pub mod catalog;
pub mod export;
pub mod query;
pub mod render;
pub mod runtime;
pub mod schema_loader;
pub mod server;

pub use catalog::{
    CATALOG_SCHEMA_VERSION, CatalogIndex, CatalogRecord, Characteristic, Parameter, RecordKind,
    RecordRef, Scenario, TipSection, WeldCatalog, WeldingProcess, catalog, characteristics,
    load_catalog_from_path, parameters, processes, scenarios, tip_sections,
};
pub use export::{CatalogReport, catalog_to_json, check_catalog_file, write_catalog_to_path};
pub use render::{PageQuery, render_listing, render_page, render_record_text};
pub use schema_loader::{CANONICAL_CATALOG_SCHEMA_PATH, CatalogSchema, default_catalog_schema_path};
