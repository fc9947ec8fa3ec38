//! Welding catalog wiring.
//!
//! `data` holds the compiled-in table and its accessors, `model` the record
//! types shared with exported files, `identity` the record kinds and the
//! borrowed `RecordRef`, and `index` the validated key lookup used when a
//! catalog is served or read back from disk.

pub mod data;
pub mod identity;
pub mod index;
pub mod model;

pub use data::{catalog, characteristics, parameters, processes, scenarios, tip_sections};
pub use identity::{CatalogRecord, RecordKind, RecordRef};
pub use index::CatalogIndex;
pub use model::{
    CATALOG_SCHEMA_VERSION, Characteristic, Parameter, Scenario, TipSection, WeldCatalog,
    WeldingProcess,
};

pub use model::load_catalog_from_path;
