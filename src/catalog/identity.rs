use crate::catalog::model::{Characteristic, Parameter, Scenario, TipSection, WeldingProcess};
use anyhow::{Error, bail};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One of the five record families held by the catalog.
///
/// Declaration order is catalog order: processes, characteristics,
/// scenarios, parameters, tip sections.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum RecordKind {
    Process,
    Characteristic,
    Scenario,
    Parameter,
    TipSection,
}

impl RecordKind {
    pub const ALL: [RecordKind; 5] = [
        RecordKind::Process,
        RecordKind::Characteristic,
        RecordKind::Scenario,
        RecordKind::Parameter,
        RecordKind::TipSection,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Process => "process",
            RecordKind::Characteristic => "characteristic",
            RecordKind::Scenario => "scenario",
            RecordKind::Parameter => "parameter",
            RecordKind::TipSection => "tip_section",
        }
    }

    /// Section heading on the rendered page.
    pub fn plural_label(self) -> &'static str {
        match self {
            RecordKind::Process => "Processes",
            RecordKind::Characteristic => "Characteristics",
            RecordKind::Scenario => "Scenarios",
            RecordKind::Parameter => "Parameters",
            RecordKind::TipSection => "Tips",
        }
    }

    /// Name of the field that acts as this family's lookup key.
    pub fn key_field(self) -> &'static str {
        match self {
            RecordKind::Process | RecordKind::Characteristic => "name",
            RecordKind::Scenario => "situation",
            RecordKind::Parameter => "symbol",
            RecordKind::TipSection => "title",
        }
    }

    /// Accepts the serialized form plus the plural and a few short aliases.
    pub fn parse(value: &str) -> Option<Self> {
        let kind = match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "process" | "processes" => RecordKind::Process,
            "characteristic" | "characteristics" | "char" => RecordKind::Characteristic,
            "scenario" | "scenarios" => RecordKind::Scenario,
            "parameter" | "parameters" | "param" => RecordKind::Parameter,
            "tip_section" | "tip_sections" | "tips" | "tip" => RecordKind::TipSection,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match RecordKind::parse(value) {
            Some(kind) => Ok(kind),
            None => bail!(
                "unknown record kind '{value}' (expected one of: process, characteristic, scenario, parameter, tip_section)"
            ),
        }
    }
}

impl Serialize for RecordKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RecordKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        RecordKind::parse(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown record kind '{value}'")))
    }
}

/// Behavior shared by every catalog record.
pub trait CatalogRecord {
    /// Value of the family's key field (see [`RecordKind::key_field`]).
    fn key(&self) -> &str;

    /// Every free-text field that text search looks at, in display order.
    fn text_fields(&self) -> Vec<&str>;

    /// Search keywords; only characteristics and scenarios carry any.
    fn tags(&self) -> &[String] {
        &[]
    }
}

/// Borrowed pointer to one record of any family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordRef<'a> {
    Process(&'a WeldingProcess),
    Characteristic(&'a Characteristic),
    Scenario(&'a Scenario),
    Parameter(&'a Parameter),
    TipSection(&'a TipSection),
}

impl<'a> RecordRef<'a> {
    pub fn kind(&self) -> RecordKind {
        match self {
            RecordRef::Process(_) => RecordKind::Process,
            RecordRef::Characteristic(_) => RecordKind::Characteristic,
            RecordRef::Scenario(_) => RecordKind::Scenario,
            RecordRef::Parameter(_) => RecordKind::Parameter,
            RecordRef::TipSection(_) => RecordKind::TipSection,
        }
    }

    pub fn key(&self) -> &'a str {
        match *self {
            RecordRef::Process(record) => record.key(),
            RecordRef::Characteristic(record) => record.key(),
            RecordRef::Scenario(record) => record.key(),
            RecordRef::Parameter(record) => record.key(),
            RecordRef::TipSection(record) => record.key(),
        }
    }

    pub fn text_fields(&self) -> Vec<&'a str> {
        match *self {
            RecordRef::Process(record) => record.text_fields(),
            RecordRef::Characteristic(record) => record.text_fields(),
            RecordRef::Scenario(record) => record.text_fields(),
            RecordRef::Parameter(record) => record.text_fields(),
            RecordRef::TipSection(record) => record.text_fields(),
        }
    }

    pub fn tags(&self) -> &'a [String] {
        match *self {
            RecordRef::Process(record) => record.tags(),
            RecordRef::Characteristic(record) => record.tags(),
            RecordRef::Scenario(record) => record.tags(),
            RecordRef::Parameter(record) => record.tags(),
            RecordRef::TipSection(record) => record.tags(),
        }
    }

    pub fn as_process(&self) -> Option<&'a WeldingProcess> {
        match *self {
            RecordRef::Process(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_scenario(&self) -> Option<&'a Scenario> {
        match *self {
            RecordRef::Scenario(record) => Some(record),
            _ => None,
        }
    }
}

/// Serialized as `{"kind": "...", "record": {...}}`.
impl Serialize for RecordRef<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("RecordRef", 2)?;
        state.serialize_field("kind", &self.kind())?;
        match *self {
            RecordRef::Process(record) => state.serialize_field("record", record)?,
            RecordRef::Characteristic(record) => state.serialize_field("record", record)?,
            RecordRef::Scenario(record) => state.serialize_field("record", record)?,
            RecordRef::Parameter(record) => state.serialize_field("record", record)?,
            RecordRef::TipSection(record) => state.serialize_field("record", record)?,
        }
        state.end()
    }
}
