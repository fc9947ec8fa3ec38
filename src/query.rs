//! Lookup and filtering over a catalog.
//!
//! Every operation is a pure function of the catalog and its input: results
//! borrow from the catalog, keep authored order, and an empty result is a
//! normal outcome rather than an error. Iterators are lazy and can be
//! re-created at will.

use crate::catalog::{Parameter, RecordKind, RecordRef, WeldCatalog};
use std::collections::BTreeSet;

impl WeldCatalog {
    /// Every record in catalog order: processes, characteristics, scenarios,
    /// parameters, tip sections.
    pub fn records(&self) -> impl Iterator<Item = RecordRef<'_>> {
        self.processes
            .iter()
            .map(RecordRef::Process)
            .chain(self.characteristics.iter().map(RecordRef::Characteristic))
            .chain(self.scenarios.iter().map(RecordRef::Scenario))
            .chain(self.parameters.iter().map(RecordRef::Parameter))
            .chain(self.tip_sections.iter().map(RecordRef::TipSection))
    }

    /// Records of a single family, in authored order.
    pub fn records_of(&self, kind: RecordKind) -> impl Iterator<Item = RecordRef<'_>> {
        self.records().filter(move |record| record.kind() == kind)
    }

    /// Characteristics, then scenarios, carrying `tag` (case-insensitive,
    /// whole-entry match). An empty tag matches nothing.
    pub fn find_by_tag<'a>(&'a self, tag: &str) -> impl Iterator<Item = RecordRef<'a>> + use<'a> {
        let needle = tag.to_lowercase();
        self.characteristics
            .iter()
            .map(RecordRef::Characteristic)
            .chain(self.scenarios.iter().map(RecordRef::Scenario))
            .filter(move |record| {
                !needle.is_empty()
                    && record
                        .tags()
                        .iter()
                        .any(|candidate| candidate.to_lowercase() == needle)
            })
    }

    /// Exact, case-sensitive match on the family's key field.
    pub fn find_by_name(&self, kind: RecordKind, exact: &str) -> Option<RecordRef<'_>> {
        self.records_of(kind).find(|record| record.key() == exact)
    }

    /// Exact key match tried across every family in catalog order.
    pub fn find_by_name_in_any(&self, exact: &str) -> Option<RecordRef<'_>> {
        self.records().find(|record| record.key() == exact)
    }

    /// Records with any text field containing `query`, ignoring case.
    ///
    /// The query is used as given, whitespace included; an empty query
    /// matches everything.
    pub fn search_text<'a>(&'a self, query: &str) -> impl Iterator<Item = RecordRef<'a>> + use<'a> {
        let needle = query.to_lowercase();
        self.records().filter(move |record| {
            record
                .text_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
    }

    /// The headline parameters, in authored order.
    pub fn primary_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(|parameter| parameter.is_primary)
    }

    pub fn secondary_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(|parameter| !parameter.is_primary)
    }

    /// Distinct tags across characteristics and scenarios, first spelling
    /// seen wins.
    pub fn tags(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.characteristics
            .iter()
            .flat_map(|characteristic| characteristic.tags.iter())
            .chain(self.scenarios.iter().flat_map(|scenario| scenario.tags.iter()))
            .filter(|tag| seen.insert(tag.to_lowercase()))
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::{self, RecordKind};

    #[test]
    fn tag_lookup_ignores_case_and_keeps_order() {
        let catalog = catalog::catalog();
        let lower: Vec<_> = catalog.find_by_tag("stainless").collect();
        let upper: Vec<_> = catalog.find_by_tag("STAINLESS").collect();
        assert_eq!(lower, upper);
        assert_eq!(catalog.find_by_tag(" stainless").count(), 0);
        let situations: Vec<_> = lower.iter().map(|record| record.key()).collect();
        assert_eq!(
            situations,
            vec![
                "Stainless - General",
                "Stainless - Open Root",
                "Stainless - Fill & Cap",
                "Stainless - Thin Wall Pipe",
                "Stainless - Avoiding Sugaring",
            ]
        );
    }

    #[test]
    fn tag_lookup_spans_characteristics_then_scenarios() {
        let hits: Vec<_> = catalog::catalog().find_by_tag("root").collect();
        let first_scenario = hits
            .iter()
            .position(|record| record.kind() == RecordKind::Scenario)
            .unwrap();
        assert!(first_scenario > 0);
        assert!(
            hits[first_scenario..]
                .iter()
                .all(|record| record.kind() == RecordKind::Scenario)
        );
        assert_eq!(hits[0].key(), "dynamic");
    }

    #[test]
    fn tag_lookup_matches_whole_entries_only() {
        let catalog = catalog::catalog();
        assert_eq!(catalog.find_by_tag("stain").count(), 0);
        assert_eq!(catalog.find_by_tag("").count(), 0);
        // "AC" is authored in upper case.
        assert_eq!(catalog.find_by_tag("ac").count(), 4);
    }

    #[test]
    fn name_lookup_is_exact_and_case_sensitive() {
        let catalog = catalog::catalog();
        let cmt = catalog
            .find_by_name(RecordKind::Process, "CMT (Cold Metal Transfer)")
            .and_then(|record| record.as_process())
            .expect("CMT present");
        assert_eq!(cmt.short_name, "CMT");
        assert!(catalog.find_by_name(RecordKind::Process, "CMT").is_none());
        assert!(
            catalog
                .find_by_name(RecordKind::Characteristic, "Universal")
                .is_none()
        );
        for kind in RecordKind::ALL {
            assert!(catalog.find_by_name(kind, "does-not-exist").is_none());
        }
        assert!(catalog.find_by_name_in_any("does-not-exist").is_none());
    }

    #[test]
    fn name_lookup_in_any_family_uses_catalog_order() {
        let catalog = catalog::catalog();
        let found = catalog.find_by_name_in_any("Thickness").unwrap();
        assert_eq!(found.kind(), RecordKind::Parameter);
        let found = catalog.find_by_name_in_any("Open Root Tips").unwrap();
        assert_eq!(found.kind(), RecordKind::TipSection);
    }

    #[test]
    fn text_search_crosses_collections() {
        let catalog = catalog::catalog();
        let kinds: Vec<_> = catalog
            .search_text("SUGARING")
            .map(|record| record.kind())
            .collect();
        assert!(kinds.contains(&RecordKind::Scenario));
        assert!(kinds.contains(&RecordKind::TipSection));
        let mut sorted = kinds.clone();
        sorted.sort();
        assert_eq!(kinds, sorted, "results stay in catalog order");
    }

    #[test]
    fn text_search_covers_list_fields_but_not_icons() {
        let catalog = catalog::catalog();
        let hits: Vec<_> = catalog.search_text("hate cleaning spatter").collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].key(), "LSC (Low Spatter Control)");
        assert_eq!(catalog.search_text("offline_bolt").count(), 0);
        assert_eq!(catalog.search_text("no such phrase anywhere").count(), 0);
    }

    #[test]
    fn empty_search_returns_everything() {
        let catalog = catalog::catalog();
        assert_eq!(catalog.search_text("").count(), catalog.records().count());
    }

    #[test]
    fn search_keeps_surrounding_whitespace() {
        let catalog = catalog::catalog();
        let padded: Vec<_> = catalog.search_text("cmt ").collect();
        assert!(!padded.is_empty());
        assert!(padded.len() < catalog.search_text("cmt").count());
        assert!(padded.iter().all(|record| {
            record
                .text_fields()
                .iter()
                .any(|field| field.to_lowercase().contains("cmt "))
        }));
    }

    #[test]
    fn primary_parameters_are_the_three_headline_settings() {
        let symbols: Vec<_> = catalog::catalog()
            .primary_parameters()
            .map(|parameter| parameter.symbol.as_str())
            .collect();
        assert_eq!(symbols, vec!["Thickness", "Arc Length", "Dynamics"]);
        assert_eq!(catalog::catalog().secondary_parameters().count(), 12);
    }

    #[test]
    fn tag_list_is_deduplicated_without_case() {
        let tags = catalog::catalog().tags();
        assert_eq!(tags[0], "default");
        assert_eq!(tags.iter().filter(|tag| tag.eq_ignore_ascii_case("tig")).count(), 1);
        assert_eq!(
            tags.iter()
                .filter(|tag| tag.eq_ignore_ascii_case("synchropulse"))
                .count(),
            1
        );
        assert_eq!(
            tags.iter().filter(|tag| tag.eq_ignore_ascii_case("ac")).count(),
            1
        );
    }
}
