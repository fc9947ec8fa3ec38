//! Terminal front end for the welding cheat sheet.
//!
//! Lists collections and their keys, looks records up by key, filters by
//! tag, runs text search, and exports or checks catalog files. `--json`
//! switches every command to machine-readable output. A missing record is reported but is not
//! a failure.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use weldsheet::runtime::{init_tracing, load_index};
use weldsheet::{
    CatalogIndex, RecordKind, RecordRef, check_catalog_file, render_listing, render_record_text,
    write_catalog_to_path,
};

#[derive(Parser, Debug)]
#[command(name = "weldsheet", version, about = "Welding cheat sheet lookups")]
struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[arg(
        long,
        global = true,
        env = "WELDSHEET_CATALOG",
        help = "Read an exported catalog file instead of the built-in table"
    )]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List welding processes.
    Processes,
    /// List characteristics (synergic lines).
    Characteristics,
    /// List usage scenarios.
    Scenarios,
    /// List machine parameters.
    Parameters {
        #[arg(long, help = "Only the headline parameters")]
        primary: bool,
    },
    /// List tip sections.
    Tips,
    /// Show one record by its exact key.
    Show { kind: RecordKind, key: String },
    /// Show the first record of any kind whose key is exactly `key`.
    Lookup { key: String },
    /// List the keys of one record kind, sorted.
    Keys { kind: RecordKind },
    /// Characteristics and scenarios carrying a tag.
    Tag { tag: String },
    /// Case-insensitive text search across every collection.
    Search { query: String },
    /// Write the catalog as JSON.
    Export { path: PathBuf },
    /// Validate a catalog file and summarize it.
    Check { path: PathBuf },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing("warn");

    match cli.command {
        Commands::Check { path } => check(&path, cli.json),
        command => {
            let index = load_index(cli.catalog.as_deref())?;
            dispatch(command, &index, cli.json)
        }
    }
}

fn dispatch(command: Commands, index: &CatalogIndex, json: bool) -> Result<()> {
    let catalog = index.catalog();
    match command {
        Commands::Processes => emit(json, catalog.records_of(RecordKind::Process)),
        Commands::Characteristics => emit(json, catalog.records_of(RecordKind::Characteristic)),
        Commands::Scenarios => emit(json, catalog.records_of(RecordKind::Scenario)),
        Commands::Parameters { primary } => emit(
            json,
            catalog
                .parameters
                .iter()
                .filter(|parameter| !primary || parameter.is_primary)
                .map(RecordRef::Parameter),
        ),
        Commands::Tips => emit(json, catalog.records_of(RecordKind::TipSection)),
        Commands::Show { kind, key } => show(
            json,
            catalog.find_by_name(kind, &key),
            &format!("no {} with {} '{}'", kind, kind.key_field(), key),
        ),
        Commands::Lookup { key } => show(
            json,
            catalog.find_by_name_in_any(&key),
            &format!("no record keyed '{key}'"),
        ),
        Commands::Keys { kind } => {
            let keys: Vec<&str> = index.keys(kind).collect();
            if json {
                return print_json(&keys);
            }
            for key in keys {
                println!("{key}");
            }
            Ok(())
        }
        Commands::Tag { tag } => emit(json, catalog.find_by_tag(&tag)),
        Commands::Search { query } => emit(json, catalog.search_text(&query)),
        Commands::Export { path } => {
            write_catalog_to_path(catalog, &path)?;
            if !json {
                println!("wrote {}", path.display());
            }
            Ok(())
        }
        Commands::Check { path } => check(&path, json),
    }
}

fn check(path: &Path, json: bool) -> Result<()> {
    let report = check_catalog_file(path)?;
    if json {
        return print_json(&report);
    }
    println!("{}: ok ({})", path.display(), report.schema_version);
    for (kind, count) in &report.counts {
        println!("  {:<15} {}", kind.as_str(), count);
    }
    println!("  primary         {}", report.primary_parameters.join(", "));
    Ok(())
}

fn emit<'a>(json: bool, records: impl Iterator<Item = RecordRef<'a>>) -> Result<()> {
    if json {
        let records: Vec<_> = records.collect();
        return print_json(&records);
    }
    let mut out = String::new();
    render_listing(records, &mut out).context("rendering listing")?;
    print!("{out}");
    Ok(())
}

fn show(json: bool, record: Option<RecordRef<'_>>, missing: &str) -> Result<()> {
    match (record, json) {
        (Some(record), true) => print_json(&record),
        (None, true) => print_json(&Option::<RecordRef<'_>>::None),
        (Some(record), false) => {
            let mut out = String::new();
            render_record_text(record, &mut out).context("rendering record")?;
            print!("{out}");
            Ok(())
        }
        (None, false) => {
            println!("not found: {missing}");
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("serializing output")?
    );
    Ok(())
}
