#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;
use weldsheet::{WeldCatalog, write_catalog_to_path};

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Command for the `weldsheet` CLI with catalog and log overrides cleared.
pub fn weldsheet_command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_weldsheet"));
    cmd.current_dir(repo_root())
        .env_remove("WELDSHEET_CATALOG")
        .env_remove("WELDSHEET_LOG");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

pub fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Export `catalog` into a fresh temp dir; the dir must outlive the path.
pub fn export_to_temp(catalog: &WeldCatalog) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new().context("failed to allocate temp dir")?;
    let path = dir.path().join("catalog.json");
    write_catalog_to_path(catalog, &path)?;
    Ok((dir, path))
}

/// Write arbitrary JSON as a catalog candidate next to `dir`.
pub fn write_json(dir: &Path, name: &str, value: &serde_json::Value) -> Result<PathBuf> {
    let path = dir.join(name);
    let text = serde_json::to_string_pretty(value).context("serializing fixture")?;
    std::fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
