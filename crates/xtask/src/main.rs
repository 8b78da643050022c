use std::collections::BTreeMap;

use anyhow::Context;
use serde::Deserialize;

/// Crates the domain layer must never pull in; they belong to binaries.
const DOMAIN_FORBIDDEN_DEPS: &[&str] = &["anyhow", "tracing-subscriber", "dotenvy", "roster-demo"];

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo run -p xtask -- <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    #[serde(default)]
    kind: Option<String>,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata output")?;
    let violations = forbidden_deps(&metadata, "roster-domain", DOMAIN_FORBIDDEN_DEPS)?;

    if !violations.is_empty() {
        for (dep, kind) in &violations {
            eprintln!("roster-domain depends on forbidden crate `{dep}` ({kind})");
        }
        anyhow::bail!("arch-check failed with {} violation(s)", violations.len());
    }

    println!("arch-check passed");
    Ok(())
}

/// Non-dev dependencies of `package` that appear in `forbidden`, with their kind.
fn forbidden_deps(
    metadata: &Metadata,
    package: &str,
    forbidden: &[&str],
) -> anyhow::Result<BTreeMap<String, String>> {
    let package = metadata
        .packages
        .iter()
        .find(|p| p.name == package)
        .with_context(|| format!("package `{package}` not found in workspace"))?;

    Ok(package
        .dependencies
        .iter()
        .filter(|dep| dep.kind.as_deref() != Some("dev"))
        .filter(|dep| forbidden.contains(&dep.name.as_str()))
        .map(|dep| {
            let kind = dep.kind.clone().unwrap_or_else(|| "normal".to_string());
            (dep.name.clone(), kind)
        })
        .collect())
}
