use std::path::{Path, PathBuf};

use anyhow::Context;
use regex_lite::Regex;
use serde::Deserialize;

/// Package whose purity arch-check enforces.
const DOMAIN_PACKAGE: &str = "cargofleet-domain";

/// Normal (non-dev) dependencies the domain crate may use.
const DOMAIN_ALLOWED_DEPS: &[&str] = &["serde", "thiserror", "tracing", "uuid"];

/// Source patterns that mean the domain is doing I/O or printing.
const FORBIDDEN_PATTERNS: &[&str] = &[
    r"std::(fs|net|process|thread)\b",
    r"\b(e?println|e?print|dbg)!",
    r"\btokio::",
];

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
    workspace_root: PathBuf,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    manifest_path: PathBuf,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    /// `None` for normal dependencies, `"dev"` / `"build"` otherwise
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
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;
    let domain = metadata
        .packages
        .iter()
        .find(|p| p.name == DOMAIN_PACKAGE)
        .with_context(|| format!("package {DOMAIN_PACKAGE} not found in workspace"))?;

    let mut violations = disallowed_dependencies(domain);

    let src_dir = domain
        .manifest_path
        .parent()
        .map(|dir| dir.join("src"))
        .context("domain manifest has no parent directory")?;
    let patterns = FORBIDDEN_PATTERNS
        .iter()
        .map(|p| Regex::new(p).with_context(|| format!("compiling pattern {p}")))
        .collect::<anyhow::Result<Vec<_>>>()?;

    for file in rust_files(&src_dir)? {
        let source = std::fs::read_to_string(&file)
            .with_context(|| format!("reading {}", file.display()))?;
        let relative = file.strip_prefix(&metadata.workspace_root).unwrap_or(&file);
        for (line_no, pattern) in forbidden_lines(&source, &patterns) {
            violations.push(format!(
                "{}:{}: matches forbidden pattern `{}`",
                relative.display(),
                line_no,
                pattern
            ));
        }
    }

    if violations.is_empty() {
        println!("arch-check: {DOMAIN_PACKAGE} is clean");
        Ok(())
    } else {
        for violation in &violations {
            eprintln!("arch-check: {violation}");
        }
        anyhow::bail!("arch-check found {} violation(s)", violations.len())
    }
}

fn disallowed_dependencies(package: &Package) -> Vec<String> {
    package
        .dependencies
        .iter()
        .filter(|dep| dep.kind.is_none())
        .filter(|dep| !DOMAIN_ALLOWED_DEPS.contains(&dep.name.as_str()))
        .map(|dep| format!("{} depends on disallowed crate `{}`", package.name, dep.name))
        .collect()
}

/// Returns `(1-based line number, pattern)` for each offending line.
/// Lines inside `#[cfg(test)]` modules are skipped, as are comments.
fn forbidden_lines<'a>(source: &str, patterns: &'a [Regex]) -> Vec<(usize, &'a str)> {
    let mut hits = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("#[cfg(test)]") {
            break;
        }
        if trimmed.starts_with("//") {
            continue;
        }
        for pattern in patterns {
            if pattern.is_match(line) {
                hits.push((idx + 1, pattern.as_str()));
            }
        }
    }
    hits
}

fn rust_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(rust_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
