//! Layer guardrails for the directory backend.
//!
//! `cesa-backend` keeps a framework-free `domain` (entities, services and
//! ports) between `inbound` HTTP adapters and `outbound` store adapters.
//! This crate parses every file under `backend/src` with `syn` and reports:
//!
//! - imports that cross into a sealed layer (domain into either adapter,
//!   inbound into outbound, outbound into inbound)
//! - crates used outside the layer that owns them (actix and utoipa stay
//!   out of the domain, configuration stays in the server)
//! - `EntityStore` implemented anywhere but `outbound`, and the driving
//!   ports implemented anywhere but `domain`
//! - HTTP adapters naming a concrete service or the store port instead of
//!   going through `DirectoryCommand` and `DirectoryQuery`
//!
//! Files outside the three layers compose them and are only parsed.

mod facts;
mod layer;
mod rule;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use layer::Layer;
pub use rule::{Finding, Rule};

use facts::Facts;

/// A Rust source file below `backend/src`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path relative to `backend/src`.
    pub path: PathBuf,
    /// Full source text.
    pub text: String,
}

impl SourceFile {
    /// Pair a relative path with its source text.
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}

/// Reasons a lint run fails.
#[derive(Debug, Error)]
pub enum LintError {
    /// Walking or reading the source tree failed.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File or directory being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A file is not valid Rust.
    #[error("failed to parse {}: {message}", .path.display())]
    Parse {
        /// Path relative to `backend/src`.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },
    /// One or more files break a boundary rule.
    #[error("layer boundaries broken:{}", render(.0))]
    Violations(Vec<Finding>),
}

fn render(findings: &[Finding]) -> String {
    findings
        .iter()
        .map(|finding| format!("\n- {finding}"))
        .collect()
}

/// Check the backend rooted at `backend_dir` (the directory holding `src/`).
///
/// # Errors
/// [`LintError::Violations`] listing every broken rule, or a read or parse
/// failure.
pub fn check_backend(backend_dir: &Path) -> Result<(), LintError> {
    let sources = read_sources(&backend_dir.join("src"))?;
    check_sources(&sources)
}

/// Check already loaded sources.
///
/// # Errors
/// As for [`check_backend`], minus read failures.
pub fn check_sources(sources: &[SourceFile]) -> Result<(), LintError> {
    let mut findings = Vec::new();
    for source in sources {
        let parsed = syn::parse_file(&source.text).map_err(|err| LintError::Parse {
            path: source.path.clone(),
            message: err.to_string(),
        })?;
        let layer = Layer::of(&source.path);
        findings.extend(
            rule::broken_rules(layer, &Facts::gather(&parsed))
                .into_iter()
                .map(|rule| Finding {
                    file: source.path.clone(),
                    rule,
                }),
        );
    }

    if findings.is_empty() {
        Ok(())
    } else {
        Err(LintError::Violations(findings))
    }
}

/// Load every `.rs` file below `src_dir`, sorted by path.
///
/// # Errors
/// [`LintError::Read`] when a directory or file cannot be read.
pub fn read_sources(src_dir: &Path) -> Result<Vec<SourceFile>, LintError> {
    let mut sources = Vec::new();
    let mut pending = vec![src_dir.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let entries = fs::read_dir(&dir).map_err(|source| LintError::Read {
            path: dir.clone(),
            source,
        })?;
        for entry in entries {
            let path = entry
                .map_err(|source| LintError::Read {
                    path: dir.clone(),
                    source,
                })?
                .path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                let text = fs::read_to_string(&path).map_err(|source| LintError::Read {
                    path: path.clone(),
                    source,
                })?;
                let relative = path.strip_prefix(src_dir).unwrap_or(&path).to_path_buf();
                sources.push(SourceFile::new(relative, text));
            }
        }
    }
    sources.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(sources)
}
