//! Workspace mode: discover Go projects and collect their routes.
//!
//! A project root is any directory that directly contains the configured
//! marker file (`main.go` by default). Every `.go` file below a root is
//! resolved independently; a file that cannot be read or parsed contributes
//! no routes and never fails the scan.

use crate::config::Config;
use crate::model::{FileRoute, ProjectRoutes};
use crate::resolver::RouteExtractor;
use anyhow::{Result, bail};
use ignore::{DirEntry, WalkBuilder};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    pub no_ignore: bool,
}

impl ScanOptions {
    pub fn new(no_ignore: bool) -> Self {
        Self { no_ignore }
    }
}

pub fn scan_workspace(workspace: &Path, options: ScanOptions) -> Result<Vec<ProjectRoutes>> {
    let mut extractor = RouteExtractor::new()?;
    let mut projects = Vec::new();
    for root in find_project_roots(workspace, options)? {
        projects.push(collect_project(&mut extractor, workspace, &root, options)?);
    }
    Ok(projects)
}

/// Directories under `workspace` that directly contain the project marker,
/// sorted.
pub fn find_project_roots(workspace: &Path, options: ScanOptions) -> Result<Vec<PathBuf>> {
    ensure_dir(workspace)?;
    let config = Config::get();
    let mut roots = BTreeSet::new();
    for path in walk_files(workspace, options, config) {
        let name = path.file_name().and_then(|name| name.to_str());
        if name != Some(config.project_marker.as_str()) {
            continue;
        }
        if let Some(parent) = path.parent() {
            debug!(root = %parent.display(), "found project root");
            roots.insert(parent.to_path_buf());
        }
    }
    Ok(roots.into_iter().collect())
}

pub fn routes_for_project(
    workspace: &Path,
    root: &Path,
    options: ScanOptions,
) -> Result<ProjectRoutes> {
    let mut extractor = RouteExtractor::new()?;
    collect_project(&mut extractor, workspace, root, options)
}

fn collect_project(
    extractor: &mut RouteExtractor,
    workspace: &Path,
    root: &Path,
    options: ScanOptions,
) -> Result<ProjectRoutes> {
    ensure_dir(root)?;
    let config = Config::get();
    let mut files: Vec<PathBuf> = walk_files(root, options, config)
        .into_iter()
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("go"))
        .collect();
    files.sort();

    let mut routes = Vec::new();
    for path in files {
        let rel = relative_display(workspace, &path);
        match fs::metadata(&path) {
            Ok(meta) if meta.len() > config.max_file_bytes => {
                warn!(file = %rel, size = meta.len(), "skipping oversized file");
                continue;
            }
            Ok(_) => {}
            Err(err) => {
                warn!(file = %rel, error = %err, "skipping unreadable file");
                continue;
            }
        }
        match extractor.extract_file(&path) {
            Ok(found) => routes.extend(found.into_iter().map(|route| FileRoute {
                file: rel.clone(),
                route,
            })),
            Err(err) => warn!(file = %rel, error = %err, "skipping file"),
        }
    }

    Ok(ProjectRoutes {
        root: relative_display(workspace, root),
        routes,
    })
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        bail!("{} is not a directory", path.display());
    }
    Ok(())
}

fn walk_files(root: &Path, options: ScanOptions, config: &'static Config) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(root);
    if options.no_ignore {
        builder
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .parents(false);
    } else {
        builder
            .ignore(true)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .parents(true)
            .require_git(false);
    }
    let walker = builder
        .hidden(false)
        .filter_entry(move |entry| !is_skipped_entry(entry, config))
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "walk error");
                continue;
            }
        };
        if entry.file_type().is_some_and(|ft| ft.is_file()) {
            files.push(entry.into_path());
        }
    }
    files
}

fn is_skipped_entry(entry: &DirEntry, config: &Config) -> bool {
    let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
    is_dir
        && entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| config.is_skipped_dir(name))
}

/// `path` relative to `base`, `/`-separated, `.` when they are the same.
fn relative_display(base: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(base).unwrap_or(path);
    let parts: Vec<String> = rel
        .components()
        .filter_map(|comp| match comp {
            Component::Normal(os) => Some(os.to_string_lossy().to_string()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}
