//! Project variant detection.
//!
//! Classification walks from the target directory up to the workspace root,
//! one path component at a time, asking a probe whether each ancestor holds
//! a marker file. The probe is the only contact with the outside world, so
//! detection itself stays pure and testable without a filesystem.
//!
//! # Domain purity
//!
//! This module must not import `tracing` or touch `std::fs`.

use std::path::{Component, Path, PathBuf};

use crate::domain::{error::DomainError, value_objects::ProjectVariant};

/// Marker file names.
pub mod markers {
    /// Present at the root of every Reactium project.
    pub const CORE_CONFIG: &str = "reactium-config.js";
    /// Bundler config that marks a Reactium Native project.
    pub const NATIVE_BUNDLER: &str = "metro.config.js";
    /// Present at the root of an Actinium install.
    pub const ACTINIUM: &str = "actinium-config.js";
}

/// Classify the project enclosing `target`.
///
/// At each ancestor, from `target` up to and including `workspace`:
///
/// 1. native bundler marker → [`ProjectVariant::ReactiumNative`]
/// 2. Actinium marker → [`ProjectVariant::Actinium`]
/// 3. core config marker → [`ProjectVariant::ReactiumWeb`]
///
/// The first hit wins. Because the native check runs first, a directory
/// holding both the native and the core marker is native.
///
/// # Errors
///
/// [`DomainError::OutsideWorkspace`] if `target` is not under `workspace`.
pub fn detect<P>(target: &Path, workspace: &Path, has_file: P) -> Result<ProjectVariant, DomainError>
where
    P: Fn(&Path, &str) -> bool,
{
    let target = normalize_path(target);
    let workspace = normalize_path(workspace);

    if !target.starts_with(&workspace) {
        return Err(DomainError::OutsideWorkspace {
            target: target.display().to_string(),
            workspace: workspace.display().to_string(),
        });
    }

    for dir in target.ancestors() {
        if has_file(dir, markers::NATIVE_BUNDLER) {
            return Ok(ProjectVariant::ReactiumNative);
        }
        if has_file(dir, markers::ACTINIUM) {
            return Ok(ProjectVariant::Actinium);
        }
        if has_file(dir, markers::CORE_CONFIG) {
            return Ok(ProjectVariant::ReactiumWeb);
        }
        if dir == workspace {
            break;
        }
    }

    Ok(ProjectVariant::None)
}

/// First workspace root that contains `dir`.
pub fn locate_workspace<'a>(dir: &Path, roots: &'a [PathBuf]) -> Option<&'a Path> {
    let dir = normalize_path(dir);
    roots
        .iter()
        .find(|root| dir.starts_with(normalize_path(root)))
        .map(PathBuf::as_path)
}

/// Lexically resolve `.` and `..` components without touching the disk.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
